use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::email::Email;

/// Port trait for the outbound mail transport.
///
/// Fire-and-forget: there is no delivery receipt, and callers must not rely
/// on one.
#[async_trait]
pub trait EmailClient: Send + Sync {
    async fn send_email(
        &self,
        recipient: &Email,
        subject: &str,
        content: &str,
    ) -> Result<(), String>;
}

/// Port trait for reading the wall clock, so expiry checks can be driven
/// deterministically in tests.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
