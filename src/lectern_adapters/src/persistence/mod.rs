mod hashmap_reset_token_store;
mod hashmap_user_store;
mod password_hash;
mod postgres_reset_token_store;
mod postgres_user_store;

pub use hashmap_reset_token_store::HashMapResetTokenStore;
pub use hashmap_user_store::HashMapUserStore;
pub use postgres_reset_token_store::PostgresResetTokenStore;
pub use postgres_user_store::PostgresUserStore;

pub(crate) use password_hash::{compute_password_hash, verify_password_hash};
