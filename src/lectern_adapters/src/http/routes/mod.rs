pub mod change_password;
pub mod confirm_password_reset;
pub mod error;
pub mod login;
pub mod me;
pub mod register;
pub mod request_password_reset;

pub use change_password::change_password;
pub use confirm_password_reset::confirm_password_reset;
pub use error::{AccountApiError, MessageResponse};
pub use login::{LoginResponse, ProfileResponse, login};
pub use me::{MeResponse, me};
pub use register::register;
pub use request_password_reset::request_password_reset;
