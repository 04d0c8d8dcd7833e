pub mod change_password;
pub mod confirm_password_reset;
pub mod login;
pub mod register;
pub mod request_password_reset;
