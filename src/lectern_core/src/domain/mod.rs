pub mod email;
pub mod password;
pub mod reset_token;
pub mod user;
