mod helpers;

mod login;
mod password_reset;
mod register;
mod session;
