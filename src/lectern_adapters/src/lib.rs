pub mod config;
pub mod email;
pub mod http;
pub mod persistence;
pub mod sessions;
