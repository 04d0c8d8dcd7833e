pub mod extract;
pub mod routes;
mod state;

pub use extract::SessionUser;
pub use state::AccountState;
