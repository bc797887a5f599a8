pub mod handler;
pub mod login;
pub mod middleware;
pub mod routes;

pub use routes::*;
