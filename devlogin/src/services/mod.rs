pub mod cookie;
pub mod redirect;

pub use cookie::*;
pub use redirect::*;
