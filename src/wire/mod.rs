mod connection;
mod frame;

pub use connection::*;
pub use frame::*;
