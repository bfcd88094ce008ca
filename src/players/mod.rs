mod human;
mod player;
mod policy;
mod remote;

pub use human::*;
pub use player::*;
pub use policy::*;
pub use remote::*;
