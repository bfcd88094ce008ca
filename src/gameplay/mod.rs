pub mod event;
pub use event::*;

pub mod game;
pub use game::*;

pub mod shake;
pub use shake::*;

pub mod transcript;
pub use transcript::*;

pub mod turn;
pub use turn::*;
