mod roll;

pub use roll::*;
