pub mod joke;

pub use joke::*;
