pub mod commands;
pub mod generate;
pub mod models;
pub mod serve;
pub mod validate;

pub use commands::{Cli, Commands};
