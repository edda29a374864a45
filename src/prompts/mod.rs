pub mod builder;
pub mod style;

pub use builder::build_joke_prompt;
pub use style::JokeStyle;
