pub mod catalog;
pub mod openrouter;
pub mod provider;
pub mod router;
pub mod types;

pub use provider::CompletionProvider;
pub use router::create_provider;
pub use types::{Completion, CompletionRequest};
