pub mod types;
pub mod classification;

pub use types::{CandidateFailure, QuipsterError};
pub use classification::ErrorClassification;
