use serde::{Deserialize, Serialize};
use std::str::FromStr;
use crate::errors::QuipsterError;

/// The joke styles a request may ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum JokeStyle {
    Pun,
    OneLiner,
    DadJoke,
    Dark,
    Observational,
}

impl JokeStyle {
    pub const ALL: [JokeStyle; 5] = [
        Self::Pun,
        Self::OneLiner,
        Self::DadJoke,
        Self::Dark,
        Self::Observational,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pun => "pun",
            Self::OneLiner => "one-liner",
            Self::DadJoke => "dad-joke",
            Self::Dark => "dark",
            Self::Observational => "observational",
        }
    }
}

impl std::fmt::Display for JokeStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for JokeStyle {
    type Err = QuipsterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| QuipsterError::Validation(format!("Invalid joke type: {}", s)))
    }
}
