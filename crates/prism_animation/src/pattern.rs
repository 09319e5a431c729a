//! Animation pattern selector

use prism_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Waveform driving the animated parameter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pattern {
    #[default]
    Sine,
    Cosine,
    Linear,
}

impl Pattern {
    pub const ALL: [Pattern; 3] = [Pattern::Sine, Pattern::Cosine, Pattern::Linear];

    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Sine => "sine",
            Pattern::Cosine => "cosine",
            Pattern::Linear => "linear",
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name() == s)
            .ok_or_else(|| Error::UnknownName {
                kind: "pattern",
                value: s.to_string(),
            })
    }
}
