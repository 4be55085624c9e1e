//! Display locale for labels and finding descriptions.
//!
//! Calculations never depend on the locale; it is consulted only when a
//! typed value is rendered for a reader.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;

/// Output language for rendered labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    /// Simplified Chinese, the traditional vocabulary.
    #[default]
    Zh,
    /// English glosses.
    En,
}

impl Locale {
    /// Short language tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Zh => "zh",
            Self::En => "en",
        }
    }
}

impl Display for Locale {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Locale {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zh" | "zh-cn" | "cn" => Ok(Self::Zh),
            "en" | "en-us" => Ok(Self::En),
            other => Err(BaziError::UnknownLocale(other.to_string())),
        }
    }
}
