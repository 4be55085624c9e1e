//! Gender and the forward/backward progression rule.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BaziError;
use crate::locale::Locale;
use crate::stem::Stem;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }

    pub const fn label(self, locale: Locale) -> &'static str {
        match (locale, self) {
            (Locale::Zh, _) => self.name(),
            (Locale::En, Self::Male) => "male",
            (Locale::En, Self::Female) => "female",
        }
    }

    /// Yang-year male and yin-year female progress forward (顺行); the
    /// other two combinations progress backward (逆行).
    pub const fn runs_forward(self, year_stem: Stem) -> bool {
        matches!(
            (self, year_stem.is_yang()),
            (Self::Male, true) | (Self::Female, false)
        )
    }
}

impl Display for Gender {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label(Locale::En))
    }
}

impl FromStr for Gender {
    type Err = BaziError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(BaziError::UnknownGender(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_rule() {
        assert!(Gender::Male.runs_forward(Stem::Jia));
        assert!(!Gender::Male.runs_forward(Stem::Yi));
        assert!(Gender::Female.runs_forward(Stem::Gui));
        assert!(!Gender::Female.runs_forward(Stem::Ren));
    }

    #[test]
    fn parse() {
        assert_eq!("男".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!("Female".parse::<Gender>().unwrap(), Gender::Female);
        assert!(matches!("x".parse::<Gender>(), Err(BaziError::UnknownGender(_))));
    }
}
