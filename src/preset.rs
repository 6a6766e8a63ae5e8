use crate::config::{Conjunction, JoinConfig};
use std::str::FromStr;
use thiserror::Error;

/// Named shortcut that rewrites the conjunction of a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Disable the conjunction; the separator is used before the final item.
    NoConjunction,
    /// `" and "`
    And,
    /// `" or "`
    Or,
    /// `", and "`
    Oxford,
    /// `", and "` (alias of `Oxford`)
    OxfordAnd,
    /// `", or "`
    OxfordOr,
}

impl Preset {
    pub(crate) fn apply(self, config: &mut JoinConfig) {
        config.conjunction = match self {
            Preset::NoConjunction => Conjunction::Disabled,
            Preset::And => Conjunction::Text(" and ".to_string()),
            Preset::Or => Conjunction::Text(" or ".to_string()),
            Preset::Oxford | Preset::OxfordAnd => Conjunction::Text(", and ".to_string()),
            Preset::OxfordOr => Conjunction::Text(", or ".to_string()),
        };
    }
}

#[derive(Error, Debug)]
#[error("'{0}' is not a joining preset")]
pub struct UnknownPresetError(pub String);

impl FromStr for Preset {
    type Err = UnknownPresetError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "noConjunction" | "no_conjunction" => Ok(Preset::NoConjunction),
            "and" => Ok(Preset::And),
            "or" => Ok(Preset::Or),
            "oxford" => Ok(Preset::Oxford),
            "oxfordAnd" | "oxford_and" => Ok(Preset::OxfordAnd),
            "oxfordOr" | "oxford_or" => Ok(Preset::OxfordOr),
            _ => Err(UnknownPresetError(name.to_string())),
        }
    }
}
