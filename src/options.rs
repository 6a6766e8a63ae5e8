use crate::config::{Conjunction, JoinConfig, Quoting};
use crate::preset::Preset;

/// Per-call overrides for a single join.
///
/// Unset fields inherit from the `JoinConfig` the call goes through. The
/// shortcut flags are applied after the explicit fields, in declaration
/// order, each set flag overwriting the conjunction; when several are set
/// the later one wins (`or` beats `and`, `oxford_or` beats all). That
/// order is preserved from the original behaviour rather than designed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinOptions {
    pub separator: Option<String>,
    pub conjunction: Option<Conjunction>,
    pub quote: Option<Quoting>,
    pub mirror_quote: Option<bool>,
    pub no_conjunction: bool,
    pub and: bool,
    pub or: bool,
    pub oxford: bool,
    pub oxford_and: bool,
    pub oxford_or: bool,
}

impl JoinOptions {
    pub fn new() -> Self {
        JoinOptions::default()
    }

    /// Options that only set the given shortcut flag.
    pub fn preset(preset: Preset) -> Self {
        let mut options = JoinOptions::default();
        match preset {
            Preset::NoConjunction => options.no_conjunction = true,
            Preset::And => options.and = true,
            Preset::Or => options.or = true,
            Preset::Oxford => options.oxford = true,
            Preset::OxfordAnd => options.oxford_and = true,
            Preset::OxfordOr => options.oxford_or = true,
        }
        options
    }

    /// Merges these overrides into a copy of `defaults`: explicit fields
    /// first, then the shortcut flags in their fixed order.
    pub(crate) fn resolve(&self, defaults: &JoinConfig) -> JoinConfig {
        let mut config = defaults.clone();
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
        if let Some(conjunction) = &self.conjunction {
            config.conjunction = conjunction.clone();
        }
        if let Some(quote) = &self.quote {
            config.quote = quote.clone();
        }
        if let Some(mirror_quote) = self.mirror_quote {
            config.mirror_quote = mirror_quote;
        }

        let flagged = [
            (self.no_conjunction, Preset::NoConjunction),
            (self.and, Preset::And),
            (self.or, Preset::Or),
            (self.oxford, Preset::Oxford),
            (self.oxford_and, Preset::OxfordAnd),
            (self.oxford_or, Preset::OxfordOr),
        ];
        for (set, preset) in flagged {
            if set {
                preset.apply(&mut config);
            }
        }

        config
    }
}
