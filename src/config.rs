/// Delimiter placed before the final item of a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Conjunction {
    /// Use this text between the penultimate and final items.
    Text(String),
    /// No conjunction; the separator is used before the final item too.
    Disabled,
}

/// Wrapping applied to each item before joining.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Quoting {
    /// Open each item with this text, closing with the same text or its
    /// mirror depending on `JoinConfig::mirror_quote`.
    Text(String),
    Disabled,
}

/// Joining defaults, owned by the caller.
///
/// A `JoinConfig` is read fresh on every join call made through it, so
/// mutating a field changes the behaviour of all subsequent calls until
/// [`reset`](JoinConfig::reset) or a per-call override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinConfig {
    /// Delimiter between non-final adjacent items.
    pub separator: String,
    pub conjunction: Conjunction,
    pub quote: Quoting,
    /// Whether the closing quote is the mirror of the opening quote.
    pub mirror_quote: bool,
}

impl JoinConfig {
    /// Creates the baseline configuration: `", "` separator, `" & "`
    /// conjunction, no quoting, mirrored quotes when quoting is enabled.
    pub fn new() -> Self {
        JoinConfig {
            separator: ", ".to_string(),
            conjunction: Conjunction::Text(" & ".to_string()),
            quote: Quoting::Disabled,
            mirror_quote: true,
        }
    }

    /// Restores every field to its baseline value.
    pub fn reset(&mut self) {
        *self = JoinConfig::new();
    }
}

impl Default for JoinConfig {
    fn default() -> Self {
        JoinConfig::new()
    }
}
