use crate::config::{Conjunction, JoinConfig, Quoting};
use crate::mirror::mirror;
use crate::options::JoinOptions;
use crate::preset::Preset;
use std::fmt::Display;

impl JoinConfig {
    /// Joins `items` into a single string using this configuration's
    /// current field values.
    pub fn join<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        assemble(items, self)
    }

    /// Joins `items` with per-call overrides layered over this
    /// configuration.
    pub fn join_with<I>(&self, items: I, options: &JoinOptions) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        assemble(items, &options.resolve(self))
    }

    /// Joins `items` with a named preset layered over this configuration.
    pub fn join_preset<I>(&self, items: I, preset: Preset) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let mut config = self.clone();
        preset.apply(&mut config);
        assemble(items, &config)
    }
}

/// Joins `items` using the baseline configuration.
pub fn join<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    JoinConfig::new().join(items)
}

/// Joins `items` with per-call overrides layered over the baseline
/// configuration.
pub fn join_with<I>(items: I, options: &JoinOptions) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    JoinConfig::new().join_with(items, options)
}

/// Joins `items` with a named preset layered over the baseline
/// configuration.
pub fn join_preset<I>(items: I, preset: Preset) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    JoinConfig::new().join_preset(items, preset)
}

fn assemble<I>(items: I, config: &JoinConfig) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    // The closing quote is fixed for the whole call.
    let closing = match &config.quote {
        Quoting::Text(opening) if config.mirror_quote => Some(mirror(opening)),
        Quoting::Text(opening) => Some(opening.clone()),
        Quoting::Disabled => None,
    };

    let rendered: Vec<String> = items
        .into_iter()
        .map(|item| match (&config.quote, &closing) {
            (Quoting::Text(opening), Some(closing)) => format!("{opening}{item}{closing}"),
            _ => item.to_string(),
        })
        .collect();

    match rendered.split_last() {
        None => String::new(),
        Some((only, [])) => only.clone(),
        Some((last, rest)) => {
            let glue = match &config.conjunction {
                Conjunction::Text(text) => text.as_str(),
                Conjunction::Disabled => config.separator.as_str(),
            };
            let mut output = rest.join(&config.separator);
            output.push_str(glue);
            output.push_str(last);
            output
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assertables::*;

    #[test]
    fn join_empty_iterator_returns_empty_string() {
        let items: Vec<String> = Vec::new();

        assert_eq!(join(items), "");
    }

    #[test]
    fn join_single_item_has_no_delimiters() {
        assert_eq!(join(["apples"]), "apples");
    }

    #[test]
    fn join_two_items_uses_conjunction_only() {
        assert_eq!(join(["apples", "oranges"]), "apples & oranges");
    }

    #[test]
    fn join_defaults_separate_all_but_the_last_pair() {
        let output = join(["apples", "oranges", "pears"]);

        assert_eq!(output, "apples, oranges & pears");
    }

    #[test]
    fn join_stringifies_non_string_items() {
        assert_eq!(join([1, 2, 3]), "1, 2 & 3");
        assert_eq!(join([1.5, 2.5]), "1.5 & 2.5");
    }

    #[test]
    fn join_with_disabled_conjunction_uses_separator_throughout() {
        let options = JoinOptions {
            conjunction: Some(Conjunction::Disabled),
            ..JoinOptions::default()
        };

        let output = join_with(["a", "b", "c"], &options);

        assert_eq!(output, "a, b, c");
    }

    #[test]
    fn join_with_no_conjunction_flag_uses_separator_throughout() {
        let options = JoinOptions {
            no_conjunction: true,
            ..JoinOptions::default()
        };

        let output = join_with(["a", "b", "c"], &options);

        assert_eq!(output, "a, b, c");
    }

    #[test]
    fn join_with_custom_separator_keeps_default_conjunction() {
        let options = JoinOptions {
            separator: Some("; ".to_string()),
            ..JoinOptions::default()
        };

        let output = join_with(["a", "b", "c"], &options);

        assert_eq!(output, "a; b & c");
    }

    #[test]
    fn join_with_quote_mirrors_the_closing_quote() {
        let options = JoinOptions {
            quote: Some(Quoting::Text("<<".to_string())),
            ..JoinOptions::default()
        };

        let output = join_with(["a", "b"], &options);

        assert_eq!(output, "<<a>>, <<b>>");
    }

    #[test]
    fn join_with_quote_without_mirroring_repeats_the_opening_quote() {
        let options = JoinOptions {
            quote: Some(Quoting::Text("<<".to_string())),
            mirror_quote: Some(false),
            ..JoinOptions::default()
        };

        let output = join_with(["a", "b"], &options);

        assert_eq!(output, "<<a<<, <<b<<");
    }

    #[test]
    fn join_with_quote_wraps_single_items_too() {
        let options = JoinOptions {
            quote: Some(Quoting::Text("[".to_string())),
            ..JoinOptions::default()
        };

        let output = join_with(["solo"], &options);

        assert_eq!(output, "[solo]");
        assert_starts_with!(output, "[");
        assert_ends_with!(output, "]");
    }

    #[test]
    fn join_preset_rewrites_the_conjunction() {
        assert_eq!(join_preset(["a", "b", "c"], Preset::And), "a, b and c");
        assert_eq!(join_preset(["a", "b", "c"], Preset::Or), "a, b or c");
        assert_eq!(join_preset(["a", "b", "c"], Preset::Oxford), "a, b, and c");
        assert_eq!(join_preset(["a", "b", "c"], Preset::OxfordOr), "a, b, or c");
        assert_eq!(
            join_preset(["a", "b", "c"], Preset::NoConjunction),
            "a, b, c"
        );
    }

    #[test]
    fn join_preset_parsed_from_string() {
        let preset: Preset = "oxfordAnd".parse().unwrap();

        assert_eq!(join_preset(["a", "b"], preset), "a, and b");
    }

    #[test]
    fn config_mutation_affects_subsequent_joins_until_reset() {
        let mut config = JoinConfig::new();
        config.conjunction = Conjunction::Text(" and ".to_string());
        assert_eq!(config.join(["a", "b"]), "a and b");

        config.reset();

        assert_eq!(config.join(["a", "b"]), "a & b");
    }

    #[test]
    fn config_join_with_does_not_mutate_the_config() {
        let config = JoinConfig::new();
        let options = JoinOptions {
            or: true,
            ..JoinOptions::default()
        };

        let output = config.join_with(["a", "b"], &options);

        assert_eq!(output, "a or b");
        assert_eq!(config, JoinConfig::new());
    }

    #[test]
    fn join_preserves_item_order() {
        let output = join(["c", "a", "b"]);

        assert_eq!(output, "c, a & b");
    }
}
