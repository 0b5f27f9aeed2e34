//! Tolerant parsing of serialized list cells such as `['Men's 100m', 'Relay']`.
//!
//! Stage one swaps single quotes for double quotes and reads the result as
//! JSON. When that fails, stage two strips the brackets and splits on commas.
//! Parsing is total: anything unusable becomes an empty list.

use serde_json::Value;
use tracing::trace;

/// Which stage produced the items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStrategy {
    Structured,
    Fallback,
    /// Input was blank or yielded no usable items.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedList {
    pub items: Vec<String>,
    pub strategy: ListStrategy,
}

impl ParsedList {
    fn new(items: Vec<String>, strategy: ListStrategy) -> Self {
        if items.is_empty() {
            Self {
                items,
                strategy: ListStrategy::Empty,
            }
        } else {
            Self { items, strategy }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Parses a serialized list cell. Blank items are dropped.
///
/// # Examples
/// ```
/// use podium_transform::{ListStrategy, parse_serialized_list};
///
/// let parsed = parse_serialized_list("['Judo', 'Relay']");
/// assert_eq!(parsed.items, vec!["Judo", "Relay"]);
/// assert_eq!(parsed.strategy, ListStrategy::Structured);
///
/// let parsed = parse_serialized_list("['Men's 100m']");
/// assert_eq!(parsed.items, vec!["Men's 100m"]);
/// assert_eq!(parsed.strategy, ListStrategy::Fallback);
/// ```
pub fn parse_serialized_list(raw: &str) -> ParsedList {
    let value = raw.trim();
    if value.is_empty() {
        return ParsedList::new(Vec::new(), ListStrategy::Empty);
    }
    if let Some(items) = parse_structured(value) {
        return ParsedList::new(items, ListStrategy::Structured);
    }
    trace!(raw = value, "structured list parse failed, splitting manually");
    ParsedList::new(parse_fallback(value), ListStrategy::Fallback)
}

fn parse_structured(value: &str) -> Option<Vec<String>> {
    let normalized = value.replace('\'', "\"");
    match serde_json::from_str::<Value>(&normalized).ok()? {
        Value::Array(values) => Some(
            values
                .iter()
                .filter_map(scalar_text)
                .filter(|item| !item.is_empty())
                .collect(),
        ),
        Value::String(text) => Some(non_empty(text.trim())),
        _ => None,
    }
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_string()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

fn parse_fallback(value: &str) -> Vec<String> {
    value
        .trim_matches(['[', ']'])
        .split(',')
        .map(|token| token.trim().trim_matches(['"', '\'']).trim())
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn non_empty(text: &str) -> Vec<String> {
    if text.is_empty() {
        Vec::new()
    } else {
        vec![text.to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_empty() {
        assert_eq!(parse_serialized_list("").strategy, ListStrategy::Empty);
        assert!(parse_serialized_list("[]").is_empty());
        assert!(parse_serialized_list("   ").is_empty());
    }

    #[test]
    fn test_single_string_value() {
        let parsed = parse_serialized_list("'Judo'");
        assert_eq!(parsed.items, vec!["Judo"]);
        assert_eq!(parsed.strategy, ListStrategy::Structured);
    }

    #[test]
    fn test_double_quoted_json() {
        let parsed = parse_serialized_list(r#"["A", "B"]"#);
        assert_eq!(parsed.items, vec!["A", "B"]);
    }

    #[test]
    fn test_unbracketed_text_falls_back() {
        let parsed = parse_serialized_list("Judo, Relay ,");
        assert_eq!(parsed.items, vec!["Judo", "Relay"]);
        assert_eq!(parsed.strategy, ListStrategy::Fallback);
    }

    #[test]
    fn test_garbage_yields_nothing() {
        let parsed = parse_serialized_list("[,,'',]");
        assert!(parsed.is_empty());
        assert_eq!(parsed.strategy, ListStrategy::Empty);
    }

    #[test]
    fn test_apostrophes_in_several_items() {
        let parsed = parse_serialized_list("['Men's 100m', 'Women's 4 x 100m Relay']");
        assert_eq!(parsed.items, vec!["Men's 100m", "Women's 4 x 100m Relay"]);
    }
}
