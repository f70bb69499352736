//! Splits command arguments into a preamble and prefixed values.
//!
//! A prefix is recognised only at the start of the argument text or directly
//! after whitespace, so `e/a@b.com` inside another value never starts a new
//! field unless it follows a space.

use std::fmt::{Display, Formatter};

/// Flag marker such as `p/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(marker: &'static str) -> Self {
        Self(marker)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_BIRTHDAY_MONTH: Prefix = Prefix::new("b/");
pub const PREFIX_REWARD: Prefix = Prefix::new("r/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

/// Every prefix understood by the command grammar.
pub const ALL_PREFIXES: [Prefix; 6] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_BIRTHDAY_MONTH,
    PREFIX_REWARD,
    PREFIX_TAG,
];

/// Tokenized arguments in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    entries: Vec<(Prefix, String)>,
}

impl ArgumentMultimap {
    /// Trimmed text before the first recognised prefix.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// All `(prefix, value)` pairs in the order they were typed.
    pub fn entries(&self) -> &[(Prefix, String)] {
        &self.entries
    }

    pub fn first_prefix(&self) -> Option<Prefix> {
        self.entries.first().map(|(prefix, _)| *prefix)
    }

    /// Every value recorded for `prefix`, in input order.
    pub fn values(&self, prefix: Prefix) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Last value recorded for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(candidate, _)| *candidate == prefix)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, prefix: Prefix) -> bool {
        self.entries.iter().any(|(candidate, _)| *candidate == prefix)
    }

    pub fn count(&self, prefix: Prefix) -> usize {
        self.entries
            .iter()
            .filter(|(candidate, _)| *candidate == prefix)
            .count()
    }

    /// Whether any of `prefixes` was given more than once.
    pub fn has_duplicates(&self, prefixes: &[Prefix]) -> bool {
        prefixes.iter().any(|prefix| self.count(*prefix) > 1)
    }

    /// Copy without the first entry.
    pub fn without_first(&self) -> Self {
        Self {
            preamble: self.preamble.clone(),
            entries: self.entries.iter().skip(1).cloned().collect(),
        }
    }
}

/// Tokenizes `args` against the given prefixes.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    let mut previous: Option<char> = None;
    for (index, ch) in args.char_indices() {
        let at_boundary = previous.map_or(true, char::is_whitespace);
        if at_boundary {
            let rest = &args[index..];
            if let Some(prefix) = prefixes.iter().find(|prefix| rest.starts_with(prefix.0)) {
                positions.push((index, *prefix));
            }
        }
        previous = Some(ch);
    }

    let preamble_end = positions.first().map_or(args.len(), |(start, _)| *start);
    let mut entries = Vec::with_capacity(positions.len());
    for (slot, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.0.len();
        let value_end = positions
            .get(slot + 1)
            .map_or(args.len(), |(next_start, _)| *next_start);
        entries.push((*prefix, args[value_start..value_end].trim().to_string()));
    }

    ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_preamble_and_values_in_order() {
        let map = tokenize(" 100 p/87438807 t/a t/b", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "100");
        assert_eq!(map.first_prefix(), Some(PREFIX_PHONE));
        assert_eq!(map.value(PREFIX_PHONE), Some("87438807"));
        assert_eq!(map.values(PREFIX_TAG), vec!["a", "b"]);
        assert!(!map.has_duplicates(&[PREFIX_PHONE]));
        assert!(map.has_duplicates(&[PREFIX_TAG]));
    }

    #[test]
    fn prefix_inside_a_word_is_plain_text() {
        let map = tokenize(" n/Ann p/1234e/x", &ALL_PREFIXES);
        assert_eq!(map.value(PREFIX_PHONE), Some("1234e/x"));
        assert!(!map.contains(PREFIX_EMAIL));
    }

    #[test]
    fn no_prefix_keeps_everything_in_preamble() {
        let map = tokenize("  alex   yeoh ", &ALL_PREFIXES);
        assert_eq!(map.preamble(), "alex   yeoh");
        assert!(map.entries().is_empty());
        assert_eq!(map.first_prefix(), None);
    }

    #[test]
    fn unlisted_prefixes_are_ignored() {
        let map = tokenize(" p/123 n/Ann", &[PREFIX_PHONE]);
        assert_eq!(map.value(PREFIX_PHONE), Some("123 n/Ann"));
    }

    #[test]
    fn empty_value_is_kept() {
        let map = tokenize(" e/a@b.co t/", &ALL_PREFIXES);
        assert_eq!(map.values(PREFIX_TAG), vec![""]);
        assert_eq!(map.without_first().first_prefix(), Some(PREFIX_TAG));
    }
}
