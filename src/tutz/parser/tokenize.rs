//! Splits a command's argument string into a preamble and prefixed values.
//!
//! A prefix such as `t/` only counts when it starts the string or follows
//! whitespace, so `t/Lab t/2` yields two `t/` values while `at/home` is
//! plain text. Values run until the next recognized prefix and are trimmed.

use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Prefix(pub &'static str);

pub const PREFIX_TUTORIAL: Prefix = Prefix("t/");
pub const PREFIX_MODULE: Prefix = Prefix("m/");
pub const PREFIX_DATE: Prefix = Prefix("d/");
pub const PREFIX_STUDENT: Prefix = Prefix("s/");
pub const PREFIX_FROM: Prefix = Prefix("f/");

impl std::fmt::Display for Prefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Debug, Default)]
pub struct ArgMap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgMap {
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    pub fn all(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last(&self, prefix: Prefix) -> Option<&str> {
        self.all(prefix).last().map(String::as_str)
    }

    pub fn has(&self, prefix: Prefix) -> bool {
        !self.all(prefix).is_empty()
    }

    /// The first of `prefixes` given more than once, if any.
    pub fn repeated(&self, prefixes: &[Prefix]) -> Option<Prefix> {
        prefixes
            .iter()
            .copied()
            .find(|p| self.all(*p).len() > 1)
    }
}

pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgMap {
    let mut positions: Vec<(usize, Prefix)> = Vec::new();
    for prefix in prefixes {
        for (pos, _) in args.match_indices(prefix.0) {
            let at_boundary = args[..pos]
                .chars()
                .next_back()
                .map_or(true, char::is_whitespace);
            if at_boundary {
                positions.push((pos, *prefix));
            }
        }
    }
    positions.sort_by_key(|(pos, _)| *pos);

    let mut map = ArgMap::default();
    let preamble_end = positions.first().map_or(args.len(), |(pos, _)| *pos);
    map.preamble = args[..preamble_end].trim().to_string();

    for (i, (pos, prefix)) in positions.iter().enumerate() {
        let start = pos + prefix.0.len();
        let end = positions.get(i + 1).map_or(args.len(), |(next, _)| *next);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[start..end].trim().to_string());
    }
    map
}
