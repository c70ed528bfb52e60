// SPDX-License-Identifier: MPL-2.0
//! Activation argument strings.
//!
//! Platform toasts hand back a single opaque string when the body or a button
//! is activated. Arguments are encoded as `key=value` pairs joined by `;`,
//! with `%`, `;` and `=` percent-escaped inside keys and values.

use crate::domain::toast::ActionId;
use std::fmt;

/// Key under which the action identifier is stored.
pub const ACTION_KEY: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToastArguments {
    pairs: Vec<(String, String)>,
}

impl ToastArguments {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arguments carrying only an action identifier.
    #[must_use]
    pub fn for_action(id: ActionId) -> Self {
        Self::new().with(ACTION_KEY, id.to_string())
    }

    /// Adds or replaces `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parses the action identifier, if present and well formed.
    #[must_use]
    pub fn action_id(&self) -> Option<ActionId> {
        self.get(ACTION_KEY)?.parse().ok()
    }

    /// Parses an argument string. Parsing is lenient: empty segments are
    /// skipped and a segment without `=` becomes a key with an empty value.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut args = Self::new();
        for segment in input.split(';').filter(|s| !s.is_empty()) {
            let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
            args = args.with(unescape(key), unescape(value));
        }
        args
    }
}

impl fmt::Display for ToastArguments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.pairs.iter().enumerate() {
            if i > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}={}", escape(key), escape(value))?;
        }
        Ok(())
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '%' => out.push_str("%25"),
            ';' => out.push_str("%3B"),
            '=' => out.push_str("%3D"),
            other => out.push(other),
        }
    }
    out
}

fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let decoded = match tail.get(..3).map(str::to_ascii_uppercase).as_deref() {
            Some("%25") => Some('%'),
            Some("%3B") => Some(';'),
            Some("%3D") => Some('='),
            _ => None,
        };
        match decoded {
            Some(c) => {
                out.push(c);
                rest = &tail[3..];
            }
            None => {
                out.push('%');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_pairs_in_insertion_order() {
        let args = ToastArguments::new().with("id", "abc").with("kind", "join");
        assert_eq!(args.to_string(), "id=abc;kind=join");
    }

    #[test]
    fn parse_reads_action_id() {
        let id = ActionId::new();
        let rendered = ToastArguments::for_action(id).to_string();
        assert_eq!(ToastArguments::parse(&rendered).action_id(), Some(id));
    }

    #[test]
    fn reserved_characters_survive() {
        let args = ToastArguments::new().with("pw", "a;b=c%d");
        let rendered = args.to_string();
        assert_eq!(rendered, "pw=a%3Bb%3Dc%25d");
        assert_eq!(ToastArguments::parse(&rendered).get("pw"), Some("a;b=c%d"));
    }

    #[test]
    fn lenient_parsing() {
        let args = ToastArguments::parse(";;flag;id=;x=%zz");
        assert_eq!(args.get("flag"), Some(""));
        assert_eq!(args.get("id"), Some(""));
        assert_eq!(args.get("x"), Some("%zz"));
        assert!(args.action_id().is_none());
    }

    #[test]
    fn missing_or_malformed_id_is_none() {
        assert!(ToastArguments::parse("").action_id().is_none());
        assert!(ToastArguments::parse("id=42").action_id().is_none());
    }
}
