//! Translation key resolution.

use serde_json::{
    Number,
    Value,
};

/// Looks up the node at `key` in `document`.
///
/// Object nodes are indexed by segment name, array nodes by decimal position.
/// A missing intermediate node yields `None`.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use page_translator::resolve::lookup;
///
/// let document = json!({ "nav": { "home": "Home" }, "items": ["a", "b"] });
///
/// assert_eq!(lookup(&document, "nav.home", "."), Some(&json!("Home")));
/// assert_eq!(lookup(&document, "items.1", "."), Some(&json!("b")));
/// assert_eq!(lookup(&document, "nav.missing.deeper", "."), None);
/// ```
#[must_use]
pub fn lookup<'a>(document: &'a Value, key: &str, separator: &str) -> Option<&'a Value> {
    key.split(separator).try_fold(document, |node, segment| match node {
        Value::Object(map) => map.get(segment),
        Value::Array(items) => segment.parse::<usize>().ok().and_then(|index| items.get(index)),
        _ => None,
    })
}

/// Renders a resolved node as text.
///
/// Falsy values (`null`, `false`, `0`, `""`) and non-leaf values have no text.
fn leaf_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => n.as_f64().filter(|f| *f != 0.0).map(|f| number_text(n, f)),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Number text as a browser writes it: integral values carry no fraction.
fn number_text(n: &Number, f: f64) -> String {
    if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 {
        format!("{f:.0}")
    } else {
        n.to_string()
    }
}

/// Resolves dotted keys with at most one fallback hop.
#[derive(Debug, Clone, Copy)]
pub struct KeyResolver<'a> {
    /// Key segment separator.
    separator: &'a str,
    /// Default-language document, when fallback is allowed and available.
    fallback: Option<&'a Value>,
}

impl<'a> KeyResolver<'a> {
    #[must_use]
    pub const fn new(separator: &'a str, fallback: Option<&'a Value>) -> Self {
        Self { separator, fallback }
    }

    /// Resolver without a fallback document.
    #[cfg(test)]
    pub(crate) const fn without_fallback(separator: &'a str) -> Self {
        Self::new(separator, None)
    }

    /// Text for `key` in `document`, then in the fallback document.
    ///
    /// Degrades to the key itself when neither has a value for it.
    #[must_use]
    pub fn resolve(&self, key: &str, document: Option<&Value>) -> String {
        if let Some(text) = self.find(key, document) {
            return text;
        }

        if let Some(text) = self.find(key, self.fallback) {
            tracing::debug!(key, "Resolved key from fallback language");
            return text;
        }

        tracing::warn!("Could not find text for key \"{key}\"");
        key.to_string()
    }

    /// Text for `key` in a single document.
    fn find(&self, key: &str, document: Option<&Value>) -> Option<String> {
        document.and_then(|doc| lookup(doc, key, self.separator)).and_then(leaf_text)
    }
}
