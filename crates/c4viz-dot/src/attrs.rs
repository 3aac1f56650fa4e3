//! Ordered Graphviz attribute maps.

/// One attribute value and how it is written out.
///
/// Text is quoted and escaped. Html is written bare, exactly as given, so it
/// must be a complete HTML-like label including the outer `<` and `>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Html(String),
}

impl AttrValue {
    pub fn as_str(&self) -> &str {
        match self {
            AttrValue::Text(value) | AttrValue::Html(value) => value,
        }
    }

    pub fn is_html(&self) -> bool {
        matches!(self, AttrValue::Html(_))
    }
}

/// An ordered map of Graphviz attribute names to values.
///
/// Keys keep the position of their first insertion so rendered DOT is stable.
/// Setting an existing key replaces its value in place, which makes
/// [`Attrs::merge`] a last-write-wins overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(String, AttrValue)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key` to a plain text value, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key.into(), AttrValue::Text(value.into()))
    }

    /// Set `key` to an HTML-like label body such as `<<b>API</b>>`.
    pub fn set_html(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.insert(key.into(), AttrValue::Html(value.into()))
    }

    fn insert(&mut self, key: String, value: AttrValue) -> &mut Self {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
        self
    }

    /// Builder-style [`Attrs::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Builder-style [`Attrs::set_html`].
    pub fn with_html(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_html(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.value(key).map(AttrValue::as_str)
    }

    pub fn value(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Overlay `other` onto `self`. Values from `other` always win, and keep
    /// their text or HTML kind.
    pub fn merge(&mut self, other: &Attrs) -> &mut Self {
        for (key, value) in other.entries() {
            self.insert(key.to_string(), value.clone());
        }
        self
    }

    /// Keys and raw value strings, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries().map(|(k, v)| (k, v.as_str()))
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for Attrs {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attrs::new();
        attrs.extend(iter);
        attrs
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Attrs {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
