//! Parsing of the translation attributes of a marked element.

use thiserror::Error;

use super::{
    Element,
    Property,
    TRANSLATE_ATTRIBUTE,
    TRANSLATE_TARGET_ATTRIBUTE,
    UnknownProperty,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    #[error(
        "data-translate and data-translate-attr must contain the same number of items \
         ({keys} keys, {properties} properties)"
    )]
    CountMismatch { keys: usize, properties: usize },

    #[error(transparent)]
    UnknownProperty(#[from] UnknownProperty),
}

/// One key written to one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub key: String,
    pub property: Property,
}

/// Pairs keys with target properties positionally.
///
/// Properties default to `innerHTML` when the attribute is absent or blank.
/// With at least one key, both lists must have the same length.
///
/// # Errors
/// - Key and property counts differ
/// - A property name is not a known [`Property`]
pub fn parse_bindings(
    keys: Option<&str>,
    properties: Option<&str>,
) -> Result<Vec<Binding>, BindingError> {
    let keys: Vec<&str> = keys.map(|s| s.split_whitespace().collect()).unwrap_or_default();
    let mut names: Vec<&str> =
        properties.map(|s| s.split_whitespace().collect()).unwrap_or_default();
    if names.is_empty() {
        names.push(Property::InnerHtml.as_str());
    }

    if !keys.is_empty() && keys.len() != names.len() {
        return Err(BindingError::CountMismatch { keys: keys.len(), properties: names.len() });
    }

    keys.into_iter()
        .zip(names)
        .map(|(key, name)| -> Result<Binding, BindingError> {
            Ok(Binding { key: key.to_string(), property: name.parse()? })
        })
        .collect()
}

/// An element captured for translation together with its parsed bindings.
///
/// Markup errors are kept so every application can report them; such an
/// element is never partially translated.
#[derive(Debug)]
pub struct MarkedElement<E> {
    /// The element itself.
    element: E,
    /// Bindings parsed at capture time, or why they could not be.
    bindings: Result<Vec<Binding>, BindingError>,
}

impl<E: Element> MarkedElement<E> {
    pub fn capture(element: E) -> Self {
        let bindings = parse_bindings(
            element.attribute(TRANSLATE_ATTRIBUTE).as_deref(),
            element.attribute(TRANSLATE_TARGET_ATTRIBUTE).as_deref(),
        );
        Self { element, bindings }
    }

    pub const fn element(&self) -> &E {
        &self.element
    }

    /// # Errors
    /// The markup error found when the element was captured.
    pub fn bindings(&self) -> Result<&[Binding], &BindingError> {
        self.bindings.as_deref()
    }
}
