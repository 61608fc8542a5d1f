//! Host page abstraction.
//!
//! A page exposes the elements marked for translation and accepts the
//! translated values. [`MemoryPage`] is the in-process implementation used by
//! the CLI and the tests.

/// Per-element key/property bindings
mod binding;
/// In-memory page
mod memory;
/// Writable element properties
mod property;

pub use binding::{
    Binding,
    BindingError,
    MarkedElement,
    parse_bindings,
};
pub use memory::{
    ElementManifest,
    ElementSnapshot,
    MemoryElement,
    MemoryPage,
    PageManifest,
    PageSnapshot,
};
pub use property::{
    Property,
    UnknownProperty,
};

/// Whitespace-separated translation keys.
pub const TRANSLATE_ATTRIBUTE: &str = "data-translate";

/// Whitespace-separated target properties, parallel to the keys.
pub const TRANSLATE_TARGET_ATTRIBUTE: &str = "data-translate-attr";

/// Handle to a single page element.
///
/// Handles are shared views: writes through `&self` are visible to every
/// clone of the handle and to the owning page.
pub trait Element: Send + Sync {
    fn attribute(&self, name: &str) -> Option<String>;

    fn set_property(&self, property: Property, value: &str);

    fn set_attribute(&self, name: &str, value: &str);
}

/// A page whose marked elements can be translated.
pub trait Page: Send + Sync {
    type Element: Element;

    /// Elements carrying [`TRANSLATE_ATTRIBUTE`], in document order.
    fn marked_elements(&self) -> Vec<Self::Element>;

    /// Sets the document-level `lang` attribute.
    fn set_language(&self, lang: &str);
}
