//! In-memory page.

use std::collections::BTreeMap;
use std::sync::{
    Arc,
    PoisonError,
    RwLock,
};

use serde::{
    Deserialize,
    Serialize,
};

use super::{
    Element,
    Page,
    Property,
    TRANSLATE_ATTRIBUTE,
};

/// Serialized description of a page to translate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageManifest {
    pub lang: Option<String>,
    pub elements: Vec<ElementManifest>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementManifest {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
}

/// Page state after translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageSnapshot {
    pub lang: Option<String>,
    pub elements: Vec<ElementSnapshot>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementSnapshot {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub properties: BTreeMap<Property, String>,
}

/// [`MemoryElement`] の中身
#[derive(Debug, Default)]
struct ElementState {
    /// タグ名
    tag: String,
    /// 属性 (名前 → 値)
    attributes: BTreeMap<String, String>,
    /// 書き込まれたプロパティ
    properties: BTreeMap<Property, String>,
}

/// Shared handle to an element of a [`MemoryPage`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    /// クローン間で共有される状態
    state: Arc<RwLock<ElementState>>,
}

impl MemoryElement {
    #[must_use]
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            state: Arc::new(RwLock::new(ElementState { tag: tag.into(), ..ElementState::default() })),
        }
    }

    /// Builder-style attribute setter.
    #[must_use]
    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.set_attribute(name, value);
        self
    }

    #[must_use]
    pub fn property(&self, property: Property) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).properties.get(&property).cloned()
    }

    #[must_use]
    pub fn snapshot(&self) -> ElementSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        ElementSnapshot {
            tag: state.tag.clone(),
            attributes: state.attributes.clone(),
            properties: state.properties.clone(),
        }
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).attributes.get(name).cloned()
    }

    fn set_property(&self, property: Property, value: &str) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .properties
            .insert(property, value.to_string());
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .attributes
            .insert(name.to_string(), value.to_string());
    }
}

/// [`MemoryPage`] の中身
#[derive(Debug, Default)]
struct PageState {
    /// ルート要素の `lang` 属性
    lang: Option<String>,
    /// 文書順の全要素
    elements: Vec<MemoryElement>,
}

/// A page held in memory, cheap to clone and shared between clones.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    /// クローン間で共有される状態
    state: Arc<RwLock<PageState>>,
}

impl MemoryPage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_manifest(manifest: PageManifest) -> Self {
        let page = Self::new();
        page.state.write().unwrap_or_else(PoisonError::into_inner).lang = manifest.lang;
        for element in manifest.elements {
            let handle = MemoryElement::new(element.tag);
            for (name, value) in &element.attributes {
                handle.set_attribute(name, value);
            }
            page.push(handle);
        }
        page
    }

    /// Appends an element and returns a handle to it.
    pub fn push(&self, element: MemoryElement) -> MemoryElement {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .elements
            .push(element.clone());
        element
    }

    #[must_use]
    pub fn language(&self) -> Option<String> {
        self.state.read().unwrap_or_else(PoisonError::into_inner).lang.clone()
    }

    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        PageSnapshot {
            lang: state.lang.clone(),
            elements: state.elements.iter().map(MemoryElement::snapshot).collect(),
        }
    }
}

impl Page for MemoryPage {
    type Element = MemoryElement;

    fn marked_elements(&self) -> Vec<MemoryElement> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .elements
            .iter()
            .filter(|element| element.attribute(TRANSLATE_ATTRIBUTE).is_some())
            .cloned()
            .collect()
    }

    fn set_language(&self, lang: &str) {
        self.state.write().unwrap_or_else(PoisonError::into_inner).lang = Some(lang.to_string());
    }
}
