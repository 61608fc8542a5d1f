//! Element properties a translation can be written to.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown element property '{0}'")]
pub struct UnknownProperty(pub String);

/// A writable element property, named as in the DOM.
///
/// The translated value is written to the live property and mirrored as an
/// attribute of the same name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Property {
    #[serde(rename = "innerHTML")]
    InnerHtml,
    #[serde(rename = "textContent")]
    TextContent,
    #[serde(rename = "innerText")]
    InnerText,
    #[serde(rename = "value")]
    Value,
    #[serde(rename = "placeholder")]
    Placeholder,
    #[serde(rename = "title")]
    Title,
    #[serde(rename = "alt")]
    Alt,
    #[serde(rename = "label")]
    Label,
    #[serde(rename = "ariaLabel")]
    AriaLabel,
}

impl Property {
    pub const ALL: [Self; 9] = [
        Self::InnerHtml,
        Self::TextContent,
        Self::InnerText,
        Self::Value,
        Self::Placeholder,
        Self::Title,
        Self::Alt,
        Self::Label,
        Self::AriaLabel,
    ];

    /// DOM name, also used for the mirrored attribute.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InnerHtml => "innerHTML",
            Self::TextContent => "textContent",
            Self::InnerText => "innerText",
            Self::Value => "value",
            Self::Placeholder => "placeholder",
            Self::Title => "title",
            Self::Alt => "alt",
            Self::Label => "label",
            Self::AriaLabel => "ariaLabel",
        }
    }
}

impl FromStr for Property {
    type Err = UnknownProperty;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|property| property.as_str() == name)
            .ok_or_else(|| UnknownProperty(name.to_string()))
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
