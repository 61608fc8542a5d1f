//! page-translator
//!
//! Translates the elements of a page marked with `data-translate` using
//! language-keyed JSON resources, with one level of fallback to a default
//! language.

pub mod config;
pub mod locale;
pub mod page;
pub mod resolve;
pub mod resource;
pub mod storage;
pub mod translator;

#[cfg(test)]
mod test_utils;

pub use translator::{
    TranslateError,
    Translator,
};
