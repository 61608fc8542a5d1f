//! The page translator.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use crate::config::{
    ConfigError,
    TranslatorConfig,
};
use crate::locale::{
    LocaleSource,
    detect_language,
};
use crate::page::{
    Element,
    MarkedElement,
    Page,
};
use crate::resolve::KeyResolver;
use crate::resource::{
    ResourceCache,
    ResourceFetcher,
};
use crate::storage::{
    LANGUAGE_KEY,
    Storage,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranslateError {
    #[error("Expected a key to translate, got nothing.")]
    EmptyKey,
}

/// Translates the marked elements of a page.
///
/// The marked elements are captured once, at construction. Resources are
/// fetched at most once per language (barring concurrent first requests) and
/// kept for the translator's lifetime.
pub struct Translator<P: Page, F> {
    /// 検証済みの設定 (検出した言語は `default_language` に反映済み)
    config: TranslatorConfig,
    /// 翻訳対象のページ
    page: P,
    /// 構築時に取得したマーク付き要素
    elements: Vec<MarkedElement<P::Element>>,
    /// 言語ごとの翻訳リソース
    cache: ResourceCache,
    /// リソースの取得元
    fetcher: F,
    /// 選択言語の保存先
    storage: Box<dyn Storage>,
    /// ブラウザ言語の取得元
    locale: Box<dyn LocaleSource>,
}

impl<P: Page, F> fmt::Debug for Translator<P, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Translator")
            .field("config", &self.config)
            .field("elements", &self.elements.len())
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

impl<P: Page, F: ResourceFetcher> Translator<P, F> {
    /// Creates a translator and prefetches the default language.
    ///
    /// With `detect_language`, the detected language replaces the configured
    /// default language.
    ///
    /// # Errors
    /// The configuration is invalid.
    pub async fn new(
        mut config: TranslatorConfig,
        page: P,
        fetcher: F,
        storage: impl Storage + 'static,
        locale: impl LocaleSource + 'static,
    ) -> Result<Self, ConfigError> {
        config.validate().map_err(ConfigError::ValidationErrors)?;

        if config.detect_language {
            config.default_language = detect_language(config.persist, &storage, &locale);
            tracing::debug!(language = %config.default_language, "Detected language");
        }

        let elements: Vec<_> = page.marked_elements().into_iter().map(MarkedElement::capture).collect();
        tracing::debug!("Captured {} marked elements", elements.len());

        let translator = Self {
            config,
            page,
            elements,
            cache: ResourceCache::new(),
            fetcher,
            storage: Box::new(storage),
            locale: Box::new(locale),
        };

        if !translator.config.default_language.is_empty() {
            translator.get_resource(&translator.config.default_language).await;
        }

        Ok(translator)
    }

    pub const fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    pub const fn page(&self) -> &P {
        &self.page
    }

    pub const fn cache(&self) -> &ResourceCache {
        &self.cache
    }

    /// Language persisted by a previous `load`, if any.
    pub fn stored_language(&self) -> Option<String> {
        self.storage.get(LANGUAGE_KEY)
    }

    /// Stored language when persisting, otherwise the locale's language.
    pub fn detect_language(&self) -> String {
        detect_language(self.config.persist, self.storage.as_ref(), self.locale.as_ref())
    }

    /// Document for `lang`, fetched on first use.
    ///
    /// A failed fetch is logged and returns `None` without caching, so the next
    /// call retries.
    pub async fn get_resource(&self, lang: &str) -> Option<Arc<Value>> {
        if let Some(document) = self.cache.get(lang).await {
            tracing::debug!(lang, "Translation cache hit");
            return Some(document);
        }

        if !TranslatorConfig::is_valid_language(lang) {
            tracing::error!("Refusing to fetch a resource for invalid language code '{lang}'");
            return None;
        }

        let location = self.config.resource_location(lang);
        match self.fetcher.fetch(&location).await {
            Ok(document) => {
                let document = Arc::new(document);
                if !self.cache.insert_if_absent(lang, Arc::clone(&document)).await {
                    tracing::debug!(lang, "Resource was cached by a concurrent request");
                }
                Some(document)
            }
            Err(e) => {
                tracing::error!(
                    "Could not load {location}. Please make sure that the file exists. ({e})"
                );
                None
            }
        }
    }

    /// Fetches (if needed) and applies `lang` to every marked element.
    ///
    /// Languages outside the configured set are ignored.
    pub async fn load(&self, lang: &str) {
        if !self.config.is_supported(lang) {
            tracing::debug!(lang, "Ignoring unsupported language");
            return;
        }

        let document = self.get_resource(lang).await;
        self.apply(document.as_deref()).await;

        self.page.set_language(lang);

        if self.config.persist
            && let Err(e) = self.storage.set(LANGUAGE_KEY, lang)
        {
            tracing::error!("Failed to persist language '{lang}': {e}");
        }
    }

    /// Text for `key` in `lang`, falling back to the default language.
    ///
    /// # Errors
    /// `key` is empty.
    pub async fn translation_by_key(&self, lang: &str, key: &str) -> Result<String, TranslateError> {
        if key.is_empty() {
            return Err(TranslateError::EmptyKey);
        }

        let document = self.get_resource(lang).await;
        let fallback = self.fallback_document().await;

        Ok(self.resolver(fallback.as_deref()).resolve(key, document.as_deref()))
    }

    /// Writes `document` into every marked element.
    ///
    /// Elements with malformed markup are skipped whole; a failing key only
    /// leaves its own target untouched.
    pub async fn apply(&self, document: Option<&Value>) {
        let fallback = self.fallback_document().await;
        let resolver = self.resolver(fallback.as_deref());

        for marked in &self.elements {
            let bindings = match marked.bindings() {
                Ok(bindings) => bindings,
                Err(e) => {
                    tracing::error!("{e}");
                    continue;
                }
            };

            let element = marked.element();
            for binding in bindings {
                let text = resolver.resolve(&binding.key, document);
                if text.is_empty() {
                    tracing::error!("Could not find text for attribute \"{}\".", binding.key);
                    continue;
                }
                element.set_property(binding.property, &text);
                element.set_attribute(binding.property.as_str(), &text);
            }
        }
    }

    /// Cached default-language document, when a default language is set.
    async fn fallback_document(&self) -> Option<Arc<Value>> {
        if self.config.default_language.is_empty() {
            return None;
        }
        self.cache.get(&self.config.default_language).await
    }

    /// Key resolver over `fallback` using the configured separator.
    fn resolver<'a>(&'a self, fallback: Option<&'a Value>) -> KeyResolver<'a> {
        KeyResolver::new(&self.config.key_separator, fallback)
    }
}
