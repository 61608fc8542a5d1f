//! Language detection.

use crate::storage::{
    LANGUAGE_KEY,
    Storage,
};

/// Reports the user's language preferences, most preferred first.
pub trait LocaleSource: Send + Sync {
    /// Ordered preference list; may be empty.
    fn preferred_languages(&self) -> Vec<String>;

    /// Single reported language, consulted when the list is empty.
    fn language(&self) -> Option<String>;
}

/// Locale of the operating system, via `sys-locale`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl LocaleSource for SystemLocale {
    fn preferred_languages(&self) -> Vec<String> {
        sys_locale::get_locales().collect()
    }

    fn language(&self) -> Option<String> {
        sys_locale::get_locale()
    }
}

/// A fixed preference list.
#[derive(Debug, Clone, Default)]
pub struct FixedLocale {
    /// Preferred languages, most preferred first.
    languages: Vec<String>,
}

impl FixedLocale {
    #[must_use]
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { languages: languages.into_iter().map(Into::into).collect() }
    }
}

impl LocaleSource for FixedLocale {
    fn preferred_languages(&self) -> Vec<String> {
        self.languages.clone()
    }

    fn language(&self) -> Option<String> {
        self.languages.first().cloned()
    }
}

/// Detects the language to use.
///
/// With `persist`, a stored non-empty language wins. Otherwise the first two
/// characters of the most preferred locale tag are used (`en-US` -> `en`).
/// Returns an empty code when the locale source reports nothing.
#[must_use]
pub fn detect_language(persist: bool, storage: &dyn Storage, locale: &dyn LocaleSource) -> String {
    if persist
        && let Some(stored) = storage.get(LANGUAGE_KEY).filter(|lang| !lang.is_empty())
    {
        tracing::debug!(language = %stored, "Using stored language");
        return stored;
    }

    let tag = locale.preferred_languages().into_iter().next().or_else(|| locale.language());
    let Some(tag) = tag else {
        tracing::debug!("Locale source reported no language");
        return String::new();
    };

    tag.chars().take(2).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::storage::MemoryStorage;

    /// Reports only a single language, with no preference list.
    struct SingleLanguage(&'static str);

    impl LocaleSource for SingleLanguage {
        fn preferred_languages(&self) -> Vec<String> {
            Vec::new()
        }

        fn language(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    #[rstest]
    #[case::region("en-US", "en")]
    #[case::plain("hi", "hi")]
    #[case::script("zh-Hans-CN", "zh")]
    #[case::posix("ru_RU.UTF-8", "ru")]
    #[case::short("x", "x")]
    fn detects_first_two_characters(#[case] tag: &str, #[case] expected: &str) {
        let storage = MemoryStorage::new();

        let lang = detect_language(false, &storage, &FixedLocale::new([tag, "fr-FR"]));

        assert_that!(lang, eq(expected));
    }

    #[rstest]
    fn falls_back_to_single_language() {
        let storage = MemoryStorage::new();

        let lang = detect_language(false, &storage, &SingleLanguage("gu-IN"));

        assert_that!(lang, eq("gu"));
    }

    #[rstest]
    fn no_locale_yields_empty_code() {
        let storage = MemoryStorage::new();

        let lang = detect_language(false, &storage, &FixedLocale::default());

        assert_that!(lang, eq(""));
    }

    #[rstest]
    fn stored_language_wins_when_persisting() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_KEY, "zh-Hans").unwrap();

        let lang = detect_language(true, &storage, &FixedLocale::new(["en-US"]));

        assert_that!(lang, eq("zh-Hans"));
    }

    #[rstest]
    fn stored_language_ignored_without_persist() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_KEY, "hi").unwrap();

        let lang = detect_language(false, &storage, &FixedLocale::new(["en-US"]));

        assert_that!(lang, eq("en"));
    }

    #[rstest]
    fn empty_stored_language_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(LANGUAGE_KEY, "").unwrap();

        let lang = detect_language(true, &storage, &FixedLocale::new(["it-IT"]));

        assert_that!(lang, eq("it"));
    }
}
