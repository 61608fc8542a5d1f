use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "languages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// 検証エラーを 1 行ずつ連結
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Options fixed for the lifetime of a `Translator`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TranslatorConfig {
    /// Store the active language in durable storage after each `load`.
    pub persist: bool,

    /// Language codes `load` accepts.
    pub languages: Vec<String>,

    /// Language consulted when a key is missing in the requested one.
    /// Empty disables fallback.
    pub default_language: String,

    /// Replace `default_language` with the detected language at construction.
    pub detect_language: bool,

    /// Base path resources are fetched from (`{files_location}/{lang}.json`).
    pub files_location: String,

    pub key_separator: String,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            persist: false,
            languages: vec!["en".to_string()],
            default_language: String::new(),
            detect_language: true,
            files_location: "/translation".to_string(),
            key_separator: ".".to_string(),
        }
    }
}

impl TranslatorConfig {
    /// # Errors
    /// - No language configured
    /// - Language code empty or containing path components
    /// - Empty files location or separator
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.languages.is_empty() {
            errors.push(ValidationError::new(
                "languages",
                "At least one language is required. Example: [\"en\"]",
            ));
        }

        for (index, code) in self.languages.iter().enumerate() {
            if let Err(message) = check_language_code(code) {
                errors.push(ValidationError::new(format!("languages[{index}]"), message));
            }
        }

        if !self.default_language.is_empty()
            && let Err(message) = check_language_code(&self.default_language)
        {
            errors.push(ValidationError::new("defaultLanguage", message));
        }

        if self.files_location.is_empty() {
            errors.push(ValidationError::new(
                "filesLocation",
                "The location cannot be empty. Example: \"/translation\"",
            ));
        }

        if self.key_separator.is_empty() {
            errors.push(ValidationError::new(
                "keySeparator",
                "The separator cannot be empty. Please specify a separator, for example: \".\" (dot)",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    #[must_use]
    pub fn is_supported(&self, lang: &str) -> bool {
        self.languages.iter().any(|code| code == lang)
    }

    /// Whether `code` can be used as a single path segment.
    #[must_use]
    pub fn is_valid_language(code: &str) -> bool {
        check_language_code(code).is_ok()
    }

    /// Location of the resource for `lang`, e.g. `/translation/en.json`.
    #[must_use]
    pub fn resource_location(&self, lang: &str) -> String {
        format!("{}/{lang}.json", self.files_location.trim_end_matches('/'))
    }
}

/// Codes become part of a resource path, so they must stay a single segment.
fn check_language_code(code: &str) -> Result<(), String> {
    if code.trim().is_empty() {
        return Err("The language code cannot be empty".to_string());
    }
    if code.contains(['/', '\\']) || code.contains("..") {
        return Err(format!("Invalid language code '{code}': path components are not allowed"));
    }
    Ok(())
}
