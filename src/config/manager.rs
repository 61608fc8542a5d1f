//! 設定管理を行うモジュール

use std::path::Path;

use super::{
    ConfigError,
    TranslatorConfig,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: TranslatorConfig,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: TranslatorConfig::default() }
    }

    /// ディレクトリから設定を読み込む
    ///
    /// `.page-translator.json` が無い場合はデフォルト値を使う
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, root: Option<&Path>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", root);

        let settings = if let Some(root) = root {
            loader::load_from_dir(root)?.unwrap_or_default()
        } else {
            TranslatorConfig::default()
        };

        self.update_settings(settings)
    }

    /// 設定ファイルを明示的に指定して読み込む
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_file(&mut self, path: &Path) -> Result<(), ConfigError> {
        let settings = loader::load_from_file(path)?;
        self.update_settings(settings)
    }

    /// 設定を更新する
    ///
    /// # Errors
    /// バリデーションエラー
    pub fn update_settings(&mut self, new_settings: TranslatorConfig) -> Result<(), ConfigError> {
        // バリデーション
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        self.current_settings = new_settings;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &TranslatorConfig {
        &self.current_settings
    }

    /// 現在の設定を取り出す
    #[must_use]
    pub fn into_settings(self) -> TranslatorConfig {
        self.current_settings
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::config::CONFIG_FILE_NAME;

    /// new: デフォルト値で作成される
    #[rstest]
    fn test_new_creates_default_settings() {
        let manager = ConfigManager::new();

        assert_eq!(manager.get_settings().files_location, "/translation");
        assert_eq!(manager.get_settings().languages, vec!["en".to_string()]);
    }

    /// load_settings: root が None の場合
    #[rstest]
    fn test_load_settings_without_root() {
        let mut manager = ConfigManager::new();

        let result = manager.load_settings(None);

        assert!(result.is_ok());
        assert!(!manager.get_settings().persist);
    }

    /// load_settings: 設定ファイルがある場合
    #[rstest]
    fn test_load_settings_with_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_content = r#"{"languages": ["hi", "en"], "defaultLanguage": "en"}"#;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), config_content).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().languages, vec!["hi".to_string(), "en".to_string()]);
        assert_eq!(manager.into_settings().default_language, "en");
    }

    /// load_settings: 設定ファイルがない場合はデフォルト値
    #[rstest]
    fn test_load_settings_without_config_file() {
        let temp_dir = TempDir::new().unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_settings(Some(temp_dir.path()));

        assert!(result.is_ok());
        assert_eq!(manager.get_settings().key_separator, ".");
    }

    /// load_file: 無効な設定はバリデーションエラー
    #[rstest]
    fn test_load_file_invalid_settings() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("translator.json");
        fs::write(&path, r#"{"languages": []}"#).unwrap();

        let mut manager = ConfigManager::new();
        let result = manager.load_file(&path);

        assert!(matches!(result, Err(ConfigError::ValidationErrors(_))));
        assert_eq!(manager.get_settings().languages, vec!["en".to_string()]);
    }

    /// update_settings: 無効な設定でエラー
    #[rstest]
    fn test_update_settings_invalid() {
        let mut manager = ConfigManager::new();
        let new_settings =
            TranslatorConfig { key_separator: String::new(), ..TranslatorConfig::default() };

        let result = manager.update_settings(new_settings);

        assert!(result.is_err());
    }
}
