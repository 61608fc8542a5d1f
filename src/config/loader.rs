//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    TranslatorConfig,
};

/// ディレクトリ内で探す設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".page-translator.json";

/// ディレクトリから設定を読み込む
///
/// `.page-translator.json` ファイルを探して読み込む
///
/// # Returns
/// - `Ok(Some(config))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
pub(super) fn load_from_dir(root: &Path) -> Result<Option<TranslatorConfig>, ConfigError> {
    let config_path = root.join(CONFIG_FILE_NAME);

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    load_from_file(&config_path).map(Some)
}

/// 指定されたファイルから設定を読み込む
pub(super) fn load_from_file(config_path: &Path) -> Result<TranslatorConfig, ConfigError> {
    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(config_path)?;
    let config: TranslatorConfig = serde_json::from_str(&content)?;

    Ok(config)
}
