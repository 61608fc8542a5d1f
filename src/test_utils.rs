//! テスト用ユーティリティ
//!
//! 複数のテストモジュールで使用される共通のヘルパーを提供します。
#![cfg(test)]

use std::collections::HashMap;
use std::sync::{
    Arc,
    Mutex,
    PoisonError,
};

use serde_json::Value;

use crate::page::{
    MemoryElement,
    TRANSLATE_ATTRIBUTE,
    TRANSLATE_TARGET_ATTRIBUTE,
};
use crate::resource::{
    FetchError,
    ResourceFetcher,
};

/// メモリ上のドキュメントを返すフェッチャー
///
/// クローン間でリクエスト履歴を共有するため、`Translator` に渡した後も
/// テスト側から取得回数を確認できます。
#[derive(Debug, Clone, Default)]
pub(crate) struct StaticFetcher {
    /// ロケーション → ドキュメント
    documents: Arc<HashMap<String, Value>>,
    /// 受け付けたロケーション（順序付き）
    requests: Arc<Mutex<Vec<String>>>,
}

impl StaticFetcher {
    /// `(ロケーション, ドキュメント)` の組から作成する
    pub(crate) fn new<const N: usize>(documents: [(&str, Value); N]) -> Self {
        Self {
            documents: Arc::new(
                documents.into_iter().map(|(location, doc)| (location.to_string(), doc)).collect(),
            ),
            requests: Arc::default(),
        }
    }

    /// 指定ロケーションへのリクエスト回数
    pub(crate) fn request_count(&self, location: &str) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).iter().filter(|l| *l == location).count()
    }

    /// 全リクエスト回数
    pub(crate) fn total_requests(&self) -> usize {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).len()
    }
}

impl ResourceFetcher for StaticFetcher {
    async fn fetch(&self, location: &str) -> Result<Value, FetchError> {
        self.requests.lock().unwrap_or_else(PoisonError::into_inner).push(location.to_string());

        // 並行呼び出しが交互に進むように一度譲る
        tokio::task::yield_now().await;

        self.documents.get(location).cloned().ok_or_else(|| FetchError::Io {
            path: location.into(),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        })
    }
}

/// 翻訳属性付きの要素を作成する
pub(crate) fn marked_element(tag: &str, keys: &str, properties: Option<&str>) -> MemoryElement {
    let element = MemoryElement::new(tag).with_attribute(TRANSLATE_ATTRIBUTE, keys);
    match properties {
        Some(properties) => element.with_attribute(TRANSLATE_TARGET_ATTRIBUTE, properties),
        None => element,
    }
}
