// デモ用バックエンド専用のカスタムエラー型定義
// 集約サービス自体はエラー分類を持たず、コラボレーターの失敗をそのまま伝播する

use std::path::{Path, PathBuf};
use thiserror::Error;

/// データセット読み込み固有のエラー型
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("データセット読み込みエラー: {path} - {source}")]
    DatasetIoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("データセット解析エラー: {path} - {source}")]
    DatasetParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl DirectoryError {
    /// 読み込みエラーの作成
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::DatasetIoError {
            path: path.into(),
            source,
        }
    }

    /// 解析エラーの作成
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::DatasetParseError {
            path: path.into(),
            source,
        }
    }

    /// エラーに関連するデータセットのパスを取得
    pub fn path(&self) -> &Path {
        match self {
            Self::DatasetIoError { path, .. } => path,
            Self::DatasetParseError { path, .. } => path,
        }
    }
}
