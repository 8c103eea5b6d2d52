// デモ用データセットの定義とJSON読み込み
// 本番システムではデータベース等が担う部分を、フラットなレコード集合で代替する

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::DirectoryError;

/// リーグレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueRecord {
    pub id: i32,
}

/// チームレコード
///
/// チームとリーグの関連はストア側のスキーマとしてここに保持する
/// （ドメインのTeamは関連を持たない）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub id: i32,
    pub league_id: i32,
}

/// 選手レコード
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub id: i32,
    pub team_id: i32,
}

/// フラットなデータセット全体
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueDataset {
    pub leagues: Vec<LeagueRecord>,
    pub teams: Vec<TeamRecord>,
    pub players: Vec<PlayerRecord>,
}

impl LeagueDataset {
    /// JSONファイルからデータセットを読み込む
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| DirectoryError::io(path, source))?;

        serde_json::from_str(&contents).map_err(|source| DirectoryError::parse(path, source))
    }
}
