// インメモリのコラボレーター具象実装
// 3つのトレイトを1つのディレクトリ構造体でまとめて実装する

use std::path::Path;

use anyhow::Result;
use async_trait::async_trait;

use super::dataset::LeagueDataset;
use crate::core::{
    DirectoryError, League, LeagueValidator, Player, PlayerFinder, Team, TeamFinder,
};

/// データセットを保持するデモ用バックエンド
///
/// LeagueValidator・TeamFinder・PlayerFinderの3役を兼ねる。
/// 検索結果はデータセット内の出現順を保つ。
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeagueDirectory {
    dataset: LeagueDataset,
}

impl InMemoryLeagueDirectory {
    pub fn new(dataset: LeagueDataset) -> Self {
        Self { dataset }
    }

    /// JSONファイルのデータセットからディレクトリを構築する
    pub fn from_json_file(path: &Path) -> Result<Self, DirectoryError> {
        Ok(Self::new(LeagueDataset::from_json_file(path)?))
    }

    /// 登録済みリーグの一覧を取得（leaguesサブコマンド用）
    pub fn leagues(&self) -> Vec<League> {
        self.dataset
            .leagues
            .iter()
            .map(|record| League { id: record.id })
            .collect()
    }
}

#[async_trait]
impl LeagueValidator for InMemoryLeagueDirectory {
    async fn is_valid(&self, league_id: i32) -> Result<bool> {
        Ok(self
            .dataset
            .leagues
            .iter()
            .any(|record| record.id == league_id))
    }
}

#[async_trait]
impl TeamFinder for InMemoryLeagueDirectory {
    async fn get_for_league(&self, league_id: i32) -> Result<Vec<Team>> {
        Ok(self
            .dataset
            .teams
            .iter()
            .filter(|record| record.league_id == league_id)
            .map(|record| Team { id: record.id })
            .collect())
    }
}

#[async_trait]
impl PlayerFinder for InMemoryLeagueDirectory {
    async fn get_for_team(&self, team_id: i32) -> Result<Vec<Player>> {
        Ok(self
            .dataset
            .players
            .iter()
            .filter(|record| record.team_id == team_id)
            .map(|record| Player {
                id: record.id,
                team_id: record.team_id,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::directory::dataset::{LeagueRecord, PlayerRecord, TeamRecord};

    fn sample_directory() -> InMemoryLeagueDirectory {
        InMemoryLeagueDirectory::new(LeagueDataset {
            leagues: vec![LeagueRecord { id: 1 }, LeagueRecord { id: 2 }],
            teams: vec![
                TeamRecord { id: 10, league_id: 1 },
                TeamRecord { id: 20, league_id: 2 },
                TeamRecord { id: 11, league_id: 1 },
            ],
            players: vec![
                PlayerRecord { id: 100, team_id: 10 },
                PlayerRecord { id: 101, team_id: 11 },
                PlayerRecord { id: 102, team_id: 10 },
            ],
        })
    }

    #[tokio::test]
    async fn test_known_league_is_valid() {
        let directory = sample_directory();

        assert!(directory.is_valid(1).await.unwrap());
        assert!(!directory.is_valid(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_teams_returned_in_dataset_order() {
        let directory = sample_directory();

        let teams = directory.get_for_league(1).await.unwrap();

        assert_eq!(teams, vec![Team { id: 10 }, Team { id: 11 }]);
    }

    #[tokio::test]
    async fn test_players_returned_in_dataset_order() {
        let directory = sample_directory();

        let players = directory.get_for_team(10).await.unwrap();

        assert_eq!(
            players,
            vec![
                Player { id: 100, team_id: 10 },
                Player { id: 102, team_id: 10 },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_team_yields_empty_list() {
        let directory = sample_directory();

        // 存在しないチームはエラーではなく空のリスト
        let players = directory.get_for_team(99).await.unwrap();

        assert!(players.is_empty());
    }

    #[test]
    fn test_leagues_listing() {
        let directory = sample_directory();

        assert_eq!(directory.leagues(), vec![League { id: 1 }, League { id: 2 }]);
    }
}
