// コラボレーターのトレイト定義
// サービス層が依存する3つのルックアップ能力を抽象化する
// 実装はデータベース・ファイル・リモートサービス等で裏付けられる想定

use anyhow::Result;
use async_trait::async_trait;
use mockall::automock;

use super::types::{Player, Team};

/// リーグIDの有効性を判定するトレイト
#[automock]
#[async_trait]
pub trait LeagueValidator: Send + Sync {
    /// リーグIDが有効かどうかを判定（副作用なしの純粋な述語）
    async fn is_valid(&self, league_id: i32) -> Result<bool>;
}

// LeagueValidator for Box<dyn LeagueValidator>
#[async_trait]
impl LeagueValidator for Box<dyn LeagueValidator> {
    async fn is_valid(&self, league_id: i32) -> Result<bool> {
        self.as_ref().is_valid(league_id).await
    }
}

/// リーグに所属するチームを検索するトレイト
#[automock]
#[async_trait]
pub trait TeamFinder: Send + Sync {
    /// 指定リーグの全チームを取得（存在しなければ空のリスト）
    async fn get_for_league(&self, league_id: i32) -> Result<Vec<Team>>;
}

// TeamFinder for Box<dyn TeamFinder>
#[async_trait]
impl TeamFinder for Box<dyn TeamFinder> {
    async fn get_for_league(&self, league_id: i32) -> Result<Vec<Team>> {
        self.as_ref().get_for_league(league_id).await
    }
}

/// チームに所属する選手を検索するトレイト
#[automock]
#[async_trait]
pub trait PlayerFinder: Send + Sync {
    /// 指定チームの全選手を取得（存在しなければ空のリスト）
    async fn get_for_team(&self, team_id: i32) -> Result<Vec<Player>>;
}

// PlayerFinder for Box<dyn PlayerFinder>
#[async_trait]
impl PlayerFinder for Box<dyn PlayerFinder> {
    async fn get_for_team(&self, team_id: i32) -> Result<Vec<Player>> {
        self.as_ref().get_for_team(team_id).await
    }
}
