// リーグ選手集約デモ
// モックコラボレーターによるサービス層ユニットテストのデモンストレーション
//
// 中核はRosterService1つで、注入された3つのコラボレーター
// （LeagueValidator / TeamFinder / PlayerFinder）を順に問い合わせて
// リーグ所属の全選手を集約する

pub mod cli;
pub mod core;
pub mod services;

// 公開API - 主要な型を明示的にエクスポートして曖昧性を回避
pub use crate::core::{DirectoryError, League, LeagueValidator, Player, PlayerFinder, Team, TeamFinder};
pub use crate::services::{InMemoryLeagueDirectory, LeagueDataset, RosterService};
