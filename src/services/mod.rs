// サービス層 - 機能別のビジネスロジック
// 各サービスは特定の責任を持ち、疎結合で設計されている

pub mod directory;
pub mod roster;

// 公開API - 各サービスの主要機能を明示的にエクスポート
pub use directory::{InMemoryLeagueDirectory, LeagueDataset};
pub use roster::RosterService;
