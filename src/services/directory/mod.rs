// デモ用バックエンド機能
// インメモリのデータセットで3つのコラボレータートレイトを裏付ける

pub mod dataset;
pub mod implementations;

// 公開API
pub use dataset::{LeagueDataset, LeagueRecord, PlayerRecord, TeamRecord};
pub use implementations::InMemoryLeagueDirectory;
