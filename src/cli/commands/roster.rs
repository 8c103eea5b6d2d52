use anyhow::Result;
use std::path::Path;

use crate::services::{InMemoryLeagueDirectory, RosterService};

/// Show the aggregated roster for a league
pub async fn execute_roster(league_id: i32, data: &Path) -> Result<()> {
    let directory = InMemoryLeagueDirectory::from_json_file(data)?;
    let service = RosterService::new(directory.clone(), directory.clone(), directory);

    println!("📂 データセット: {}", data.display());

    let roster = service.get_for_league(league_id).await?;

    // 無効なリーグもチーム無しも「選手なし」であってエラーではない
    if roster.is_empty() {
        println!("リーグ {league_id} に選手は見つかりませんでした");
        return Ok(());
    }

    println!("リーグ {league_id} の選手一覧 ({}名):", roster.len());
    for player in &roster {
        println!("  - 選手 {} (チーム {})", player.id, player.team_id);
    }

    Ok(())
}
