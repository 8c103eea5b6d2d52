use anyhow::Result;
use std::path::Path;

use crate::services::InMemoryLeagueDirectory;

/// List the leagues known to the dataset
pub async fn execute_leagues(data: &Path) -> Result<()> {
    let directory = InMemoryLeagueDirectory::from_json_file(data)?;
    let leagues = directory.leagues();

    println!("📂 データセット: {}", data.display());

    if leagues.is_empty() {
        println!("登録済みのリーグはありません");
        return Ok(());
    }

    println!("登録済みリーグ ({}件):", leagues.len());
    for league in &leagues {
        println!("  - リーグ {}", league.id);
    }

    Ok(())
}
