// 選手集約サービス
// リーグ検証 → チーム取得 → チーム毎の選手取得、という3段の短絡チェーン

use anyhow::Result;

use crate::core::{LeagueValidator, Player, PlayerFinder, TeamFinder};

/// リーグ単位で選手を集約するサービス
///
/// 3つのコラボレーターをコンストラクタインジェクションで所有する。
/// サービス自身は状態を持たず、呼び出し毎に独立して動作する。
pub struct RosterService<V, T, P>
where
    V: LeagueValidator,
    T: TeamFinder,
    P: PlayerFinder,
{
    validator: V,
    team_finder: T,
    player_finder: P,
}

impl<V, T, P> RosterService<V, T, P>
where
    V: LeagueValidator,
    T: TeamFinder,
    P: PlayerFinder,
{
    /// 新しいサービスインスタンスを作成（コンストラクタインジェクション）
    pub fn new(validator: V, team_finder: T, player_finder: P) -> Self {
        Self {
            validator,
            team_finder,
            player_finder,
        }
    }

    /// 指定リーグの全選手を集約して返す
    ///
    /// - リーグが無効なら空のリストを返す（エラーにはしない）
    /// - チームが存在しない場合も空のリストを返し、PlayerFinderには問い合わせない
    /// - 各チームの選手はTeamFinderが返した順に連結され、チーム内の順序も保たれる
    /// - コラボレーターの失敗はそのまま呼び出し元へ伝播する
    pub async fn get_for_league(&self, league_id: i32) -> Result<Vec<Player>> {
        if !self.validator.is_valid(league_id).await? {
            return Ok(Vec::new());
        }

        let teams = self.team_finder.get_for_league(league_id).await?;
        if teams.is_empty() {
            return Ok(Vec::new());
        }

        let mut roster = Vec::new();
        for team in &teams {
            let mut players = self.player_finder.get_for_team(team.id).await?;
            roster.append(&mut players);
        }

        Ok(roster)
    }
}
