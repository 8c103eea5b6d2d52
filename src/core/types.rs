// ドメインデータ型定義
// リーグ・チーム・選手はいずれもIDのみを持つ値オブジェクト

use serde::{Deserialize, Serialize};

/// リーグ（最上位のグルーピング単位）
///
/// 有効性の判定は外部のLeagueValidatorに委ねられるため、ID以外の属性は持たない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct League {
    pub id: i32,
}

/// チーム（リーグに所属する単位）
///
/// リーグとの関連はTeamFinderが解決するため、Team自身は関連を保持しない
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub id: i32,
}

/// 選手（team_idで所属チームを参照する）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: i32,
    pub team_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_belongs_to_exactly_one_team() {
        let player = Player { id: 1, team_id: 3 };

        assert_eq!(player.id, 1);
        assert_eq!(player.team_id, 3);
    }

    #[test]
    fn test_value_object_equality() {
        assert_eq!(League { id: 7 }, League { id: 7 });
        assert_eq!(Team { id: 2 }, Team { id: 2 });
        assert_ne!(Player { id: 1, team_id: 3 }, Player { id: 1, team_id: 4 });
    }
}
