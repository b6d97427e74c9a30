use serde::{Deserialize, Serialize};

use crate::entity::leaderboard;
use crate::error::AppError;
use crate::models::auth::validate_username;

/// Request body for submitting a score.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SubmitScoreRequest {
    /// Player name; one leaderboard row is kept per name.
    #[schema(example = "alice_wonder")]
    pub username: String,
    /// Latest score. Replaces any previous score for the same player.
    #[schema(example = 3)]
    pub score: i32,
}

pub fn validate_submit_score(payload: &SubmitScoreRequest) -> Result<(), AppError> {
    validate_username(&payload.username)
}

/// A leaderboard row.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct LeaderboardEntry {
    #[schema(example = 1)]
    pub board_id: i32,
    #[schema(example = "alice_wonder")]
    pub user_name: String,
    #[schema(example = 3)]
    pub score: i32,
}

impl From<leaderboard::Model> for LeaderboardEntry {
    fn from(row: leaderboard::Model) -> Self {
        Self {
            board_id: row.board_id,
            user_name: row.user_name,
            score: row.score,
        }
    }
}
