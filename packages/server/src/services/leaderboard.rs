use sea_orm::{
    ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::OnConflict,
};

use crate::entity::leaderboard;

pub struct LeaderboardService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> LeaderboardService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Record `score` for `user_name`, replacing any earlier score.
    ///
    /// Runs as one `INSERT ... ON CONFLICT (user_name) DO UPDATE` so that
    /// concurrent submissions for the same player never produce two rows.
    pub async fn upsert_score(&self, user_name: &str, score: i32) -> Result<(), DbErr> {
        let model = leaderboard::ActiveModel {
            user_name: Set(user_name.to_string()),
            score: Set(score),
            ..Default::default()
        };

        leaderboard::Entity::insert(model)
            .on_conflict(
                OnConflict::column(leaderboard::Column::UserName)
                    .update_column(leaderboard::Column::Score)
                    .to_owned(),
            )
            .exec_without_returning(self.conn)
            .await?;

        Ok(())
    }

    pub async fn find_by_user_name(
        &self,
        user_name: &str,
    ) -> Result<Option<leaderboard::Model>, DbErr> {
        leaderboard::Entity::find()
            .filter(leaderboard::Column::UserName.eq(user_name))
            .one(self.conn)
            .await
    }

    /// All rows in insertion order.
    pub async fn list(&self) -> Result<Vec<leaderboard::Model>, DbErr> {
        leaderboard::Entity::find()
            .order_by_asc(leaderboard::Column::BoardId)
            .all(self.conn)
            .await
    }
}
