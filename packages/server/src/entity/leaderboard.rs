use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leaderBoard")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub board_id: i32,

    /// Upsert key: one row per player.
    #[sea_orm(unique)]
    pub user_name: String,
    pub score: i32,
}

impl ActiveModelBehavior for ActiveModel {}
