use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, Set,
};

use crate::entity::user;

pub struct AccountService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> AccountService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    pub async fn find_by_user_name(&self, user_name: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::UserName.eq(user_name))
            .one(self.conn)
            .await
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, DbErr> {
        user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(self.conn)
            .await
    }

    /// Insert a user. `password_hash` must already be hashed.
    ///
    /// A duplicate `user_name` or `email` surfaces as
    /// `SqlErr::UniqueConstraintViolation` on the returned error.
    pub async fn create(
        &self,
        user_name: String,
        email: String,
        password_hash: String,
    ) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            user_name: Set(user_name),
            email: Set(email),
            password: Set(password_hash),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }
}
