use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait, QueryOrder, Set,
    TransactionSession, TransactionTrait,
};

use crate::entity::{answer, question, video};

/// An answer option waiting to be attached to a new question.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub answer: String,
    pub correct: bool,
}

/// Read and write access to the quiz content: questions, answers and videos.
pub struct CatalogService<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CatalogService<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Every question joined with its answers, one row per answer.
    ///
    /// Ordered by question id, then answer id, so each question's rows are
    /// contiguous. Questions without answers yield one row with `None`.
    pub async fn questions_with_answers(
        &self,
    ) -> Result<Vec<(question::Model, Option<answer::Model>)>, DbErr> {
        question::Entity::find()
            .find_also_related(answer::Entity)
            .order_by_asc(question::Column::Id)
            .order_by_asc(answer::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn count_questions(&self) -> Result<u64, DbErr> {
        question::Entity::find().count(self.conn).await
    }

    pub async fn list_videos(&self) -> Result<Vec<video::Model>, DbErr> {
        video::Entity::find()
            .order_by_asc(video::Column::Id)
            .all(self.conn)
            .await
    }

    pub async fn count_videos(&self) -> Result<u64, DbErr> {
        video::Entity::find().count(self.conn).await
    }

    pub async fn insert_video(
        &self,
        video_url: &str,
        description: &str,
    ) -> Result<video::Model, DbErr> {
        video::ActiveModel {
            video_url: Set(video_url.to_string()),
            description: Set(description.to_string()),
            ..Default::default()
        }
        .insert(self.conn)
        .await
    }
}

impl<'a, C: ConnectionTrait + TransactionTrait> CatalogService<'a, C> {
    /// Insert a question together with its answers in one transaction.
    pub async fn insert_question_with_answers(
        &self,
        text: &str,
        answers: &[NewAnswer],
    ) -> Result<(question::Model, Vec<answer::Model>), DbErr> {
        let txn = self.conn.begin().await?;

        let q = question::ActiveModel {
            question: Set(text.to_string()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut inserted = Vec::with_capacity(answers.len());
        for a in answers {
            let row = answer::ActiveModel {
                answer: Set(a.answer.clone()),
                correct: Set(a.correct),
                question_id: Set(q.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            inserted.push(row);
        }

        txn.commit().await?;
        Ok((q, inserted))
    }
}
