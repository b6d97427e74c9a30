use serde::Serialize;

use crate::entity::{answer, question, video};

/// One answer option of a question.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct AnswerResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "No. Antibiotics do not work against viruses")]
    pub answer: String,
    #[schema(example = true)]
    pub correct: bool,
    #[schema(example = 1)]
    pub question_id: i32,
}

impl From<answer::Model> for AnswerResponse {
    fn from(a: answer::Model) -> Self {
        Self {
            id: a.id,
            answer: a.answer,
            correct: a.correct,
            question_id: a.question_id,
        }
    }
}

/// A trivia question with all of its answer options.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct QuestionResponse {
    #[schema(example = "Are antibiotics effective in preventing or treating COVID-19?")]
    pub question: String,
    pub answers: Vec<AnswerResponse>,
}

/// Fold `questions LEFT JOIN answers` rows into one entry per question.
///
/// Rows must be ordered by question id so that a question's rows are
/// contiguous. A question without answers arrives as a single `(q, None)` row.
pub fn group_answers(rows: Vec<(question::Model, Option<answer::Model>)>) -> Vec<QuestionResponse> {
    let mut out: Vec<QuestionResponse> = Vec::new();
    let mut current: Option<i32> = None;

    for (q, a) in rows {
        if current != Some(q.id) {
            current = Some(q.id);
            out.push(QuestionResponse {
                question: q.question,
                answers: Vec::new(),
            });
        }
        if let (Some(a), Some(last)) = (a, out.last_mut()) {
            last.answers.push(AnswerResponse::from(a));
        }
    }

    out
}

/// An informational video.
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VideoResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "https://www.youtube.com/watch?v=BtN-goy9VOY")]
    pub video_url: String,
    #[schema(example = "How to protect yourself against COVID-19")]
    pub description: String,
}

impl From<video::Model> for VideoResponse {
    fn from(v: video::Model) -> Self {
        Self {
            id: v.id,
            video_url: v.video_url,
            description: v.description,
        }
    }
}
