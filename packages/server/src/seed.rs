use sea_orm::*;
use tracing::info;

use crate::services::catalog::{CatalogService, NewAnswer};

/// A sample question and its answers as `(text, correct)` pairs.
pub struct SeedQuestion {
    pub question: &'static str,
    pub answers: &'static [(&'static str, bool)],
}

/// A sample video as `(url, description)`.
pub struct SeedVideo {
    pub video_url: &'static str,
    pub description: &'static str,
}

/// Questions seeded into an empty database.
pub const SEED_QUESTIONS: &[SeedQuestion] = &[SeedQuestion {
    question: "Are antibiotics effective in preventing or treating COVID-19?",
    answers: &[
        ("No. Antibiotics do not work against viruses", true),
        ("Yes. Antibiotics work against viruses", false),
        ("Yes, when the antibiotics are combined with good food", false),
        ("None of the above", false),
    ],
}];

/// Videos seeded into an empty database.
pub const SEED_VIDEOS: &[SeedVideo] = &[SeedVideo {
    video_url: "https://www.youtube.com/watch?v=BtN-goy9VOY",
    description: "How to protect yourself against COVID-19",
}];

/// Populate the quiz content tables if they are empty.
///
/// Each table is checked on its own, so restarting never duplicates content
/// and a table emptied by hand is refilled.
pub async fn seed_catalog(db: &DatabaseConnection) -> Result<(), DbErr> {
    let catalog = CatalogService::new(db);

    if catalog.count_questions().await? == 0 {
        for seed in SEED_QUESTIONS {
            let answers: Vec<NewAnswer> = seed
                .answers
                .iter()
                .map(|&(answer, correct)| NewAnswer {
                    answer: answer.to_string(),
                    correct,
                })
                .collect();
            catalog
                .insert_question_with_answers(seed.question, &answers)
                .await?;
        }
        info!("Seeded {} questions", SEED_QUESTIONS.len());
    }

    if catalog.count_videos().await? == 0 {
        for seed in SEED_VIDEOS {
            catalog.insert_video(seed.video_url, seed.description).await?;
        }
        info!("Seeded {} videos", SEED_VIDEOS.len());
    }

    Ok(())
}
