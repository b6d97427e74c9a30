use server::seed::{SEED_QUESTIONS, SEED_VIDEOS};
use server::services::catalog::{CatalogService, NewAnswer};

use crate::common::{TestApp, routes};

#[tokio::test]
async fn welcome_returns_plain_text_greeting() {
    let app = TestApp::spawn().await;

    let res = app
        .client
        .get(app.url(routes::WELCOME))
        .send()
        .await
        .expect("Failed to send GET request");

    assert_eq!(res.status().as_u16(), 200);
    let content_type = res.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(res.text().await.unwrap(), "Welcome to COVID 19 Quiz API");
}

#[tokio::test]
async fn seeded_question_has_four_answers_with_one_correct() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::QUESTIONS).await;

    assert_eq!(res.status, 200);
    let questions = res.body.as_array().expect("questions should be an array");
    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0]["question"], SEED_QUESTIONS[0].question);

    let answers = questions[0]["answers"].as_array().unwrap();
    assert_eq!(answers.len(), 4);
    assert_eq!(answers.iter().filter(|a| a["correct"] == true).count(), 1);
    for answer in answers {
        assert!(answer["id"].is_number());
        assert!(answer["answer"].is_string());
        assert!(answer["question_id"].is_number());
    }
}

#[tokio::test]
async fn seeded_video_is_listed() {
    let app = TestApp::spawn().await;

    let res = app.get(routes::VIDEOS).await;

    assert_eq!(res.status, 200);
    let videos = res.body.as_array().expect("videos should be an array");
    assert_eq!(videos.len(), 1);
    assert!(videos[0]["id"].is_number());
    assert_eq!(videos[0]["video_url"], SEED_VIDEOS[0].video_url);
    assert_eq!(videos[0]["description"], SEED_VIDEOS[0].description);
}

#[tokio::test]
async fn seeding_twice_does_not_duplicate_content() {
    let app = TestApp::spawn().await;

    server::seed::seed_catalog(&app.db).await.unwrap();

    let res = app.get(routes::QUESTIONS).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
    let res = app.get(routes::VIDEOS).await;
    assert_eq!(res.body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn inserted_question_round_trips_through_listing() {
    let app = TestApp::spawn().await;
    let catalog = CatalogService::new(&app.db);

    let (question, answers) = catalog
        .insert_question_with_answers(
            "How long should you wash your hands?",
            &[
                NewAnswer {
                    answer: "At least 20 seconds".into(),
                    correct: true,
                },
                NewAnswer {
                    answer: "A quick rinse".into(),
                    correct: false,
                },
            ],
        )
        .await
        .unwrap();
    catalog
        .insert_question_with_answers("A question nobody answered", &[])
        .await
        .unwrap();

    let res = app.get(routes::QUESTIONS).await;
    let listed = res.body.as_array().unwrap();
    assert_eq!(listed.len(), 3);

    let listed_question = &listed[1];
    assert_eq!(listed_question["question"], question.question);
    let listed_answers = listed_question["answers"].as_array().unwrap();
    assert_eq!(listed_answers.len(), answers.len());
    for (listed, stored) in listed_answers.iter().zip(&answers) {
        assert_eq!(listed["id"], stored.id);
        assert_eq!(listed["answer"], stored.answer.as_str());
        assert_eq!(listed["correct"], stored.correct);
        assert_eq!(listed["question_id"], question.id);
    }

    assert_eq!(listed[2]["answers"], serde_json::json!([]));
}

#[tokio::test]
async fn inserted_video_round_trips_through_listing() {
    let app = TestApp::spawn().await;

    let stored = CatalogService::new(&app.db)
        .insert_video("https://example.com/masks", "Wearing a mask properly")
        .await
        .unwrap();

    let res = app.get(routes::VIDEOS).await;
    let videos = res.body.as_array().unwrap();
    let listed = videos
        .iter()
        .find(|v| v["id"] == stored.id)
        .expect("inserted video should be listed");
    assert_eq!(listed["video_url"], "https://example.com/masks");
    assert_eq!(listed["description"], "Wearing a mask properly");
}
