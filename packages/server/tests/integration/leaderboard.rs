use std::collections::HashSet;

use serde_json::json;

use server::services::leaderboard::LeaderboardService;

use crate::common::{TestApp, routes};

#[tokio::test]
async fn first_score_creates_a_row() {
    let app = TestApp::spawn().await;

    let board = app.submit_score("alice", 3).await;

    assert_eq!(board.len(), 1);
    assert!(board[0]["board_id"].is_number());
    assert_eq!(board[0]["user_name"], "alice");
    assert_eq!(board[0]["score"], 3);
}

#[tokio::test]
async fn later_score_overwrites_earlier_one() {
    let app = TestApp::spawn().await;

    let first = app.submit_score("alice", 3).await;
    let board = app.submit_score("alice", 1).await;

    assert_eq!(board.len(), 1);
    assert_eq!(board[0]["board_id"], first[0]["board_id"]);
    assert_eq!(board[0]["score"], 1);

    let stored = LeaderboardService::new(&app.db)
        .find_by_user_name("alice")
        .await
        .unwrap()
        .expect("row should exist");
    assert_eq!(stored.score, 1);
}

#[tokio::test]
async fn leaderboard_lists_every_player_once() {
    let app = TestApp::spawn().await;

    app.submit_score("alice", 3).await;
    app.submit_score("bob", 4).await;
    let board = app.submit_score("alice", 2).await;

    let names: Vec<&str> = board
        .iter()
        .map(|row| row["user_name"].as_str().unwrap())
        .collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(names.len(), 2);
    assert_eq!(unique.len(), 2);
    assert_eq!(names, vec!["alice", "bob"]);
}

#[tokio::test]
async fn concurrent_submissions_for_one_player_keep_a_single_row() {
    let app = TestApp::spawn().await;

    let (a, b) = tokio::join!(app.submit_score("alice", 5), app.submit_score("alice", 7));
    assert!(!a.is_empty() && !b.is_empty());

    let rows = LeaderboardService::new(&app.db).list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].score == 5 || rows[0].score == 7);
}

#[tokio::test]
async fn non_integer_score_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::LEADERBOARD, &json!({"username": "alice", "score": "lots"}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn blank_username_is_rejected() {
    let app = TestApp::spawn().await;

    let res = app
        .post(routes::LEADERBOARD, &json!({"username": "  ", "score": 2}))
        .await;

    assert_eq!(res.status, 400);
    assert_eq!(res.body["code"], "VALIDATION_ERROR");
}
