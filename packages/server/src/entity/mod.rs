pub mod answer;
pub mod leaderboard;
pub mod question;
pub mod user;
pub mod video;
