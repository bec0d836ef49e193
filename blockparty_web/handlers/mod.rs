mod admin_handler;
mod delete_handler;
mod helpers;
mod leaderboard_handler;

pub use admin_handler::{AdminQuery, admin_mutate, admin_page};
pub use delete_handler::{delete_page, delete_player};
pub(crate) use helpers::*;
pub use leaderboard_handler::leaderboard;
