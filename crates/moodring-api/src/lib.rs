pub mod error;
pub mod moods;
pub mod views;

use moodring_db::Database;
use std::sync::Arc;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
}
