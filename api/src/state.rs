//! Application state shared across route handlers via Axum's `State<T>` extractor.

use sea_orm::DatabaseConnection;

use crate::services::email::Notifier;

/// Central application state.
///
/// Holds the SeaORM connection and the notification sender. Both are cheap
/// to clone and are constructed once in `main`, never looked up globally.
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    notifier: Notifier,
}

impl AppState {
    pub fn new(db: DatabaseConnection, notifier: Notifier) -> Self {
        Self { db, notifier }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }
}
