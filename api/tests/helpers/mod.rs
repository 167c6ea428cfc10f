pub mod app;
pub mod mail;

pub use app::{bearer, make_test_app, make_test_app_with, read_json};
pub use mail::{FailingTransport, RecordingTransport};
