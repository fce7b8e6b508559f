// Interactive terminal front-end: folder fields, checkbox file list and live preview.

mod app;
mod events;
mod models;
mod rendering;

pub use app::App;
pub use events::run_tui;
pub use models::{ConfigInputMode, Feedback, FeedbackLevel, FileItem, ProcessingStatus};
