pub mod model;
pub mod segment;
pub mod time;
pub mod extract;
pub mod service;


pub use model::task::{Task, Priority, Category};
pub use model::stats::TaskStats;
pub use segment::split_sentences;
pub use time::{scan_date, fallback_deadline};
pub use extract::{extract_tasks, detect_priority, detect_category, MIN_TASK_CHARS};
pub use service::session::Session;
