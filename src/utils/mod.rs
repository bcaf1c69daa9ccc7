pub mod logging;

pub use logging::{log_submission_complete, log_submission_start, truncate_text};
