pub mod json;
pub mod text;

pub use json::{JsonConfig, JsonFormatter, batch_to_json, report_to_json};
pub use text::{TextConfig, TextFormatter, batch_to_text, report_to_text};
