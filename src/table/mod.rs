//! Table codec: delimiter detection, HTML table scraping, and CSV/Markdown
//! rendering.

mod csv;
mod detect;
mod html;
mod markdown;
mod rows;

pub use csv::{parse_csv, render_csv};
pub use detect::{detect_delimiter, extract_delimited};
pub use html::extract_html_table;
pub use markdown::render_markdown;
pub use rows::TableRows;
