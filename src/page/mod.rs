//! Article pages: fetching over HTTP and extracting text regions.

mod fetch;
mod html;

pub use fetch::{build_http_client, region_text, PageFetcher};
pub use html::{extract_element_by_id, html_to_text, inline_text};
