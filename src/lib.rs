//! Search results page → Markdown snippet and typed section records.
//!
//! ```no_run
//! # async fn run() -> researches::Result<()> {
//! let result = researches::search("weather amsterdam").await?;
//! if let Some(weather) = result.weather {
//!     println!("{}°C, {}", weather.now.c, weather.now.description);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod parser;
pub mod schema;
pub mod selectors;

pub use client::{search, Client, SearchOptions};
pub use error::{Error, Result};
pub use parser::markdown::{element_to_markdown, to_markdown};
pub use parser::{parse, Extractor};
pub use schema::*;
pub use selectors::{Rule, SelectorTable};
