//! # Data Loader Crate
//!
//! This crate handles loading the movie dataset and holding it as an
//! immutable, row-ordered catalog.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (MovieRecord, SentimentLabel, Catalog)
//! - **parser**: Read and write the raw and finalized CSV datasets
//! - **index**: Build the catalog, validate it, and answer title lookups
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::Catalog;
//! use std::path::Path;
//!
//! let catalog = Catalog::load_from_file(Path::new("data/movie_data_with_sentiment.csv"))?;
//!
//! if let Some(row) = catalog.find_by_title("the godfather") {
//!     println!("{}", catalog.get(row).unwrap().overview);
//! }
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;

// Re-export commonly used types for convenience
pub use error::{DataLoadError, Result};
pub use index::DEFAULT_SUGGESTION_LIMIT;
pub use types::{Catalog, MovieId, MovieRecord, SentimentLabel};
