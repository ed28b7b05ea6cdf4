//! # Similarity Crate
//!
//! Content similarity for the recommender:
//!
//! - **vector_space**: TF-IDF vocabulary and unit-length sparse rows
//! - **matrix**: all-pairs cosine similarity and top-K queries
//! - **error**: build and lookup errors
//!
//! ## Example Usage
//!
//! ```
//! use similarity::{SimilarityMatrix, VectorSpace};
//!
//! let corpus = ["crime family saga", "family crime saga", "space alien crew"];
//! let space = VectorSpace::build(&corpus, 5000).unwrap();
//! let matrix = SimilarityMatrix::build(&space);
//!
//! let top = matrix.top_k(0, 2, true).unwrap();
//! assert_eq!(top[0].0, 1);
//! ```
//!
//! ## Performance
//!
//! The matrix is dense and computed eagerly, O(N^2) in time and memory.
//! That is fine for catalogs of a few thousand movies.

pub mod error;
pub mod matrix;
pub mod vector_space;

pub use error::{Result, VectorSpaceError};
pub use matrix::SimilarityMatrix;
pub use vector_space::{SparseVector, VectorSpace};

/// Default vocabulary bound for both the content and reviews spaces
pub const DEFAULT_MAX_FEATURES: usize = 5000;

/// Build the vector space for `corpus` and its similarity matrix in one go
pub fn build_index<S>(corpus: &[S], max_features: usize) -> Result<(VectorSpace, SimilarityMatrix)>
where
    S: AsRef<str> + Sync,
{
    let space = VectorSpace::build(corpus, max_features)?;
    let matrix = SimilarityMatrix::build(&space);
    Ok((space, matrix))
}
