//! All-pairs cosine similarity.
//!
//! Rows of a [`VectorSpace`] are unit length (or zero), so cosine
//! similarity is a plain dot product. The full N x N matrix is computed
//! once up front and only read afterwards.

use crate::error::{Result, VectorSpaceError};
use crate::vector_space::VectorSpace;
use rayon::prelude::*;
use tracing::{debug, info, instrument};

/// Dense, symmetric N x N similarity matrix stored row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute every pairwise cosine similarity, one row per rayon task.
    ///
    /// Values are clamped to [-1, 1] and the diagonal is exactly 1.0, even
    /// for zero rows.
    #[instrument(skip(space), fields(rows = space.len()))]
    pub fn build(space: &VectorSpace) -> Self {
        let rows = space.rows();
        let size = rows.len();

        let values: Vec<f64> = rows
            .par_iter()
            .enumerate()
            .flat_map_iter(|(i, left)| {
                rows.iter().enumerate().map(move |(j, right)| {
                    if i == j {
                        1.0
                    } else {
                        left.dot(right).clamp(-1.0, 1.0)
                    }
                })
            })
            .collect();

        info!("Built {}x{} similarity matrix", size, size);
        Self { size, values }
    }

    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Similarity between rows `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> Result<f64> {
        self.check(i)?;
        self.check(j)?;
        Ok(self.values[i * self.size + j])
    }

    /// Similarities of `row` against every row, in row order
    pub fn row(&self, row: usize) -> Result<&[f64]> {
        self.check(row)?;
        let start = row * self.size;
        Ok(&self.values[start..start + self.size])
    }

    /// The `k` rows most similar to `row`.
    ///
    /// Ordered by score descending, then by ascending row index, so equal
    /// scores always come back in the same order. With `exclude_self` the
    /// query row never appears in the result.
    pub fn top_k(&self, row: usize, k: usize, exclude_self: bool) -> Result<Vec<(usize, f64)>> {
        let scores = self.row(row)?;

        let mut ranked: Vec<(usize, f64)> = scores
            .iter()
            .copied()
            .enumerate()
            .filter(|&(j, _)| !(exclude_self && j == row))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        ranked.truncate(k);

        debug!("top_k for row {} returned {} rows", row, ranked.len());
        Ok(ranked)
    }

    fn check(&self, index: usize) -> Result<()> {
        if index < self.size {
            Ok(())
        } else {
            Err(VectorSpaceError::IndexOutOfRange {
                index,
                len: self.size,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn matrix(corpus: &[&str]) -> SimilarityMatrix {
        let space = VectorSpace::build(corpus, 1000).unwrap();
        SimilarityMatrix::build(&space)
    }

    #[test]
    fn test_shared_terms_rank_above_disjoint() {
        // A and B share every term, C shares none
        let m = matrix(&["crime family saga", "saga family crime", "space alien crew"]);

        let top = m.top_k(0, 2, true).unwrap();
        assert_eq!(top[0].0, 1);
        assert!((top[0].1 - 1.0).abs() < EPSILON);
        assert_eq!(top[1].0, 2);
        assert!(top[1].1.abs() < EPSILON);
    }

    #[test]
    fn test_diagonal_is_one_and_matrix_is_symmetric() {
        let m = matrix(&["crime family", "crime heist", "", "alien heist crew"]);

        for i in 0..m.len() {
            assert_eq!(m.get(i, i).unwrap(), 1.0);
            for j in 0..m.len() {
                assert_eq!(m.get(i, j).unwrap(), m.get(j, i).unwrap());
                let v = m.get(i, j).unwrap();
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_top_k_excludes_self() {
        let m = matrix(&["crime", "crime", "crime", "crime"]);

        for row in 0..4 {
            let top = m.top_k(row, 10, true).unwrap();
            assert_eq!(top.len(), 3);
            assert!(top.iter().all(|&(j, _)| j != row));
        }
    }

    #[test]
    fn test_top_k_ties_break_on_ascending_index() {
        let m = matrix(&["crime", "crime", "crime", "crime", "alien"]);

        let top = m.top_k(2, 3, true).unwrap();
        let rows: Vec<usize> = top.iter().map(|&(j, _)| j).collect();
        assert_eq!(rows, vec![0, 1, 3]);
    }

    #[test]
    fn test_top_k_including_self_puts_self_first() {
        let m = matrix(&["crime drama", "crime heist"]);
        let top = m.top_k(1, 1, false).unwrap();
        assert_eq!(top, vec![(1, 1.0)]);
    }

    #[test]
    fn test_top_k_truncates_and_handles_zero() {
        let m = matrix(&["a1 b1", "b1 c1", "c1 d1", "d1 e1"]);
        assert_eq!(m.top_k(0, 2, true).unwrap().len(), 2);
        assert!(m.top_k(0, 0, true).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_range() {
        let m = matrix(&["crime", "heist"]);
        assert_eq!(
            m.top_k(2, 5, true).unwrap_err(),
            VectorSpaceError::IndexOutOfRange { index: 2, len: 2 }
        );
        assert!(m.get(0, 9).is_err());
        assert!(m.row(7).is_err());
    }
}
