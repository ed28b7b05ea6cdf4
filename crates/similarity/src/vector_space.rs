//! TF-IDF vector space over a corpus of pre-normalized documents.
//!
//! ## Algorithm
//! 1. Split every document on whitespace and count term occurrences
//! 2. Keep the `max_features` terms with the highest total corpus count,
//!    ties broken by ascending term
//! 3. Assign column indices in lexicographic order of the kept terms
//! 4. Weight each term as `tf * (ln((1 + N) / (1 + df)) + 1)`
//! 5. Scale every row to unit L2 norm (empty rows stay zero)

use crate::error::{Result, VectorSpaceError};
use rayon::prelude::*;
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, info, instrument};

/// Sparse row vector with strictly ascending column indices
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from `(column, value)` pairs in any order. Zero values are dropped.
    pub fn from_pairs(mut pairs: Vec<(usize, f64)>) -> Self {
        pairs.retain(|&(_, v)| v != 0.0);
        pairs.sort_by_key(|&(i, _)| i);
        let (indices, values) = pairs.into_iter().unzip();
        Self { indices, values }
    }

    /// Number of stored (non-zero) entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }

    /// Value at `column`, zero when absent
    pub fn get(&self, column: usize) -> f64 {
        match self.indices.binary_search(&column) {
            Ok(pos) => self.values[pos],
            Err(_) => 0.0,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    /// Dot product.
    ///
    /// Walks both index lists in ascending order, so `a.dot(b)` and
    /// `b.dot(a)` sum the same products in the same order and agree exactly.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    fn normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for v in &mut self.values {
                *v /= norm;
            }
        }
    }
}

/// Vocabulary plus one unit-length TF-IDF row per document.
///
/// Immutable once built; rebuild from the full corpus when it changes.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    rows: Vec<SparseVector>,
}

impl VectorSpace {
    /// Build the vector space for `corpus`, bounded to `max_features` terms.
    ///
    /// Documents are expected to be normalized already; they are only split
    /// on whitespace here. Documents with no kept terms get a zero row.
    #[instrument(skip(corpus), fields(documents = corpus.len()))]
    pub fn build<S>(corpus: &[S], max_features: usize) -> Result<Self>
    where
        S: AsRef<str> + Sync,
    {
        if max_features == 0 {
            return Err(VectorSpaceError::InvalidMaxFeatures);
        }

        let counts: Vec<HashMap<&str, usize>> =
            corpus.par_iter().map(|doc| term_counts(doc.as_ref())).collect();

        // term -> (total count, document frequency), ordered by term
        let mut stats: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
        for doc in &counts {
            for (&term, &count) in doc {
                let entry = stats.entry(term).or_insert((0, 0));
                entry.0 += count;
                entry.1 += 1;
            }
        }

        if stats.is_empty() {
            return Err(VectorSpaceError::EmptyCorpus);
        }
        debug!("Found {} distinct terms", stats.len());

        let mut ranked: Vec<(&str, usize, usize)> =
            stats.into_iter().map(|(t, (total, df))| (t, total, df)).collect();
        // Stable sort on an already lexicographic list keeps ties ascending
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(max_features);
        ranked.sort_by(|a, b| a.0.cmp(b.0));

        let n = corpus.len() as f64;
        let terms: Vec<String> = ranked.iter().map(|(t, _, _)| t.to_string()).collect();
        let idf: Vec<f64> = ranked
            .iter()
            .map(|&(_, _, df)| ((1.0 + n) / (1.0 + df as f64)).ln() + 1.0)
            .collect();
        let vocabulary: HashMap<String, usize> = terms
            .iter()
            .enumerate()
            .map(|(column, term)| (term.clone(), column))
            .collect();

        let rows: Vec<SparseVector> = counts
            .par_iter()
            .map(|doc| {
                let pairs = doc
                    .iter()
                    .filter_map(|(term, &tf)| {
                        vocabulary
                            .get(*term)
                            .map(|&column| (column, tf as f64 * idf[column]))
                    })
                    .collect();
                let mut row = SparseVector::from_pairs(pairs);
                row.normalize();
                row
            })
            .collect();

        info!(
            "Built vector space: {} rows x {} terms",
            rows.len(),
            terms.len()
        );

        Ok(Self {
            vocabulary,
            terms,
            idf,
            rows,
        })
    }

    /// Number of rows (documents)
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of retained terms
    pub fn vocabulary_len(&self) -> usize {
        self.terms.len()
    }

    /// Retained terms in column order
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn column_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Smoothed inverse document frequency of a retained term
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.column_of(term).map(|column| self.idf[column])
    }

    pub fn row(&self, index: usize) -> Result<&SparseVector> {
        self.rows.get(index).ok_or(VectorSpaceError::IndexOutOfRange {
            index,
            len: self.rows.len(),
        })
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }
}

fn term_counts(doc: &str) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    for term in doc.split_whitespace() {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
