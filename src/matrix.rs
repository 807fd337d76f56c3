//! Pathway × drug category attention matrix

use thiserror::Error;

/// Errors raised when assembling an [`AttentionMatrix`]
#[derive(Error, Debug, PartialEq)]
pub enum MatrixError {
    #[error("Expected {expected} rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("Row '{pathway}' has {found} columns, expected {expected}")]
    ColumnCount {
        pathway: String,
        expected: usize,
        found: usize,
    },
}

/// Dense grid of attention weights indexed by pathway (rows) and drug category (columns)
#[derive(Debug, Clone, PartialEq)]
pub struct AttentionMatrix {
    pathways: Vec<String>,
    categories: Vec<String>,
    weights: Vec<Vec<f64>>,
}

impl AttentionMatrix {
    /// Creates a matrix, checking that `weights` is `pathways.len()` × `categories.len()`.
    pub fn new(
        pathways: Vec<String>,
        categories: Vec<String>,
        weights: Vec<Vec<f64>>,
    ) -> Result<Self, MatrixError> {
        if weights.len() != pathways.len() {
            return Err(MatrixError::RowCount {
                expected: pathways.len(),
                found: weights.len(),
            });
        }

        for (pathway, row) in pathways.iter().zip(&weights) {
            if row.len() != categories.len() {
                return Err(MatrixError::ColumnCount {
                    pathway: pathway.clone(),
                    expected: categories.len(),
                    found: row.len(),
                });
            }
        }

        Ok(Self {
            pathways,
            categories,
            weights,
        })
    }

    /// Creates a matrix from fixed-size arrays, whose types already guarantee the shape.
    pub fn from_arrays<const ROWS: usize, const COLUMNS: usize>(
        pathways: &[&str; ROWS],
        categories: &[&str; COLUMNS],
        weights: &[[f64; COLUMNS]; ROWS],
    ) -> Self {
        Self {
            pathways: pathways.iter().map(|p| p.to_string()).collect(),
            categories: categories.iter().map(|c| c.to_string()).collect(),
            weights: weights.iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn pathways(&self) -> &[String] {
        &self.pathways
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Rows of weights, in pathway order.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.weights
    }

    /// Weight of `pathway` for `category`, if both labels exist.
    pub fn get(&self, pathway: &str, category: &str) -> Option<f64> {
        let row = self.pathways.iter().position(|p| p == pathway)?;
        let column = self.categories.iter().position(|c| c == category)?;
        Some(self.weights[row][column])
    }

    /// Iterates `(row, column, weight)` over every cell.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.weights.iter().enumerate().flat_map(|(row, values)| {
            values
                .iter()
                .enumerate()
                .map(move |(column, &weight)| (row, column, weight))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_rejects_wrong_row_count() {
        let result = AttentionMatrix::new(labels(&["a", "b"]), labels(&["x"]), vec![vec![0.1]]);
        assert_eq!(
            result,
            Err(MatrixError::RowCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let result = AttentionMatrix::new(
            labels(&["a", "b"]),
            labels(&["x", "y"]),
            vec![vec![0.1, 0.2], vec![0.3]],
        );
        assert!(matches!(result, Err(MatrixError::ColumnCount { ref pathway, .. }) if pathway == "b"));
    }

    #[test]
    fn test_get_by_labels() {
        let matrix = AttentionMatrix::new(
            labels(&["a", "b"]),
            labels(&["x", "y"]),
            vec![vec![0.1, 0.2], vec![0.3, 0.4]],
        )
        .unwrap();

        assert_eq!(matrix.get("b", "x"), Some(0.3));
        assert_eq!(matrix.get("a", "y"), Some(0.2));
        assert_eq!(matrix.get("c", "x"), None);
        assert_eq!(matrix.cells().count(), 4);
    }
}
