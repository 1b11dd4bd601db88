use scalargrad_core::{ScalarGradError, Value};

use super::traits::Dataset;

/// Feature vectors paired with a scalar label each (`+1.0` / `-1.0` for
/// binary classification).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabeledDataset {
    features: Vec<Vec<f64>>,
    labels: Vec<f64>,
}

impl LabeledDataset {
    /// # Errors
    /// Returns `ShapeMismatch` if there is not exactly one label per feature
    /// vector, or if the feature vectors differ in length.
    pub fn new(features: Vec<Vec<f64>>, labels: Vec<f64>) -> Result<Self, ScalarGradError> {
        if features.len() != labels.len() {
            return Err(ScalarGradError::ShapeMismatch {
                expected: features.len(),
                actual: labels.len(),
                operation: "LabeledDataset::new".to_string(),
            });
        }
        if let Some(first) = features.first() {
            let width = first.len();
            if let Some(row) = features.iter().find(|row| row.len() != width) {
                return Err(ScalarGradError::ShapeMismatch {
                    expected: width,
                    actual: row.len(),
                    operation: "LabeledDataset::new".to_string(),
                });
            }
        }
        Ok(LabeledDataset { features, labels })
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[f64] {
        &self.labels
    }

    /// Width of the feature vectors, 0 for an empty dataset.
    pub fn num_features(&self) -> usize {
        self.features.first().map_or(0, Vec::len)
    }

    /// Wraps every feature into a fresh leaf node, ready for `Module::forward`.
    pub fn to_inputs(&self) -> Vec<Vec<Value>> {
        self.features
            .iter()
            .map(|row| row.iter().map(|&x| Value::new(x)).collect())
            .collect()
    }

    /// Sub-dataset made of the samples at `indices`, in that order.
    pub fn select(&self, indices: &[usize]) -> Result<LabeledDataset, ScalarGradError> {
        let mut features = Vec::with_capacity(indices.len());
        let mut labels = Vec::with_capacity(indices.len());
        for &index in indices {
            let (x, y) = self.get(index)?;
            features.push(x);
            labels.push(y);
        }
        Ok(LabeledDataset { features, labels })
    }
}

impl Dataset for LabeledDataset {
    type Item = (Vec<f64>, f64);

    fn get(&self, index: usize) -> Result<Self::Item, ScalarGradError> {
        match (self.features.get(index), self.labels.get(index)) {
            (Some(x), Some(&y)) => Ok((x.clone(), y)),
            _ => Err(ScalarGradError::IndexOutOfBounds {
                index,
                len: self.labels.len(),
            }),
        }
    }

    fn len(&self) -> usize {
        self.labels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> LabeledDataset {
        LabeledDataset::new(
            vec![vec![0.0, 1.0], vec![2.0, 3.0], vec![4.0, 5.0]],
            vec![1.0, -1.0, 1.0],
        )
        .expect("valid dataset")
    }

    #[test]
    fn test_labeled_dataset_get() -> Result<(), ScalarGradError> {
        let ds = sample();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.num_features(), 2);
        assert_eq!(ds.get(1)?, (vec![2.0, 3.0], -1.0));
        assert_eq!(
            ds.get(3),
            Err(ScalarGradError::IndexOutOfBounds { index: 3, len: 3 })
        );
        Ok(())
    }

    #[test]
    fn test_labeled_dataset_rejects_mismatched_lengths() {
        let result = LabeledDataset::new(vec![vec![0.0]], vec![1.0, 2.0]);
        assert!(matches!(
            result,
            Err(ScalarGradError::ShapeMismatch { .. })
        ));
        let ragged = LabeledDataset::new(vec![vec![0.0, 1.0], vec![2.0]], vec![1.0, 2.0]);
        assert!(matches!(
            ragged,
            Err(ScalarGradError::ShapeMismatch {
                expected: 2,
                actual: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_to_inputs_creates_leaves() {
        let inputs = sample().to_inputs();
        assert_eq!(inputs.len(), 3);
        assert!(inputs.iter().flatten().all(|v| v.is_leaf() && v.grad() == 0.0));
        assert_eq!(inputs[2][1].data(), 5.0);
    }

    #[test]
    fn test_select() -> Result<(), ScalarGradError> {
        let subset = sample().select(&[2, 0])?;
        assert_eq!(subset.labels(), &[1.0, 1.0]);
        assert_eq!(subset.features()[0], vec![4.0, 5.0]);
        assert!(sample().select(&[5]).is_err());
        Ok(())
    }
}
