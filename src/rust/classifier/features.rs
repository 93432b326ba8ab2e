use ndarray::Array2;

use super::error::ClassifierError;

/// Number of measurements in a feature vector.
pub const FEATURE_COUNT: usize = 4;

/// Sepal length, sepal width, petal length and petal width, in that order.
///
/// Only the count and numeric type are enforced; the order is a convention
/// shared with the model that was trained offline.
pub type FeatureVector = [f64; FEATURE_COUNT];

/// Packs samples into the `[batch, 4]` f32 matrix the ONNX model expects.
pub(crate) fn to_input_array(samples: &[FeatureVector]) -> Result<Array2<f32>, ClassifierError> {
    if samples.is_empty() {
        return Err(ClassifierError::ValidationError("At least one sample is required".into()));
    }

    let flat: Vec<f32> = samples
        .iter()
        .flat_map(|sample| sample.iter().map(|&x| x as f32))
        .collect();

    Array2::from_shape_vec((samples.len(), FEATURE_COUNT), flat)
        .map_err(|e| ClassifierError::PredictionError(format!("Failed to create input array: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_array_shape() {
        let samples = [[5.1, 3.5, 1.4, 0.2], [6.7, 3.0, 5.2, 2.3]];
        let array = to_input_array(&samples).unwrap();
        assert_eq!(array.shape(), &[2, FEATURE_COUNT]);
        assert_eq!(array[[0, 0]], 5.1f32);
        assert_eq!(array[[1, 3]], 2.3f32);
    }

    #[test]
    fn test_empty_samples_rejected() {
        let result = to_input_array(&[]);
        assert!(matches!(result, Err(ClassifierError::ValidationError(_))));
    }
}
