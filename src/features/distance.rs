use crate::error::{EngineError, Result};

/// Euclidean distance over raw feature values.
///
/// No normalization or weighting is applied. Vectors of different length
/// are rejected rather than truncated or padded.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(EngineError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(distance_unchecked(a, b))
}

/// Verify that every vector has `expected` features.
pub fn check_dimensions<'a, I>(expected: usize, vectors: I) -> Result<()>
where
    I: IntoIterator<Item = &'a [f64]>,
{
    for v in vectors {
        if v.len() != expected {
            return Err(EngineError::DimensionMismatch {
                expected,
                actual: v.len(),
            });
        }
    }

    Ok(())
}

// Callers must have validated lengths with `check_dimensions`.
pub(crate) fn distance_unchecked(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b) {
        let d = x - y;
        sum += d * d;
    }

    sum.sqrt()
}
