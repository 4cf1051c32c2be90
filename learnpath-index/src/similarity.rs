//! Vector similarity in double precision.

/// Cosine similarity between two vectors, accumulated in `f64`.
///
/// Returns 0.0 when either vector has zero norm. Vectors of unequal
/// length compare over the shared prefix; providers pad to a fixed
/// dimensionality so in practice lengths always agree.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let x = f64::from(*x);
        let y = f64::from(*y);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    if norm_a <= 0.0 || norm_b <= 0.0 {
        return 0.0;
    }
    dot / (norm_a.sqrt() * norm_b.sqrt())
}
