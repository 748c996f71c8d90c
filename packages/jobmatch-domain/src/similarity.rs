use crate::{Error, Result};

/// Cosine similarity between two embeddings of equal length.
///
/// A zero vector has no direction, so its similarity to anything is `0.0`. Sums are kept in `f64`
/// so very small or very large components neither underflow nor overflow. The result is not
/// clamped and may drift marginally outside `[-1.0, 1.0]`.
pub fn cosine_similarity(lhs: &[f32], rhs: &[f32]) -> Result<f32> {
	if lhs.len() != rhs.len() {
		return Err(Error::DimensionMismatch { expected: lhs.len(), actual: rhs.len() });
	}

	let mut dot = 0.0_f64;
	let mut lhs_norm = 0.0_f64;
	let mut rhs_norm = 0.0_f64;

	for (l, r) in lhs.iter().zip(rhs.iter()) {
		let l = *l as f64;
		let r = *r as f64;

		dot += l * r;
		lhs_norm += l * l;
		rhs_norm += r * r;
	}

	if lhs_norm == 0.0 || rhs_norm == 0.0 {
		return Ok(0.0);
	}

	Ok((dot / (lhs_norm.sqrt() * rhs_norm.sqrt())) as f32)
}

/// Rounds half away from zero to `decimals` places.
pub fn round_score(value: f32, decimals: i32) -> f32 {
	let factor = 10_f64.powi(decimals);

	((value as f64 * factor).round() / factor) as f32
}
