use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
	CandidateRecord, FilterCriteria, Result,
	similarity::{self, round_score},
};

pub const DEFAULT_TOP_K: usize = 5;
pub const SCORE_DECIMALS: i32 = 4;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
	pub candidate_id: String,
	pub similarity_score: f32,
	pub experience: u32,
}

/// Filters, scores, and orders `pool` against `query`, keeping at most `top_k` results.
///
/// Filters run before scoring. Results are ordered by rounded similarity, then experience,
/// both descending; candidates equal on both keep their pool order. A dimension mismatch
/// with any scored candidate fails the whole call.
pub fn rank_candidates(
	query: &[f32],
	pool: &[CandidateRecord],
	criteria: &FilterCriteria,
	top_k: usize,
) -> Result<Vec<MatchResult>> {
	let mut matches = Vec::new();

	for candidate in pool {
		if !criteria.passes(candidate) {
			continue;
		}

		let similarity = similarity::cosine_similarity(query, &candidate.embedding)?;

		matches.push(MatchResult {
			candidate_id: candidate.id.clone(),
			similarity_score: round_score(similarity, SCORE_DECIMALS),
			experience: candidate.experience,
		});
	}

	matches.sort_by(cmp_match_desc);
	matches.truncate(top_k);

	Ok(matches)
}

pub fn cmp_match_desc(left: &MatchResult, right: &MatchResult) -> Ordering {
	cmp_f32_desc(left.similarity_score, right.similarity_score)
		.then_with(|| right.experience.cmp(&left.experience))
}

pub fn cmp_f32_desc(a: f32, b: f32) -> Ordering {
	match (a.is_nan(), b.is_nan()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
	}
}
