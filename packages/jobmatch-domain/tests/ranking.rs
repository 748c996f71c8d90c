use jobmatch_domain::{
	CandidateRecord, DEFAULT_TOP_K, Error, FilterCriteria, MatchResult, filter, rank_candidates,
};

fn candidate(id: &str, embedding: Vec<f32>, experience: u32, location: &str) -> CandidateRecord {
	CandidateRecord {
		id: id.to_string(),
		embedding,
		experience,
		location: location.to_string(),
		name: format!("Candidate {id}"),
	}
}

fn scenario_pool() -> Vec<CandidateRecord> {
	vec![
		candidate("c1", vec![1.0, 0.0], 5, "US"),
		candidate("c2", vec![0.0, 1.0], 8, "US"),
	]
}

fn mixed_pool() -> Vec<CandidateRecord> {
	vec![
		candidate("a", vec![0.9, 0.1, 0.0], 2, "US"),
		candidate("b", vec![0.1, 0.9, 0.3], 10, "Germany"),
		candidate("c", vec![0.5, 0.5, 0.5], 4, "us"),
		candidate("d", vec![1.0, 0.0, 0.0], 1, "India"),
		candidate("e", vec![0.0, 0.0, 1.0], 7, "Germany"),
		candidate("f", vec![0.7, 0.7, 0.0], 6, "India"),
		candidate("g", vec![-1.0, 0.2, 0.0], 12, "US"),
		candidate("h", vec![0.0, 0.0, 0.0], 3, "US"),
	]
}

fn assert_ordered(results: &[MatchResult]) {
	for pair in results.windows(2) {
		let (x, y) = (&pair[0], &pair[1]);

		assert!(
			x.similarity_score > y.similarity_score
				|| (x.similarity_score == y.similarity_score && x.experience >= y.experience),
			"{x:?} must not precede {y:?}"
		);
	}
}

#[test]
fn scenario_a_ranks_by_similarity() {
	let results = rank_candidates(
		&[1.0, 0.0],
		&scenario_pool(),
		&FilterCriteria::default(),
		DEFAULT_TOP_K,
	)
	.expect("ranking failed");

	assert_eq!(
		results,
		vec![
			MatchResult { candidate_id: "c1".to_string(), similarity_score: 1.0, experience: 5 },
			MatchResult { candidate_id: "c2".to_string(), similarity_score: 0.0, experience: 8 },
		]
	);
}

#[test]
fn scenario_b_applies_min_experience() {
	let criteria = FilterCriteria { min_experience: Some(6), country: None };
	let results = rank_candidates(&[1.0, 0.0], &scenario_pool(), &criteria, DEFAULT_TOP_K)
		.expect("ranking failed");

	assert_eq!(
		results,
		vec![MatchResult { candidate_id: "c2".to_string(), similarity_score: 0.0, experience: 8 }]
	);
}

#[test]
fn scenario_c_breaks_ties_by_experience() {
	let pool = vec![
		candidate("junior", vec![0.8, 0.6], 3, "US"),
		candidate("senior", vec![1.6, 1.2], 7, "US"),
	];
	let results = rank_candidates(&[1.0, 0.0], &pool, &FilterCriteria::default(), DEFAULT_TOP_K)
		.expect("ranking failed");

	assert_eq!(results.len(), 2);
	assert_eq!(results[0].similarity_score, 0.8);
	assert_eq!(results[1].similarity_score, 0.8);
	assert_eq!(results[0].candidate_id, "senior");
	assert_eq!(results[1].candidate_id, "junior");
}

#[test]
fn scenario_d_empty_pool_yields_empty_result() {
	let results = rank_candidates(&[1.0, 0.0], &[], &FilterCriteria::default(), DEFAULT_TOP_K)
		.expect("ranking failed");

	assert!(results.is_empty());
}

#[test]
fn full_ties_keep_pool_order() {
	let pool = vec![
		candidate("first", vec![1.0, 0.0], 4, "US"),
		candidate("second", vec![2.0, 0.0], 4, "US"),
		candidate("third", vec![3.0, 0.0], 4, "US"),
	];
	let results = rank_candidates(&[1.0, 0.0], &pool, &FilterCriteria::default(), DEFAULT_TOP_K)
		.expect("ranking failed");
	let ids: Vec<&str> = results.iter().map(|result| result.candidate_id.as_str()).collect();

	assert_eq!(ids, vec!["first", "second", "third"]);
}

#[test]
fn never_exceeds_top_k_and_never_pads() {
	let pool = mixed_pool();

	for top_k in 0..=pool.len() + 2 {
		let results = rank_candidates(&[1.0, 0.0, 0.0], &pool, &FilterCriteria::default(), top_k)
			.expect("ranking failed");

		assert_eq!(results.len(), top_k.min(pool.len()));
		assert_ordered(&results);
	}
}

#[test]
fn excluded_candidates_never_appear() {
	let pool = mixed_pool();
	let criteria = FilterCriteria { min_experience: Some(3), country: Some("US".to_string()) };
	let results =
		rank_candidates(&[1.0, 0.0, 0.0], &pool, &criteria, pool.len()).expect("ranking failed");
	let ids: Vec<&str> = results.iter().map(|result| result.candidate_id.as_str()).collect();

	for result in &results {
		let record = pool
			.iter()
			.find(|candidate| candidate.id == result.candidate_id)
			.expect("result must come from the pool");

		assert!(filter::passes_filters(record, &criteria));
	}

	assert_eq!(ids, vec!["c", "h", "g"]);
	assert_ordered(&results);
}

#[test]
fn all_filtered_out_yields_empty_result() {
	let criteria = FilterCriteria { min_experience: Some(100), country: None };
	let results = rank_candidates(&[1.0, 0.0, 0.0], &mixed_pool(), &criteria, DEFAULT_TOP_K)
		.expect("ranking failed");

	assert!(results.is_empty());
}

#[test]
fn ranking_is_idempotent() {
	let pool = mixed_pool();
	let criteria = FilterCriteria { min_experience: Some(2), country: None };
	let first = rank_candidates(&[0.3, 0.4, 0.5], &pool, &criteria, 4).expect("ranking failed");
	let second = rank_candidates(&[0.3, 0.4, 0.5], &pool, &criteria, 4).expect("ranking failed");

	assert_eq!(first, second);
}

#[test]
fn scores_are_rounded_to_four_places() {
	let pool = vec![candidate("x", vec![1.0, 2.0, 3.0], 1, "US")];
	let results = rank_candidates(&[3.0, 2.0, 1.0], &pool, &FilterCriteria::default(), 1)
		.expect("ranking failed");

	// 10 / 14
	assert_eq!(results[0].similarity_score, 0.7143);
}

#[test]
fn dimension_mismatch_fails_the_call() {
	let pool = vec![
		candidate("ok", vec![1.0, 0.0], 1, "US"),
		candidate("corrupt", vec![1.0, 0.0, 0.0], 1, "US"),
	];
	let err = rank_candidates(&[1.0, 0.0], &pool, &FilterCriteria::default(), DEFAULT_TOP_K)
		.expect_err("Expected dimension mismatch.");

	assert_eq!(err, Error::DimensionMismatch { expected: 2, actual: 3 });
}

#[test]
fn filtered_candidates_are_not_scored() {
	let pool = vec![
		candidate("ok", vec![1.0, 0.0], 5, "US"),
		candidate("corrupt", vec![1.0, 0.0, 0.0], 1, "US"),
	];
	let criteria = FilterCriteria { min_experience: Some(2), country: None };
	let results =
		rank_candidates(&[1.0, 0.0], &pool, &criteria, DEFAULT_TOP_K).expect("ranking failed");

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].candidate_id, "ok");
}

#[test]
fn large_magnitude_candidates_score_by_direction() {
	let pool = vec![
		candidate("small", vec![0.6, 0.8], 3, "US"),
		candidate("big", vec![1e20, 0.0], 1, "US"),
		candidate("tiny", vec![0.0, 1e-23], 9, "US"),
	];
	let results = rank_candidates(&[1.0, 0.0], &pool, &FilterCriteria::default(), DEFAULT_TOP_K)
		.expect("ranking failed");
	let ids: Vec<&str> = results.iter().map(|result| result.candidate_id.as_str()).collect();

	assert_eq!(ids, vec!["big", "small", "tiny"]);
	assert_eq!(results[0].similarity_score, 1.0);
	assert_eq!(results[1].similarity_score, 0.6);
	assert_eq!(results[2].similarity_score, 0.0);
}
