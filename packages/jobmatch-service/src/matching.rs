use serde::{Deserialize, Serialize};

use crate::{Error, MatchService, Result, records};
use jobmatch_domain::{CandidateRecord, FilterCriteria, JobRecord, MatchResult};
use jobmatch_storage::Include;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchRequest {
	pub job_id: String,
	pub min_experience: Option<u32>,
	pub country: Option<String>,
	/// Falls back to `matching.default_top_k`; values above `matching.max_top_k` are clamped.
	pub top_k: Option<u32>,
}

impl MatchService {
	pub async fn match_job(&self, req: MatchRequest) -> Result<Vec<MatchResult>> {
		let top_k = self.resolve_top_k(req.top_k)?;
		let criteria = FilterCriteria {
			min_experience: req.min_experience,
			country: req
				.country
				.as_deref()
				.map(str::trim)
				.filter(|country| !country.is_empty())
				.map(str::to_string),
		};
		let Some(job) = self.find_job(&req.job_id).await? else {
			return Err(Error::NotFound { message: "Job not found.".to_string() });
		};
		let pool = self.candidate_pool().await?;

		tracing::debug!(job_id = %job.id, pool_size = pool.len(), "Loaded candidate pool.");

		let results = jobmatch_domain::rank_candidates(&job.embedding, &pool, &criteria, top_k)?;

		tracing::info!(
			job_id = %job.id,
			pool_size = pool.len(),
			returned = results.len(),
			top_k,
			filtered = !criteria.is_empty(),
			"Ranked candidates."
		);

		Ok(results)
	}

	pub(crate) async fn find_job(&self, job_id: &str) -> Result<Option<JobRecord>> {
		let ids = [job_id.to_string()];
		let found = self.jobs.get(Some(ids.as_slice()), Include::ALL).await?;

		Ok(records::decode_all(found, records::job_record)?.into_iter().next())
	}

	pub(crate) async fn find_candidate(
		&self,
		candidate_id: &str,
	) -> Result<Option<CandidateRecord>> {
		let ids = [candidate_id.to_string()];
		let found = self.candidates.get(Some(ids.as_slice()), Include::ALL).await?;

		Ok(records::decode_all(found, records::candidate_record)?.into_iter().next())
	}

	async fn candidate_pool(&self) -> Result<Vec<CandidateRecord>> {
		let all = self.candidates.get(None, Include::ALL).await?;

		records::decode_all(all, records::candidate_record)
	}

	fn resolve_top_k(&self, requested: Option<u32>) -> Result<usize> {
		let matching = &self.cfg.matching;
		let top_k = requested.unwrap_or(matching.default_top_k);

		if top_k == 0 {
			return Err(Error::InvalidRequest {
				message: "top_k must be greater than zero.".to_string(),
				fields: vec!["top_k".to_string()],
			});
		}

		Ok(top_k.min(matching.max_top_k) as usize)
	}
}
