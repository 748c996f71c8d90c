use serde::{Deserialize, Serialize};

use crate::{Error, MatchService, Result};
use jobmatch_domain::prompt;

pub const INVALID_IDS_MESSAGE: &str = "Invalid job or candidate.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
	pub job_id: String,
	pub candidate_id: String,
	pub explanation: String,
}

impl MatchService {
	/// Resolves both entities, then asks the explanation provider exactly once.
	pub async fn explain_match(&self, job_id: &str, candidate_id: &str) -> Result<ExplainResponse> {
		let job = self.find_job(job_id).await?;
		let candidate = self.find_candidate(candidate_id).await?;
		let (Some(job), Some(candidate)) = (job, candidate) else {
			tracing::info!(job_id, candidate_id, "Explanation requested for unknown entity.");

			return Err(Error::NotFound { message: INVALID_IDS_MESSAGE.to_string() });
		};
		let messages = prompt::build_explanation_messages(&job, &candidate);
		let cfg = &self.cfg.providers.llm_explainer;
		let text = match self.providers.explainer.generate(cfg, &messages).await {
			Ok(text) => text,
			Err(err) => {
				tracing::warn!(
					job_id,
					candidate_id,
					provider_id = %cfg.provider_id,
					error = %err,
					"Explanation generation failed."
				);

				return Err(Error::GenerationFailed { message: generation_detail(err) });
			},
		};
		let explanation = text.trim();

		if explanation.is_empty() {
			return Err(Error::GenerationFailed {
				message: "Provider returned an empty explanation.".to_string(),
			});
		}

		Ok(ExplainResponse {
			job_id: job.id,
			candidate_id: candidate.id,
			explanation: explanation.to_string(),
		})
	}
}

fn generation_detail(err: Error) -> String {
	match err {
		Error::Provider { message }
		| Error::GenerationFailed { message }
		| Error::Storage { message }
		| Error::InvalidRequest { message, .. }
		| Error::NotFound { message } => message,
		other => other.to_string(),
	}
}
