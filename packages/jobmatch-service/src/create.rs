use serde::{Deserialize, Serialize};
use time::{OffsetDateTime, format_description::well_known::Rfc3339};
use uuid::Uuid;

use crate::{
	Error, MatchService, Result,
	records::{CandidateMetadata, JobMetadata},
};
use jobmatch_storage::Metadata;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCandidateRequest {
	pub name: String,
	pub skill_description: String,
	pub experience: u32,
	pub location: String,
}

pub type CandidateCreated = CandidateMetadata;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateJobRequest {
	pub title: String,
	pub country: String,
	pub description: String,
	#[serde(default)]
	pub min_experience: Option<u32>,
}

pub type JobCreated = JobMetadata;

impl MatchService {
	pub async fn create_candidate(&self, req: CreateCandidateRequest) -> Result<CandidateCreated> {
		let name = required("name", &req.name)?;
		let skill_description = required("skill_description", &req.skill_description)?;
		let location = required("location", &req.location)?;
		let embedding = self.embed_one(skill_description).await?;
		let created = CandidateMetadata {
			id: Uuid::new_v4().to_string(),
			name: name.to_string(),
			experience: req.experience,
			location: location.to_string(),
			created_at: now_rfc3339()?,
		};

		self.candidates
			.add(
				std::slice::from_ref(&created.id),
				std::slice::from_ref(&embedding),
				&[to_metadata(&created)?],
			)
			.await?;

		tracing::info!(
			candidate_id = %created.id,
			experience = created.experience,
			"Candidate created."
		);

		Ok(created)
	}

	pub async fn create_job(&self, req: CreateJobRequest) -> Result<JobCreated> {
		let title = required("title", &req.title)?;
		let country = required("country", &req.country)?;
		let description = required("description", &req.description)?;
		let embedding = self.embed_one(description).await?;
		let created = JobMetadata {
			id: Uuid::new_v4().to_string(),
			title: title.to_string(),
			country: country.to_string(),
			min_experience: req.min_experience,
			created_at: now_rfc3339()?,
		};

		self.jobs
			.add(
				std::slice::from_ref(&created.id),
				std::slice::from_ref(&embedding),
				&[to_metadata(&created)?],
			)
			.await?;

		tracing::info!(job_id = %created.id, "Job created.");

		Ok(created)
	}

	async fn embed_one(&self, text: &str) -> Result<Vec<f32>> {
		let cfg = &self.cfg.providers.embedding;
		let texts = [text.to_string()];
		let mut vectors = self.providers.embedding.embed(cfg, &texts).await.inspect_err(|err| {
			tracing::warn!(error = %err, provider_id = %cfg.provider_id, "Embedding request failed.");
		})?;

		if vectors.len() != 1 {
			return Err(Error::Provider {
				message: format!("Embedding provider returned {} vectors for 1 input.", vectors.len()),
			});
		}

		let embedding = vectors.remove(0);
		let expected = cfg.dimensions as usize;

		if embedding.len() != expected {
			return Err(jobmatch_domain::Error::DimensionMismatch {
				expected,
				actual: embedding.len(),
			}
			.into());
		}

		Ok(embedding)
	}
}

fn required<'a>(field: &str, value: &'a str) -> Result<&'a str> {
	let trimmed = value.trim();

	if trimmed.is_empty() {
		return Err(Error::InvalidRequest {
			message: format!("{field} must be non-empty."),
			fields: vec![field.to_string()],
		});
	}

	Ok(trimmed)
}

fn now_rfc3339() -> Result<String> {
	OffsetDateTime::now_utc()
		.format(&Rfc3339)
		.map_err(|err| Error::Storage { message: format!("Failed to format timestamp: {err}.") })
}

fn to_metadata<T>(value: &T) -> Result<Metadata>
where
	T: Serialize,
{
	match serde_json::to_value(value) {
		Ok(serde_json::Value::Object(map)) => Ok(map),
		Ok(_) => Err(Error::Storage { message: "Metadata must serialize to an object.".to_string() }),
		Err(err) => Err(Error::Storage { message: err.to_string() }),
	}
}
