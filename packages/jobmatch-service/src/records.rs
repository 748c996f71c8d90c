//! Typed views over stored entity metadata.

use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::{Error, Result};
use jobmatch_domain::{CandidateRecord, JobRecord};
use jobmatch_storage::{GetResult, Metadata};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateMetadata {
	pub id: String,
	pub name: String,
	pub experience: u32,
	pub location: String,
	pub created_at: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobMetadata {
	pub id: String,
	pub title: String,
	pub country: String,
	pub min_experience: Option<u32>,
	pub created_at: String,
}

pub fn candidate_record(
	id: String,
	embedding: Vec<f32>,
	metadata: Metadata,
) -> Result<CandidateRecord> {
	let meta: CandidateMetadata = decode_metadata("candidate", &id, metadata)?;

	Ok(CandidateRecord {
		id,
		embedding,
		experience: meta.experience,
		location: meta.location,
		name: meta.name,
	})
}

pub fn job_record(id: String, embedding: Vec<f32>, metadata: Metadata) -> Result<JobRecord> {
	let meta: JobMetadata = decode_metadata("job", &id, metadata)?;

	Ok(JobRecord {
		id,
		embedding,
		title: meta.title,
		country: meta.country,
		min_experience: meta.min_experience,
	})
}

/// Decodes every entity in `result`, which must carry both embeddings and metadata.
pub fn decode_all<T>(
	result: GetResult,
	decode: impl Fn(String, Vec<f32>, Metadata) -> Result<T>,
) -> Result<Vec<T>> {
	let GetResult { ids, embeddings, metadatas } = result;

	if ids.len() != embeddings.len() || ids.len() != metadatas.len() {
		return Err(Error::Storage {
			message: format!(
				"Store returned {} ids with {} embeddings and {} metadata entries.",
				ids.len(),
				embeddings.len(),
				metadatas.len()
			),
		});
	}

	ids.into_iter()
		.zip(embeddings)
		.zip(metadatas)
		.map(|((id, embedding), metadata)| decode(id, embedding, metadata))
		.collect()
}

fn decode_metadata<T>(kind: &str, id: &str, metadata: Metadata) -> Result<T>
where
	T: DeserializeOwned,
{
	serde_json::from_value(serde_json::Value::Object(metadata)).map_err(|err| {
		tracing::warn!(kind, entity_id = %id, error = %err, "Stored metadata is invalid.");

		Error::Storage { message: format!("Stored {kind} {id:?} has invalid metadata: {err}.") }
	})
}
