use serde::{Deserialize, Serialize};

pub type Embedding = Vec<f32>;

/// A registered candidate as the ranking engine sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
	pub id: String,
	pub embedding: Embedding,
	pub experience: u32,
	pub location: String,
	pub name: String,
}

/// A registered job posting.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JobRecord {
	pub id: String,
	pub embedding: Embedding,
	pub title: String,
	pub country: String,
	pub min_experience: Option<u32>,
}
