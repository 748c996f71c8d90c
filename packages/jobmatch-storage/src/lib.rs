pub mod memory;
pub mod qdrant;

mod error;

pub use error::Error;

use std::{collections::HashSet, future::Future, pin::Pin};

use serde_json::{Map, Value};

pub type Result<T, E = Error> = std::result::Result<T, E>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type Metadata = Map<String, Value>;

/// Which parallel arrays a `get` call should populate. Ids are always returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Include {
	pub embeddings: bool,
	pub metadatas: bool,
}
impl Include {
	pub const ALL: Self = Self { embeddings: true, metadatas: true };
	pub const EMBEDDINGS: Self = Self { embeddings: true, metadatas: false };
	pub const METADATAS: Self = Self { embeddings: false, metadatas: true };
	pub const IDS: Self = Self { embeddings: false, metadatas: false };
}

/// Parallel arrays: index `i` of each populated list refers to the same entity.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetResult {
	pub ids: Vec<String>,
	pub embeddings: Vec<Vec<f32>>,
	pub metadatas: Vec<Metadata>,
}
impl GetResult {
	pub fn len(&self) -> usize {
		self.ids.len()
	}

	pub fn is_empty(&self) -> bool {
		self.ids.is_empty()
	}

	pub(crate) fn push(
		&mut self,
		include: Include,
		id: String,
		embedding: Vec<f32>,
		metadata: Metadata,
	) {
		self.ids.push(id);

		if include.embeddings {
			self.embeddings.push(embedding);
		}
		if include.metadatas {
			self.metadatas.push(metadata);
		}
	}
}

/// Persists embeddings and metadata keyed by entity id.
///
/// `get(None, ..)` returns every stored entity. Unknown ids are skipped, never reported as
/// errors. `add` never overwrites: an id that is already stored, or repeated within the batch,
/// fails the whole call with `Error::Conflict`.
pub trait VectorStore
where
	Self: Send + Sync,
{
	fn get<'a>(
		&'a self,
		ids: Option<&'a [String]>,
		include: Include,
	) -> BoxFuture<'a, Result<GetResult>>;

	fn add<'a>(
		&'a self,
		ids: &'a [String],
		embeddings: &'a [Vec<f32>],
		metadatas: &'a [Metadata],
	) -> BoxFuture<'a, Result<()>>;
}

pub(crate) fn check_parallel_lengths(
	ids: &[String],
	embeddings: &[Vec<f32>],
	metadatas: &[Metadata],
) -> Result<()> {
	if ids.len() != embeddings.len() || ids.len() != metadatas.len() {
		return Err(Error::InvalidArgument(format!(
			"ids, embeddings, and metadatas must have equal lengths (got {}, {}, {}).",
			ids.len(),
			embeddings.len(),
			metadatas.len()
		)));
	}

	Ok(())
}

pub(crate) fn check_distinct(ids: &[String]) -> Result<()> {
	let mut seen = HashSet::with_capacity(ids.len());

	for id in ids {
		if !seen.insert(id) {
			return Err(Error::Conflict(format!("Entity {id:?} is repeated in the batch.")));
		}
	}

	Ok(())
}
