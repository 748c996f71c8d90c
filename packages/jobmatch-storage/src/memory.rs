use std::{collections::HashMap, sync::RwLock};

use crate::{BoxFuture, Error, GetResult, Include, Metadata, Result, VectorStore};

struct Entry {
	embedding: Vec<f32>,
	metadata: Metadata,
}

#[derive(Default)]
struct Inner {
	order: Vec<String>,
	entries: HashMap<String, Entry>,
}

/// In-process store. Entities are returned in insertion order.
#[derive(Default)]
pub struct MemoryStore {
	inner: RwLock<Inner>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.inner.read().unwrap_or_else(|err| err.into_inner()).order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn get_sync(&self, ids: Option<&[String]>, include: Include) -> GetResult {
		let inner = self.inner.read().unwrap_or_else(|err| err.into_inner());
		let mut out = GetResult::default();
		let wanted: Box<dyn Iterator<Item = &String>> = match ids {
			Some(ids) => Box::new(ids.iter()),
			None => Box::new(inner.order.iter()),
		};

		for id in wanted {
			let Some(entry) = inner.entries.get(id) else {
				continue;
			};

			out.push(include, id.clone(), entry.embedding.clone(), entry.metadata.clone());
		}

		out
	}

	fn add_sync(
		&self,
		ids: &[String],
		embeddings: &[Vec<f32>],
		metadatas: &[Metadata],
	) -> Result<()> {
		crate::check_parallel_lengths(ids, embeddings, metadatas)?;
		crate::check_distinct(ids)?;

		let mut inner = self.inner.write().unwrap_or_else(|err| err.into_inner());

		if let Some(id) = ids.iter().find(|id| inner.entries.contains_key(*id)) {
			return Err(Error::Conflict(format!("Entity {id:?} already exists.")));
		}

		for ((id, embedding), metadata) in ids.iter().zip(embeddings).zip(metadatas) {
			inner.order.push(id.clone());
			inner.entries.insert(
				id.clone(),
				Entry { embedding: embedding.clone(), metadata: metadata.clone() },
			);
		}

		Ok(())
	}
}
impl VectorStore for MemoryStore {
	fn get<'a>(
		&'a self,
		ids: Option<&'a [String]>,
		include: Include,
	) -> BoxFuture<'a, Result<GetResult>> {
		let result = self.get_sync(ids, include);

		Box::pin(async move { Ok(result) })
	}

	fn add<'a>(
		&'a self,
		ids: &'a [String],
		embeddings: &'a [Vec<f32>],
		metadatas: &'a [Metadata],
	) -> BoxFuture<'a, Result<()>> {
		let result = self.add_sync(ids, embeddings, metadatas);

		Box::pin(async move { result })
	}
}
