use std::sync::Arc;

use color_eyre::eyre;

use jobmatch_config::{BACKEND_MEMORY, BACKEND_QDRANT, Config};
use jobmatch_service::MatchService;
use jobmatch_storage::{VectorStore, memory::MemoryStore, qdrant::QdrantStore};

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<MatchService>,
}
impl AppState {
	pub async fn new(config: Config) -> color_eyre::Result<Self> {
		let (candidates, jobs): (Arc<dyn VectorStore>, Arc<dyn VectorStore>) =
			match config.storage.backend.as_str() {
				BACKEND_MEMORY => (Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new())),
				BACKEND_QDRANT => {
					let Some(qdrant) = config.storage.qdrant.as_ref() else {
						return Err(eyre::eyre!(
							"storage.qdrant is required for the qdrant backend."
						));
					};
					let candidates = QdrantStore::new(qdrant, qdrant.candidate_collection.clone())?;
					let jobs = QdrantStore::new(qdrant, qdrant.job_collection.clone())?;

					candidates.ensure_collection().await?;
					jobs.ensure_collection().await?;

					(Arc::new(candidates), Arc::new(jobs))
				},
				other => return Err(eyre::eyre!("Unsupported storage backend {other:?}.")),
			};

		tracing::info!(backend = %config.storage.backend, "Storage initialized.");

		Ok(Self::from_service(MatchService::new(config, candidates, jobs)))
	}

	pub fn from_service(service: MatchService) -> Self {
		Self { service: Arc::new(service) }
	}
}
