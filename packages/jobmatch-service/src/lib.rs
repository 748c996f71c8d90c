pub mod create;
pub mod explain;
pub mod matching;
pub mod records;

mod error;

pub use create::{CandidateCreated, CreateCandidateRequest, CreateJobRequest, JobCreated};
pub use error::{Error, Result};
pub use explain::ExplainResponse;
pub use matching::MatchRequest;

use std::{future::Future, pin::Pin, sync::Arc};

use serde_json::Value;

use jobmatch_config::{Config, EmbeddingProviderConfig, LlmProviderConfig};
use jobmatch_providers::{embedding, explainer};
use jobmatch_storage::VectorStore;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, Result<Vec<Vec<f32>>>>;
}

/// Produces free-text match explanations from chat messages.
pub trait ExplanationProvider
where
	Self: Send + Sync,
{
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, Result<String>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub explainer: Arc<dyn ExplanationProvider>,
}
impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		explainer: Arc<dyn ExplanationProvider>,
	) -> Self {
		Self { embedding, explainer }
	}
}
impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { embedding: provider.clone(), explainer: provider }
	}
}

/// Registers candidates and jobs, ranks candidates for a job, and explains single matches.
pub struct MatchService {
	pub cfg: Config,
	pub candidates: Arc<dyn VectorStore>,
	pub jobs: Arc<dyn VectorStore>,
	pub providers: Providers,
}
impl MatchService {
	pub fn new(cfg: Config, candidates: Arc<dyn VectorStore>, jobs: Arc<dyn VectorStore>) -> Self {
		Self::with_providers(cfg, candidates, jobs, Providers::default())
	}

	pub fn with_providers(
		cfg: Config,
		candidates: Arc<dyn VectorStore>,
		jobs: Arc<dyn VectorStore>,
		providers: Providers,
	) -> Self {
		Self { cfg, candidates, jobs, providers }
	}
}

struct DefaultProviders;
impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		texts: &'a [String],
	) -> BoxFuture<'a, Result<Vec<Vec<f32>>>> {
		Box::pin(async move { Ok(embedding::embed(cfg, texts).await?) })
	}
}
impl ExplanationProvider for DefaultProviders {
	fn generate<'a>(
		&'a self,
		cfg: &'a LlmProviderConfig,
		messages: &'a [Value],
	) -> BoxFuture<'a, Result<String>> {
		Box::pin(async move { Ok(explainer::generate(cfg, messages).await?) })
	}
}
