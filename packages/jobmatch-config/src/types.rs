use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	pub providers: Providers,
	#[serde(default)]
	pub matching: Matching,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	#[serde(default = "default_log_level")]
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	/// One of "memory" or "qdrant".
	pub backend: String,
	/// Required when `backend` is "qdrant".
	pub qdrant: Option<Qdrant>,
}

#[derive(Debug, Deserialize)]
pub struct Qdrant {
	pub url: String,
	#[serde(default = "default_candidate_collection")]
	pub candidate_collection: String,
	#[serde(default = "default_job_collection")]
	pub job_collection: String,
	pub vector_dim: u32,
	#[serde(default = "default_scroll_page_size")]
	pub scroll_page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
	pub llm_explainer: LlmProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct LlmProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub temperature: f32,
	#[serde(default = "default_max_tokens")]
	pub max_tokens: u32,
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Matching {
	#[serde(default = "default_top_k")]
	pub default_top_k: u32,
	#[serde(default = "default_max_top_k")]
	pub max_top_k: u32,
}
impl Default for Matching {
	fn default() -> Self {
		Self { default_top_k: default_top_k(), max_top_k: default_max_top_k() }
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_candidate_collection() -> String {
	"candidates".to_string()
}

fn default_job_collection() -> String {
	"jobs".to_string()
}

fn default_scroll_page_size() -> u32 {
	256
}

fn default_max_tokens() -> u32 {
	200
}

fn default_top_k() -> u32 {
	5
}

fn default_max_top_k() -> u32 {
	50
}
