mod error;
mod types;

pub use error::{Error, Result};
pub use types::{
	Config, EmbeddingProviderConfig, LlmProviderConfig, Matching, Providers, Qdrant, Service,
	Storage,
};

use std::{fs, path::Path};

pub const BACKEND_MEMORY: &str = "memory";
pub const BACKEND_QDRANT: &str = "qdrant";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.providers.embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}

	match cfg.storage.backend.as_str() {
		BACKEND_MEMORY => {},
		BACKEND_QDRANT => {
			let Some(qdrant) = cfg.storage.qdrant.as_ref() else {
				return Err(Error::Validation {
					message: "storage.qdrant is required when storage.backend is qdrant."
						.to_string(),
				});
			};

			validate_qdrant(qdrant, cfg.providers.embedding.dimensions)?;
		},
		_ => {
			return Err(Error::Validation {
				message: "storage.backend must be one of memory or qdrant.".to_string(),
			});
		},
	}

	let explainer = &cfg.providers.llm_explainer;

	if !explainer.temperature.is_finite() {
		return Err(Error::Validation {
			message: "providers.llm_explainer.temperature must be a finite number.".to_string(),
		});
	}
	if !(0.0..=2.0).contains(&explainer.temperature) {
		return Err(Error::Validation {
			message: "providers.llm_explainer.temperature must be in the range 0.0-2.0."
				.to_string(),
		});
	}
	if explainer.max_tokens == 0 {
		return Err(Error::Validation {
			message: "providers.llm_explainer.max_tokens must be greater than zero.".to_string(),
		});
	}

	for (label, key) in [
		("embedding", &cfg.providers.embedding.api_key),
		("llm_explainer", &cfg.providers.llm_explainer.api_key),
	] {
		if key.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("Provider {label} api_key must be non-empty."),
			});
		}
	}

	if cfg.matching.default_top_k == 0 {
		return Err(Error::Validation {
			message: "matching.default_top_k must be greater than zero.".to_string(),
		});
	}
	if cfg.matching.default_top_k > cfg.matching.max_top_k {
		return Err(Error::Validation {
			message: "matching.default_top_k must not exceed matching.max_top_k.".to_string(),
		});
	}

	Ok(())
}

fn validate_qdrant(qdrant: &Qdrant, dimensions: u32) -> Result<()> {
	for (label, value) in [
		("storage.qdrant.url", &qdrant.url),
		("storage.qdrant.candidate_collection", &qdrant.candidate_collection),
		("storage.qdrant.job_collection", &qdrant.job_collection),
	] {
		if value.trim().is_empty() {
			return Err(Error::Validation { message: format!("{label} must be non-empty.") });
		}
	}

	if qdrant.candidate_collection == qdrant.job_collection {
		return Err(Error::Validation {
			message:
				"storage.qdrant.candidate_collection and storage.qdrant.job_collection must differ."
					.to_string(),
		});
	}
	if qdrant.scroll_page_size == 0 {
		return Err(Error::Validation {
			message: "storage.qdrant.scroll_page_size must be greater than zero.".to_string(),
		});
	}
	if qdrant.vector_dim != dimensions {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must match storage.qdrant.vector_dim."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for api_base in
		[&mut cfg.providers.embedding.api_base, &mut cfg.providers.llm_explainer.api_base]
	{
		let trimmed = api_base.trim().trim_end_matches('/').to_string();

		*api_base = trimmed;
	}

	cfg.storage.backend = cfg.storage.backend.trim().to_lowercase();
}
