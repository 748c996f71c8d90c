pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String, fields: Vec<String> },
	#[error("{message}")]
	NotFound { message: String },
	#[error(transparent)]
	DimensionMismatch(#[from] jobmatch_domain::Error),
	#[error("Error generating explanation: {message}")]
	GenerationFailed { message: String },
	#[error("Provider error: {message}")]
	Provider { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<jobmatch_storage::Error> for Error {
	fn from(err: jobmatch_storage::Error) -> Self {
		match err {
			jobmatch_storage::Error::InvalidArgument(message)
			| jobmatch_storage::Error::Conflict(message) => Self::Storage { message },
			jobmatch_storage::Error::Qdrant(inner) => Self::Storage { message: inner.to_string() },
		}
	}
}

impl From<jobmatch_providers::Error> for Error {
	fn from(err: jobmatch_providers::Error) -> Self {
		Self::Provider { message: err.to_string() }
	}
}
