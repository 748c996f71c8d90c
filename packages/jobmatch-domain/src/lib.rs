pub mod filter;
pub mod prompt;
pub mod ranking;
pub mod record;
pub mod similarity;

mod error;

pub use error::{Error, Result};
pub use filter::FilterCriteria;
pub use ranking::{DEFAULT_TOP_K, MatchResult, rank_candidates};
pub use record::{CandidateRecord, Embedding, JobRecord};
pub use similarity::cosine_similarity;
