use serde::{Deserialize, Serialize};

use crate::CandidateRecord;

/// Optional structured filters applied before scoring. Absent criteria do not filter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
	pub min_experience: Option<u32>,
	pub country: Option<String>,
}
impl FilterCriteria {
	pub fn is_empty(&self) -> bool {
		self.min_experience.is_none() && self.country.is_none()
	}

	pub fn passes(&self, candidate: &CandidateRecord) -> bool {
		passes_filters(candidate, self)
	}
}

pub fn passes_filters(candidate: &CandidateRecord, criteria: &FilterCriteria) -> bool {
	meets_min_experience(candidate, criteria.min_experience)
		&& matches_country(candidate, criteria.country.as_deref())
}

pub fn meets_min_experience(candidate: &CandidateRecord, min_experience: Option<u32>) -> bool {
	match min_experience {
		Some(min) => candidate.experience >= min,
		None => true,
	}
}

pub fn matches_country(candidate: &CandidateRecord, country: Option<&str>) -> bool {
	match country {
		Some(country) => candidate.location.to_lowercase() == country.to_lowercase(),
		None => true,
	}
}
