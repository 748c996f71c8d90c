use serde_json::Value;

use crate::{CandidateRecord, JobRecord};

pub const SYSTEM_PROMPT: &str = "You are a professional recruitment assistant.";

pub fn build_explanation_prompt(job: &JobRecord, candidate: &CandidateRecord) -> String {
	let min_experience = job
		.min_experience
		.map(|years| years.to_string())
		.unwrap_or_else(|| "Not specified".to_string());

	format!(
		"You are an expert HR recruiter.\n\n\
Provide a clear and professional explanation (3-4 sentences) \
for why this candidate is a good match for the job.\n\n\
Job Details:\n\
- Title: {title}\n\
- Country: {country}\n\
- Minimum Experience: {min_experience}\n\n\
Candidate Details:\n\
- Name: {name}\n\
- Experience: {experience} years\n\
- Location: {location}",
		title = job.title,
		country = job.country,
		name = candidate.name,
		experience = candidate.experience,
		location = candidate.location,
	)
}

pub fn build_explanation_messages(job: &JobRecord, candidate: &CandidateRecord) -> Vec<Value> {
	vec![
		serde_json::json!({ "role": "system", "content": SYSTEM_PROMPT }),
		serde_json::json!({ "role": "user", "content": build_explanation_prompt(job, candidate) }),
	]
}

#[cfg(test)]
mod tests {
	use super::*;

	fn job(min_experience: Option<u32>) -> JobRecord {
		JobRecord {
			id: "j1".to_string(),
			embedding: Vec::new(),
			title: "Backend Engineer".to_string(),
			country: "Canada".to_string(),
			min_experience,
		}
	}

	fn candidate() -> CandidateRecord {
		CandidateRecord {
			id: "c1".to_string(),
			embedding: Vec::new(),
			experience: 7,
			location: "Toronto".to_string(),
			name: "Grace".to_string(),
		}
	}

	#[test]
	fn prompt_lists_job_and_candidate_fields() {
		let prompt = build_explanation_prompt(&job(Some(4)), &candidate());

		assert!(prompt.contains("- Title: Backend Engineer"));
		assert!(prompt.contains("- Country: Canada"));
		assert!(prompt.contains("- Minimum Experience: 4"));
		assert!(prompt.contains("- Name: Grace"));
		assert!(prompt.contains("- Experience: 7 years"));
		assert!(prompt.contains("- Location: Toronto"));
	}

	#[test]
	fn missing_minimum_experience_is_reported() {
		let prompt = build_explanation_prompt(&job(None), &candidate());

		assert!(prompt.contains("- Minimum Experience: Not specified"));
	}

	#[test]
	fn messages_carry_system_and_user_roles() {
		let messages = build_explanation_messages(&job(None), &candidate());

		assert_eq!(messages.len(), 2);
		assert_eq!(messages[0]["role"], "system");
		assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
		assert_eq!(messages[1]["role"], "user");
	}
}
