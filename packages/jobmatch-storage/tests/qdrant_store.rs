use serde_json::json;

use jobmatch_storage::{Error, Include, Metadata, VectorStore, qdrant::QdrantStore};
use jobmatch_testkit::TestCollections;

fn qdrant_config(url: &str) -> jobmatch_config::Qdrant {
	jobmatch_config::Qdrant {
		url: url.to_string(),
		candidate_collection: "candidates".to_string(),
		job_collection: "jobs".to_string(),
		vector_dim: 3,
		scroll_page_size: 2,
	}
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set JOBMATCH_QDRANT_URL to run."]
async fn stores_and_reads_back_entities() {
	let Some(url) = jobmatch_testkit::env_qdrant_url() else {
		eprintln!("Skipping stores_and_reads_back_entities; set JOBMATCH_QDRANT_URL.");

		return;
	};
	let collections = TestCollections::new(url.clone());
	let store = QdrantStore::new(&qdrant_config(&url), collections.collection_name("candidates"))
		.expect("Failed to build Qdrant store.");

	store.ensure_collection().await.expect("Failed to create collection.");

	let ids: Vec<String> = (0..5).map(|i| format!("c{i}")).collect();
	let embeddings: Vec<Vec<f32>> = (0..5).map(|i| vec![1.0, i as f32, 0.5]).collect();
	let metadatas: Vec<Metadata> = (0..5)
		.map(|i| json!({ "name": format!("n{i}"), "experience": i }))
		.map(|value| value.as_object().cloned().expect("Metadata must be an object."))
		.collect();

	store.add(&ids, &embeddings, &metadatas).await.expect("Failed to add points.");

	let all = store.get(None, Include::ALL).await.expect("Failed to scroll.");

	assert_eq!(all.len(), 5);
	assert!(all.metadatas.iter().all(|meta| !meta.contains_key("entity_id")));

	let wanted = vec!["c3".to_string(), "unknown".to_string(), "c1".to_string()];
	let found =
		store.get(Some(wanted.as_slice()), Include::ALL).await.expect("Failed to get points.");

	assert_eq!(found.ids, vec!["c3", "c1"]);
	assert_eq!(found.embeddings[0], vec![1.0, 3.0, 0.5]);
	assert_eq!(found.metadatas[1]["name"], "n1");

	collections.cleanup().await.expect("Failed to clean up collections.");
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set JOBMATCH_QDRANT_URL to run."]
async fn rejects_embeddings_with_wrong_dimension() {
	let Some(url) = jobmatch_testkit::env_qdrant_url() else {
		eprintln!("Skipping rejects_embeddings_with_wrong_dimension; set JOBMATCH_QDRANT_URL.");

		return;
	};
	let collections = TestCollections::new(url.clone());
	let store = QdrantStore::new(&qdrant_config(&url), collections.collection_name("jobs"))
		.expect("Failed to build Qdrant store.");

	store.ensure_collection().await.expect("Failed to create collection.");

	let err = store
		.add(&["j1".to_string()], &[vec![1.0, 2.0]], &[Metadata::new()])
		.await
		.expect_err("Expected dimension error.");

	assert!(err.to_string().contains("dimension"));

	collections.cleanup().await.expect("Failed to clean up collections.");
}

#[tokio::test]
#[ignore = "Requires external Qdrant. Set JOBMATCH_QDRANT_URL to run."]
async fn existing_ids_conflict_instead_of_overwriting() {
	let Some(url) = jobmatch_testkit::env_qdrant_url() else {
		eprintln!("Skipping existing_ids_conflict; set JOBMATCH_QDRANT_URL.");

		return;
	};
	let collections = TestCollections::new(url.clone());
	let store = QdrantStore::new(&qdrant_config(&url), collections.collection_name("candidates"))
		.expect("Failed to build Qdrant store.");

	store.ensure_collection().await.expect("Failed to create collection.");

	let metadata = |name: &str| -> Metadata {
		json!({ "name": name }).as_object().cloned().expect("Metadata must be an object.")
	};

	store
		.add(&["c1".to_string()], &[vec![1.0, 0.0, 0.0]], &[metadata("first")])
		.await
		.expect("Failed to add point.");

	let ids = vec!["c2".to_string(), "c1".to_string()];
	let err = store
		.add(&ids, &[vec![0.0, 1.0, 0.0], vec![0.0, 1.0, 0.0]], &[metadata("c2"), metadata("c1")])
		.await
		.expect_err("Expected conflict.");

	assert!(matches!(err, Error::Conflict(_)));

	let all = store.get(None, Include::ALL).await.expect("Failed to scroll.");

	assert_eq!(all.ids, vec!["c1"]);
	assert_eq!(all.metadatas[0]["name"], "first");
	assert_eq!(all.embeddings[0], vec![1.0, 0.0, 0.0]);

	collections.cleanup().await.expect("Failed to clean up collections.");
}
