use std::collections::HashMap;

use qdrant_client::{
	Qdrant,
	qdrant::{
		CreateCollectionBuilder, Distance, GetPointsBuilder, PointId, PointStruct,
		RetrievedPoint, ScrollPointsBuilder, UpsertPointsBuilder, Value as QdrantValue, Vector,
		VectorParamsBuilder, VectorsConfigBuilder, VectorsOutput, point_id::PointIdOptions,
		value::Kind, vectors_output::VectorsOptions,
	},
	client::Payload,
};
use serde_json::Value;
use uuid::Uuid;

use crate::{BoxFuture, Error, GetResult, Include, Metadata, Result, VectorStore};

pub const DENSE_VECTOR_NAME: &str = "dense";
pub const ENTITY_ID_FIELD: &str = "entity_id";

/// One Qdrant collection holding a single entity kind.
///
/// Point ids are UUID v5 digests of the entity id; the entity id itself lives in the
/// `entity_id` payload field. `get(None, ..)` returns points in point-id order, not insertion
/// order.
pub struct QdrantStore {
	pub client: Qdrant,
	pub collection: String,
	pub vector_dim: u32,
	pub scroll_page_size: u32,
}
impl QdrantStore {
	pub fn new(cfg: &jobmatch_config::Qdrant, collection: impl Into<String>) -> Result<Self> {
		let client = Qdrant::from_url(&cfg.url).build()?;

		Ok(Self {
			client,
			collection: collection.into(),
			vector_dim: cfg.vector_dim,
			scroll_page_size: cfg.scroll_page_size,
		})
	}

	pub async fn ensure_collection(&self) -> Result<()> {
		if self.client.collection_exists(self.collection.clone()).await? {
			return Ok(());
		}

		let mut vectors_config = VectorsConfigBuilder::default();

		vectors_config.add_named_vector_params(
			DENSE_VECTOR_NAME,
			VectorParamsBuilder::new(self.vector_dim.into(), Distance::Cosine),
		);

		self.client
			.create_collection(
				CreateCollectionBuilder::new(self.collection.clone()).vectors_config(vectors_config),
			)
			.await?;

		tracing::info!(collection = %self.collection, "Created Qdrant collection.");

		Ok(())
	}

	async fn get_points(&self, ids: &[String], include: Include) -> Result<GetResult> {
		let mut out = GetResult::default();

		if ids.is_empty() {
			return Ok(out);
		}

		let point_ids: Vec<PointId> =
			ids.iter().map(|id| PointId::from(point_uuid(id).to_string())).collect();
		let response = self
			.client
			.get_points(
				GetPointsBuilder::new(self.collection.clone(), point_ids)
					.with_payload(true)
					.with_vectors(include.embeddings),
			)
			.await?;
		let mut by_id: HashMap<String, (Vec<f32>, Metadata)> = HashMap::new();

		for point in response.result {
			if let Some((id, embedding, metadata)) = decode_point(point, include) {
				by_id.insert(id, (embedding, metadata));
			}
		}

		for id in ids {
			if let Some((embedding, metadata)) = by_id.remove(id) {
				out.push(include, id.clone(), embedding, metadata);
			}
		}

		Ok(out)
	}

	async fn scroll_all(&self, include: Include) -> Result<GetResult> {
		let mut out = GetResult::default();
		let mut offset: Option<PointId> = None;

		loop {
			let mut builder = ScrollPointsBuilder::new(self.collection.clone())
				.limit(self.scroll_page_size)
				.with_payload(true)
				.with_vectors(include.embeddings);

			if let Some(offset) = offset.take() {
				builder = builder.offset(offset);
			}

			let response = self.client.scroll(builder).await?;

			for point in response.result {
				if let Some((id, embedding, metadata)) = decode_point(point, include) {
					out.push(include, id, embedding, metadata);
				}
			}

			match response.next_page_offset {
				Some(next) => offset = Some(next),
				None => break,
			}
		}

		tracing::debug!(collection = %self.collection, count = out.len(), "Scrolled collection.");

		Ok(out)
	}

	async fn upsert(
		&self,
		ids: &[String],
		embeddings: &[Vec<f32>],
		metadatas: &[Metadata],
	) -> Result<()> {
		crate::check_parallel_lengths(ids, embeddings, metadatas)?;
		crate::check_distinct(ids)?;

		let mut points = Vec::with_capacity(ids.len());

		for ((id, embedding), metadata) in ids.iter().zip(embeddings).zip(metadatas) {
			if embedding.len() != self.vector_dim as usize {
				return Err(Error::InvalidArgument(format!(
					"Embedding for {id:?} has dimension {}, expected {}.",
					embedding.len(),
					self.vector_dim
				)));
			}

			let mut payload = Payload::new();

			for (key, value) in metadata {
				payload.insert(key.clone(), value.clone());
			}

			payload.insert(ENTITY_ID_FIELD, id.clone());

			let mut vectors = HashMap::new();

			vectors.insert(DENSE_VECTOR_NAME.to_string(), Vector::from(embedding.clone()));
			points.push(PointStruct::new(point_uuid(id).to_string(), vectors, payload));
		}

		if points.is_empty() {
			return Ok(());
		}

		let existing = self.get_points(ids, Include::IDS).await?;

		if let Some(id) = existing.ids.first() {
			return Err(Error::Conflict(format!("Entity {id:?} already exists.")));
		}

		self.client
			.upsert_points(UpsertPointsBuilder::new(self.collection.clone(), points).wait(true))
			.await?;

		Ok(())
	}
}
impl VectorStore for QdrantStore {
	fn get<'a>(
		&'a self,
		ids: Option<&'a [String]>,
		include: Include,
	) -> BoxFuture<'a, Result<GetResult>> {
		Box::pin(async move {
			match ids {
				Some(ids) => self.get_points(ids, include).await,
				None => self.scroll_all(include).await,
			}
		})
	}

	fn add<'a>(
		&'a self,
		ids: &'a [String],
		embeddings: &'a [Vec<f32>],
		metadatas: &'a [Metadata],
	) -> BoxFuture<'a, Result<()>> {
		Box::pin(self.upsert(ids, embeddings, metadatas))
	}
}

pub fn point_uuid(entity_id: &str) -> Uuid {
	Uuid::new_v5(&Uuid::NAMESPACE_OID, entity_id.as_bytes())
}

fn decode_point(point: RetrievedPoint, include: Include) -> Option<(String, Vec<f32>, Metadata)> {
	let mut payload = point.payload;
	let Some(id) = payload.remove(ENTITY_ID_FIELD).and_then(|value| match value.kind {
		Some(Kind::StringValue(text)) => Some(text),
		_ => None,
	}) else {
		tracing::warn!(
			point_id = ?point.id.as_ref().and_then(point_id_text),
			"Point missing entity_id."
		);

		return None;
	};
	let embedding = if include.embeddings {
		let Some(vec) = dense_vector(point.vectors.as_ref()) else {
			tracing::warn!(entity_id = %id, "Point missing dense vector.");

			return None;
		};

		vec
	} else {
		Vec::new()
	};
	let metadata = if include.metadatas {
		payload.iter().map(|(key, value)| (key.clone(), payload_value_to_json(value))).collect()
	} else {
		Metadata::new()
	};

	Some((id, embedding, metadata))
}

#[allow(deprecated)]
fn dense_vector(vectors: Option<&VectorsOutput>) -> Option<Vec<f32>> {
	match vectors?.vectors_options.as_ref()? {
		VectorsOptions::Vector(vector) => Some(vector.data.clone()),
		VectorsOptions::Vectors(named) =>
			named.vectors.get(DENSE_VECTOR_NAME).map(|vector| vector.data.clone()),
	}
}

fn point_id_text(point_id: &PointId) -> Option<String> {
	match &point_id.point_id_options {
		Some(PointIdOptions::Uuid(id)) => Some(id.clone()),
		Some(PointIdOptions::Num(num)) => Some(num.to_string()),
		None => None,
	}
}

pub fn payload_value_to_json(value: &QdrantValue) -> Value {
	match &value.kind {
		None | Some(Kind::NullValue(_)) => Value::Null,
		Some(Kind::BoolValue(flag)) => Value::Bool(*flag),
		Some(Kind::IntegerValue(number)) => Value::from(*number),
		Some(Kind::DoubleValue(number)) =>
			serde_json::Number::from_f64(*number).map(Value::Number).unwrap_or(Value::Null),
		Some(Kind::StringValue(text)) => Value::String(text.clone()),
		Some(Kind::ListValue(list)) =>
			Value::Array(list.values.iter().map(payload_value_to_json).collect()),
		Some(Kind::StructValue(object)) => Value::Object(
			object
				.fields
				.iter()
				.map(|(key, value)| (key.clone(), payload_value_to_json(value)))
				.collect(),
		),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn point_ids_are_stable_per_entity() {
		assert_eq!(point_uuid("c1"), point_uuid("c1"));
		assert_ne!(point_uuid("c1"), point_uuid("c2"));
	}

	#[test]
	fn payload_values_round_trip_to_json() {
		let json = serde_json::json!({
			"name": "Ada",
			"experience": 7,
			"score": 0.5,
			"remote": true,
			"min_experience": null,
			"tags": ["rust", "sql"],
			"address": { "city": "Berlin" }
		});
		let payload = Payload::try_from(json.clone()).expect("payload conversion failed");
		let map: HashMap<String, QdrantValue> = payload.into();
		let restored: Metadata =
			map.iter().map(|(key, value)| (key.clone(), payload_value_to_json(value))).collect();

		assert_eq!(Value::Object(restored), json);
	}
}
