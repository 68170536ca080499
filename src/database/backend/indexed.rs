use super::{Backend, Namespace};
use crate::database::{Error, SCHEMA_VERSION};
use futures_util::future::{FutureExt, LocalBoxFuture};
use idb::{event::DatabaseEvent, Factory, ObjectStore, ObjectStoreParams, Transaction, TransactionMode};
use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::JsValue;

/// A browser IndexedDB database with one object store per [`Namespace`], using out-of-line string keys.
pub struct IndexedDb(idb::Database);

impl IndexedDb {
	pub async fn open(name: &str) -> Result<Self, Error> {
		let factory = Factory::new()?;
		let mut request = factory.open(name, Some(SCHEMA_VERSION))?;
		request.on_upgrade_needed(|event| {
			let database = match event.database() {
				Ok(database) => database,
				Err(err) => {
					log::error!(target: "database", "Upgrade event has no database: {err:?}");
					return;
				}
			};
			let existing = database.store_names();
			for namespace in Namespace::all() {
				if existing.iter().any(|name| name == namespace.store_id()) {
					continue;
				}
				if let Err(err) = database.create_object_store(namespace.store_id(), ObjectStoreParams::new()) {
					log::error!(target: "database", "Failed to create object store {namespace}: {err:?}");
				}
			}
		});
		Ok(Self(request.await?))
	}

	fn store(&self, namespace: Namespace, mode: TransactionMode) -> Result<(Transaction, ObjectStore), Error> {
		let transaction = self.0.transaction(&[namespace.store_id()], mode)?;
		let store = transaction.object_store(namespace.store_id())?;
		Ok((transaction, store))
	}
}

fn to_js(value: &Value) -> Result<JsValue, Error> {
	// json_compatible so that maps become plain objects rather than `Map`s.
	Ok(value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?)
}

fn from_js(value: JsValue) -> Result<Value, Error> {
	Ok(serde_wasm_bindgen::from_value(value)?)
}

impl Backend for IndexedDb {
	fn name(&self) -> &'static str {
		"indexeddb"
	}

	fn get(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<Option<Value>, Error>> {
		async move {
			let (_transaction, store) = self.store(namespace, TransactionMode::ReadOnly)?;
			let Some(value) = store.get(JsValue::from_str(&key))?.await? else {
				return Ok(None);
			};
			Ok(Some(from_js(value)?))
		}
		.boxed_local()
	}

	fn put(&self, namespace: Namespace, key: String, value: Value) -> LocalBoxFuture<'_, Result<(), Error>> {
		async move {
			let (transaction, store) = self.store(namespace, TransactionMode::ReadWrite)?;
			store.put(&to_js(&value)?, Some(&JsValue::from_str(&key)))?.await?;
			transaction.commit()?.await?;
			Ok(())
		}
		.boxed_local()
	}

	fn delete(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<(), Error>> {
		async move {
			let (transaction, store) = self.store(namespace, TransactionMode::ReadWrite)?;
			store.delete(JsValue::from_str(&key))?.await?;
			transaction.commit()?.await?;
			Ok(())
		}
		.boxed_local()
	}

	fn entries(&self, namespace: Namespace) -> LocalBoxFuture<'_, Result<Vec<(String, Value)>, Error>> {
		async move {
			let (_transaction, store) = self.store(namespace, TransactionMode::ReadOnly)?;
			// Both listings come back in key order, so they line up.
			let keys = store.get_all_keys(None, None)?.await?;
			let values = store.get_all(None, None)?.await?;
			let mut entries = Vec::with_capacity(keys.len());
			for (key, value) in keys.into_iter().zip(values) {
				let Some(key) = key.as_string() else {
					log::warn!(target: "database", "Skipping non-string key in {namespace}: {key:?}");
					continue;
				};
				entries.push((key, from_js(value)?));
			}
			Ok(entries)
		}
		.boxed_local()
	}
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
	use super::*;
	use serde_json::json;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	async fn stores_and_lists_values() {
		let backend = IndexedDb::open("image-liker-test").await.unwrap();
		backend.put(Namespace::Likes, "owner/b".into(), json!({ "id": "b" })).await.unwrap();
		backend.put(Namespace::Likes, "owner/a".into(), json!({ "id": "a" })).await.unwrap();
		assert_eq!(
			backend.get(Namespace::Likes, "owner/a".into()).await.unwrap(),
			Some(json!({ "id": "a" }))
		);

		let keys = backend
			.entries(Namespace::Likes)
			.await
			.unwrap()
			.into_iter()
			.map(|(key, _)| key)
			.collect::<Vec<_>>();
		assert_eq!(keys, vec!["owner/a".to_owned(), "owner/b".to_owned()]);

		backend.delete(Namespace::Likes, "owner/a".into()).await.unwrap();
		backend.delete(Namespace::Likes, "owner/b".into()).await.unwrap();
		assert!(backend.entries(Namespace::Likes).await.unwrap().is_empty());
	}
}
