use crate::config;
use serde::{de::DeserializeOwned, Serialize};
use std::rc::Rc;
use yew::prelude::*;

mod backend;
pub use backend::*;
mod schema;
pub use schema::*;
mod user;
pub use user::*;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("indexeddb request failed: {0}")]
	IndexedDb(String),
	#[error("failed to encode record: {0}")]
	Encode(String),
	#[error("record {key:?} in {namespace} is malformed: {reason}")]
	Decode {
		namespace: Namespace,
		key: String,
		reason: String,
	},
}

impl From<idb::Error> for Error {
	fn from(err: idb::Error) -> Self {
		Self::IndexedDb(err.to_string())
	}
}

impl From<serde_wasm_bindgen::Error> for Error {
	fn from(err: serde_wasm_bindgen::Error) -> Self {
		Self::Encode(err.to_string())
	}
}

/// A typed value living in one namespace of the store.
pub trait Record: Serialize + DeserializeOwned {
	fn namespace() -> Namespace;
}

#[derive(Clone)]
pub struct Database(Rc<dyn Backend>);

impl PartialEq for Database {
	fn eq(&self, other: &Self) -> bool {
		Rc::ptr_eq(&self.0, &other.0)
	}
}

impl std::fmt::Debug for Database {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple("Database").field(&self.0.name()).finish()
	}
}

impl Database {
	pub fn new(backend: impl Backend + 'static) -> Self {
		Self(Rc::new(backend))
	}

	pub fn in_memory() -> Self {
		Self::new(MemoryBackend::default())
	}

	/// Opens the browser's IndexedDB database and writes the seed data if it has never been written.
	pub async fn open() -> Result<Self, Error> {
		let database = Self::new(IndexedDb::open(config::DATABASE_NAME).await?);
		database.seed().await?;
		Ok(database)
	}

	pub async fn get<T: Record>(&self, key: &str) -> Result<Option<T>, Error> {
		let Some(value) = self.0.get(T::namespace(), key.to_owned()).await? else {
			return Ok(None);
		};
		Ok(Some(decode(T::namespace(), key, value)?))
	}

	pub async fn put<T: Record>(&self, key: &str, record: &T) -> Result<(), Error> {
		let value = serde_json::to_value(record).map_err(|err| Error::Encode(err.to_string()))?;
		self.0.put(T::namespace(), key.to_owned(), value).await
	}

	pub async fn delete<T: Record>(&self, key: &str) -> Result<(), Error> {
		self.0.delete(T::namespace(), key.to_owned()).await
	}

	/// Every record in `T`'s namespace, in key order.
	pub async fn all<T: Record>(&self) -> Result<Vec<(String, T)>, Error> {
		let entries = self.0.entries(T::namespace()).await?;
		let mut records = Vec::with_capacity(entries.len());
		for (key, value) in entries {
			let record = decode(T::namespace(), &key, value)?;
			records.push((key, record));
		}
		Ok(records)
	}
}

fn decode<T: Record>(namespace: Namespace, key: &str, value: serde_json::Value) -> Result<T, Error> {
	serde_json::from_value(value).map_err(|err| Error::Decode {
		namespace,
		key: key.to_owned(),
		reason: err.to_string(),
	})
}

#[function_component]
pub fn Provider(props: &html::ChildrenProps) -> Html {
	let database = yew_hooks::use_async_with_options(
		async move {
			match Database::open().await {
				Ok(db) => Ok(db),
				Err(err) => {
					// Keep the app usable; likes just won't outlive the tab.
					log::error!(target: "database", "Failed to open IndexedDB, falling back to memory: {err}");
					let db = Database::in_memory();
					db.seed().await.map(|_| db)
				}
			}
		},
		yew_hooks::UseAsyncOptions::enable_auto(),
	);
	// Children rely on the database existing, so nothing renders until it is open.
	let Some(ddb) = &database.data else {
		return html!(<crate::components::Loading />);
	};
	html! {
		<ContextProvider<Database> context={ddb.clone()}>
			{props.children.clone()}
		</ContextProvider<Database>>
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;

	#[test]
	fn records_round_trip_through_their_namespace() {
		let db = Database::in_memory();
		let user = User {
			id: "someone".into(),
			name: "Someone".into(),
			password: "secret".into(),
			is_blocked: false,
		};
		block_on(db.put("someone", &user)).unwrap();
		assert_eq!(block_on(db.get::<User>("someone")).unwrap(), Some(user));
		assert_eq!(block_on(db.get::<Config>("someone")).unwrap(), None);

		block_on(db.delete::<User>("someone")).unwrap();
		assert_eq!(block_on(db.get::<User>("someone")).unwrap(), None);
	}

	#[test]
	fn malformed_records_report_where_they_live() {
		let backend = MemoryBackend::default();
		block_on(backend.put(Namespace::Users, "broken".into(), serde_json::json!({ "id": 4 }))).unwrap();
		let db = Database::new(backend);
		let err = block_on(db.get::<User>("broken")).unwrap_err();
		assert!(matches!(
			err,
			Error::Decode { namespace: Namespace::Users, ref key, .. } if key == "broken"
		));
	}

	#[test]
	fn databases_compare_by_identity() {
		let a = Database::in_memory();
		let b = Database::in_memory();
		assert_eq!(a, a.clone());
		assert_ne!(a, b);
	}
}
