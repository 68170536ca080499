use super::Error;
use futures_util::future::LocalBoxFuture;
use serde_json::Value;

mod indexed;
pub use indexed::*;
mod memory;
pub use memory::*;

/// The logical partitions of the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Namespace {
	/// Bookkeeping keys such as the seed sentinel.
	Root,
	Users,
	Likes,
}

impl Namespace {
	pub fn all() -> &'static [Self] {
		&[Self::Root, Self::Users, Self::Likes]
	}

	pub fn store_id(self) -> &'static str {
		match self {
			Self::Root => "root",
			Self::Users => "users",
			Self::Likes => "likes",
		}
	}
}

impl std::fmt::Display for Namespace {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.store_id())
	}
}

/// Raw key-value access to the namespaces of an embedded store.
///
/// Values are untyped JSON; [`super::Database`] layers typed records on top.
/// Futures are not `Send` since everything runs on the browser's event loop.
pub trait Backend {
	fn name(&self) -> &'static str;

	fn get(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<Option<Value>, Error>>;

	/// Inserts or overwrites the value under `key`.
	fn put(&self, namespace: Namespace, key: String, value: Value) -> LocalBoxFuture<'_, Result<(), Error>>;

	/// Removing a key that does not exist is not an error.
	fn delete(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<(), Error>>;

	/// All entries of the namespace, ordered by key.
	fn entries(&self, namespace: Namespace) -> LocalBoxFuture<'_, Result<Vec<(String, Value)>, Error>>;
}
