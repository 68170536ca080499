use super::{Backend, Namespace};
use crate::database::Error;
use futures_util::future::{ready, FutureExt, LocalBoxFuture};
use serde_json::Value;
use std::{cell::RefCell, collections::BTreeMap};

/// Keeps every namespace in memory for the lifetime of the page.
#[derive(Debug, Default)]
pub struct MemoryBackend(RefCell<BTreeMap<Namespace, BTreeMap<String, Value>>>);

impl Backend for MemoryBackend {
	fn name(&self) -> &'static str {
		"memory"
	}

	fn get(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<Option<Value>, Error>> {
		let value = self.0.borrow().get(&namespace).and_then(|entries| entries.get(&key)).cloned();
		ready(Ok(value)).boxed_local()
	}

	fn put(&self, namespace: Namespace, key: String, value: Value) -> LocalBoxFuture<'_, Result<(), Error>> {
		self.0.borrow_mut().entry(namespace).or_default().insert(key, value);
		ready(Ok(())).boxed_local()
	}

	fn delete(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<(), Error>> {
		if let Some(entries) = self.0.borrow_mut().get_mut(&namespace) {
			entries.remove(&key);
		}
		ready(Ok(())).boxed_local()
	}

	fn entries(&self, namespace: Namespace) -> LocalBoxFuture<'_, Result<Vec<(String, Value)>, Error>> {
		let entries = match self.0.borrow().get(&namespace) {
			Some(entries) => entries.iter().map(|(key, value)| (key.clone(), value.clone())).collect(),
			None => Vec::new(),
		};
		ready(Ok(entries)).boxed_local()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures::executor::block_on;
	use serde_json::json;

	#[test]
	fn namespaces_do_not_share_keys() {
		let backend = MemoryBackend::default();
		block_on(backend.put(Namespace::Users, "a".into(), json!(1))).unwrap();
		block_on(backend.put(Namespace::Likes, "a".into(), json!(2))).unwrap();
		assert_eq!(block_on(backend.get(Namespace::Users, "a".into())).unwrap(), Some(json!(1)));
		assert_eq!(block_on(backend.get(Namespace::Likes, "a".into())).unwrap(), Some(json!(2)));
		assert_eq!(block_on(backend.get(Namespace::Root, "a".into())).unwrap(), None);
	}

	#[test]
	fn put_overwrites_and_entries_are_key_ordered() {
		let backend = MemoryBackend::default();
		block_on(backend.put(Namespace::Likes, "b".into(), json!("old"))).unwrap();
		block_on(backend.put(Namespace::Likes, "a".into(), json!("a"))).unwrap();
		block_on(backend.put(Namespace::Likes, "b".into(), json!("new"))).unwrap();
		let entries = block_on(backend.entries(Namespace::Likes)).unwrap();
		assert_eq!(entries, vec![("a".to_owned(), json!("a")), ("b".to_owned(), json!("new"))]);
	}

	#[test]
	fn deleting_missing_keys_is_fine() {
		let backend = MemoryBackend::default();
		block_on(backend.delete(Namespace::Likes, "nothing".into())).unwrap();
		assert!(block_on(backend.entries(Namespace::Likes)).unwrap().is_empty());
	}
}
