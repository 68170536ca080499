use crate::{
	data::Image,
	database::{Database, Error, User},
};
use std::{
	collections::{BTreeMap, BTreeSet},
	rc::Rc,
	str::FromStr,
};
use yew::prelude::*;

/// Where a like lives in the `likes` namespace: `{owner}/{image}`.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LikeKey {
	pub owner: String,
	pub image: String,
}

impl std::fmt::Debug for LikeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "LikeKey({}/{})", self.owner, self.image)
	}
}

impl std::fmt::Display for LikeKey {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}/{}", self.owner, self.image)
	}
}

impl FromStr for LikeKey {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		// User ids never contain '/', image ids might.
		let (owner, image) = s.split_once('/').ok_or(())?;
		Ok(Self {
			owner: owner.to_owned(),
			image: image.to_owned(),
		})
	}
}

/// The likes of one signed-in user.
#[derive(Clone, PartialEq, Debug)]
pub struct LikeStore {
	database: Database,
	owner: String,
}

impl LikeStore {
	pub fn new(database: Database, user: &User) -> Self {
		Self {
			database,
			owner: user.id.clone(),
		}
	}

	fn key(&self, image_id: &str) -> String {
		LikeKey {
			owner: self.owner.clone(),
			image: image_id.to_owned(),
		}
		.to_string()
	}

	/// Every image this user has liked, as it was stored.
	pub async fn load(&self) -> Result<Vec<Image>, Error> {
		let records = self.database.all::<Image>().await?;
		let images = records
			.into_iter()
			.filter_map(|(key, image)| match LikeKey::from_str(&key) {
				Ok(key) if key.owner == self.owner => Some(image),
				_ => None,
			})
			.collect();
		Ok(images)
	}

	/// Unlikes the image if `liked`, otherwise stores its full payload. Returns the new state.
	pub async fn toggle(&self, image: &Image, liked: bool) -> Result<bool, Error> {
		let key = self.key(&image.id);
		match liked {
			true => self.database.delete::<Image>(&key).await?,
			false => self.database.put(&key, image).await?,
		}
		Ok(!liked)
	}
}

/// Flips the image in the store, then always applies the flip to the display.
///
/// The returned result is the store's; the display does not wait on it.
pub async fn toggle_displayed(
	store: &LikeStore,
	image: &Image,
	was_liked: bool,
	apply: impl FnOnce(LikedAction),
) -> Result<bool, Error> {
	let result = store.toggle(image, was_liked).await;
	apply(LikedAction::Set {
		image_id: image.id.clone(),
		liked: !was_liked,
	});
	result
}

/// Ids of the images shown as liked.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct LikedSet {
	ids: BTreeSet<String>,
	seeded: bool,
	/// Flips made before the stored likes arrived, replayed over them on seed.
	early: BTreeMap<String, bool>,
}

impl LikedSet {
	pub fn from_images<'a>(images: impl IntoIterator<Item = &'a Image>) -> Self {
		Self {
			ids: images.into_iter().map(|image| image.id.clone()).collect(),
			..Default::default()
		}
	}

	pub fn contains(&self, image_id: &str) -> bool {
		self.ids.contains(image_id)
	}

	fn set(&mut self, image_id: &str, liked: bool) {
		match liked {
			true => self.ids.insert(image_id.to_owned()),
			false => self.ids.remove(image_id),
		};
	}
}

pub enum LikedAction {
	Seed(LikedSet),
	Set { image_id: String, liked: bool },
}

impl Reducible for LikedSet {
	type Action = LikedAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		match action {
			LikedAction::Seed(mut set) => {
				for (image_id, liked) in &self.early {
					set.set(image_id, *liked);
				}
				set.seeded = true;
				set.early.clear();
				Rc::new(set)
			}
			LikedAction::Set { image_id, liked } => {
				if self.seeded && self.contains(&image_id) == liked {
					return self;
				}
				let mut set = (*self).clone();
				set.set(&image_id, liked);
				if !set.seeded {
					set.early.insert(image_id, liked);
				}
				Rc::new(set)
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{
		data::sample,
		database::{Backend, MemoryBackend, Namespace},
	};
	use futures::executor::block_on;
	use futures_util::future::{ready, FutureExt, LocalBoxFuture};
	use serde_json::Value;

	fn user(id: &str) -> User {
		User {
			id: id.into(),
			name: id.into(),
			password: String::new(),
			is_blocked: false,
		}
	}

	#[test]
	fn keys_split_on_the_first_slash() {
		let key = LikeKey::from_str("muser1/abc/def").unwrap();
		assert_eq!(key.owner, "muser1");
		assert_eq!(key.image, "abc/def");
		assert_eq!(key.to_string(), "muser1/abc/def");
		assert!(LikeKey::from_str("orphan").is_err());
	}

	#[test]
	fn toggling_stores_then_removes_the_full_payload() {
		let db = Database::in_memory();
		let store = LikeStore::new(db.clone(), &user("muser1"));
		let image = sample("X");

		assert!(block_on(store.toggle(&image, false)).unwrap());
		assert_eq!(block_on(db.get::<Image>("muser1/X")).unwrap(), Some(image.clone()));

		assert!(!block_on(store.toggle(&image, true)).unwrap());
		assert_eq!(block_on(db.get::<Image>("muser1/X")).unwrap(), None);
	}

	#[test]
	fn load_returns_what_is_still_liked() {
		let store = LikeStore::new(Database::in_memory(), &user("muser1"));
		block_on(store.toggle(&sample("A"), false)).unwrap();
		block_on(store.toggle(&sample("B"), false)).unwrap();
		block_on(store.toggle(&sample("A"), true)).unwrap();

		let images = block_on(store.load()).unwrap();
		assert_eq!(images, vec![sample("B")]);
		let liked = LikedSet::from_images(&images);
		assert!(liked.contains("B") && !liked.contains("A"));
	}

	#[test]
	fn likes_are_kept_per_user() {
		let db = Database::in_memory();
		let first = LikeStore::new(db.clone(), &user("muser1"));
		let second = LikeStore::new(db, &user("muser2"));
		block_on(first.toggle(&sample("A"), false)).unwrap();

		assert!(block_on(second.load()).unwrap().is_empty());
		assert_eq!(block_on(first.load()).unwrap().len(), 1);
	}

	#[test]
	fn reducer_applies_flips_and_seeds() {
		let state = Rc::new(LikedSet::default());
		let state = state.reduce(LikedAction::Seed(LikedSet::from_images(&[sample("B")])));
		assert!(state.contains("B"));

		let state = state.reduce(LikedAction::Set { image_id: "A".into(), liked: true });
		assert!(state.contains("A"));

		let unchanged = state.clone().reduce(LikedAction::Set { image_id: "A".into(), liked: true });
		assert!(Rc::ptr_eq(&state, &unchanged));
	}

	#[test]
	fn flips_made_before_loading_survive_the_seed() {
		let state = Rc::new(LikedSet::default());
		let state = state.reduce(LikedAction::Set { image_id: "A".into(), liked: true });
		let state = state.reduce(LikedAction::Set { image_id: "B".into(), liked: false });

		let state = state.reduce(LikedAction::Seed(LikedSet::from_images(&[sample("B"), sample("C")])));
		assert!(state.contains("A"));
		assert!(!state.contains("B"));
		assert!(state.contains("C"));

		// Once seeded, flips apply directly and are not replayed again.
		let state = state.reduce(LikedAction::Set { image_id: "A".into(), liked: false });
		let state = state.reduce(LikedAction::Seed(LikedSet::from_images(&[sample("B")])));
		assert!(state.contains("B") && !state.contains("A"));
	}

	struct ReadOnly(MemoryBackend);

	impl Backend for ReadOnly {
		fn name(&self) -> &'static str {
			"read-only"
		}

		fn get(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<Option<Value>, Error>> {
			self.0.get(namespace, key)
		}

		fn put(&self, _: Namespace, _: String, _: Value) -> LocalBoxFuture<'_, Result<(), Error>> {
			ready(Err(Error::IndexedDb("QuotaExceededError".into()))).boxed_local()
		}

		fn delete(&self, namespace: Namespace, key: String) -> LocalBoxFuture<'_, Result<(), Error>> {
			self.0.delete(namespace, key)
		}

		fn entries(&self, namespace: Namespace) -> LocalBoxFuture<'_, Result<Vec<(String, Value)>, Error>> {
			self.0.entries(namespace)
		}
	}

	#[test]
	fn failed_writes_surface_to_the_caller() {
		let store = LikeStore::new(Database::new(ReadOnly(MemoryBackend::default())), &user("muser1"));
		let err = block_on(store.toggle(&sample("A"), false)).unwrap_err();
		assert_eq!(err, Error::IndexedDb("QuotaExceededError".into()));
		assert!(block_on(store.load()).unwrap().is_empty());
	}

	#[test]
	fn the_display_flips_even_when_the_write_fails() {
		let store = LikeStore::new(Database::new(ReadOnly(MemoryBackend::default())), &user("muser1"));
		let applied = std::cell::RefCell::new(LikedSet::default());
		let result = block_on(toggle_displayed(&store, &sample("A"), false, |action| {
			let state = Rc::new(applied.borrow().clone()).reduce(action);
			*applied.borrow_mut() = (*state).clone();
		}));
		assert_eq!(result, Err(Error::IndexedDb("QuotaExceededError".into())));
		assert!(applied.borrow().contains("A"));
		assert!(block_on(store.load()).unwrap().is_empty());
	}

	#[test]
	fn the_display_follows_a_successful_unlike() {
		let store = LikeStore::new(Database::in_memory(), &user("muser1"));
		block_on(store.toggle(&sample("A"), false)).unwrap();
		let mut applied = None;
		let result = block_on(toggle_displayed(&store, &sample("A"), true, |action| applied = Some(action)));
		assert_eq!(result, Ok(false));
		assert!(matches!(applied, Some(LikedAction::Set { ref image_id, liked: false }) if image_id == "A"));
	}
}
