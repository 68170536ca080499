use crate::database::{Namespace, Record};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A photo as returned by the remote listing.
///
/// Only the fields the UI reads are typed; everything else the API sends is kept in `extra`
/// so that a liked image is stored exactly as it was received.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Image {
	pub id: String,
	pub urls: Urls,
	#[serde(default)]
	pub description: Option<String>,
	#[serde(default)]
	pub alt_description: Option<String>,
	/// Like count on the remote service.
	#[serde(default)]
	pub likes: Option<u64>,
	#[serde(default)]
	pub user: Option<Photographer>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct Urls {
	pub raw: String,
	pub full: String,
	pub regular: String,
	pub small: String,
	pub thumb: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Photographer {
	pub name: String,
	#[serde(default)]
	pub profile_image: Option<ProfileImage>,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ProfileImage {
	pub small: String,
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}

impl Record for Image {
	fn namespace() -> Namespace {
		Namespace::Likes
	}
}

impl Image {
	pub fn alt_text(&self) -> &str {
		self.description
			.as_deref()
			.or(self.alt_description.as_deref())
			.unwrap_or_default()
	}

	pub fn photographer_name(&self) -> Option<&str> {
		self.user.as_ref().map(|user| user.name.as_str())
	}

	pub fn photographer_avatar(&self) -> Option<&str> {
		let profile = self.user.as_ref()?.profile_image.as_ref()?;
		Some(profile.small.as_str())
	}
}

#[cfg(test)]
pub(crate) fn sample(id: &str) -> Image {
	let url = |size: &str| format!("https://images.example/{id}?size={size}");
	Image {
		id: id.to_owned(),
		urls: Urls {
			raw: url("raw"),
			full: url("full"),
			regular: url("regular"),
			small: url("small"),
			thumb: url("thumb"),
			extra: Map::new(),
		},
		description: None,
		alt_description: Some(format!("photo {id}")),
		likes: Some(3),
		user: None,
		extra: Map::new(),
	}
}
