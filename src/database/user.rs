use super::{Namespace, Record};
use serde::{Deserialize, Serialize};

// Someone who can sign in. Only the seed data creates these.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
	pub id: String,
	pub name: String,
	pub password: String,
	pub is_blocked: bool,
}

impl Record for User {
	fn namespace() -> Namespace {
		Namespace::Users
	}
}
