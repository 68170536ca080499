use super::{Database, Error, Namespace, Record, User};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;
pub static CONFIG_KEY: &str = "config";

/// Written once the seed data is in place; its presence means seeding must not run again.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
	pub version: u32,
}

impl Record for Config {
	fn namespace() -> Namespace {
		Namespace::Root
	}
}

pub fn seed_users() -> Vec<User> {
	let user = |n: u32, is_blocked: bool| User {
		id: format!("muser{n}"),
		name: format!("muser{n}"),
		password: format!("mpassword{n}"),
		is_blocked,
	};
	vec![user(1, false), user(2, false), user(3, true)]
}

impl Database {
	/// Returns true if this call wrote the seed data.
	pub async fn seed(&self) -> Result<bool, Error> {
		if self.get::<Config>(CONFIG_KEY).await?.is_some() {
			return Ok(false);
		}
		log::info!(target: "database", "Initializing database");
		for user in seed_users() {
			self.put(&user.id, &user).await?;
		}
		self.put(CONFIG_KEY, &Config { version: SCHEMA_VERSION }).await?;
		log::info!(target: "database", "Database initialized");
		Ok(true)
	}
}
