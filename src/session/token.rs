//! The session token: the signed-in user's record as base64-encoded JSON.
//!
//! The encoding is reversible and not encrypted. The token only names a user;
//! the record it carries is never trusted, the id is looked up again at startup.
use crate::{config, database::User};
use base64::{engine::general_purpose::STANDARD, Engine};
use gloo_storage::{LocalStorage, Storage};
use serde::Deserialize;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
	#[error("token is not valid base64: {0}")]
	Base64(String),
	#[error("token does not hold a user record: {0}")]
	Json(String),
	#[error("failed to write token to storage: {0}")]
	Storage(String),
}

pub fn encode(user: &User) -> Result<String, Error> {
	let json = serde_json::to_vec(user).map_err(|err| Error::Json(err.to_string()))?;
	Ok(STANDARD.encode(json))
}

/// Recovers the id of the user the token was issued for.
pub fn decode(token: &str) -> Result<String, Error> {
	#[derive(Deserialize)]
	struct Claims {
		id: String,
	}
	let bytes = STANDARD.decode(token.trim()).map_err(|err| Error::Base64(err.to_string()))?;
	let claims: Claims = serde_json::from_slice(&bytes).map_err(|err| Error::Json(err.to_string()))?;
	Ok(claims.id)
}

/// Where the token persists between page loads.
pub trait TokenStorage {
	fn read(&self) -> Option<String>;

	fn write(&self, token: &str) -> Result<(), Error>;

	fn clear(&self);
}

/// The browser's `localStorage`, holding the raw token string under [`config::TOKEN_STORAGE_KEY`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTokenStorage;

impl TokenStorage for LocalTokenStorage {
	fn read(&self) -> Option<String> {
		LocalStorage::raw().get_item(config::TOKEN_STORAGE_KEY).ok().flatten()
	}

	fn write(&self, token: &str) -> Result<(), Error> {
		LocalStorage::raw()
			.set_item(config::TOKEN_STORAGE_KEY, token)
			.map_err(|err| Error::Storage(format!("{err:?}")))
	}

	fn clear(&self) {
		LocalStorage::delete(config::TOKEN_STORAGE_KEY);
	}
}

#[cfg(test)]
pub(crate) mod testing {
	use super::{Error, TokenStorage};
	use std::cell::RefCell;

	#[derive(Debug, Default)]
	pub struct MemoryTokenStorage(pub RefCell<Option<String>>);

	impl MemoryTokenStorage {
		pub fn holding(token: impl Into<String>) -> Self {
			Self(RefCell::new(Some(token.into())))
		}
	}

	impl TokenStorage for MemoryTokenStorage {
		fn read(&self) -> Option<String> {
			self.0.borrow().clone()
		}

		fn write(&self, token: &str) -> Result<(), Error> {
			*self.0.borrow_mut() = Some(token.to_owned());
			Ok(())
		}

		fn clear(&self) {
			*self.0.borrow_mut() = None;
		}
	}
}
