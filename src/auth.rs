use crate::{
	database::{self, Database, User},
	session::token,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

/// Why a sign-in attempt was turned away. The display text is what the login form shows.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum LoginError {
	#[error("This field is required")]
	MissingUsername,
	#[error("This field is required")]
	MissingPassword,
	#[error("Invalid login details.")]
	UnknownUser,
	#[error("Login failed")]
	WrongPassword,
	#[error("This account has been blocked.")]
	Blocked,
	#[error("Unable to reach the user store.")]
	Store(#[from] database::Error),
	#[error("Unable to save your session.")]
	Token(#[from] token::Error),
}

impl LoginError {
	/// Field errors sit under their input; everything else goes in the form's alert.
	pub fn is_field_error(&self) -> bool {
		matches!(self, Self::MissingUsername | Self::MissingPassword)
	}
}

impl Credentials {
	pub fn validate(&self) -> Result<(), LoginError> {
		if self.username.trim().is_empty() {
			return Err(LoginError::MissingUsername);
		}
		if self.password.is_empty() {
			return Err(LoginError::MissingPassword);
		}
		Ok(())
	}
}

/// Looks the username up in the user store and checks the password, then the blocked flag.
pub async fn authenticate(database: &Database, credentials: &Credentials) -> Result<User, LoginError> {
	credentials.validate()?;
	let Some(user) = database.get::<User>(credentials.username.trim()).await? else {
		return Err(LoginError::UnknownUser);
	};
	if user.password != credentials.password {
		return Err(LoginError::WrongPassword);
	}
	if user.is_blocked {
		return Err(LoginError::Blocked);
	}
	Ok(user)
}
