use crate::database::{Database, User};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::*;

pub mod token;
use token::TokenStorage;

/// Whether the visitor is signed in, and as whom.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Session {
	/// The stored token has not been checked yet.
	#[default]
	Unresolved,
	Unauthorized,
	Authorized(User),
}

impl Store for Session {
	fn new(_cx: &yewdux::Context) -> Self {
		Self::default()
	}

	fn should_notify(&self, old: &Self) -> bool {
		self != old
	}
}

impl Session {
	pub fn data_loaded(&self) -> bool {
		!matches!(self, Self::Unresolved)
	}

	pub fn is_authorized(&self) -> bool {
		matches!(self, Self::Authorized(_))
	}

	pub fn user(&self) -> Option<&User> {
		match self {
			Self::Authorized(user) => Some(user),
			_ => None,
		}
	}

	pub fn transition(&self, event: SessionEvent) -> Self {
		match event {
			SessionEvent::Resolved(resolution) => match self {
				Self::Unresolved => resolution.into(),
				// Someone already signed in or out; the startup check is stale.
				_ => self.clone(),
			},
			SessionEvent::LoggedIn(user) => Self::Authorized(user),
			SessionEvent::LoggedOut => Self::Unauthorized,
		}
	}
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
	Resolved(Resolution),
	LoggedIn(User),
	LoggedOut,
}

impl Reducer<Session> for SessionEvent {
	fn apply(self, state: Rc<Session>) -> Rc<Session> {
		let next = state.transition(self);
		match next == *state {
			true => state,
			false => Rc::new(next),
		}
	}
}

/// Outcome of checking the stored token when the app starts.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
	/// There was no token.
	Anonymous,
	Authorized(User),
	/// There was a token but it cannot sign anyone in; it has been cleared.
	Rejected(Rejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
	MalformedToken,
	UnknownUser,
	Blocked,
	LookupFailed,
}

impl From<Resolution> for Session {
	fn from(resolution: Resolution) -> Self {
		match resolution {
			Resolution::Authorized(user) => Self::Authorized(user),
			Resolution::Anonymous | Resolution::Rejected(_) => Self::Unauthorized,
		}
	}
}

/// Checks the stored token against the user store.
///
/// Never fails: anything that prevents signing in resolves to unauthorized,
/// and a token that cannot sign anyone in is removed.
pub async fn resolve(database: &Database, tokens: &impl TokenStorage) -> Resolution {
	let Some(token) = tokens.read() else {
		return Resolution::Anonymous;
	};
	let rejection = match token::decode(&token) {
		Err(err) => {
			log::warn!(target: "session", "Discarding unreadable session token: {err}");
			Rejection::MalformedToken
		}
		Ok(user_id) => match database.get::<User>(&user_id).await {
			Ok(Some(user)) if !user.is_blocked => return Resolution::Authorized(user),
			Ok(Some(_)) => Rejection::Blocked,
			Ok(None) => Rejection::UnknownUser,
			Err(err) => {
				log::error!(target: "session", "Failed to look up session user {user_id:?}: {err}");
				Rejection::LookupFailed
			}
		},
	};
	tokens.clear();
	Resolution::Rejected(rejection)
}

/// Persists a token for an already verified user.
pub fn login(tokens: &impl TokenStorage, user: User) -> Result<SessionEvent, token::Error> {
	tokens.write(&token::encode(&user)?)?;
	Ok(SessionEvent::LoggedIn(user))
}

pub fn logout(tokens: &impl TokenStorage) -> SessionEvent {
	tokens.clear();
	SessionEvent::LoggedOut
}

/// Resolves the stored token once, when the app first mounts.
#[function_component]
pub fn Provider(props: &html::ChildrenProps) -> Html {
	let database = use_context::<Database>().unwrap();
	let dispatch = use_dispatch::<Session>();
	use_effect_with((), move |_| {
		wasm_bindgen_futures::spawn_local(async move {
			let resolution = resolve(&database, &token::LocalTokenStorage).await;
			log::debug!(target: "session", "{resolution:?}");
			dispatch.apply(SessionEvent::Resolved(resolution));
		});
	});
	html! {<>{props.children.clone()}</>}
}
