//! Route-level gating on the session.
//!
//! This only drives what the client shows; a client that ignores it is not stopped from anything.
use crate::{route::AppRoute, session::Session};

/// Who a gated page is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Audience {
	/// Signed-in users; everyone else is sent to the login page.
	Member,
	/// Signed-out visitors, e.g. the login page; signed-in users are sent home.
	Guest,
}

impl Audience {
	pub fn admits(self, session: &Session) -> bool {
		match self {
			Self::Member => session.is_authorized(),
			Self::Guest => !session.is_authorized(),
		}
	}

	pub fn redirect_target(self) -> AppRoute {
		match self {
			Self::Member => AppRoute::Login,
			Self::Guest => AppRoute::Gallery,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GateState {
	/// The session has not been resolved yet.
	#[default]
	Pending,
	/// Admitted, waiting out the display delay.
	Deciding,
	ShowContent,
	Redirect(AppRoute),
}

impl GateState {
	/// Re-evaluates the gate after the session changed.
	pub fn advance(self, audience: Audience, session: &Session) -> Self {
		if !session.data_loaded() {
			return Self::Pending;
		}
		match (audience.admits(session), self) {
			(true, Self::ShowContent) => Self::ShowContent,
			(true, _) => Self::Deciding,
			(false, _) => Self::Redirect(audience.redirect_target()),
		}
	}

	/// The display delay ran out.
	pub fn elapse(self) -> Self {
		match self {
			Self::Deciding => Self::ShowContent,
			other => other,
		}
	}

	pub fn shows_content(self) -> bool {
		matches!(self, Self::ShowContent)
	}
}
