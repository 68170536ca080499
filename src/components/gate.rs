use super::{Loading, Topbar};
use crate::{
	config,
	gate::{Audience, GateState},
	session::Session,
};
use gloo_timers::callback::Timeout;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_store_value;

#[derive(Clone, PartialEq, Properties)]
pub struct GateProps {
	pub audience: Audience,
	#[prop_or_default]
	pub children: Html,
}

/// Shows its children only to the audience it is for, redirecting everyone else.
#[function_component]
pub fn Gate(props: &GateProps) -> Html {
	let session = use_store_value::<Session>();
	let navigator = use_navigator().unwrap();
	let state = use_state_eq(GateState::default);
	use_effect_with(session, {
		let state = state.clone();
		let audience = props.audience;
		move |session| {
			let next = (*state).advance(audience, session);
			state.set(next);
			let mut timeout = None;
			match next {
				GateState::Deciding => {
					let state = state.clone();
					timeout = Some(Timeout::new(config::GATE_DELAY_MS, move || {
						state.set(GateState::Deciding.elapse());
					}));
				}
				GateState::Redirect(route) => navigator.replace(&route),
				GateState::Pending | GateState::ShowContent => {}
			}
			// Dropping an unfired timeout cancels it.
			move || drop(timeout)
		}
	});
	match state.shows_content() {
		true => props.children.clone(),
		false => html!(<Loading />),
	}
}

#[function_component]
pub fn DefaultLayout(props: &html::ChildrenProps) -> Html {
	html! {
		<Gate audience={Audience::Member}>
			<Topbar />
			<main class="container py-4">
				{props.children.clone()}
			</main>
		</Gate>
	}
}

#[function_component]
pub fn AuthenticationLayout(props: &html::ChildrenProps) -> Html {
	html! {
		<Gate audience={Audience::Guest}>
			{props.children.clone()}
		</Gate>
	}
}
