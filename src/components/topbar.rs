use crate::{
	route::AppRoute,
	session::{self, token::LocalTokenStorage, Session},
};
use yew::prelude::*;
use yew_router::prelude::{use_route, Link};
use yewdux::prelude::use_store;

#[function_component]
pub fn Topbar() -> Html {
	let (session, dispatch) = use_store::<Session>();
	let current = use_route::<AppRoute>();
	// The gate sends the now signed-out visitor to the login page.
	let logout = Callback::from(move |_: MouseEvent| {
		dispatch.apply(session::logout(&LocalTokenStorage));
	});
	let links = AppRoute::navigation()
		.iter()
		.map(|(route, label)| {
			let classes = classes!("nav-link", (current == Some(*route)).then_some("active"));
			html! {
				<li class="nav-item">
					<Link<AppRoute> {classes} to={*route}>{*label}</Link<AppRoute>>
				</li>
			}
		})
		.collect::<Html>();
	html! {
		<nav class="navbar navbar-expand bg-body-tertiary">
			<div class="container">
				<Link<AppRoute> classes="navbar-brand" to={AppRoute::Gallery}>{"ImageLiker"}</Link<AppRoute>>
				<ul class="navbar-nav me-auto">{links}</ul>
				if let Some(user) = session.user() {
					<span class="navbar-text me-3">{&user.name}</span>
				}
				<button class="btn btn-outline-secondary btn-sm" onclick={logout}>{"Sign out"}</button>
			</div>
		</nav>
	}
}
