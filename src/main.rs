use yew::prelude::*;
use yew_router::BrowserRouter;

mod api;
mod auth;
mod components;
mod config;
mod data;
mod database;
mod feed;
mod gate;
mod hooks;
mod likes;
mod logging;
mod page;
mod response;
mod route;
mod session;
mod util;

#[cfg(target_family = "wasm")]
fn main() {
	logging::init(logging::Config::default().prefer_target());
	yew::Renderer::<App>::new().render();
}

#[cfg(not(target_family = "wasm"))]
fn main() {
	eprintln!("{} runs in the browser; serve it with `trunk serve`", env!("CARGO_PKG_NAME"));
}

#[function_component]
fn App() -> Html {
	html! {
		<BrowserRouter>
			<database::Provider>
				<session::Provider>
					{ <route::AppRoute as route::Route>::switch() }
				</session::Provider>
			</database::Provider>
		</BrowserRouter>
	}
}
