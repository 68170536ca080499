use crate::{
	auth::{self, Credentials, LoginError},
	components::{Alert, AuthenticationLayout, SubmitButton, TextInput},
	config,
	database::Database,
	route::AppRoute,
	session::{self, token::LocalTokenStorage, Session},
};
use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;
use yew_router::prelude::use_navigator;
use yewdux::prelude::use_dispatch;

#[function_component]
pub fn Login() -> Html {
	html! {
		<AuthenticationLayout>
			<section class="container d-flex justify-content-center align-items-center min-vh-100">
				<div class="card shadow-sm" style="max-width: 28rem; width: 100%;">
					<div class="card-body p-4">
						<h1 class="h3">{"Welcome back"}</h1>
						<p class="text-secondary">{"Good to see you again! Please sign in to your account."}</p>
						<LoginForm />
					</div>
				</div>
			</section>
		</AuthenticationLayout>
	}
}

#[function_component]
fn LoginForm() -> Html {
	let database = use_context::<Database>().unwrap();
	let navigator = use_navigator().unwrap();
	let credentials = use_state(Credentials::default);
	let error = use_state(|| None::<LoginError>);
	let loading = use_state(|| false);
	let dispatch = use_dispatch::<Session>();

	let onsubmit = {
		let credentials = credentials.clone();
		let error = error.clone();
		let loading = loading.clone();
		Callback::from(move |event: SubmitEvent| {
			event.prevent_default();
			if *loading {
				return;
			}
			error.set(None);
			if let Err(err) = credentials.validate() {
				error.set(Some(err));
				return;
			}
			loading.set(true);
			let database = database.clone();
			let navigator = navigator.clone();
			let dispatch = dispatch.clone();
			let credentials = (*credentials).clone();
			let error = error.clone();
			let loading = loading.clone();
			wasm_bindgen_futures::spawn_local(async move {
				TimeoutFuture::new(config::LOGIN_DELAY_MS).await;
				let outcome = match auth::authenticate(&database, &credentials).await {
					Ok(user) => session::login(&LocalTokenStorage, user).map_err(LoginError::from),
					Err(err) => Err(err),
				};
				loading.set(false);
				match outcome {
					Ok(event) => {
						dispatch.apply(event);
						navigator.replace(&AppRoute::Gallery);
					}
					Err(err) => {
						log::debug!(target: "session", "Sign-in rejected: {err:?}");
						error.set(Some(err));
					}
				}
			});
		})
	};

	let field_error = |field: LoginError| -> Option<AttrValue> {
		match &*error {
			Some(err) if *err == field => Some(err.to_string().into()),
			_ => None,
		}
	};
	let alert = match &*error {
		Some(err) if !err.is_field_error() => html!(<Alert message={err.to_string()} />),
		_ => html!(),
	};
	let on_username = {
		let credentials = credentials.clone();
		Callback::from(move |username: String| {
			credentials.set(Credentials {
				username,
				..(*credentials).clone()
			})
		})
	};
	let on_password = {
		let credentials = credentials.clone();
		Callback::from(move |password: String| {
			credentials.set(Credentials {
				password,
				..(*credentials).clone()
			})
		})
	};

	html! {
		<form {onsubmit} novalidate=true>
			<TextInput
				id="username"
				label="Username"
				placeholder="Enter your username"
				value={credentials.username.clone()}
				on_change={on_username}
				error={field_error(LoginError::MissingUsername)}
				disabled={*loading}
			/>
			<TextInput
				id="password"
				label="Password"
				kind="password"
				value={credentials.password.clone()}
				on_change={on_password}
				error={field_error(LoginError::MissingPassword)}
				disabled={*loading}
			/>
			{alert}
			<SubmitButton loading={*loading}>{"Sign in"}</SubmitButton>
		</form>
	}
}
