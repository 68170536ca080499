use crate::{components::Loading, route::AppRoute};
use yew::prelude::*;
use yew_router::prelude::use_navigator;

#[function_component]
pub fn NotFound() -> Html {
	let navigator = use_navigator().unwrap();
	use_effect_with((), move |_| navigator.replace(&AppRoute::Gallery));
	html!(<Loading />)
}
