use yew::prelude::*;

#[function_component]
pub fn Loading() -> Html {
	html! {
		<div class="d-flex justify-content-center align-items-center min-vh-100">
			<div class="spinner-border text-secondary" role="status">
				<span class="visually-hidden">{"Loading..."}</span>
			</div>
		</div>
	}
}
