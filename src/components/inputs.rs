use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct TextInputProps {
	pub id: AttrValue,
	pub label: AttrValue,
	#[prop_or(AttrValue::Static("text"))]
	pub kind: AttrValue,
	#[prop_or_default]
	pub placeholder: AttrValue,
	pub value: AttrValue,
	pub on_change: Callback<String>,
	#[prop_or_default]
	pub error: Option<AttrValue>,
	#[prop_or_default]
	pub disabled: bool,
}

#[function_component]
pub fn TextInput(props: &TextInputProps) -> Html {
	let oninput = props.on_change.reform(|event: InputEvent| {
		let input = event.target_unchecked_into::<HtmlInputElement>();
		input.value()
	});
	html! {
		<div class="mb-3">
			<label class="form-label" for={props.id.clone()}>{&props.label}</label>
			<input
				id={props.id.clone()}
				type={props.kind.clone()}
				class={classes!("form-control", props.error.is_some().then_some("is-invalid"))}
				placeholder={props.placeholder.clone()}
				value={props.value.clone()}
				disabled={props.disabled}
				{oninput}
			/>
			if let Some(error) = &props.error {
				<div class="invalid-feedback">{error}</div>
			}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct SubmitButtonProps {
	#[prop_or_default]
	pub loading: bool,
	pub children: Html,
}

#[function_component]
pub fn SubmitButton(props: &SubmitButtonProps) -> Html {
	html! {
		<button type="submit" class="btn btn-primary w-100" disabled={props.loading}>
			if props.loading {
				<span class="spinner-border spinner-border-sm me-2" role="status" />
			}
			{props.children.clone()}
		</button>
	}
}
