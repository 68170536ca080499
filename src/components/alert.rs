use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Default)]
pub enum AlertVariant {
	#[default]
	Error,
	Warning,
}

impl AlertVariant {
	fn class(self) -> &'static str {
		match self {
			Self::Error => "alert-danger",
			Self::Warning => "alert-warning",
		}
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct AlertProps {
	pub message: AttrValue,
	#[prop_or_default]
	pub variant: AlertVariant,
}

#[function_component]
pub fn Alert(props: &AlertProps) -> Html {
	html! {
		<div class={classes!("alert", props.variant.class())} role="alert">
			{&props.message}
		</div>
	}
}
