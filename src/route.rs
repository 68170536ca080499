use crate::page;
use yew::{html, Component, Context, Html};
use yew_router::Routable;

pub struct Switch<T>(std::marker::PhantomData<T>);
impl<T> Component for Switch<T>
where
	T: Routable + Route + 'static,
{
	type Message = ();
	type Properties = ();

	fn create(_ctx: &Context<Self>) -> Self {
		Self(Default::default())
	}

	fn view(&self, _ctx: &Context<Self>) -> Html {
		html! {
			<yew_router::Switch<T> render={T::html} />
		}
	}
}

pub trait Route {
	fn html(self) -> Html;

	fn switch() -> Html
	where
		Self: Routable + 'static,
	{
		html! { <Switch<Self> /> }
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable)]
pub enum AppRoute {
	#[at("/")]
	Gallery,
	#[at("/liked")]
	Liked,
	#[at("/auth/login")]
	Login,
	#[not_found]
	#[at("/404")]
	NotFound,
}

impl AppRoute {
	/// The pages listed in the top bar, with their labels.
	pub fn navigation() -> &'static [(Self, &'static str)] {
		&[(Self::Gallery, "Browse"), (Self::Liked, "Liked images")]
	}
}

impl Route for AppRoute {
	fn html(self) -> Html {
		match self {
			Self::Gallery => html!(<page::Gallery />),
			Self::Liked => html!(<page::Liked />),
			Self::Login => html!(<page::Login />),
			Self::NotFound => html!(<page::NotFound />),
		}
	}
}

impl yew::html::IntoPropValue<Option<String>> for AppRoute {
	fn into_prop_value(self) -> Option<String> {
		Some(self.to_path())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn paths() {
		assert_eq!(AppRoute::Gallery.to_path(), "/");
		assert_eq!(AppRoute::Liked.to_path(), "/liked");
		assert_eq!(AppRoute::Login.to_path(), "/auth/login");
		let labels = AppRoute::navigation().iter().map(|(route, _)| *route).collect::<Vec<_>>();
		assert_eq!(labels, vec![AppRoute::Gallery, AppRoute::Liked]);
	}
}
