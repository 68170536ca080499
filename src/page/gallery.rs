use crate::{
	components::{Alert, AlertVariant, DefaultLayout, ImageCard},
	hooks::{use_feed, use_likes, use_sentinel},
};
use yew::prelude::*;

#[function_component]
pub fn Gallery() -> Html {
	html! {
		<DefaultLayout>
			<Feed />
		</DefaultLayout>
	}
}

#[function_component]
fn Feed() -> Html {
	let likes = use_likes();
	let handle = use_feed();
	let sentinel = use_node_ref();
	let feed = &handle.feed;
	// The sentinel starts out in view, which requests the first page.
	use_sentinel(
		sentinel.clone(),
		(feed.images().len(), feed.is_loading(), feed.error().is_some()),
		handle.load_more.clone(),
	);
	let cards = feed
		.images()
		.iter()
		.map(|image| {
			html! {
				<div class="col" key={image.id.clone()}>
					<ImageCard
						image={image.clone()}
						liked={likes.liked.contains(&image.id)}
						on_toggle={likes.toggle.clone()}
					/>
				</div>
			}
		})
		.collect::<Html>();
	let status = match (feed.is_loading(), feed.is_exhausted(), feed.error()) {
		(true, _, _) => html!("loading..."),
		(_, true, _) => html!("no more images"),
		(_, _, Some(error)) => {
			let onclick = handle.retry.reform(|_: MouseEvent| ());
			html! {<>
				<Alert message={error.to_owned()} variant={AlertVariant::Warning} />
				<button type="button" class="btn btn-outline-secondary" {onclick}>{"Try again"}</button>
			</>}
		}
		_ => html!(),
	};
	html! {<>
		<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">{cards}</div>
		<div class="text-center text-secondary py-4" ref={sentinel}>{status}</div>
	</>}
}
