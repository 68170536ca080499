use crate::{
	api,
	data::Image,
	database::{self, Database},
	feed::{Feed, FeedAction},
	likes::{self, LikeStore, LikedAction, LikedSet},
	session::Session,
};
use yew::prelude::*;
use yew_hooks::{use_async_with_options, use_window_scroll, use_window_size, UseAsyncHandle, UseAsyncOptions};
use yewdux::prelude::use_store_value;

#[derive(Clone, PartialEq)]
pub struct LikesHandle {
	/// The liked images as they were stored when the page mounted.
	pub stored: UseAsyncHandle<Vec<Image>, database::Error>,
	pub liked: UseReducerHandle<LikedSet>,
	pub toggle: Callback<Image>,
}

/// The signed-in user's likes: loaded once on mount, then flipped as the user toggles them.
#[hook]
pub fn use_likes() -> LikesHandle {
	let database = use_context::<Database>().unwrap();
	let session = use_store_value::<Session>();
	let store = session.user().map(|user| LikeStore::new(database, user));
	let liked = use_reducer_eq(LikedSet::default);
	let stored = use_async_with_options(
		{
			let store = store.clone();
			let liked = liked.clone();
			async move {
				let Some(store) = store else {
					return Ok(Vec::new());
				};
				let images = store.load().await?;
				log::debug!(target: "likes", "Loaded {} liked images", images.len());
				liked.dispatch(LikedAction::Seed(LikedSet::from_images(&images)));
				Ok(images)
			}
		},
		UseAsyncOptions::enable_auto(),
	);
	let toggle = Callback::from({
		let liked = liked.clone();
		move |image: Image| {
			let Some(store) = store.clone() else {
				return;
			};
			let liked = liked.clone();
			let was_liked = liked.contains(&image.id);
			crate::util::spawn_local("likes", async move {
				likes::toggle_displayed(&store, &image, was_liked, |action| liked.dispatch(action))
					.await
					.map(|_| ())
			});
		}
	});
	LikesHandle { stored, liked, toggle }
}

#[derive(Clone, PartialEq)]
pub struct FeedHandle {
	pub feed: UseReducerHandle<Feed>,
	pub load_more: Callback<()>,
	pub retry: Callback<()>,
}

#[hook]
pub fn use_feed() -> FeedHandle {
	let feed = use_reducer(Feed::default);
	let load_more = Callback::from({
		let feed = feed.clone();
		move |_: ()| {
			let Some(page) = feed.next_request() else {
				return;
			};
			feed.dispatch(FeedAction::Requested);
			let feed = feed.clone();
			wasm_bindgen_futures::spawn_local(async move {
				match api::fetch_page(page).await {
					Ok(images) => feed.dispatch(FeedAction::Loaded { page, images }),
					Err(err) => {
						log::error!(target: "feed", "Failed to fetch page {page}: {err:?}");
						feed.dispatch(FeedAction::Failed(err.to_string()));
					}
				}
			});
		}
	});
	let retry = Callback::from({
		let feed = feed.clone();
		move |_: ()| feed.dispatch(FeedAction::Retry)
	});
	FeedHandle { feed, load_more, retry }
}

/// Emits `on_visible` whenever `sentinel` is within the viewport after a scroll, resize, or change of `generation`.
#[hook]
pub fn use_sentinel<D>(sentinel: NodeRef, generation: D, on_visible: Callback<()>)
where
	D: PartialEq + 'static,
{
	let (_, scroll_y) = use_window_scroll();
	let (_, height) = use_window_size();
	use_effect_with((scroll_y, height, generation), move |(_, height, _)| {
		if let Some(element) = sentinel.cast::<web_sys::Element>() {
			if element.get_bounding_client_rect().top() <= *height {
				on_visible.emit(());
			}
		}
	});
}
