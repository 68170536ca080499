use crate::{
	components::{Alert, DefaultLayout, ImageCard, Loading},
	hooks::use_likes,
};
use yew::prelude::*;

#[function_component]
pub fn Liked() -> Html {
	html! {
		<DefaultLayout>
			<LikedImages />
		</DefaultLayout>
	}
}

// Unliking here only greys the heart; the image leaves the grid on the next visit.
#[function_component]
fn LikedImages() -> Html {
	let likes = use_likes();
	if let Some(err) = &likes.stored.error {
		return html!(<Alert message={err.to_string()} />);
	}
	let Some(images) = likes.stored.data.as_deref() else {
		return html!(<Loading />);
	};
	if images.is_empty() {
		return html!(<p class="text-secondary text-center py-5">{"You have not liked any images yet."}</p>);
	}
	let cards = images
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
	html! {
		<div class="row row-cols-1 row-cols-md-2 row-cols-lg-3 g-4">{cards}</div>
	}
}
