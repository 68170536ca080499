use crate::data::Image;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ImageCardProps {
	pub image: Image,
	pub liked: bool,
	pub on_toggle: Callback<Image>,
}

#[function_component]
pub fn ImageCard(props: &ImageCardProps) -> Html {
	let onclick = props.on_toggle.reform({
		let image = props.image.clone();
		move |_: MouseEvent| image.clone()
	});
	let image = &props.image;
	let heart = classes!("bi", "bi-heart-fill", "fs-1", if props.liked { "text-danger" } else { "text-secondary" });
	html! {
		<div class="card image-card">
			<button type="button" class="btn p-0 border-0 position-relative" onclick={onclick.clone()}>
				<img class="card-img-top" src={image.urls.regular.clone()} alt={image.alt_text().to_owned()} />
				<i class={classes!(heart, "position-absolute", "top-50", "start-50", "translate-middle")} />
			</button>
			<div class="card-body d-flex align-items-center">
				if let Some(avatar) = image.photographer_avatar() {
					<img class="rounded-circle me-2" width="32" height="32" src={avatar.to_owned()} alt={image.photographer_name().unwrap_or_default().to_owned()} />
				}
				<span class="me-auto">{image.photographer_name().unwrap_or_default()}</span>
				<button type="button" class={classes!("btn", "btn-link", "text-decoration-none", props.liked.then_some("text-danger"))} {onclick}>
					<i class="bi bi-heart me-1" />
					{match (props.liked, image.likes) {
						(true, _) => "You liked this!".to_owned(),
						(false, Some(count)) => count.to_string(),
						(false, None) => String::new(),
					}}
				</button>
			</div>
		</div>
	}
}
