//! The remote photo listing.
use crate::{config, data::Image, response::Response};
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
struct PageQuery<'a> {
	client_id: &'a str,
	per_page: u32,
	page: u32,
}

/// One page of the listing; `page` starts at 1.
pub fn list_photos(page: u32) -> Response<Vec<Image>> {
	let builder = reqwest::Client::new().get(config::PHOTO_API_URL).header("Accept-Version", "v1");
	Response::from(builder).with_query(&PageQuery {
		client_id: config::PHOTO_API_KEY,
		per_page: config::PAGE_SIZE,
		page,
	})
}

pub async fn fetch_page(page: u32) -> anyhow::Result<Vec<Image>> {
	log::debug!(target: "feed", "Fetching page {page}");
	list_photos(page).send().await
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::response::parse;

	#[test]
	fn pages_are_requested_by_index() {
		let request = list_photos(3).into_request().unwrap();
		let url = request.url();
		assert_eq!(url.path(), "/photos");
		let query = url.query_pairs().into_owned().collect::<std::collections::BTreeMap<_, _>>();
		assert_eq!(query.get("page").map(String::as_str), Some("3"));
		assert_eq!(query.get("per_page").map(String::as_str), Some("25"));
		assert!(query.contains_key("client_id"));
	}

	#[test]
	fn error_bodies_are_reported_with_their_text() {
		let err = parse::<Vec<Image>>(r#"{"errors":["OAuth error: The access token is invalid"]}"#.into()).unwrap_err();
		assert!(err.0.contains("access token is invalid"));
		assert!(err.to_string().starts_with("Invalid json"));

		let empty = parse::<Vec<Image>>("[]".into()).unwrap();
		assert!(empty.is_empty());
	}
}
