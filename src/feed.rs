use crate::{config, data::Image};
use std::{collections::BTreeSet, rc::Rc};
use yew::prelude::*;

/// Pages of the remote listing loaded so far.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Feed {
	images: Vec<Image>,
	seen: BTreeSet<String>,
	pages_loaded: u32,
	in_flight: bool,
	exhausted: bool,
	error: Option<String>,
}

pub enum FeedAction {
	Requested,
	Loaded { page: u32, images: Vec<Image> },
	Failed(String),
	/// The user asked to try the failed page again.
	Retry,
}

impl Feed {
	pub fn images(&self) -> &[Image] {
		&self.images
	}

	pub fn is_loading(&self) -> bool {
		self.in_flight
	}

	pub fn is_exhausted(&self) -> bool {
		self.exhausted
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	/// The page to fetch next, if another request should go out now.
	///
	/// Nothing is requested while a failure is showing; only [`FeedAction::Retry`] clears it.
	pub fn next_request(&self) -> Option<u32> {
		match self.in_flight || self.exhausted || self.error.is_some() {
			true => None,
			false => Some(self.pages_loaded + 1),
		}
	}

	fn apply(&mut self, action: FeedAction) {
		match action {
			FeedAction::Requested => {
				self.in_flight = true;
				self.error = None;
			}
			FeedAction::Loaded { page, images } => {
				self.in_flight = false;
				if page <= self.pages_loaded {
					log::debug!(target: "feed", "Dropping repeated page {page}");
					return;
				}
				self.pages_loaded = page;
				if images.is_empty() || self.pages_loaded >= config::MAX_PAGES {
					self.exhausted = true;
				}
				for image in images {
					// The listing shifts while paging, so neighbouring pages can overlap.
					if self.seen.insert(image.id.clone()) {
						self.images.push(image);
					}
				}
			}
			FeedAction::Failed(error) => {
				self.in_flight = false;
				self.error = Some(error);
			}
			FeedAction::Retry => {
				self.error = None;
			}
		}
	}
}

impl Reducible for Feed {
	type Action = FeedAction;

	fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
		let mut feed = (*self).clone();
		feed.apply(action);
		Rc::new(feed)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::sample;

	fn page(page: u32, ids: &[&str]) -> FeedAction {
		FeedAction::Loaded {
			page,
			images: ids.iter().map(|id| sample(id)).collect(),
		}
	}

	fn ids(feed: &Feed) -> Vec<&str> {
		feed.images().iter().map(|image| image.id.as_str()).collect()
	}

	#[test]
	fn pages_are_requested_one_at_a_time() {
		let mut feed = Feed::default();
		assert_eq!(feed.next_request(), Some(1));
		feed.apply(FeedAction::Requested);
		assert!(feed.is_loading());
		assert_eq!(feed.next_request(), None);

		feed.apply(page(1, &["a", "b"]));
		assert_eq!(feed.next_request(), Some(2));
		assert_eq!(ids(&feed), vec!["a", "b"]);
	}

	#[test]
	fn overlapping_pages_are_deduplicated() {
		let mut feed = Feed::default();
		feed.apply(page(1, &["a", "b"]));
		feed.apply(page(2, &["b", "c"]));
		assert_eq!(ids(&feed), vec!["a", "b", "c"]);
	}

	#[test]
	fn a_page_delivered_twice_counts_once() {
		let mut feed = Feed::default();
		feed.apply(page(1, &["a"]));
		feed.apply(page(1, &["a", "z"]));
		assert_eq!(ids(&feed), vec!["a"]);
		assert_eq!(feed.next_request(), Some(2));
	}

	#[test]
	fn an_empty_page_ends_the_feed() {
		let mut feed = Feed::default();
		feed.apply(page(1, &["a"]));
		feed.apply(page(2, &[]));
		assert!(feed.is_exhausted());
		assert_eq!(feed.next_request(), None);
	}

	#[test]
	fn paging_stops_at_the_cap() {
		let mut feed = Feed::default();
		for n in 0..config::MAX_PAGES {
			assert_eq!(feed.next_request(), Some(n + 1));
			feed.apply(page(n + 1, &[format!("img{n}").as_str()]));
		}
		assert!(feed.is_exhausted());
		assert_eq!(feed.images().len(), config::MAX_PAGES as usize);
	}

	#[test]
	fn failures_wait_for_the_user_before_retrying() {
		let feed = Rc::new(Feed::default());
		let feed = feed.reduce(FeedAction::Requested);
		let feed = feed.reduce(FeedAction::Failed("offline".into()));
		assert_eq!(feed.error(), Some("offline"));
		assert!(!feed.is_loading());
		// Settling the request re-checks the sentinel, which must not go out again on its own.
		assert_eq!(feed.next_request(), None);

		let feed = feed.reduce(FeedAction::Retry);
		assert_eq!(feed.error(), None);
		assert_eq!(feed.next_request(), Some(1));
	}

	#[test]
	fn a_failure_after_some_pages_keeps_them() {
		let mut feed = Feed::default();
		feed.apply(page(1, &["a"]));
		feed.apply(FeedAction::Requested);
		feed.apply(FeedAction::Failed("rate limited".into()));
		assert_eq!(ids(&feed), vec!["a"]);
		assert_eq!(feed.next_request(), None);
		feed.apply(FeedAction::Retry);
		assert_eq!(feed.next_request(), Some(2));
	}
}
