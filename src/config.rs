pub static PHOTO_API_URL: &str = "https://api.unsplash.com/photos";

// Baked in at build time (`UNSPLASH_API_KEY=... trunk build`).
pub static PHOTO_API_KEY: &str = match option_env!("UNSPLASH_API_KEY") {
	Some(key) => key,
	None => "",
};

/// Images requested per page of the photo feed.
pub const PAGE_SIZE: u32 = 25;
/// The feed stops paging once this many pages have been loaded.
pub const MAX_PAGES: u32 = 25;

/// How long a gate keeps showing the loading indicator after it has decided to admit the visitor.
pub const GATE_DELAY_MS: u32 = 1000;
/// Pause before credentials are checked on the login form.
pub const LOGIN_DELAY_MS: u32 = 2000;

pub static DATABASE_NAME: &str = "image-liker-db";
pub static TOKEN_STORAGE_KEY: &str = "auth_token";
