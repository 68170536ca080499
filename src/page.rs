mod gallery;
pub use gallery::*;
mod liked;
pub use liked::*;
mod login;
pub use login::*;
mod not_found;
pub use not_found::*;
