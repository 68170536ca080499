mod alert;
pub use alert::*;
mod gate;
pub use gate::*;
mod image_card;
pub use image_card::*;
mod inputs;
pub use inputs::*;
mod loading;
pub use loading::*;
mod topbar;
pub use topbar::*;
