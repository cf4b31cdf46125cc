//! Recent events of a single repository.

mod model;
mod view;

pub use model::{event_line, load_feed};
pub use view::Feed;
