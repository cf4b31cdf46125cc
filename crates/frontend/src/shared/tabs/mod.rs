//! Generic nested tab container: pure selection state plus the Leptos view.

pub mod component;
pub mod state;

pub use component::{Orientation, Tab, TabList};
pub use state::{HeaderState, Pane, TabEntry, TabHeader, TabListState};
