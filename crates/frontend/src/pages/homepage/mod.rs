//! Homepage: own repositories plus one tab per organization, each repo
//! showing its event feed.

pub mod model;
pub mod view;
pub mod view_model;

pub use view::Homepage;
