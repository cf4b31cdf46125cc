pub mod feed;
pub mod homepage;
