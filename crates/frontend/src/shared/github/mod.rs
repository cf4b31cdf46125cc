//! Authenticated read access to the GitHub REST API.

pub mod client;
pub mod endpoints;
pub mod error;

pub use client::{GithubApi, GithubClient};
pub use error::ApiError;
