//! Read-only records returned by the GitHub REST API.
//!
//! Only the fields the UI consumes are declared; everything else in the
//! response body is ignored by serde.

pub mod event;
pub mod org;
pub mod repo;

pub use event::{ActorDto, EventDto, EventPayload};
pub use org::OrgDto;
pub use repo::{OwnerDto, RepoDto};
