pub mod github;
pub mod system;
