pub mod context;
pub mod navigation;
pub mod storage;
pub mod token;

pub use context::{use_github, AuthProvider};
pub use token::{authorize_url, get_token, Token};
