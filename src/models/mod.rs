pub mod token;

pub use token::{Claims, JoinRequest, TokenResponse, VideoGrant};
