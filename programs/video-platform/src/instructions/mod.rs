//! Instruction handlers for the video platform.

pub mod comment;
pub mod follow;
pub mod like;
pub mod moderation;
pub mod setup;
pub mod sign_up;
pub mod upload;

pub use comment::*;
pub use follow::*;
pub use like::*;
pub use moderation::*;
pub use setup::*;
pub use sign_up::*;
pub use upload::*;
