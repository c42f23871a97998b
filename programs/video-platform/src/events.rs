//! Event definitions for the video platform.

use anchor_lang::prelude::*;

/// Emitted once, when the platform state is created.
#[event]
pub struct PlatformInitialized {
    pub state: Pubkey,
    pub signer: Pubkey,
    pub timestamp: i64,
}

/// Emitted when a wallet creates its profile.
#[event]
pub struct UserSignedUp {
    pub user: Pubkey,
    pub wallet: Pubkey,
    pub user_name: String,
    pub timestamp: i64,
}

/// Emitted when a video is uploaded.
#[event]
pub struct VideoUploaded {
    pub video: Pubkey,
    pub uploader: Pubkey,
    /// Index assigned to the video (seed of its PDA)
    pub index: u64,
    /// Platform video count after this upload
    pub video_count: u64,
    pub timestamp: i64,
}

/// Emitted when a comment is created on a video.
#[event]
pub struct CommentCreated {
    pub comment: Pubkey,
    pub video: Pubkey,
    pub commenter: Pubkey,
    pub video_index: u64,
    pub comment_index: u64,
    pub timestamp: i64,
}

#[event]
pub struct VideoLiked {
    pub video: Pubkey,
    pub liker: Pubkey,
    pub likes: u8,
    pub timestamp: i64,
}

#[event]
pub struct UserFollowed {
    pub user: Pubkey,
    pub follower: Pubkey,
    pub following: u8,
    pub timestamp: i64,
}

/// Emitted on approve_video / disapprove_video.
#[event]
pub struct VideoModerated {
    pub video: Pubkey,
    pub moderator: Pubkey,
    /// +1 for approve, -1 for disapprove
    pub delta: i8,
    /// Score after the vote
    pub score: i64,
    pub censored: bool,
    pub timestamp: i64,
}
