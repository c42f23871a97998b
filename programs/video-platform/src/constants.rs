//! Constants for the video platform.

// =============================================================================
// PDA SEEDS
// =============================================================================

/// Seed for the platform StateAccount: ["state"]
pub const STATE_SEED: &[u8] = b"state";

/// Seed for UserAccount: ["user", wallet]
pub const USER_SEED: &[u8] = b"user";

/// Seed for VideoAccount: ["video", video_index (u64 BE)]
pub const VIDEO_SEED: &[u8] = b"video";

/// Seed for CommentAccount: ["comment", video_index (u64 BE), comment_index (u64 BE)]
pub const COMMENT_SEED: &[u8] = b"comment";

// =============================================================================
// TEXT LIMITS (bytes)
// =============================================================================

/// Video description and comment text
pub const TEXT_LENGTH: usize = 1024;

/// Display name of a user, uploader or commenter
pub const USER_NAME_LENGTH: usize = 100;

/// Profile image URL
pub const USER_URL_LENGTH: usize = 255;

/// Video URL
pub const VIDEO_URL_LENGTH: usize = 255;

// =============================================================================
// CAPACITY
// =============================================================================

/// Max wallets a single video can record as likers
pub const NUMBER_OF_ALLOWED_LIKES: u8 = 5;

/// Max wallets a single user can record via follow_one_another
pub const NUMBER_OF_ALLOWED_FOLLOWING: u8 = 5;

// =============================================================================
// MODERATION
// =============================================================================

/// A video whose approval score reaches this value is treated as censored:
/// no further comments or likes are accepted.
pub const CENSORSHIP_THRESHOLD: i64 = -500;
