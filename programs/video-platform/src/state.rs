//! On-chain state definitions for the video platform.

use anchor_lang::prelude::*;

use crate::constants::{
    CENSORSHIP_THRESHOLD, NUMBER_OF_ALLOWED_FOLLOWING, NUMBER_OF_ALLOWED_LIKES, TEXT_LENGTH,
    USER_NAME_LENGTH, USER_URL_LENGTH, VIDEO_URL_LENGTH,
};
use crate::errors::PlatformError;

/// Borsh length prefix for String / Vec
const VEC_PREFIX: usize = 4;

// =============================================================================
// PLATFORM STATE
// =============================================================================

/// Global platform state.
/// Seeds: ["state"]
#[account]
pub struct StateAccount {
    /// Wallet that set up the platform
    pub signer: Pubkey,
    /// Number of uploaded videos; also the index of the next video
    pub video_count: u64,
    /// PDA bump
    pub bump: u8,
}

impl StateAccount {
    pub const LEN: usize = 8  // discriminator
        + 32  // signer
        + 8   // video_count
        + 1;  // bump

    /// Index the next uploaded video will receive.
    pub fn next_video_index(&self) -> u64 {
        self.video_count
    }

    /// Count an upload. Returns the index assigned to it.
    pub fn record_upload(&mut self) -> Result<u64> {
        let index = self.video_count;
        self.video_count = self
            .video_count
            .checked_add(1)
            .ok_or(PlatformError::MathOverflow)?;
        Ok(index)
    }
}

// =============================================================================
// USER
// =============================================================================

/// A wallet's profile.
/// Seeds: ["user", wallet]
#[account]
pub struct UserAccount {
    pub user_name: String,
    pub user_wallet_address: Pubkey,
    /// Profile image URL
    pub user_profile_image_url: String,
    /// Wallets recorded by follow_one_another
    pub people_i_follow: Vec<Pubkey>,
    /// Number of entries in people_i_follow
    pub following: u8,
    /// PDA bump
    pub bump: u8,
}

impl UserAccount {
    pub const LEN: usize = 8  // discriminator
        + VEC_PREFIX + USER_NAME_LENGTH                              // user_name
        + 32                                                         // user_wallet_address
        + VEC_PREFIX + USER_URL_LENGTH                               // user_profile_image_url
        + VEC_PREFIX + 32 * NUMBER_OF_ALLOWED_FOLLOWING as usize     // people_i_follow
        + 1   // following
        + 1;  // bump

    pub fn is_followed_by(&self, wallet: &Pubkey) -> bool {
        self.people_i_follow.iter().any(|w| w == wallet)
    }

    /// Record `wallet` against this profile.
    pub fn record_follow(&mut self, wallet: Pubkey) -> Result<()> {
        require!(
            self.following < NUMBER_OF_ALLOWED_FOLLOWING,
            PlatformError::ReachedMaxFollowing
        );
        require!(!self.is_followed_by(&wallet), PlatformError::UserIsFollowed);

        self.people_i_follow.push(wallet);
        self.following = self
            .following
            .checked_add(1)
            .ok_or(PlatformError::MathOverflow)?;
        Ok(())
    }
}

// =============================================================================
// VIDEO
// =============================================================================

/// An uploaded video.
/// Seeds: ["video", index (u64 BE)]
#[account]
pub struct VideoAccount {
    /// Uploader wallet
    pub signer: Pubkey,
    pub description: String,
    pub video_url: String,
    pub uploader_name: String,
    pub uploader_url: String,
    /// Number of comments; also the index of the next comment
    pub comment_count: u64,
    /// Video index
    pub index: u64,
    /// Upload unix timestamp
    pub creator_time: i64,
    /// Wallets that liked this video
    pub people_who_liked: Vec<Pubkey>,
    /// Number of entries in people_who_liked
    pub likes: u8,
    /// Moderation score: approvals minus disapprovals
    pub remove: i64,
    /// PDA bump
    pub bump: u8,
}

impl VideoAccount {
    pub const LEN: usize = 8  // discriminator
        + 32  // signer
        + VEC_PREFIX + TEXT_LENGTH                               // description
        + VEC_PREFIX + VIDEO_URL_LENGTH                          // video_url
        + VEC_PREFIX + USER_NAME_LENGTH                          // uploader_name
        + VEC_PREFIX + USER_URL_LENGTH                           // uploader_url
        + 8   // comment_count
        + 8   // index
        + 8   // creator_time
        + VEC_PREFIX + 32 * NUMBER_OF_ALLOWED_LIKES as usize     // people_who_liked
        + 1   // likes
        + 8   // remove
        + 1;  // bump

    pub fn is_censored(&self) -> bool {
        self.remove <= CENSORSHIP_THRESHOLD
    }

    pub fn has_liked(&self, wallet: &Pubkey) -> bool {
        self.people_who_liked.iter().any(|w| w == wallet)
    }

    /// Record a like from `wallet`.
    ///
    /// Checks run in order: capacity, censorship, duplicate.
    pub fn record_like(&mut self, wallet: Pubkey) -> Result<()> {
        require!(
            self.likes < NUMBER_OF_ALLOWED_LIKES,
            PlatformError::ReachedMaxLikes
        );
        require!(!self.is_censored(), PlatformError::UserCensoredVideo);
        require!(!self.has_liked(&wallet), PlatformError::UserLikedVideo);

        self.people_who_liked.push(wallet);
        self.likes = self.likes.checked_add(1).ok_or(PlatformError::MathOverflow)?;
        Ok(())
    }

    /// Count a comment. Returns the index assigned to it.
    pub fn record_comment(&mut self) -> Result<u64> {
        require!(!self.is_censored(), PlatformError::UserCensoredVideo);

        let index = self.comment_count;
        self.comment_count = self
            .comment_count
            .checked_add(1)
            .ok_or(PlatformError::MathOverflow)?;
        Ok(index)
    }

    pub fn approve(&mut self) -> Result<i64> {
        self.remove = self.remove.checked_add(1).ok_or(PlatformError::MathOverflow)?;
        Ok(self.remove)
    }

    pub fn disapprove(&mut self) -> Result<i64> {
        self.remove = self.remove.checked_sub(1).ok_or(PlatformError::MathOverflow)?;
        Ok(self.remove)
    }
}

// =============================================================================
// COMMENT
// =============================================================================

/// A comment on a video.
/// Seeds: ["comment", video_index (u64 BE), comment_index (u64 BE)]
#[account]
pub struct CommentAccount {
    /// Commenter wallet
    pub signer: Pubkey,
    pub text: String,
    pub commenter_name: String,
    pub commenter_url: String,
    /// Comment index within its video
    pub index: u64,
    /// Comment unix timestamp
    pub video_time: i64,
    /// PDA bump
    pub bump: u8,
}

impl CommentAccount {
    pub const LEN: usize = 8  // discriminator
        + 32  // signer
        + VEC_PREFIX + TEXT_LENGTH          // text
        + VEC_PREFIX + USER_NAME_LENGTH     // commenter_name
        + VEC_PREFIX + USER_URL_LENGTH      // commenter_url
        + 8   // index
        + 8   // video_time
        + 1;  // bump
}
