//! # Video Platform
//!
//! Social video platform: wallet profiles, sequentially indexed videos and
//! comments, bounded likes and follows, and community moderation votes.

use anchor_lang::prelude::*;

#[cfg(not(feature = "no-entrypoint"))]
use solana_security_txt::security_txt;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod pda;
pub mod state;
pub mod validation;

pub use constants::*;
pub use errors::*;
pub use events::*;
pub use instructions::*;
pub use pda::*;
pub use state::*;

declare_id!("GhjiHH45ea3mUuKWHy5dutYMreBLSotzD82ScdY5ES4H");

#[cfg(not(feature = "no-entrypoint"))]
security_txt! {
    name: "Video Platform",
    project_url: "https://github.com/video-platform/video-platform",
    contacts: "email:security@video-platform.dev",
    policy: "https://github.com/video-platform/video-platform/blob/main/SECURITY.md",
    preferred_languages: "en",
    source_code: "https://github.com/video-platform/video-platform"
}

#[program]
pub mod video_platform {
    use super::*;

    // -------------------------------------------------------------------------
    // Platform
    // -------------------------------------------------------------------------

    /// Create the global platform state. One-time.
    pub fn setup_platform(ctx: Context<SetupPlatform>) -> Result<()> {
        instructions::setup::handler(ctx)
    }

    // -------------------------------------------------------------------------
    // Profiles
    // -------------------------------------------------------------------------

    /// Create the signer's profile.
    pub fn sign_up_user(
        ctx: Context<SignUpUser>,
        name: String,
        profile_url: String,
    ) -> Result<()> {
        instructions::sign_up::handler(ctx, name, profile_url)
    }

    /// Record the signer on another user's profile (max 5).
    pub fn follow_one_another(ctx: Context<FollowOneAnother>) -> Result<()> {
        instructions::follow::handler(ctx)
    }

    // -------------------------------------------------------------------------
    // Content
    // -------------------------------------------------------------------------

    /// Upload a video at index `state.video_count`.
    pub fn upload_video(
        ctx: Context<UploadVideo>,
        description: String,
        video_url: String,
        uploader_name: String,
        uploader_url: String,
    ) -> Result<()> {
        instructions::upload::handler(ctx, description, video_url, uploader_name, uploader_url)
    }

    /// Comment on a video at index `video.comment_count`.
    pub fn create_comment(
        ctx: Context<CreateComment>,
        text: String,
        commenter_name: String,
        commenter_url: String,
    ) -> Result<()> {
        instructions::comment::handler(ctx, text, commenter_name, commenter_url)
    }

    /// Like a video once per wallet (max 5 likes per video).
    pub fn like_video(ctx: Context<LikeVideo>) -> Result<()> {
        instructions::like::handler(ctx)
    }

    // -------------------------------------------------------------------------
    // Moderation
    // -------------------------------------------------------------------------

    pub fn approve_video(ctx: Context<ModerateVideo>) -> Result<()> {
        instructions::moderation::approve_video(ctx)
    }

    pub fn disapprove_video(ctx: Context<ModerateVideo>) -> Result<()> {
        instructions::moderation::disapprove_video(ctx)
    }
}
