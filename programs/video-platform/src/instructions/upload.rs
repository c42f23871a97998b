//! Upload a video at the next platform index.

use anchor_lang::prelude::*;
use solana_program::log::sol_log_compute_units;

use crate::constants::{
    STATE_SEED, TEXT_LENGTH, USER_NAME_LENGTH, USER_URL_LENGTH, VIDEO_SEED, VIDEO_URL_LENGTH,
};
use crate::errors::PlatformError;
use crate::events::VideoUploaded;
use crate::state::{StateAccount, VideoAccount};
use crate::validation::{require_max_len, require_present};

#[derive(Accounts)]
pub struct UploadVideo<'info> {
    #[account(
        mut,
        seeds = [STATE_SEED],
        bump = state.bump,
    )]
    pub state: Account<'info, StateAccount>,

    /// New video PDA at the current video_count
    #[account(
        init,
        payer = signer,
        space = VideoAccount::LEN,
        seeds = [VIDEO_SEED, state.next_video_index().to_be_bytes().as_ref()],
        bump
    )]
    pub video: Box<Account<'info, VideoAccount>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub clock: Sysvar<'info, Clock>,
}

pub fn handler(
    ctx: Context<UploadVideo>,
    description: String,
    video_url: String,
    uploader_name: String,
    uploader_url: String,
) -> Result<()> {
    msg!("{}", description);

    require_present(
        &[description.as_str(), video_url.as_str(), uploader_name.as_str(), uploader_url.as_str()],
        PlatformError::CannotUploadVideo,
    )?;
    require_max_len(&description, TEXT_LENGTH, PlatformError::ExceededTextMaxLength)?;
    require_max_len(&video_url, VIDEO_URL_LENGTH, PlatformError::ExceededVideoUrlMaxLength)?;
    require_max_len(&uploader_name, USER_NAME_LENGTH, PlatformError::ExceededNameMaxLength)?;
    require_max_len(&uploader_url, USER_URL_LENGTH, PlatformError::ExceededUserUrlMaxLength)?;

    let state = &mut ctx.accounts.state;
    let index = state.record_upload()?;

    let video = &mut ctx.accounts.video;
    video.signer = ctx.accounts.signer.key();
    video.description = description;
    video.video_url = video_url;
    video.uploader_name = uploader_name;
    video.uploader_url = uploader_url;
    video.comment_count = 0;
    video.index = index;
    video.creator_time = ctx.accounts.clock.unix_timestamp;
    video.people_who_liked = Vec::new();
    video.likes = 0;
    video.remove = 0;
    video.bump = ctx.bumps.video;

    emit!(VideoUploaded {
        video: video.key(),
        uploader: video.signer,
        index,
        video_count: state.video_count,
        timestamp: video.creator_time,
    });

    msg!("New video added: index={}, total={}", index, state.video_count);
    sol_log_compute_units();
    Ok(())
}
