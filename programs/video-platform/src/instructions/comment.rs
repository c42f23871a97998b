//! Comment on a video at the video's next comment index.

use anchor_lang::prelude::*;

use crate::constants::{COMMENT_SEED, TEXT_LENGTH, USER_NAME_LENGTH, USER_URL_LENGTH, VIDEO_SEED};
use crate::errors::PlatformError;
use crate::events::CommentCreated;
use crate::state::{CommentAccount, VideoAccount};
use crate::validation::{require_max_len, require_present};

#[derive(Accounts)]
pub struct CreateComment<'info> {
    #[account(
        mut,
        seeds = [VIDEO_SEED, video.index.to_be_bytes().as_ref()],
        bump = video.bump,
    )]
    pub video: Box<Account<'info, VideoAccount>>,

    /// New comment PDA at the video's current comment_count
    #[account(
        init,
        payer = signer,
        space = CommentAccount::LEN,
        seeds = [
            COMMENT_SEED,
            video.index.to_be_bytes().as_ref(),
            video.comment_count.to_be_bytes().as_ref(),
        ],
        bump
    )]
    pub comment: Box<Account<'info, CommentAccount>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub clock: Sysvar<'info, Clock>,
}

pub fn handler(
    ctx: Context<CreateComment>,
    text: String,
    commenter_name: String,
    commenter_url: String,
) -> Result<()> {
    require_present(
        &[text.as_str(), commenter_name.as_str(), commenter_url.as_str()],
        PlatformError::CannotCreateComment,
    )?;
    require_max_len(&text, TEXT_LENGTH, PlatformError::ExceededTextMaxLength)?;
    require_max_len(&commenter_name, USER_NAME_LENGTH, PlatformError::ExceededNameMaxLength)?;
    require_max_len(&commenter_url, USER_URL_LENGTH, PlatformError::ExceededUserUrlMaxLength)?;

    let video = &mut ctx.accounts.video;
    let index = video.record_comment()?;

    let comment = &mut ctx.accounts.comment;
    comment.signer = ctx.accounts.signer.key();
    comment.text = text;
    comment.commenter_name = commenter_name;
    comment.commenter_url = commenter_url;
    comment.index = index;
    comment.video_time = ctx.accounts.clock.unix_timestamp;
    comment.bump = ctx.bumps.comment;

    emit!(CommentCreated {
        comment: comment.key(),
        video: video.key(),
        commenter: comment.signer,
        video_index: video.index,
        comment_index: index,
        timestamp: comment.video_time,
    });

    msg!("Comment {} added to video {}", index, video.index);
    Ok(())
}
