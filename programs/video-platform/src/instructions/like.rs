//! Like a video.

use anchor_lang::prelude::*;

use crate::constants::VIDEO_SEED;
use crate::events::VideoLiked;
use crate::state::VideoAccount;

#[derive(Accounts)]
pub struct LikeVideo<'info> {
    #[account(
        mut,
        seeds = [VIDEO_SEED, video.index.to_be_bytes().as_ref()],
        bump = video.bump,
    )]
    pub video: Box<Account<'info, VideoAccount>>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub clock: Sysvar<'info, Clock>,
}

pub fn handler(ctx: Context<LikeVideo>) -> Result<()> {
    let liker = ctx.accounts.signer.key();
    let video = &mut ctx.accounts.video;
    video.record_like(liker)?;

    emit!(VideoLiked {
        video: video.key(),
        liker,
        likes: video.likes,
        timestamp: ctx.accounts.clock.unix_timestamp,
    });

    msg!("Video {} liked by {} ({} likes)", video.index, liker, video.likes);
    Ok(())
}
