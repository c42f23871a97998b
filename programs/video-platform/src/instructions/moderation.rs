//! Community moderation votes on videos.
//!
//! Any signer may vote. A video whose score drops to the censorship
//! threshold stops accepting comments and likes.

use anchor_lang::prelude::*;

use crate::constants::VIDEO_SEED;
use crate::events::VideoModerated;
use crate::state::VideoAccount;

#[derive(Accounts)]
pub struct ModerateVideo<'info> {
    #[account(
        mut,
        seeds = [VIDEO_SEED, video.index.to_be_bytes().as_ref()],
        bump = video.bump,
    )]
    pub video: Box<Account<'info, VideoAccount>>,

    pub signer: Signer<'info>,
}

pub fn approve_video(ctx: Context<ModerateVideo>) -> Result<()> {
    let score = ctx.accounts.video.approve()?;
    record_vote(&ctx, 1, score)
}

pub fn disapprove_video(ctx: Context<ModerateVideo>) -> Result<()> {
    let score = ctx.accounts.video.disapprove()?;
    record_vote(&ctx, -1, score)
}

fn record_vote(ctx: &Context<ModerateVideo>, delta: i8, score: i64) -> Result<()> {
    let video = &ctx.accounts.video;

    emit!(VideoModerated {
        video: video.key(),
        moderator: ctx.accounts.signer.key(),
        delta,
        score,
        censored: video.is_censored(),
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Video {} moderation score: {}", video.index, score);
    Ok(())
}
