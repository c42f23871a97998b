//! Record the signing wallet on another user's profile.

use anchor_lang::prelude::*;

use crate::constants::USER_SEED;
use crate::events::UserFollowed;
use crate::state::UserAccount;

#[derive(Accounts)]
pub struct FollowOneAnother<'info> {
    #[account(
        mut,
        seeds = [USER_SEED, user.user_wallet_address.as_ref()],
        bump = user.bump,
    )]
    pub user: Account<'info, UserAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub clock: Sysvar<'info, Clock>,
}

pub fn handler(ctx: Context<FollowOneAnother>) -> Result<()> {
    let follower = ctx.accounts.signer.key();
    let user = &mut ctx.accounts.user;
    user.record_follow(follower)?;

    emit!(UserFollowed {
        user: user.key(),
        follower,
        following: user.following,
        timestamp: ctx.accounts.clock.unix_timestamp,
    });

    msg!("{} recorded on {} ({}/5)", follower, user.user_wallet_address, user.following);
    Ok(())
}
