//! Create the global platform state.

use anchor_lang::prelude::*;

use crate::constants::STATE_SEED;
use crate::events::PlatformInitialized;
use crate::state::StateAccount;

#[derive(Accounts)]
pub struct SetupPlatform<'info> {
    /// Platform state PDA (fails if it already exists)
    #[account(
        init,
        payer = signer,
        space = StateAccount::LEN,
        seeds = [STATE_SEED],
        bump
    )]
    pub state: Account<'info, StateAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<SetupPlatform>) -> Result<()> {
    let state = &mut ctx.accounts.state;
    state.signer = ctx.accounts.signer.key();
    state.video_count = 0;
    state.bump = ctx.bumps.state;

    emit!(PlatformInitialized {
        state: state.key(),
        signer: state.signer,
        timestamp: Clock::get()?.unix_timestamp,
    });

    msg!("Platform initialized by {}", state.signer);
    Ok(())
}
