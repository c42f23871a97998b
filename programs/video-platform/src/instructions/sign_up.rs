//! Create a user profile for the signing wallet.

use anchor_lang::prelude::*;
use solana_program::log::sol_log_compute_units;

use crate::constants::{USER_NAME_LENGTH, USER_SEED, USER_URL_LENGTH};
use crate::errors::PlatformError;
use crate::events::UserSignedUp;
use crate::state::UserAccount;
use crate::validation::{require_max_len, require_present};

#[derive(Accounts)]
pub struct SignUpUser<'info> {
    #[account(
        init,
        payer = signer,
        space = UserAccount::LEN,
        seeds = [USER_SEED, signer.key().as_ref()],
        bump
    )]
    pub user: Account<'info, UserAccount>,

    #[account(mut)]
    pub signer: Signer<'info>,

    pub system_program: Program<'info, System>,
    pub clock: Sysvar<'info, Clock>,
}

pub fn handler(ctx: Context<SignUpUser>, name: String, profile_url: String) -> Result<()> {
    require_present(&[name.as_str(), profile_url.as_str()], PlatformError::CannotSignUpUser)?;
    require_max_len(&name, USER_NAME_LENGTH, PlatformError::ExceededNameMaxLength)?;
    require_max_len(&profile_url, USER_URL_LENGTH, PlatformError::ExceededUserUrlMaxLength)?;

    let user = &mut ctx.accounts.user;
    user.user_name = name;
    user.user_wallet_address = ctx.accounts.signer.key();
    user.user_profile_image_url = profile_url;
    user.people_i_follow = Vec::new();
    user.following = 0;
    user.bump = ctx.bumps.user;

    emit!(UserSignedUp {
        user: user.key(),
        wallet: user.user_wallet_address,
        user_name: user.user_name.clone(),
        timestamp: ctx.accounts.clock.unix_timestamp,
    });

    msg!("New user added: {}", user.user_wallet_address);
    sol_log_compute_units();
    Ok(())
}
