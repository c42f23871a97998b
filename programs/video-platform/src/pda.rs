//! Program-derived address helpers.
//!
//! Counters are encoded as 8-byte big-endian so that clients deriving
//! addresses with `toArrayLike(Buffer, "be", 8)` land on the same accounts.

use anchor_lang::prelude::*;

use crate::constants::{COMMENT_SEED, STATE_SEED, USER_SEED, VIDEO_SEED};

pub fn find_state_address(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[STATE_SEED], program_id)
}

pub fn find_user_address(wallet: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_SEED, wallet.as_ref()], program_id)
}

pub fn find_video_address(video_index: u64, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VIDEO_SEED, &video_index.to_be_bytes()], program_id)
}

pub fn find_comment_address(
    video_index: u64,
    comment_index: u64,
    program_id: &Pubkey,
) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            COMMENT_SEED,
            &video_index.to_be_bytes(),
            &comment_index.to_be_bytes(),
        ],
        program_id,
    )
}
