//! Error definitions for the video platform.

use anchor_lang::prelude::*;

#[error_code]
pub enum PlatformError {
    #[msg("User cannot be signed up, missing data")]
    CannotSignUpUser,

    #[msg("Video cannot be created, missing data")]
    CannotUploadVideo,

    #[msg("Comment cannot be created, missing data")]
    CannotCreateComment,

    #[msg("Cannot receive more than 5 likes")]
    ReachedMaxLikes,

    #[msg("User has already liked the video")]
    UserLikedVideo,

    #[msg("Cannot follow more than 5 people")]
    ReachedMaxFollowing,

    #[msg("User is already followed")]
    UserIsFollowed,

    #[msg("Video with potentially bad content")]
    UserCensoredVideo,

    #[msg("Exceeded name max length")]
    ExceededNameMaxLength,

    #[msg("Exceeded user url max length")]
    ExceededUserUrlMaxLength,

    #[msg("Exceeded text max length")]
    ExceededTextMaxLength,

    #[msg("Exceeded Video url max length")]
    ExceededVideoUrlMaxLength,

    #[msg("Math overflow")]
    MathOverflow,
}
