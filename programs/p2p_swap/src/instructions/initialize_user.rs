use anchor_lang::prelude::*;

use crate::constants::USER_PROFILE_SEED;
use crate::errors::SwapError;
use crate::state::UserProfile;

#[derive(Accounts)]
pub struct InitializeUser<'info> {
    /// The wallet the profile will belong to; pays the rent
    #[account(mut)]
    pub owner: Signer<'info>,

    /// Profile holding the owner's offer counter.
    /// `init_if_needed` so the handler can reject a live profile with
    /// `AlreadyInitialized` instead of an opaque system error.
    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + UserProfile::INIT_SPACE,
        seeds = [USER_PROFILE_SEED, owner.key().as_ref()],
        bump,
    )]
    pub user_profile: Account<'info, UserProfile>,

    pub system_program: Program<'info, System>,
}

/// Handler for the initialize_user instruction
pub fn handler(ctx: Context<InitializeUser>) -> Result<()> {
    let user_profile = &mut ctx.accounts.user_profile;

    // A freshly created profile is zeroed; anything else was initialized
    // before and must not have its counter reset.
    require_keys_eq!(
        user_profile.owner,
        Pubkey::default(),
        SwapError::AlreadyInitialized
    );

    user_profile.owner = ctx.accounts.owner.key();
    user_profile.offer_count = 0;

    msg!("User profile initialized for {}", user_profile.owner);

    Ok(())
}
