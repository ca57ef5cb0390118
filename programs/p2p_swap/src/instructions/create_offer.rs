use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

use crate::constants::{OFFER_SEED, USER_PROFILE_SEED, VAULT_SEED};
use crate::errors::SwapError;
use crate::state::{Offer, UserProfile};

#[derive(Accounts)]
pub struct CreateOffer<'info> {
    /// The maker who sets the exchange terms and funds the vault
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Maker's profile; created on first use so a separate
    /// initialize_user call is optional
    #[account(
        init_if_needed,
        payer = maker,
        space = 8 + UserProfile::INIT_SPACE,
        seeds = [USER_PROFILE_SEED, maker.key().as_ref()],
        bump,
    )]
    pub user_profile: Account<'info, UserProfile>,

    /// Offer account keyed by the counter snapshot; stores all terms
    #[account(
        init,
        payer = maker,
        space = 8 + Offer::INIT_SPACE,
        seeds = [
            OFFER_SEED,
            maker.key().as_ref(),
            user_profile.offer_count.to_le_bytes().as_ref(),
        ],
        bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint of the token the maker deposits
    pub mint_offered: Account<'info, Mint>,

    /// Mint of the token the maker wants to receive
    pub mint_wanted: Account<'info, Mint>,

    /// Vault holding the deposit; spend authority is the offer PDA,
    /// so no wallet can move the funds directly
    #[account(
        init,
        payer = maker,
        seeds = [VAULT_SEED, offer.key().as_ref(), mint_offered.key().as_ref()],
        bump,
        token::mint = mint_offered,
        token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's token account funding the deposit
    #[account(
        mut,
        constraint = maker_token_account.mint == mint_offered.key() @ SwapError::InvalidMint,
        constraint = maker_token_account.owner == maker.key() @ SwapError::Unauthorized,
    )]
    pub maker_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> CreateOffer<'info> {
    /// Populate the offer record from the current counter snapshot
    pub fn init_offer(
        &mut self,
        amount_offered: u64,
        amount_wanted: u64,
        bumps: &CreateOfferBumps,
    ) -> Result<()> {
        let clock = Clock::get()?;
        self.offer.set_inner(Offer {
            offer_id: self.user_profile.offer_count,
            maker: self.maker.key(),
            mint_offered: self.mint_offered.key(),
            mint_wanted: self.mint_wanted.key(),
            amount_offered,
            amount_wanted,
            vault_bump: bumps.vault,
            bump: bumps.offer,
            created_at: clock.unix_timestamp,
        });
        Ok(())
    }

    /// Transfer the offered tokens from the maker into the vault
    pub fn deposit(&mut self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.maker_token_account.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, amount, self.mint_offered.decimals)
    }
}

/// Handler for the create_offer instruction
pub fn handler(ctx: Context<CreateOffer>, amount_offered: u64, amount_wanted: u64) -> Result<()> {
    Offer::validate_terms(amount_offered, amount_wanted)?;
    Offer::assert_funded(ctx.accounts.maker_token_account.amount, amount_offered)?;

    // Claim a freshly created profile; an existing one must already
    // belong to the maker (its PDA seeds guarantee it)
    if ctx.accounts.user_profile.owner == Pubkey::default() {
        ctx.accounts.user_profile.owner = ctx.accounts.maker.key();
    }
    require_keys_eq!(
        ctx.accounts.user_profile.owner,
        ctx.accounts.maker.key(),
        SwapError::Unauthorized
    );

    let offer_id = ctx.accounts.user_profile.offer_count;

    ctx.accounts.init_offer(amount_offered, amount_wanted, &ctx.bumps)?;
    ctx.accounts.deposit(amount_offered)?;

    // Advance the counter; the runtime discards everything above if
    // this overflows
    let user_profile = &mut ctx.accounts.user_profile;
    user_profile.offer_count = user_profile.bumped_count()?;

    msg!(
        "Offer {} created by {}: {} of {} for {} of {}",
        offer_id,
        ctx.accounts.maker.key(),
        amount_offered,
        ctx.accounts.mint_offered.key(),
        amount_wanted,
        ctx.accounts.mint_wanted.key()
    );

    Ok(())
}
