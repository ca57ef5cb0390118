use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::constants::{OFFER_SEED, VAULT_SEED};
use crate::errors::SwapError;
use crate::state::Offer;

#[derive(Accounts)]
#[instruction(offer_id: u64)]
pub struct AcceptOffer<'info> {
    /// The taker who accepts the exchange terms
    #[account(mut)]
    pub taker: Signer<'info>,

    /// The maker; receives the rent refunds. No signature required,
    /// validated against the offer record by `has_one`.
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Offer record, re-derived from (maker, offer_id) with the stored
    /// bump; closed to the maker on success
    #[account(
        mut,
        close = maker,
        has_one = maker @ SwapError::Unauthorized,
        has_one = mint_offered @ SwapError::InvalidMint,
        has_one = mint_wanted @ SwapError::InvalidMint,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer_id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Box<Account<'info, Offer>>,

    /// Mint locked in the vault
    pub mint_offered: Box<Account<'info, Mint>>,

    /// Mint the maker wants in return
    pub mint_wanted: Box<Account<'info, Mint>>,

    /// Vault holding the offered tokens, spendable only by the offer PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, offer.key().as_ref(), mint_offered.key().as_ref()],
        bump = offer.vault_bump,
        token::mint = mint_offered,
        token::authority = offer,
    )]
    pub vault: Box<Account<'info, TokenAccount>>,

    /// Taker's token account receiving the vault contents
    #[account(
        mut,
        constraint = taker_account_offered.mint == offer.mint_offered @ SwapError::InvalidMint,
        constraint = taker_account_offered.owner == taker.key() @ SwapError::Unauthorized,
    )]
    pub taker_account_offered: Box<Account<'info, TokenAccount>>,

    /// Taker's token account paying the wanted amount
    #[account(
        mut,
        constraint = taker_account_wanted.mint == offer.mint_wanted @ SwapError::InvalidMint,
        constraint = taker_account_wanted.owner == taker.key() @ SwapError::Unauthorized,
    )]
    pub taker_account_wanted: Box<Account<'info, TokenAccount>>,

    /// Maker's token account receiving the wanted amount
    #[account(
        mut,
        constraint = maker_account_wanted.mint == offer.mint_wanted @ SwapError::InvalidMint,
        constraint = maker_account_wanted.owner == maker.key() @ SwapError::Unauthorized,
    )]
    pub maker_account_wanted: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> AcceptOffer<'info> {
    /// Release the escrowed tokens from the vault to the taker, signed
    /// by the program with the offer PDA's seeds
    pub fn release_to_taker(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            &self.offer.offer_id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.taker_account_offered.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.offer.amount_offered, self.mint_offered.decimals)
    }

    /// Transfer the wanted tokens from the taker to the maker
    pub fn pay_maker(&mut self) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.taker_account_wanted.to_account_info(),
            mint: self.mint_wanted.to_account_info(),
            to: self.maker_account_wanted.to_account_info(),
            authority: self.taker.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new(cpi_program, cpi_accounts);

        transfer_checked(cpi_ctx, self.offer.amount_wanted, self.mint_wanted.decimals)
    }

    /// Close the vault account and return its rent to the maker
    pub fn close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            &self.offer.offer_id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        close_account(cpi_ctx)
    }
}

/// Handler for the accept_offer instruction
pub fn handler(ctx: Context<AcceptOffer>, offer_id: u64) -> Result<()> {
    ctx.accounts.offer.assert_id(offer_id)?;
    Offer::assert_funded(
        ctx.accounts.taker_account_wanted.amount,
        ctx.accounts.offer.amount_wanted,
    )?;

    ctx.accounts.release_to_taker()?;
    ctx.accounts.pay_maker()?;
    ctx.accounts.close_vault()?;
    // the offer account itself is closed to the maker by `close = maker`

    msg!(
        "Offer {} accepted by {}",
        ctx.accounts.offer.offer_id,
        ctx.accounts.taker.key()
    );

    Ok(())
}
