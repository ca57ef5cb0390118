use anchor_lang::prelude::*;
use anchor_spl::token::{
    close_account, transfer_checked, CloseAccount, Mint, Token, TokenAccount, TransferChecked,
};

use crate::constants::{OFFER_SEED, VAULT_SEED};
use crate::errors::SwapError;
use crate::state::Offer;

#[derive(Accounts)]
#[instruction(offer_id: u64)]
pub struct CancelOffer<'info> {
    /// The maker reclaiming the escrow; the only identity allowed here
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Offer record, re-derived from (maker, offer_id) with the stored
    /// bump; closed to the maker on success
    #[account(
        mut,
        close = maker,
        has_one = maker @ SwapError::Unauthorized,
        has_one = mint_offered @ SwapError::InvalidMint,
        seeds = [OFFER_SEED, maker.key().as_ref(), offer_id.to_le_bytes().as_ref()],
        bump = offer.bump,
    )]
    pub offer: Account<'info, Offer>,

    /// Mint locked in the vault
    pub mint_offered: Account<'info, Mint>,

    /// Vault holding the offered tokens, spendable only by the offer PDA
    #[account(
        mut,
        seeds = [VAULT_SEED, offer.key().as_ref(), mint_offered.key().as_ref()],
        bump = offer.vault_bump,
        token::mint = mint_offered,
        token::authority = offer,
    )]
    pub vault: Account<'info, TokenAccount>,

    /// Maker's token account receiving the refunded deposit
    #[account(
        mut,
        constraint = maker_token_account.mint == offer.mint_offered @ SwapError::InvalidMint,
        constraint = maker_token_account.owner == maker.key() @ SwapError::Unauthorized,
    )]
    pub maker_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> CancelOffer<'info> {
    /// Return the vault's full balance to the maker, then close the
    /// vault so its rent is refunded too
    pub fn refund_and_close_vault(&mut self) -> Result<()> {
        let signer_seeds: &[&[&[u8]]] = &[&[
            OFFER_SEED,
            self.maker.key.as_ref(),
            &self.offer.offer_id.to_le_bytes(),
            &[self.offer.bump],
        ]];

        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_offered.to_account_info(),
            to: self.maker_token_account.to_account_info(),
            authority: self.offer.to_account_info(),
        };
        let cpi_program = self.token_program.to_account_info();
        let cpi_ctx = CpiContext::new_with_signer(cpi_program, cpi_accounts, signer_seeds);

        transfer_checked(cpi_ctx, self.vault.amount, self.mint_offered.decimals)?;

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

/// Handler for the cancel_offer instruction
pub fn handler(ctx: Context<CancelOffer>, offer_id: u64) -> Result<()> {
    ctx.accounts.offer.assert_maker(ctx.accounts.maker.key)?;
    ctx.accounts.offer.assert_id(offer_id)?;
    ctx.accounts.refund_and_close_vault()?;
    // the offer account itself is closed to the maker by `close = maker`

    msg!("Offer {} cancelled", ctx.accounts.offer.offer_id);

    Ok(())
}
