use anchor_lang::prelude::*;

use crate::errors::SwapError;

/// Per-user profile that mints unique offer ids
#[account]
#[derive(InitSpace)]
pub struct UserProfile {
    /// The user's wallet address
    pub owner: Pubkey,
    /// Monotonic counter; the next offer created by this user takes
    /// the current value as its id
    pub offer_count: u64,
}

impl UserProfile {
    /// Counter value after recording one more offer
    pub fn bumped_count(&self) -> Result<u64> {
        self.offer_count
            .checked_add(1)
            .ok_or_else(|| error!(SwapError::CounterOverflow))
    }
}

/// Offer account that stores all the exchange terms
#[account]
#[derive(InitSpace)]
pub struct Offer {
    /// Id snapshot taken from the maker's profile counter at creation
    pub offer_id: u64,
    /// The maker's wallet address (creator of the offer)
    pub maker: Pubkey,
    /// Mint of the token locked in the vault
    pub mint_offered: Pubkey,
    /// Mint of the token the maker wants in return
    pub mint_wanted: Pubkey,
    /// Amount of the offered token held by the vault
    pub amount_offered: u64,
    /// Amount of the wanted token the taker must pay
    pub amount_wanted: u64,
    /// Bump seed for the vault PDA (cached so reads never re-search)
    pub vault_bump: u8,
    /// Bump seed for this offer PDA
    pub bump: u8,
    /// Unix timestamp at creation
    pub created_at: i64,
}

impl Offer {
    /// Both legs of a new offer must be strictly positive
    pub fn validate_terms(amount_offered: u64, amount_wanted: u64) -> Result<()> {
        require_gt!(amount_offered, 0, SwapError::InvalidAmount);
        require_gt!(amount_wanted, 0, SwapError::InvalidAmount);
        Ok(())
    }

    /// A funding account must cover the transfer about to leave it
    pub fn assert_funded(balance: u64, required: u64) -> Result<()> {
        require_gte!(balance, required, SwapError::InsufficientBalance);
        Ok(())
    }

    /// Only the recorded maker may reclaim the escrow
    pub fn assert_maker(&self, signer: &Pubkey) -> Result<()> {
        require_keys_eq!(self.maker, *signer, SwapError::Unauthorized);
        Ok(())
    }

    /// The stored record must agree with the caller-supplied id
    pub fn assert_id(&self, offer_id: u64) -> Result<()> {
        require_eq!(self.offer_id, offer_id, SwapError::RecordMismatch);
        Ok(())
    }
}
