//! Canonical PDA derivations mirroring the program's seeds constraints,
//! for clients and tests. The bumps returned here are the ones persisted
//! in [`Offer`], so later instructions re-validate instead of re-searching.
//!
//! [`Offer`]: crate::state::Offer

use anchor_lang::prelude::*;

use crate::constants::{OFFER_SEED, USER_PROFILE_SEED, VAULT_SEED};

/// Profile address for a wallet
pub fn user_profile_pda(owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[USER_PROFILE_SEED, owner.as_ref()], &crate::ID)
}

/// Offer address for a (maker, offer id) pair
pub fn offer_pda(maker: &Pubkey, offer_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[OFFER_SEED, maker.as_ref(), &offer_id.to_le_bytes()],
        &crate::ID,
    )
}

/// Vault address for an offer and the mint it escrows
pub fn vault_pda(offer: &Pubkey, mint_offered: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VAULT_SEED, offer.as_ref(), mint_offered.as_ref()],
        &crate::ID,
    )
}
