use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod pda;
pub mod state;

mod instructions;

#[cfg(test)]
mod tests;

use instructions::*;

declare_id!("AyTeuN3jTNp3C9VL5ZnePMKmKNWqrdKqv6hDLeycJr9o");

#[program]
pub mod p2p_swap {
    use super::*;

    /// Create a profile that tracks the caller's offer counter
    pub fn initialize_user(ctx: Context<InitializeUser>) -> Result<()> {
        instructions::initialize_user::handler(ctx)
    }

    /// Lock tokens in a vault and publish the exchange terms
    pub fn create_offer(
        ctx: Context<CreateOffer>,
        amount_offered: u64,
        amount_wanted: u64,
    ) -> Result<()> {
        instructions::create_offer::handler(ctx, amount_offered, amount_wanted)
    }

    /// Accept an offer: taker sends the wanted tokens, receives the vault
    pub fn accept_offer(ctx: Context<AcceptOffer>, offer_id: u64) -> Result<()> {
        instructions::accept_offer::handler(ctx, offer_id)
    }

    /// Cancel an offer: maker reclaims the vault and all rent
    pub fn cancel_offer(ctx: Context<CancelOffer>, offer_id: u64) -> Result<()> {
        instructions::cancel_offer::handler(ctx, offer_id)
    }
}
