use std::collections::HashSet;

use anchor_lang::prelude::*;

use crate::constants::{OFFER_SEED, USER_PROFILE_SEED, VAULT_SEED};
use crate::pda::{offer_pda, user_profile_pda, vault_pda};

#[test]
fn derivation_is_deterministic() {
    let owner = Pubkey::new_unique();

    assert_eq!(user_profile_pda(&owner), user_profile_pda(&owner));
    assert_eq!(offer_pda(&owner, 7), offer_pda(&owner, 7));

    let (offer, _) = offer_pda(&owner, 7);
    let mint = Pubkey::new_unique();
    assert_eq!(vault_pda(&offer, &mint), vault_pda(&offer, &mint));
}

#[test]
fn offer_ids_never_collide_for_one_maker() {
    let maker = Pubkey::new_unique();

    let mut seen = HashSet::new();
    for offer_id in 0..100u64 {
        let (offer, _) = offer_pda(&maker, offer_id);
        assert!(seen.insert(offer), "duplicate offer PDA for id {offer_id}");
    }
}

#[test]
fn makers_never_share_offer_addresses() {
    let maker_a = Pubkey::new_unique();
    let maker_b = Pubkey::new_unique();

    assert_ne!(offer_pda(&maker_a, 0).0, offer_pda(&maker_b, 0).0);
}

#[test]
fn profiles_are_distinct_per_owner() {
    let alice = Pubkey::new_unique();
    let bob = Pubkey::new_unique();

    assert_ne!(user_profile_pda(&alice).0, user_profile_pda(&bob).0);
}

#[test]
fn vault_depends_on_offer_and_mint() {
    let maker = Pubkey::new_unique();
    let (offer_0, _) = offer_pda(&maker, 0);
    let (offer_1, _) = offer_pda(&maker, 1);
    let mint_a = Pubkey::new_unique();
    let mint_b = Pubkey::new_unique();

    assert_ne!(vault_pda(&offer_0, &mint_a).0, vault_pda(&offer_1, &mint_a).0);
    assert_ne!(vault_pda(&offer_0, &mint_a).0, vault_pda(&offer_0, &mint_b).0);
}

/// The bump persisted at creation must re-validate the same address
/// without a search, exactly as the seeds constraints do on-chain.
#[test]
fn stored_bump_revalidates_addresses() {
    let maker = Pubkey::new_unique();
    let offer_id = 42u64;

    let (offer, offer_bump) = offer_pda(&maker, offer_id);
    let recomputed = Pubkey::create_program_address(
        &[
            OFFER_SEED,
            maker.as_ref(),
            &offer_id.to_le_bytes(),
            &[offer_bump],
        ],
        &crate::ID,
    )
    .expect("canonical bump must be valid");
    assert_eq!(offer, recomputed);

    let mint = Pubkey::new_unique();
    let (vault, vault_bump) = vault_pda(&offer, &mint);
    let recomputed = Pubkey::create_program_address(
        &[VAULT_SEED, offer.as_ref(), mint.as_ref(), &[vault_bump]],
        &crate::ID,
    )
    .expect("canonical bump must be valid");
    assert_eq!(vault, recomputed);

    let owner = Pubkey::new_unique();
    let (profile, profile_bump) = user_profile_pda(&owner);
    let recomputed = Pubkey::create_program_address(
        &[USER_PROFILE_SEED, owner.as_ref(), &[profile_bump]],
        &crate::ID,
    )
    .expect("canonical bump must be valid");
    assert_eq!(profile, recomputed);
}
