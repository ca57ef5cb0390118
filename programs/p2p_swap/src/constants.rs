// PDA seeds
pub const USER_PROFILE_SEED: &[u8] = b"user_profile";
pub const OFFER_SEED: &[u8] = b"offer";
pub const VAULT_SEED: &[u8] = b"vault";
