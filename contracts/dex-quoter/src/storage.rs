use dex_types::{DexError, QuoterConfig};
use soroban_sdk::{contracttype, Env};

/// Storage keys for the quoter contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Collaborator addresses (Instance storage)
    Config,
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<QuoterConfig, DexError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(DexError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &QuoterConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}
