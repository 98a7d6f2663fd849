use shared::{FeeConfig, SwapRequest};
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

// Storage keys for escrow configuration (instance storage)
const ADMIN: Symbol = symbol_short!("admin");
const FEE_CFG: Symbol = symbol_short!("fee_cfg");
const NEXT_ID: Symbol = symbol_short!("next_id");

pub(crate) const FIRST_REQUEST_ID: u64 = 1;

// Ledger lifetimes
const DAY_IN_LEDGERS: u32 = 17_280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const REQUEST_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const REQUEST_LIFETIME_THRESHOLD: u32 = REQUEST_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Swap requests are keyed by id and never removed
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SwapDataKey {
    Request(u64),
}

pub(crate) fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub(crate) fn write_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&ADMIN, admin);
}

pub(crate) fn read_admin(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&ADMIN)
        .unwrap_or_else(|| panic!("Admin not set"))
}

pub(crate) fn write_fee_config(env: &Env, config: &FeeConfig) {
    env.storage().instance().set(&FEE_CFG, config);
}

pub(crate) fn read_fee_config(env: &Env) -> FeeConfig {
    env.storage()
        .instance()
        .get(&FEE_CFG)
        .unwrap_or_else(|| panic!("Fee config not set"))
}

pub(crate) fn read_next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&NEXT_ID)
        .unwrap_or_else(|| panic!("Next request id not set"))
}

/// Hands out the next request id and advances the counter.
pub(crate) fn allocate_id(env: &Env) -> u64 {
    let id = read_next_id(env);
    env.storage().instance().set(&NEXT_ID, &(id + 1));
    id
}

pub(crate) fn write_next_id(env: &Env, id: u64) {
    env.storage().instance().set(&NEXT_ID, &id);
}

pub(crate) fn write_request(env: &Env, request: &SwapRequest) {
    let key = SwapDataKey::Request(request.id);
    env.storage().persistent().set(&key, request);
    env.storage()
        .persistent()
        .extend_ttl(&key, REQUEST_LIFETIME_THRESHOLD, REQUEST_BUMP_AMOUNT);
}

pub(crate) fn read_request(env: &Env, id: u64) -> Option<SwapRequest> {
    let key = SwapDataKey::Request(id);
    let request: Option<SwapRequest> = env.storage().persistent().get(&key);
    if request.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, REQUEST_LIFETIME_THRESHOLD, REQUEST_BUMP_AMOUNT);
    }
    request
}
