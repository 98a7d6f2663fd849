use shared::SwapRequest;
use soroban_sdk::{symbol_short, Address, Env};

pub(crate) fn swap_created(env: &Env, request: &SwapRequest) {
    env.events().publish(
        (symbol_short!("created"), request.id),
        (request.requester.clone(), request.approver.clone(), request.amount),
    );
}

pub(crate) fn swap_approved(env: &Env, id: u64, fee: i128, net: i128) {
    env.events().publish((symbol_short!("approved"), id), (fee, net));
}

pub(crate) fn swap_rejected(env: &Env, id: u64, amount: i128) {
    env.events().publish((symbol_short!("rejected"), id), amount);
}

pub(crate) fn swap_cancelled(env: &Env, id: u64, amount: i128) {
    env.events().publish((symbol_short!("cancelled"), id), amount);
}

pub(crate) fn fee_percent_set(env: &Env, fee_percent: u32) {
    env.events().publish((symbol_short!("fee_set"),), fee_percent);
}

pub(crate) fn treasury_set(env: &Env, treasury: &Address) {
    env.events().publish((symbol_short!("treas_set"),), treasury.clone());
}
