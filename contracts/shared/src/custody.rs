use soroban_sdk::{log, token, Address, Env};

use crate::types::Error;

/// Checks that `owner` can fund a delegated pull of `amount` by the escrow.
/// Allowance is checked first, matching the order the token contract itself
/// enforces in `transfer_from`.
pub fn ensure_pullable(env: &Env, asset: &Address, owner: &Address, amount: i128) -> Result<(), Error> {
    let token_client = token::Client::new(env, asset);
    let escrow = env.current_contract_address();

    let allowance = token_client.allowance(owner, &escrow);
    if allowance < amount {
        log!(env, "Insufficient allowance. Required: {}, Available: {}", amount, allowance);
        return Err(Error::InsufficientAllowance);
    }

    let balance = token_client.balance(owner);
    if balance < amount {
        log!(env, "Insufficient balance. Required: {}, Available: {}", amount, balance);
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

/// Moves `amount` of `asset` from `owner` into the escrow's custody through the
/// owner's allowance. Callers run `ensure_pullable` first so a shortfall
/// surfaces as an `Error` instead of a host trap.
pub fn collect(env: &Env, asset: &Address, owner: &Address, amount: i128) {
    let escrow = env.current_contract_address();
    token::Client::new(env, asset).transfer_from(&escrow, owner, &escrow, &amount);
}

/// Pays `amount` of `asset` out of the escrow's custody. Non-positive amounts are a no-op.
pub fn pay_out(env: &Env, asset: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    if amount <= 0 {
        return Ok(());
    }
    let token_client = token::Client::new(env, asset);
    token_client.transfer(&env.current_contract_address(), to, &amount);
    Ok(())
}
