use shared::{
    collect, ensure_pullable, pay_out, split_leg, validate_fee_percent, Error, FeeConfig,
    SwapRequest, SwapStatus,
};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env};

use crate::{events, storage};

#[contract]
pub struct SwapEscrow;

#[contractimpl]
impl SwapEscrow {
    /// Initialize escrow with admin, fee treasury and fee percent (0..100)
    pub fn __constructor(env: Env, admin: Address, treasury: Address, fee_percent: u32) {
        if validate_fee_percent(fee_percent).is_err() {
            panic_with_error!(&env, Error::InvalidFeePercent);
        }
        storage::write_admin(&env, &admin);
        storage::write_fee_config(&env, &FeeConfig { treasury, fee_percent });
        storage::write_next_id(&env, storage::FIRST_REQUEST_ID);
    }

    /// Lock `amount` of `asset_offered` from the caller and open a request
    /// that only `approver` can settle or reject.
    ///
    /// The caller must have approved at least `amount` of `asset_offered` to
    /// this contract beforehand.
    pub fn create_swap_request(
        env: Env,
        caller: Address,
        approver: Address,
        amount: i128,
        asset_offered: Address,
        asset_requested: Address,
    ) -> Result<u64, Error> {
        caller.require_auth();

        if amount <= 0 || asset_offered == asset_requested {
            log!(&env, "Invalid swap terms. Amount: {}", amount);
            return Err(Error::InvalidAmount);
        }
        if approver == caller {
            return Err(Error::InvalidCounterparty);
        }
        ensure_pullable(&env, &asset_offered, &caller, amount)?;

        let request = SwapRequest {
            id: storage::allocate_id(&env),
            requester: caller,
            approver,
            amount,
            asset_offered,
            asset_requested,
            status: SwapStatus::Pending,
        };
        storage::write_request(&env, &request);
        storage::extend_instance(&env);

        collect(&env, &request.asset_offered, &request.requester, request.amount);

        events::swap_created(&env, &request);
        Ok(request.id)
    }

    /// Settle a pending request: lock the approver's leg, then pay both
    /// parties their net amounts and the treasury its fee on each leg.
    ///
    /// The approver must have approved at least `amount` of `asset_requested`
    /// to this contract beforehand.
    pub fn approve_swap_request(env: Env, caller: Address, request_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut request = Self::get_swap_request(env.clone(), request_id)?;
        request.only_pending()?;
        request.only_approver(&caller)?;
        ensure_pullable(&env, &request.asset_requested, &request.approver, request.amount)?;

        let config = storage::read_fee_config(&env);
        let leg = split_leg(request.amount, config.fee_percent)?;

        // Commit the terminal status before touching any token contract
        request.status = SwapStatus::Approved;
        storage::write_request(&env, &request);
        storage::extend_instance(&env);

        collect(&env, &request.asset_requested, &request.approver, request.amount);

        pay_out(&env, &request.asset_requested, &request.requester, leg.net)?;
        pay_out(&env, &request.asset_offered, &request.approver, leg.net)?;
        pay_out(&env, &request.asset_offered, &config.treasury, leg.fee)?;
        pay_out(&env, &request.asset_requested, &config.treasury, leg.fee)?;

        events::swap_approved(&env, request.id, leg.fee, leg.net);
        Ok(())
    }

    /// Approver declines: the requester's escrowed leg is refunded in full.
    pub fn reject_swap_request(env: Env, caller: Address, request_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut request = Self::get_swap_request(env.clone(), request_id)?;
        request.only_pending()?;
        request.only_approver(&caller)?;

        Self::refund(&env, &mut request, SwapStatus::Rejected)?;
        events::swap_rejected(&env, request.id, request.amount);
        Ok(())
    }

    /// Requester withdraws: the escrowed leg is refunded in full.
    pub fn cancel_swap_request(env: Env, caller: Address, request_id: u64) -> Result<(), Error> {
        caller.require_auth();

        let mut request = Self::get_swap_request(env.clone(), request_id)?;
        request.only_pending()?;
        request.only_requester(&caller)?;

        Self::refund(&env, &mut request, SwapStatus::Cancelled)?;
        events::swap_cancelled(&env, request.id, request.amount);
        Ok(())
    }

    /// Get a swap request by id, in any status
    pub fn get_swap_request(env: Env, request_id: u64) -> Result<SwapRequest, Error> {
        storage::read_request(&env, request_id).ok_or(Error::NotFound)
    }

    /// Id the next successful `create_swap_request` will allocate
    pub fn next_request_id(env: Env) -> u64 {
        storage::read_next_id(&env)
    }

    /// Admin functions
    pub fn fee_config(env: Env) -> FeeConfig {
        storage::read_fee_config(&env)
    }

    pub fn get_admin(env: Env) -> Address {
        storage::read_admin(&env)
    }

    /// Applies to every approval from now on, including requests already pending
    pub fn set_fee_percent(env: Env, fee_percent: u32) -> Result<(), Error> {
        storage::read_admin(&env).require_auth();
        validate_fee_percent(fee_percent)?;

        let mut config = storage::read_fee_config(&env);
        config.fee_percent = fee_percent;
        storage::write_fee_config(&env, &config);
        storage::extend_instance(&env);

        events::fee_percent_set(&env, fee_percent);
        Ok(())
    }

    pub fn set_treasury(env: Env, treasury: Address) -> Result<(), Error> {
        storage::read_admin(&env).require_auth();

        let mut config = storage::read_fee_config(&env);
        config.treasury = treasury.clone();
        storage::write_fee_config(&env, &config);
        storage::extend_instance(&env);

        events::treasury_set(&env, &treasury);
        Ok(())
    }

    /// Helper functions
    fn refund(env: &Env, request: &mut SwapRequest, status: SwapStatus) -> Result<(), Error> {
        request.status = status;
        storage::write_request(env, request);
        storage::extend_instance(env);

        pay_out(env, &request.asset_offered, &request.requester, request.amount)
    }
}
