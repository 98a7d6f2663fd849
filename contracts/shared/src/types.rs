use soroban_sdk::{contracterror, contracttype, Address};

// Errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidAmount = 1,
    InvalidCounterparty = 2,
    Unauthorized = 3,
    InvalidState = 4,
    NotFound = 5,
    InsufficientBalance = 6,
    InsufficientAllowance = 7,
    InvalidFeePercent = 8,
}

/// Lifecycle of a swap request. Only `Pending` is non-terminal.
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SwapStatus {
    Pending = 0,
    Approved = 1,
    Rejected = 2,
    Cancelled = 3,
}

impl SwapStatus {
    pub fn is_terminal(&self) -> bool {
        *self != SwapStatus::Pending
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapRequest {
    pub id: u64,
    pub requester: Address,       // supplies asset_offered at creation
    pub approver: Address,        // supplies asset_requested at approval
    pub amount: i128,             // same numeric amount on both legs
    pub asset_offered: Address,
    pub asset_requested: Address,
    pub status: SwapStatus,
}

impl SwapRequest {
    /// Only the approver may approve or reject.
    pub fn only_approver(&self, caller: &Address) -> Result<(), Error> {
        if *caller != self.approver {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// Only the requester may cancel.
    pub fn only_requester(&self, caller: &Address) -> Result<(), Error> {
        if *caller != self.requester {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    pub fn only_pending(&self) -> Result<(), Error> {
        if self.status.is_terminal() {
            return Err(Error::InvalidState);
        }
        Ok(())
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeConfig {
    pub treasury: Address,
    pub fee_percent: u32,
}
