#![no_std]

// Two-party Swap Escrow Contract
// Holds the requester's leg in custody until the approver settles, rejects,
// or the requester cancels

mod events;
mod storage;
mod swapescrow;

// Re-export the contract
pub use swapescrow::{SwapEscrow, SwapEscrowClient};
pub use shared::{Error, FeeConfig, SwapRequest, SwapStatus};
