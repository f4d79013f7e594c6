//! Request and result types for the swap client.

use serde::Serialize;
use solana_sdk::pubkey::Pubkey;

use crate::state::SwapPoolState;

/// One requested swap, as seen from the user's side.
///
/// Immutable, constructed per call; nothing here is persisted.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    /// The TBC pool state account this swap goes through.
    pub token_swap: Pubkey,
    /// Amount of the source token to sell, in base units.
    pub amount_in: u64,
    /// The program's minimum-out argument, passed through opaquely.
    /// `0` is accepted unconditionally (no slippage limit).
    pub amount_out: u64,
    /// Authority allowed to move tokens out of `user_source`.
    pub user_transfer_authority: Pubkey,
    /// The user's source token account (spends `amount_in`).
    pub user_source: Pubkey,
    /// The user's destination token account (receives the output).
    pub user_destination: Pubkey,
    /// Fee-payer identity for simulation / submission.
    pub wallet: Pubkey,
}

/// Direction-resolved snapshot of the pool accounts one swap touches.
///
/// Fetched from network state at call time; it can be stale by the time a
/// real swap executes — the ledger has no read lock, so an estimate is only
/// valid for the snapshot it was computed against.
#[derive(Debug, Clone, Copy)]
pub struct SwapPoolInfo {
    /// Pool reserve that receives the input token.
    pub swap_source: Pubkey,
    /// Pool reserve that pays out the output token.
    pub swap_destination: Pubkey,
    pub pool_mint: Pubkey,
    pub fee_account: Pubkey,
}

impl SwapPoolInfo {
    /// Orient a fetched pool state for one swap direction.
    ///
    /// `a_to_b = true` sells the pool's token A for token B.
    pub fn from_pool(pool: &SwapPoolState, a_to_b: bool) -> Self {
        let (swap_source, swap_destination) = if a_to_b {
            (pool.token_a_reserve, pool.token_b_reserve)
        } else {
            (pool.token_b_reserve, pool.token_a_reserve)
        };
        Self {
            swap_source,
            swap_destination,
            pool_mint: pool.pool_mint,
            fee_account: pool.fee_account,
        }
    }
}

/// Simulated post-swap balances of the user's two token accounts.
///
/// Derived from one simulation call, never persisted. Repeating the call
/// against unchanged ledger state returns identical values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstimationResult {
    /// Post-swap balance of the user's source token account.
    pub amount_token_a_post_swap: u64,
    /// Post-swap balance of the user's destination token account.
    pub amount_token_b_post_swap: u64,
}

/// Outcome of a submitted (real) swap.
#[derive(Debug, Clone)]
pub struct SwapOutcome {
    pub signature:  String,
    pub token_swap: Pubkey,
    pub amount_in:  u64,
    pub amount_out: u64,
}

/// Parameters for initializing a linear price curve pool.
#[derive(Debug, Clone)]
pub struct InitializeCurveParams {
    /// Reserve token account for the pool's token A (empty at init).
    pub token_a_reserve: Pubkey,
    /// Reserve token account for the pool's token B, pre-funded with the
    /// initial liquidity and owned by the swap-authority PDA.
    pub token_b_reserve: Pubkey,
    pub pool_mint: Pubkey,
    pub fee_account: Pubkey,
    /// Pool-token account credited with the initial LP mint.
    pub destination: Pubkey,
    pub slope_numerator: u64,
    pub slope_denominator: u64,
    pub initial_token_a_price_numerator: u64,
    pub initial_token_a_price_denominator: u64,
}

/// Outcome of a curve initialization.
#[derive(Debug, Clone)]
pub struct InitializeCurveOutcome {
    pub signature:      String,
    pub token_swap:     Pubkey,
    pub swap_authority: Pubkey,
}

/// Name / symbol / URI attached to a mint via the metadata program.
#[derive(Debug, Clone)]
pub struct TokenMetadata {
    pub name:   String,
    pub symbol: String,
    pub uri:    String,
}
