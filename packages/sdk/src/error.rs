//! SDK error type.

use solana_sdk::{pubkey::Pubkey, transaction::TransactionError};

/// All errors returned by the TBC-Swap SDK.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // ── RPC / network ────────────────────────────────────────────────────────
    /// A Solana JSON-RPC call failed. Transport-level; never retried here —
    /// callers may retry at their own discretion.
    #[error("RPC error: {0}")]
    Rpc(#[from] solana_client::client_error::ClientError),

    // ── Simulation ───────────────────────────────────────────────────────────
    /// The on-chain program rejected the simulated swap instruction
    /// (e.g. insufficient reserve, invalid authority). Carries the program's
    /// error and log trace verbatim.
    #[error("swap simulation failed: {err}")]
    Simulation {
        err:  TransactionError,
        logs: Vec<String>,
    },

    /// Simulation succeeded but the response did not include post-state for
    /// one of the requested accounts.
    #[error("simulation returned no state for requested account {index}")]
    MissingSimulatedAccount { index: usize },

    // ── Account parsing ──────────────────────────────────────────────────────
    /// Raw account bytes could not be deserialized against the fixed layout.
    #[error("account parse error at offset {offset}: {reason}")]
    Parse { offset: usize, reason: String },

    // ── Pool discovery ───────────────────────────────────────────────────────
    /// No account exists at the given swap-pool address.
    #[error("swap pool not found: {0}")]
    PoolNotFound(Pubkey),

    // ── Arithmetic ───────────────────────────────────────────────────────────
    #[error("integer overflow scaling token amounts")]
    MathOverflow,

    // ── Validation ───────────────────────────────────────────────────────────
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Convenience alias so every module can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;
