//! TBC-Swap Rust SDK
//!
//! Client for the on-chain token-bonding-curve swap program on Solana.
//! The program — curve math, atomic balance updates, authority checks — is a
//! deployed black box; this crate marshals arguments into its instruction
//! layout, derives the PDAs it expects, and decodes the account state it
//! returns. There is deliberately no pricing math here: the one non-trivial
//! client-side path is [`TbcSwapClient::estimate_swap`], which dry-runs a swap
//! through network-side simulation and reads the post-swap balances back.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tbc_swap_sdk::{SwapPoolInfo, SwapRequest, TbcSwapClient};
//! use solana_sdk::pubkey::Pubkey;
//! use std::str::FromStr;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TbcSwapClient::devnet();
//!     let token_swap = Pubkey::from_str("ENd2Knu4RV7A53KaY9bRk6sz7GDgz78X6MUb9B6nru9w")?;
//!
//!     // 1. Snapshot the pool and orient it for the A→B direction
//!     let pool = client.swap_pool(&token_swap).await?;
//!     let pool_info = SwapPoolInfo::from_pool(&pool, true);
//!
//!     // 2. Dry-run the swap — nothing is committed to the ledger
//!     let wallet = Pubkey::new_unique(); // your funded wallet
//!     let est = client.estimate_swap(&SwapRequest {
//!         token_swap,
//!         amount_in: 240_000_000_000,
//!         amount_out: 0, // no minimum-out constraint
//!         user_transfer_authority: wallet,
//!         user_source: Pubkey::new_unique(),      // your token A account
//!         user_destination: Pubkey::new_unique(), // your token B account
//!         wallet,
//!     }, &pool_info).await?;
//!     println!("post-swap: A = {}  B = {}",
//!         est.amount_token_a_post_swap, est.amount_token_b_post_swap);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Feature Overview
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`TbcSwapClient::estimate_swap`] | Simulation-only swap estimate (no state change) |
//! | [`TbcSwapClient::execute_swap`] | Sign and submit a real swap |
//! | [`TbcSwapClient::initialize_linear_price_curve`] | Create a linear-curve pool |
//! | [`TbcSwapClient::add_metadata`] | Attach Metaplex metadata to a mint |
//! | [`TbcSwapClient::swap_pool`] | Fetch + decode pool state |
//! | [`TbcSwapClient::token_account`] / [`TbcSwapClient::mint_info`] | Decode SPL accounts |
//!
//! An estimate reads one ledger snapshot; it can be stale by the time a real
//! swap lands. That race lives in the external system and cannot be locked
//! against from the client side.

pub mod client;
pub mod error;
pub mod instructions;
pub mod math;
pub mod state;
pub mod types;

pub use client::TbcSwapClient;
pub use error::{Error, Result};
pub use types::*;
