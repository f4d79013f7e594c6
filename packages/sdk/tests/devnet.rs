//! Devnet integration tests against a live, pre-seeded pool.
//!
//! These hit a real cluster, so they are `#[ignore]`d by default. Seed a pool
//! with the reference fixture first (two fresh 8-decimal mints, initial
//! liquidity 10000 × 10^8 token A held by the wallet and
//! 16000000000000000000 token B in the reserve, slope 1/200000000, initial
//! token-A price 150/3), then run:
//!
//! ```text
//! TBC_POOL=<pool address> TBC_KEYPAIR=~/.config/solana/id.json \
//!     cargo test -p tbc-swap-sdk -- --ignored
//! ```

use solana_sdk::{pubkey::Pubkey, signature::read_keypair_file, signer::Signer};
use std::str::FromStr;

use tbc_swap_sdk::{
    instructions::derive_ata, EstimationResult, SwapPoolInfo, SwapRequest, TbcSwapClient,
};

fn fixture() -> (TbcSwapClient, Pubkey, Pubkey) {
    let pool = Pubkey::from_str(
        &std::env::var("TBC_POOL").expect("set TBC_POOL to the fixture pool address"),
    )
    .expect("TBC_POOL is not a valid base-58 address");
    let keypair_path =
        std::env::var("TBC_KEYPAIR").expect("set TBC_KEYPAIR to a funded keypair path");
    let wallet = read_keypair_file(&keypair_path)
        .expect("cannot read TBC_KEYPAIR")
        .pubkey();
    let mut client = TbcSwapClient::devnet();
    if let Ok(id) = std::env::var("TBC_PROGRAM_ID") {
        client = client.with_program_id(
            Pubkey::from_str(&id).expect("TBC_PROGRAM_ID is not a valid base-58 address"),
        );
    }
    (client, pool, wallet)
}

/// Build an oriented request selling `amount_in` through the fixture pool.
async fn fixture_request(
    client: &TbcSwapClient,
    pool_addr: &Pubkey,
    wallet: &Pubkey,
    amount_in: u64,
    a_to_b: bool,
) -> (SwapRequest, SwapPoolInfo) {
    let pool = client.swap_pool(pool_addr).await.expect("fetch pool");
    let (source_mint, destination_mint) = if a_to_b {
        (pool.token_a_mint, pool.token_b_mint)
    } else {
        (pool.token_b_mint, pool.token_a_mint)
    };
    let request = SwapRequest {
        token_swap: *pool_addr,
        amount_in,
        amount_out: 0,
        user_transfer_authority: *wallet,
        user_source: derive_ata(wallet, &source_mint),
        user_destination: derive_ata(wallet, &destination_mint),
        wallet: *wallet,
    };
    (request, SwapPoolInfo::from_pool(&pool, a_to_b))
}

#[tokio::test]
#[ignore = "requires a live devnet pool seeded with the reference fixture"]
async fn estimate_matches_the_reference_fixture() {
    let (client, pool, wallet) = fixture();
    let (request, info) =
        fixture_request(&client, &pool, &wallet, 2400 * 100_000_000, true).await;

    let est = client.estimate_swap(&request, &info).await.expect("estimate");
    assert_eq!(
        est,
        EstimationResult {
            amount_token_a_post_swap: 760_000_000_000,
            amount_token_b_post_swap: 4_000_000_000,
        }
    );
}

#[tokio::test]
#[ignore = "requires the fixture pool after the first swap has executed"]
async fn reverse_estimate_matches_the_reference_fixture() {
    let (client, pool, wallet) = fixture();
    let (request, info) =
        fixture_request(&client, &pool, &wallet, 20 * 100_000_000, false).await;

    let est = client.estimate_swap(&request, &info).await.expect("estimate");
    // Post-first-swap reserve state: selling 20×10^8 token B back.
    assert_eq!(est.amount_token_a_post_swap, 2_000_000_000); // source (token B)
    assert_eq!(est.amount_token_b_post_swap, 890_000_000_000); // destination (token A)
}

#[tokio::test]
#[ignore = "requires a live devnet pool"]
async fn zero_amount_in_is_a_noop_swap() {
    let (client, pool, wallet) = fixture();
    let (request, info) = fixture_request(&client, &pool, &wallet, 0, true).await;

    let pre_source = client.token_account(&request.user_source).await.expect("source");
    let pre_destination = client
        .token_account(&request.user_destination)
        .await
        .expect("destination");

    let est = client.estimate_swap(&request, &info).await.expect("estimate");
    assert_eq!(est.amount_token_a_post_swap, pre_source.amount);
    assert_eq!(est.amount_token_b_post_swap, pre_destination.amount);
}

#[tokio::test]
#[ignore = "requires a live devnet pool"]
async fn estimation_is_idempotent_while_state_is_unchanged() {
    let (client, pool, wallet) = fixture();
    let (request, info) =
        fixture_request(&client, &pool, &wallet, 100_000_000, true).await;

    let first = client.estimate_swap(&request, &info).await.expect("first estimate");
    let second = client.estimate_swap(&request, &info).await.expect("second estimate");
    assert_eq!(first, second);
}
