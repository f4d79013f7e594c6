//! [`TbcSwapClient`] — the main entry point for TBC program integrations.

use solana_account_decoder_client_types::{UiAccount, UiAccountEncoding};
use solana_client::{
    nonblocking::rpc_client::RpcClient,
    rpc_config::{RpcSimulateTransactionAccountsConfig, RpcSimulateTransactionConfig},
};
use solana_sdk::{
    account::Account,
    commitment_config::CommitmentConfig,
    instruction::Instruction,
    pubkey::Pubkey,
    signature::{Keypair, Signature, Signer},
    transaction::{Transaction, TransactionError},
};
use std::str::FromStr;

use crate::{
    error::{Error, Result},
    instructions::{
        add_metadata_ix, derive_swap_authority, initialize_linear_price_curve_ix, swap_ix,
    },
    state::{parse_mint, parse_swap_pool, parse_token_account, MintState, SwapPoolState,
            TokenAccountState},
    types::{
        EstimationResult, InitializeCurveOutcome, InitializeCurveParams, SwapOutcome,
        SwapPoolInfo, SwapRequest, TokenMetadata,
    },
};

// ─── Constants ────────────────────────────────────────────────────────────────

const DEFAULT_PROGRAM_ID: &str = "7YkfKe44b5xckzXQ2JfBVC8xJtytNZFUGKUs7z3Ercbz";
const DEVNET_RPC:  &str = "https://api.devnet.solana.com";
const MAINNET_RPC: &str = "https://api.mainnet-beta.solana.com";

// ─── Client ───────────────────────────────────────────────────────────────────

/// Async client for the on-chain token-bonding-curve swap program.
///
/// Explicit configuration, no process-wide singletons: every call constructs
/// its own request and result, so concurrent callers share nothing mutable.
///
/// ```rust,no_run
/// # use tbc_swap_sdk::{SwapPoolInfo, SwapRequest, TbcSwapClient};
/// # use solana_sdk::pubkey::Pubkey;
/// # use std::str::FromStr;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TbcSwapClient::devnet();
/// let token_swap = Pubkey::from_str("ENd2Knu4RV7A53KaY9bRk6sz7GDgz78X6MUb9B6nru9w")?;
///
/// let pool = client.swap_pool(&token_swap).await?;
/// let request = SwapRequest {
///     token_swap,
///     amount_in: 240_000_000_000,
///     amount_out: 0,
///     user_transfer_authority: Pubkey::new_unique(), // your wallet
///     user_source: Pubkey::new_unique(),             // your token A account
///     user_destination: Pubkey::new_unique(),        // your token B account
///     wallet: Pubkey::new_unique(),
/// };
/// let est = client
///     .estimate_swap(&request, &SwapPoolInfo::from_pool(&pool, true))
///     .await?;
/// println!("post-swap balances: {} / {}",
///     est.amount_token_a_post_swap, est.amount_token_b_post_swap);
/// # Ok(())
/// # }
/// ```
pub struct TbcSwapClient {
    rpc_url:    String,
    program_id: Pubkey,
    commitment: CommitmentConfig,
}

impl TbcSwapClient {
    /// Create a client pointing at any RPC endpoint.
    ///
    /// Defaults to `finalized` commitment for reads and simulation.
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url:    rpc_url.into(),
            program_id: Pubkey::from_str(DEFAULT_PROGRAM_ID).unwrap(),
            commitment: CommitmentConfig::finalized(),
        }
    }

    /// Pre-configured client for Solana devnet.
    pub fn devnet() -> Self {
        Self::new(DEVNET_RPC)
    }

    /// Pre-configured client for Solana mainnet-beta.
    pub fn mainnet() -> Self {
        Self::new(MAINNET_RPC)
    }

    /// Override the program ID (useful for locally deployed programs in tests).
    pub fn with_program_id(mut self, program_id: Pubkey) -> Self {
        self.program_id = program_id;
        self
    }

    /// Override the commitment level used for reads and simulation —
    /// how finalized the ledger snapshot must be.
    pub fn with_commitment(mut self, commitment: CommitmentConfig) -> Self {
        self.commitment = commitment;
        self
    }

    pub fn program_id(&self) -> Pubkey {
        self.program_id
    }

    // ── Read operations ───────────────────────────────────────────────────────

    /// Fetch and decode the TBC pool state account.
    pub async fn swap_pool(&self, token_swap: &Pubkey) -> Result<SwapPoolState> {
        let rpc = self.rpc();
        let account = rpc
            .get_account_with_commitment(token_swap, self.commitment)
            .await?
            .value
            .ok_or(Error::PoolNotFound(*token_swap))?;
        parse_swap_pool(&account.data)
    }

    /// Fetch and decode an SPL token account.
    pub async fn token_account(&self, address: &Pubkey) -> Result<TokenAccountState> {
        let data = self.rpc().get_account_data(address).await?;
        parse_token_account(&data)
    }

    /// Fetch and decode an SPL mint (for its decimal count).
    pub async fn mint_info(&self, mint: &Pubkey) -> Result<MintState> {
        let data = self.rpc().get_account_data(mint).await?;
        parse_mint(&data)
    }

    /// Estimate a swap by network-side simulation, without committing it.
    ///
    /// Builds the unsigned swap instruction against the derived swap-authority
    /// PDA, dry-runs it at the configured commitment level, and decodes the
    /// simulated post-state of the user's source and destination accounts.
    ///
    /// No ledger state is mutated, so the call is safely repeatable. The
    /// snapshot it reads can still change before any real swap is submitted —
    /// the estimate carries no freshness guarantee beyond its commitment level.
    pub async fn estimate_swap(
        &self,
        request: &SwapRequest,
        pool:    &SwapPoolInfo,
    ) -> Result<EstimationResult> {
        let rpc = self.rpc();
        let ix = self.build_swap_ix(request, pool);
        let tx = Transaction::new_with_payer(&[ix], Some(&request.wallet));

        let config = RpcSimulateTransactionConfig {
            sig_verify: false,
            replace_recent_blockhash: true,
            commitment: Some(self.commitment),
            accounts: Some(RpcSimulateTransactionAccountsConfig {
                encoding: Some(UiAccountEncoding::Base64),
                addresses: vec![
                    request.user_source.to_string(),
                    request.user_destination.to_string(),
                ],
            }),
            ..RpcSimulateTransactionConfig::default()
        };

        let sim = rpc.simulate_transaction_with_config(&tx, config).await?;
        interpret_simulation(sim.value.err, sim.value.logs, sim.value.accounts)
    }

    // ── Write operations ──────────────────────────────────────────────────────

    /// Submit a real swap. One send, no retry policy.
    ///
    /// `payer` funds the transaction. Pass the user-transfer-authority keypair
    /// in `extra_signers` when it differs from the payer.
    pub async fn execute_swap(
        &self,
        payer:         &Keypair,
        extra_signers: &[&Keypair],
        request:       &SwapRequest,
        pool:          &SwapPoolInfo,
    ) -> Result<SwapOutcome> {
        let rpc = self.rpc();
        let ix = self.build_swap_ix(request, pool);
        let sig = self.sign_and_send(&rpc, &[ix], payer, extra_signers).await?;
        Ok(SwapOutcome {
            signature:  sig.to_string(),
            token_swap: request.token_swap,
            amount_in:  request.amount_in,
            amount_out: request.amount_out,
        })
    }

    /// Initialize a linear price curve pool.
    ///
    /// `token_swap` must be a fresh keypair; the program initialises it as the
    /// pool state account.
    pub async fn initialize_linear_price_curve(
        &self,
        payer:      &Keypair,
        token_swap: &Keypair,
        params:     &InitializeCurveParams,
    ) -> Result<InitializeCurveOutcome> {
        let rpc = self.rpc();
        let (swap_authority, _) =
            derive_swap_authority(&token_swap.pubkey(), &self.program_id);

        let ix = initialize_linear_price_curve_ix(
            &self.program_id,
            &token_swap.pubkey(),
            &params.token_a_reserve,
            &params.token_b_reserve,
            &params.pool_mint,
            &params.fee_account,
            &params.destination,
            params.slope_numerator,
            params.slope_denominator,
            params.initial_token_a_price_numerator,
            params.initial_token_a_price_denominator,
        );
        let sig = self.sign_and_send(&rpc, &[ix], payer, &[token_swap]).await?;

        Ok(InitializeCurveOutcome {
            signature:      sig.to_string(),
            token_swap:     token_swap.pubkey(),
            swap_authority,
        })
    }

    /// Attach name / symbol / URI metadata to a mint.
    ///
    /// `payer` must be the mint authority; it becomes the update authority.
    pub async fn add_metadata(
        &self,
        payer:    &Keypair,
        mint:     &Pubkey,
        metadata: &TokenMetadata,
    ) -> Result<Signature> {
        let rpc = self.rpc();
        let ix = add_metadata_ix(
            mint,
            &payer.pubkey(),
            &metadata.name,
            &metadata.symbol,
            &metadata.uri,
        );
        self.sign_and_send(&rpc, &[ix], payer, &[]).await
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    fn rpc(&self) -> RpcClient {
        RpcClient::new_with_commitment(self.rpc_url.clone(), self.commitment)
    }

    fn build_swap_ix(&self, request: &SwapRequest, pool: &SwapPoolInfo) -> Instruction {
        let (swap_authority, _) =
            derive_swap_authority(&request.token_swap, &self.program_id);
        swap_ix(
            &self.program_id,
            &request.token_swap,
            &swap_authority,
            &request.user_transfer_authority,
            &request.user_source,
            &request.user_destination,
            &pool.swap_source,
            &pool.swap_destination,
            &pool.pool_mint,
            &pool.fee_account,
            request.amount_in,
            request.amount_out,
        )
    }

    async fn sign_and_send(
        &self,
        rpc:          &RpcClient,
        instructions: &[Instruction],
        payer:        &Keypair,
        extra:        &[&Keypair],
    ) -> Result<Signature> {
        let blockhash = rpc.get_latest_blockhash().await?;
        let mut signers: Vec<&dyn Signer> = vec![payer];
        signers.extend(extra.iter().map(|k| k as &dyn Signer));
        let tx = Transaction::new_signed_with_payer(
            instructions,
            Some(&payer.pubkey()),
            &signers,
            blockhash,
        );
        Ok(rpc.send_and_confirm_transaction(&tx).await?)
    }
}

// ─── Simulation response interpretation ──────────────────────────────────────

/// Turn a raw simulation response into an [`EstimationResult`].
///
/// A non-null `err` wins unconditionally — the logs are carried verbatim and
/// no account state is interpreted, so a failed simulation can never yield a
/// partial result.
fn interpret_simulation(
    err:      Option<TransactionError>,
    logs:     Option<Vec<String>>,
    accounts: Option<Vec<Option<UiAccount>>>,
) -> Result<EstimationResult> {
    if let Some(err) = err {
        return Err(Error::Simulation {
            err,
            logs: logs.unwrap_or_default(),
        });
    }
    let accounts = accounts.ok_or(Error::MissingSimulatedAccount { index: 0 })?;
    Ok(EstimationResult {
        amount_token_a_post_swap: simulated_token_amount(&accounts, 0)?,
        amount_token_b_post_swap: simulated_token_amount(&accounts, 1)?,
    })
}

/// Decode the token-account `amount` of the `index`-th simulated account.
fn simulated_token_amount(accounts: &[Option<UiAccount>], index: usize) -> Result<u64> {
    let ui = accounts
        .get(index)
        .and_then(|a| a.as_ref())
        .ok_or(Error::MissingSimulatedAccount { index })?;
    let account: Account = ui.decode().ok_or_else(|| Error::Parse {
        offset: 0,
        reason: format!("simulated account {index}: unsupported data encoding"),
    })?;
    crate::state::parse_token_amount(&account.data)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
    use solana_account_decoder_client_types::UiAccountData;

    fn token_ui_account(amount: u64) -> UiAccount {
        let mut data = vec![0u8; 165];
        data[0..32].copy_from_slice(Pubkey::new_unique().as_ref());
        data[32..64].copy_from_slice(Pubkey::new_unique().as_ref());
        data[64..72].copy_from_slice(&amount.to_le_bytes());
        UiAccount {
            lamports:   2_039_280,
            data:       UiAccountData::Binary(BASE64.encode(&data), UiAccountEncoding::Base64),
            owner:      crate::instructions::spl_token_id().to_string(),
            executable: false,
            rent_epoch: 0,
            space:      Some(165),
        }
    }

    #[test]
    fn ok_simulation_decodes_both_balances() {
        // Fixture numbers: 2400 token A in on the linear curve leaves the user
        // with 760000000000 A / 4000000000 B.
        let accounts = vec![
            Some(token_ui_account(760_000_000_000)),
            Some(token_ui_account(4_000_000_000)),
        ];
        let est = interpret_simulation(None, None, Some(accounts)).unwrap();
        assert_eq!(
            est,
            EstimationResult {
                amount_token_a_post_swap: 760_000_000_000,
                amount_token_b_post_swap: 4_000_000_000,
            }
        );
    }

    #[test]
    fn interpretation_is_repeatable() {
        let accounts = || {
            Some(vec![
                Some(token_ui_account(890_000_000_000)),
                Some(token_ui_account(2_000_000_000)),
            ])
        };
        let first = interpret_simulation(None, None, accounts()).unwrap();
        let second = interpret_simulation(None, None, accounts()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn program_error_wins_over_account_state() {
        let accounts = vec![Some(token_ui_account(1)), Some(token_ui_account(2))];
        let logs = vec!["Program log: insufficient reserve".to_string()];
        let err = interpret_simulation(
            Some(TransactionError::InstructionError(
                0,
                solana_sdk::instruction::InstructionError::Custom(0x1771),
            )),
            Some(logs.clone()),
            Some(accounts),
        )
        .unwrap_err();
        match err {
            Error::Simulation { err: _, logs: got } => assert_eq!(got, logs),
            other => panic!("expected Simulation error, got {other:?}"),
        }
    }

    #[test]
    fn missing_account_state_is_an_error_not_zero() {
        let err = interpret_simulation(
            None,
            None,
            Some(vec![Some(token_ui_account(5)), None]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingSimulatedAccount { index: 1 }));

        let err = interpret_simulation(None, None, None).unwrap_err();
        assert!(matches!(err, Error::MissingSimulatedAccount { index: 0 }));
    }

    #[test]
    fn undecodable_account_bytes_are_a_parse_error() {
        let truncated = UiAccount {
            data: UiAccountData::Binary(BASE64.encode([0u8; 32]), UiAccountEncoding::Base64),
            ..token_ui_account(0)
        };
        let err = interpret_simulation(
            None,
            None,
            Some(vec![Some(truncated), Some(token_ui_account(0))]),
        )
        .unwrap_err();
        assert!(matches!(err, Error::Parse { .. }));
    }
}
