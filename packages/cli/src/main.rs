use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use solana_sdk::{
    commitment_config::CommitmentConfig,
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair, Signer},
};
use std::str::FromStr;

use tbc_swap_sdk::{
    instructions::derive_ata,
    math::{balance_delta, format_units, to_base_units},
    InitializeCurveParams, SwapPoolInfo, SwapRequest, TbcSwapClient, TokenMetadata,
};

// ─── Keypair / argument helpers ───────────────────────────────────────────────

/// Expand `~/` to `$HOME/` in keypair paths.
fn expand_home(path: &str) -> String {
    if path.starts_with("~/") {
        format!("{}{}", std::env::var("HOME").unwrap_or_default(), &path[1..])
    } else {
        path.to_string()
    }
}

fn load_keypair(path: &str) -> Result<Keypair> {
    let expanded = expand_home(path);
    read_keypair_file(&expanded).map_err(|e| {
        anyhow!(
            "Cannot load keypair from '{}': {}\n  \
             Set TBC_KEYPAIR or pass --keypair to specify a different path.",
            expanded,
            e
        )
    })
}

fn parse_pubkey(value: &str, what: &str) -> Result<Pubkey> {
    Pubkey::from_str(value)
        .map_err(|_| anyhow!("'{}' is not a valid base-58 {} address", value, what))
}

fn parse_commitment(value: &str) -> Result<CommitmentConfig> {
    match value {
        "processed" => Ok(CommitmentConfig::processed()),
        "confirmed" => Ok(CommitmentConfig::confirmed()),
        "finalized" => Ok(CommitmentConfig::finalized()),
        other => Err(anyhow!(
            "Unknown commitment '{}'. Valid values: processed, confirmed, finalized",
            other
        )),
    }
}

// ─── Version banner ───────────────────────────────────────────────────────────

/// Print the TBC-Swap banner to stdout.
fn print_banner() {
    let ver = env!("CARGO_PKG_VERSION");
    println!();
    println!("  TBC-Swap  v{ver}  ·  token-bonding-curve swap client for Solana");
    println!("  {}", "─".repeat(66));
    println!("  Estimates run through network-side simulation — no funds move.");
    println!("  Docs      https://github.com/tbc-swap/tbc-swap");
    println!();
}

// ─── CLI definition ───────────────────────────────────────────────────────────

/// TBC-Swap — client for the token-bonding-curve swap program on Solana.
///
/// Every command supports --json for machine-readable output.
/// Global options can also be set via environment variables:
///   TBC_RPC_URL  — Solana JSON-RPC endpoint
///   TBC_KEYPAIR  — path to wallet Ed25519 keypair JSON
#[derive(Parser)]
#[command(
    name    = "tbc-swap",
    version = env!("CARGO_PKG_VERSION"),
    author  = "TBC-Swap contributors",
    about   = "Estimate and execute swaps against an on-chain token-bonding-curve program.",
    after_help = "\
ENVIRONMENT:
  TBC_RPC_URL      Solana JSON-RPC endpoint  [default: https://api.mainnet-beta.solana.com]
  TBC_KEYPAIR      Path to Ed25519 keypair JSON  [default: ~/.config/solana/id.json]
  TBC_PROGRAM_ID   Override the swap program id (for local deployments)

QUICK START:
  tbc-swap estimate  --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 240000000000
  tbc-swap swap      --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 240000000000
  tbc-swap pool-info --swap <POOL>
  tbc-swap add-metadata <MINT> --name Rally --symbol RLY --uri https://example.com/rly.json"
)]
struct Cli {
    /// Solana JSON-RPC endpoint
    #[arg(
        long,
        global     = true,
        value_name = "URL",
        default_value = "https://api.mainnet-beta.solana.com",
        env = "TBC_RPC_URL"
    )]
    rpc_url: String,

    /// Path to the wallet's Ed25519 keypair JSON file
    #[arg(
        long,
        global     = true,
        value_name = "PATH",
        default_value = "~/.config/solana/id.json",
        env = "TBC_KEYPAIR"
    )]
    keypair: String,

    /// Override the swap program id (for locally deployed programs)
    #[arg(long, global = true, value_name = "PUBKEY", env = "TBC_PROGRAM_ID")]
    program_id: Option<String>,

    /// Ledger snapshot consistency for reads and simulation:
    /// processed, confirmed, or finalized
    #[arg(long, global = true, value_name = "LEVEL", default_value = "finalized")]
    commitment: String,

    /// Output machine-readable JSON instead of human-readable text
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview a swap's outcome via network-side simulation
    ///
    /// Builds the real swap instruction, dry-runs it on the cluster, and
    /// decodes the simulated post-swap balances. No transaction is broadcast
    /// and no funds move — safe to repeat as often as needed.
    #[command(
        after_help = "\
EXAMPLES:
  # Estimate selling 2400 whole tokens of A (8 decimals) for B
  tbc-swap estimate --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 2400 --whole

  # Same, amount given directly in atomic units
  tbc-swap estimate --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 240000000000

  # Machine-readable output for agent pipelines
  tbc-swap estimate --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 240000000000 --json

NOTES:
  The estimate reads one ledger snapshot at the configured --commitment level.
  Reserves can change before a real swap lands; re-run `estimate` for a fresh
  number, or pass --min-out to `swap` to bound the accepted outcome."
    )]
    Estimate {
        /// Pool state account of the swap to estimate against
        #[arg(long = "swap", value_name = "POOL")]
        token_swap: String,

        /// Mint of the token to sell
        #[arg(long = "in", value_name = "MINT")]
        mint_in: String,

        /// Mint of the token to receive
        #[arg(long = "out", value_name = "MINT")]
        mint_out: String,

        /// Amount of the input token to sell (atomic units unless --whole)
        #[arg(long, value_name = "AMOUNT")]
        amount: u64,

        /// Interpret --amount as whole display units and scale by the
        /// input mint's decimals
        #[arg(long, default_value_t = false)]
        whole: bool,
    },

    /// Execute a real swap through the bonding-curve pool
    ///
    /// Runs the simulation estimate first, prints it, then signs and submits
    /// the same instruction. One submit, no retry.
    #[command(
        after_help = "\
EXAMPLES:
  # Swap 2400 whole tokens of A for B, accepting any output
  tbc-swap swap --swap <POOL> --in <MINT_A> --out <MINT_B> --amount 2400 --whole

  # Enforce a program-side minimum-out (atomic units)
  tbc-swap swap --swap <POOL> --in <MINT_A> --out <MINT_B> \\
    --amount 240000000000 --min-out 3900000000

NOTES:
  --min-out is passed to the program verbatim; 0 means no slippage limit.
  The wallet keypair is both the fee payer and the transfer authority."
    )]
    Swap {
        /// Pool state account of the swap to execute against
        #[arg(long = "swap", value_name = "POOL")]
        token_swap: String,

        /// Mint of the token to sell
        #[arg(long = "in", value_name = "MINT")]
        mint_in: String,

        /// Mint of the token to receive
        #[arg(long = "out", value_name = "MINT")]
        mint_out: String,

        /// Amount of the input token to sell (atomic units unless --whole)
        #[arg(long, value_name = "AMOUNT")]
        amount: u64,

        /// Minimum acceptable output (atomic units), enforced on-chain.
        /// 0 = accept any output.
        #[arg(long, value_name = "AMOUNT", default_value_t = 0)]
        min_out: u64,

        /// Interpret --amount as whole display units
        #[arg(long, default_value_t = false)]
        whole: bool,
    },

    /// Initialize a linear price curve pool
    ///
    /// The pool state account is a fresh keypair generated here; the
    /// swap-authority PDA is derived from it. Reserve accounts, pool mint,
    /// fee account and LP destination must already exist (created with the
    /// SPL token CLI) with the token-B reserve pre-funded.
    #[command(
        after_help = "\
EXAMPLES:
  tbc-swap init-curve \\
    --token-a-reserve <ACCOUNT> --token-b-reserve <ACCOUNT> \\
    --pool-mint <MINT> --fee-account <ACCOUNT> --destination <ACCOUNT> \\
    --slope-num 1 --slope-den 200000000 --price-num 150 --price-den 3"
    )]
    InitCurve {
        /// Reserve token account for the pool's token A (empty at init)
        #[arg(long, value_name = "ACCOUNT")]
        token_a_reserve: String,

        /// Reserve token account for token B, pre-funded with initial liquidity
        #[arg(long, value_name = "ACCOUNT")]
        token_b_reserve: String,

        /// Pool (LP) token mint
        #[arg(long, value_name = "MINT")]
        pool_mint: String,

        /// Pool-token account that collects trade fees
        #[arg(long, value_name = "ACCOUNT")]
        fee_account: String,

        /// Pool-token account credited with the initial LP mint
        #[arg(long, value_name = "ACCOUNT")]
        destination: String,

        /// Curve slope numerator
        #[arg(long = "slope-num", value_name = "U64")]
        slope_numerator: u64,

        /// Curve slope denominator
        #[arg(long = "slope-den", value_name = "U64")]
        slope_denominator: u64,

        /// Initial token-A price numerator
        #[arg(long = "price-num", value_name = "U64")]
        initial_price_numerator: u64,

        /// Initial token-A price denominator
        #[arg(long = "price-den", value_name = "U64")]
        initial_price_denominator: u64,
    },

    /// Attach name / symbol / URI metadata to a token mint
    ///
    /// The wallet keypair must be the mint authority; it becomes the
    /// metadata update authority.
    #[command(
        after_help = "\
EXAMPLES:
  tbc-swap add-metadata <MINT> --name Rally --symbol RLY \\
    --uri https://example.com/rly.json"
    )]
    AddMetadata {
        /// Mint to attach metadata to
        #[arg(value_name = "MINT")]
        mint: String,

        /// Token name
        #[arg(long, value_name = "NAME")]
        name: String,

        /// Token symbol
        #[arg(long, value_name = "SYMBOL")]
        symbol: String,

        /// Metadata URI
        #[arg(long, value_name = "URI", default_value = "")]
        uri: String,
    },

    /// Show decoded pool state: mints, reserves, fee account, curve parameters
    PoolInfo {
        /// Pool state account to inspect
        #[arg(long = "swap", value_name = "POOL")]
        token_swap: String,
    },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    // When invoked with no arguments, show banner + full help and exit cleanly.
    if std::env::args().len() == 1 {
        print_banner();
        Cli::command().print_long_help().ok();
        println!();
        return Ok(());
    }

    let cli = Cli::parse();
    let client = build_client(&cli)?;

    match &cli.command {
        Commands::Estimate { token_swap, mint_in, mint_out, amount, whole } => {
            cmd_estimate(
                &client, &cli.keypair,
                token_swap, mint_in, mint_out, *amount, *whole,
                cli.json,
            )
            .await?;
        }
        Commands::Swap { token_swap, mint_in, mint_out, amount, min_out, whole } => {
            cmd_swap(
                &client, &cli.keypair,
                token_swap, mint_in, mint_out, *amount, *min_out, *whole,
                cli.json,
            )
            .await?;
        }
        Commands::InitCurve {
            token_a_reserve, token_b_reserve, pool_mint, fee_account, destination,
            slope_numerator, slope_denominator,
            initial_price_numerator, initial_price_denominator,
        } => {
            cmd_init_curve(
                &client, &cli.keypair,
                token_a_reserve, token_b_reserve, pool_mint, fee_account, destination,
                *slope_numerator, *slope_denominator,
                *initial_price_numerator, *initial_price_denominator,
                cli.json,
            )
            .await?;
        }
        Commands::AddMetadata { mint, name, symbol, uri } => {
            cmd_add_metadata(&client, &cli.keypair, mint, name, symbol, uri, cli.json).await?;
        }
        Commands::PoolInfo { token_swap } => {
            cmd_pool_info(&client, token_swap, cli.json).await?;
        }
    }

    Ok(())
}

fn build_client(cli: &Cli) -> Result<TbcSwapClient> {
    let mut client = TbcSwapClient::new(cli.rpc_url.clone())
        .with_commitment(parse_commitment(&cli.commitment)?);
    if let Some(id) = &cli.program_id {
        client = client.with_program_id(parse_pubkey(id, "program")?);
    }
    Ok(client)
}

// ─── Swap resolution shared by estimate / swap ───────────────────────────────

struct ResolvedSwap {
    pool_info:        SwapPoolInfo,
    request:          SwapRequest,
    decimals_in:      u8,
    decimals_out:     u8,
    pre_source:       u64,
    pre_destination:  u64,
}

/// Resolve mints against the pool, derive the wallet's ATAs, fetch decimals
/// and pre-swap balances, and assemble the swap request.
#[allow(clippy::too_many_arguments)]
async fn resolve_swap(
    client:     &TbcSwapClient,
    wallet:     &Pubkey,
    token_swap: &Pubkey,
    mint_in:    &Pubkey,
    mint_out:   &Pubkey,
    amount:     u64,
    min_out:    u64,
    whole:      bool,
) -> Result<ResolvedSwap> {
    let pool = client
        .swap_pool(token_swap)
        .await
        .with_context(|| format!("Cannot load pool state at {token_swap}"))?;

    let a_to_b = if *mint_in == pool.token_a_mint && *mint_out == pool.token_b_mint {
        true
    } else if *mint_in == pool.token_b_mint && *mint_out == pool.token_a_mint {
        false
    } else {
        return Err(anyhow!(
            "Pool {} trades {} / {} — got --in {} --out {}",
            token_swap, pool.token_a_mint, pool.token_b_mint, mint_in, mint_out
        ));
    };

    let decimals_in = client
        .mint_info(mint_in)
        .await
        .with_context(|| format!("Cannot load mint {mint_in}"))?
        .decimals;
    let decimals_out = client
        .mint_info(mint_out)
        .await
        .with_context(|| format!("Cannot load mint {mint_out}"))?
        .decimals;

    let amount_in = if whole {
        to_base_units(amount, decimals_in)
            .map_err(|_| anyhow!("--amount {} overflows at {} decimals", amount, decimals_in))?
    } else {
        amount
    };

    let user_source = derive_ata(wallet, mint_in);
    let user_destination = derive_ata(wallet, mint_out);
    let pre_source = client
        .token_account(&user_source)
        .await
        .with_context(|| format!("No token account for the input mint at {user_source}"))?
        .amount;
    let pre_destination = client
        .token_account(&user_destination)
        .await
        .with_context(|| format!("No token account for the output mint at {user_destination}"))?
        .amount;

    let pool_info = SwapPoolInfo::from_pool(&pool, a_to_b);
    let request = SwapRequest {
        token_swap: *token_swap,
        amount_in,
        amount_out: min_out,
        user_transfer_authority: *wallet,
        user_source,
        user_destination,
        wallet: *wallet,
    };

    Ok(ResolvedSwap {
        pool_info,
        request,
        decimals_in,
        decimals_out,
        pre_source,
        pre_destination,
    })
}

// ─── estimate ────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct EstimateReport {
    pool:                     String,
    amount_in:                u64,
    min_amount_out:           u64,
    source_account:           String,
    destination_account:      String,
    pre_source_balance:       u64,
    pre_destination_balance:  u64,
    post_source_balance:      u64,
    post_destination_balance: u64,
    /// post − pre for the source account; negative when tokens leave it.
    source_delta:             i128,
    destination_delta:        i128,
}

#[allow(clippy::too_many_arguments)]
async fn cmd_estimate(
    client:       &TbcSwapClient,
    keypair_path: &str,
    token_swap:   &str,
    mint_in:      &str,
    mint_out:     &str,
    amount:       u64,
    whole:        bool,
    json_output:  bool,
) -> Result<()> {
    let wallet = load_keypair(keypair_path)?.pubkey();
    let token_swap = parse_pubkey(token_swap, "pool")?;
    let mint_in = parse_pubkey(mint_in, "mint")?;
    let mint_out = parse_pubkey(mint_out, "mint")?;

    let resolved = resolve_swap(
        client, &wallet, &token_swap, &mint_in, &mint_out, amount, 0, whole,
    )
    .await?;

    let est = client
        .estimate_swap(&resolved.request, &resolved.pool_info)
        .await
        .context("Swap simulation failed")?;

    let report = EstimateReport {
        pool:                     token_swap.to_string(),
        amount_in:                resolved.request.amount_in,
        min_amount_out:           resolved.request.amount_out,
        source_account:           resolved.request.user_source.to_string(),
        destination_account:      resolved.request.user_destination.to_string(),
        pre_source_balance:       resolved.pre_source,
        pre_destination_balance:  resolved.pre_destination,
        post_source_balance:      est.amount_token_a_post_swap,
        post_destination_balance: est.amount_token_b_post_swap,
        source_delta:      balance_delta(est.amount_token_a_post_swap, resolved.pre_source),
        destination_delta: balance_delta(est.amount_token_b_post_swap, resolved.pre_destination),
    };

    if json_output {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let sold = report.source_delta.unsigned_abs() as u64;
        let received = report.destination_delta.unsigned_abs() as u64;
        println!("─── Swap Estimate (simulation only — nothing was sent) ───────────");
        println!("  Pool              {token_swap}");
        println!("  Amount in         {}  ({})",
            report.amount_in, format_units(report.amount_in, resolved.decimals_in));
        println!("  You would sell    {}  ({})", sold, format_units(sold, resolved.decimals_in));
        println!("  You would receive {}  ({})",
            received, format_units(received, resolved.decimals_out));
        println!("  Source balance       {} → {}",
            report.pre_source_balance, report.post_source_balance);
        println!("  Destination balance  {} → {}",
            report.pre_destination_balance, report.post_destination_balance);
        println!();
        println!("  Estimates read one ledger snapshot; reserves may move before a");
        println!("  real swap lands.");
    }
    Ok(())
}

// ─── swap ────────────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
async fn cmd_swap(
    client:       &TbcSwapClient,
    keypair_path: &str,
    token_swap:   &str,
    mint_in:      &str,
    mint_out:     &str,
    amount:       u64,
    min_out:      u64,
    whole:        bool,
    json_output:  bool,
) -> Result<()> {
    let payer = load_keypair(keypair_path)?;
    let wallet = payer.pubkey();
    let token_swap = parse_pubkey(token_swap, "pool")?;
    let mint_in = parse_pubkey(mint_in, "mint")?;
    let mint_out = parse_pubkey(mint_out, "mint")?;

    let resolved = resolve_swap(
        client, &wallet, &token_swap, &mint_in, &mint_out, amount, min_out, whole,
    )
    .await?;

    // Pre-flight: run the same instruction through simulation first.
    let est = client
        .estimate_swap(&resolved.request, &resolved.pool_info)
        .await
        .context("Pre-flight simulation failed — swap not sent")?;
    if !json_output {
        let received =
            balance_delta(est.amount_token_b_post_swap, resolved.pre_destination).unsigned_abs() as u64;
        println!("  Pre-flight estimate: receive ≈ {} ({})",
            received, format_units(received, resolved.decimals_out));
    }

    let outcome = client
        .execute_swap(&payer, &[], &resolved.request, &resolved.pool_info)
        .await
        .context("Swap transaction failed")?;

    if json_output {
        println!("{}", json!({
            "status":          "ok",
            "command":         "swap",
            "pool":            token_swap.to_string(),
            "amount_in":       outcome.amount_in,
            "min_amount_out":  outcome.amount_out,
            "estimated_source_post":      est.amount_token_a_post_swap,
            "estimated_destination_post": est.amount_token_b_post_swap,
            "tx":              outcome.signature,
        }));
    } else {
        println!("─── Swap Sent ─────────────────────────────────────────────────────");
        println!("  Pool          {token_swap}");
        println!("  Amount in     {}  ({})",
            outcome.amount_in, format_units(outcome.amount_in, resolved.decimals_in));
        println!("  Min out       {}", outcome.amount_out);
        println!("  Transaction   {}", outcome.signature);
    }
    Ok(())
}

// ─── init-curve ──────────────────────────────────────────────────────────────

#[allow(clippy::too_many_arguments)]
async fn cmd_init_curve(
    client:       &TbcSwapClient,
    keypair_path: &str,
    token_a_reserve: &str,
    token_b_reserve: &str,
    pool_mint:       &str,
    fee_account:     &str,
    destination:     &str,
    slope_numerator:           u64,
    slope_denominator:         u64,
    initial_price_numerator:   u64,
    initial_price_denominator: u64,
    json_output: bool,
) -> Result<()> {
    if slope_denominator == 0 || initial_price_denominator == 0 {
        return Err(anyhow!("--slope-den and --price-den must be non-zero"));
    }

    let payer = load_keypair(keypair_path)?;
    let token_swap = Keypair::new();
    let params = InitializeCurveParams {
        token_a_reserve: parse_pubkey(token_a_reserve, "token account")?,
        token_b_reserve: parse_pubkey(token_b_reserve, "token account")?,
        pool_mint:       parse_pubkey(pool_mint, "mint")?,
        fee_account:     parse_pubkey(fee_account, "token account")?,
        destination:     parse_pubkey(destination, "token account")?,
        slope_numerator,
        slope_denominator,
        initial_token_a_price_numerator:   initial_price_numerator,
        initial_token_a_price_denominator: initial_price_denominator,
    };

    let outcome = client
        .initialize_linear_price_curve(&payer, &token_swap, &params)
        .await
        .context("initialize_linear_price_curve transaction failed")?;

    if json_output {
        println!("{}", json!({
            "status":         "ok",
            "command":        "init-curve",
            "token_swap":     outcome.token_swap.to_string(),
            "swap_authority": outcome.swap_authority.to_string(),
            "slope":          format!("{slope_numerator}/{slope_denominator}"),
            "initial_price":  format!("{initial_price_numerator}/{initial_price_denominator}"),
            "tx":             outcome.signature,
        }));
    } else {
        println!("─── Linear Price Curve Initialized ────────────────────────────────");
        println!("  Pool state      {}", outcome.token_swap);
        println!("  Swap authority  {}", outcome.swap_authority);
        println!("  Slope           {slope_numerator}/{slope_denominator}");
        println!("  Initial price   {initial_price_numerator}/{initial_price_denominator}");
        println!("  Transaction     {}", outcome.signature);
    }
    Ok(())
}

// ─── add-metadata ────────────────────────────────────────────────────────────

async fn cmd_add_metadata(
    client:       &TbcSwapClient,
    keypair_path: &str,
    mint:         &str,
    name:         &str,
    symbol:       &str,
    uri:          &str,
    json_output:  bool,
) -> Result<()> {
    let payer = load_keypair(keypair_path)?;
    let mint = parse_pubkey(mint, "mint")?;
    let metadata = TokenMetadata {
        name:   name.to_string(),
        symbol: symbol.to_string(),
        uri:    uri.to_string(),
    };

    let sig = client
        .add_metadata(&payer, &mint, &metadata)
        .await
        .context("add-metadata transaction failed — is the wallet the mint authority?")?;

    if json_output {
        println!("{}", json!({
            "status":  "ok",
            "command": "add-metadata",
            "mint":    mint.to_string(),
            "name":    name,
            "symbol":  symbol,
            "uri":     uri,
            "tx":      sig.to_string(),
        }));
    } else {
        println!("metadata successfully added to {mint}");
        println!("tx sig = {sig}");
    }
    Ok(())
}

// ─── pool-info ───────────────────────────────────────────────────────────────

async fn cmd_pool_info(client: &TbcSwapClient, token_swap: &str, json_output: bool) -> Result<()> {
    let token_swap = parse_pubkey(token_swap, "pool")?;
    let pool = client
        .swap_pool(&token_swap)
        .await
        .with_context(|| format!("Cannot load pool state at {token_swap}"))?;

    let reserve_a = client.token_account(&pool.token_a_reserve).await?.amount;
    let reserve_b = client.token_account(&pool.token_b_reserve).await?.amount;
    let fee_balance = client.token_account(&pool.fee_account).await?.amount;

    if json_output {
        println!("{}", json!({
            "pool":            token_swap.to_string(),
            "version":         pool.version,
            "token_a_mint":    pool.token_a_mint.to_string(),
            "token_b_mint":    pool.token_b_mint.to_string(),
            "token_a_reserve": pool.token_a_reserve.to_string(),
            "token_b_reserve": pool.token_b_reserve.to_string(),
            "reserve_a":       reserve_a,
            "reserve_b":       reserve_b,
            "pool_mint":       pool.pool_mint.to_string(),
            "fee_account":     pool.fee_account.to_string(),
            "fee_balance":     fee_balance,
            "trade_fee":       format!("{}/{}", pool.trade_fee_numerator, pool.trade_fee_denominator),
            "curve": {
                "slope": format!("{}/{}",
                    pool.curve.slope_numerator, pool.curve.slope_denominator),
                "initial_token_a_price": format!("{}/{}",
                    pool.curve.initial_token_a_price_numerator,
                    pool.curve.initial_token_a_price_denominator),
            },
        }));
    } else {
        println!("─── Pool Info ─────────────────────────────────────────────────────");
        println!("  Pool            {token_swap}");
        println!("  Version         {}", pool.version);
        println!("  Token A mint    {}", pool.token_a_mint);
        println!("  Token B mint    {}", pool.token_b_mint);
        println!("  Reserve A       {}  (balance {})", pool.token_a_reserve, reserve_a);
        println!("  Reserve B       {}  (balance {})", pool.token_b_reserve, reserve_b);
        println!("  Pool mint       {}", pool.pool_mint);
        println!("  Fee account     {}  (balance {})", pool.fee_account, fee_balance);
        println!("  Trade fee       {}/{}", pool.trade_fee_numerator, pool.trade_fee_denominator);
        println!("  Curve slope     {}/{}",
            pool.curve.slope_numerator, pool.curve.slope_denominator);
        println!("  Initial price   {}/{}",
            pool.curve.initial_token_a_price_numerator,
            pool.curve.initial_token_a_price_denominator);
    }
    Ok(())
}
