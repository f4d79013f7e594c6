//! On-chain account deserialization.
//!
//! Parses raw account bytes for the TBC pool state account plus the SPL token
//! account and mint layouts the estimator reads back. All layouts are owned by
//! external programs and fixed; byte offsets here mirror them exactly.

use crate::error::{Error, Result};
use solana_sdk::pubkey::Pubkey;

// ─── TBC pool state ───────────────────────────────────────────────────────────

/// Deserialized TBC pool state account.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// version(1)  bump_seed(1)  token_program(32)
/// token_a_reserve(32)  token_b_reserve(32)  pool_mint(32)
/// token_a_mint(32)  token_b_mint(32)  fee_account(32)
/// trade_fee_numerator(8)  trade_fee_denominator(8)
/// owner_trade_fee_numerator(8)  owner_trade_fee_denominator(8)
/// curve_type(1)
/// slope_numerator(8)  slope_denominator(8)
/// initial_token_a_price_numerator(8)  initial_token_a_price_denominator(8)
/// = 299 bytes
/// ```
#[derive(Debug, Clone)]
pub struct SwapPoolState {
    pub version:           u8,
    pub bump_seed:         u8,
    pub token_program:     Pubkey,
    /// Reserve token account holding the pool's token A.
    pub token_a_reserve:   Pubkey,
    /// Reserve token account holding the pool's token B.
    pub token_b_reserve:   Pubkey,
    pub pool_mint:         Pubkey,
    pub token_a_mint:      Pubkey,
    pub token_b_mint:      Pubkey,
    pub fee_account:       Pubkey,
    pub trade_fee_numerator:          u64,
    pub trade_fee_denominator:        u64,
    pub owner_trade_fee_numerator:    u64,
    pub owner_trade_fee_denominator:  u64,
    pub curve: LinearCurve,
}

/// Linear price curve parameters, stored inline in the pool account.
///
/// The pricing function itself lives entirely in the on-chain program; these
/// values are decoded for display only and never fed into client-side math.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearCurve {
    pub slope_numerator:                   u64,
    pub slope_denominator:                 u64,
    pub initial_token_a_price_numerator:   u64,
    pub initial_token_a_price_denominator: u64,
}

/// Byte length of a TBC pool state account.
pub const SWAP_POOL_LEN: usize = 299;

/// Deserialize a TBC pool state account from raw bytes.
pub fn parse_swap_pool(data: &[u8]) -> Result<SwapPoolState> {
    if data.len() < SWAP_POOL_LEN {
        return Err(Error::Parse {
            offset: 0,
            reason: format!(
                "pool account is {} bytes; expected {} — may not be a TBC pool",
                data.len(),
                SWAP_POOL_LEN
            ),
        });
    }
    Ok(SwapPoolState {
        version:         data[8],
        bump_seed:       data[9],
        token_program:   read_pubkey(data, 10)?,
        token_a_reserve: read_pubkey(data, 42)?,
        token_b_reserve: read_pubkey(data, 74)?,
        pool_mint:       read_pubkey(data, 106)?,
        token_a_mint:    read_pubkey(data, 138)?,
        token_b_mint:    read_pubkey(data, 170)?,
        fee_account:     read_pubkey(data, 202)?,
        trade_fee_numerator:         read_u64(data, 234)?,
        trade_fee_denominator:       read_u64(data, 242)?,
        owner_trade_fee_numerator:   read_u64(data, 250)?,
        owner_trade_fee_denominator: read_u64(data, 258)?,
        curve: LinearCurve {
            slope_numerator:                   read_u64(data, 267)?,
            slope_denominator:                 read_u64(data, 275)?,
            initial_token_a_price_numerator:   read_u64(data, 283)?,
            initial_token_a_price_denominator: read_u64(data, 291)?,
        },
    })
}

// ─── SPL token account ────────────────────────────────────────────────────────

/// Decoded SPL token account fields the client needs.
///
/// Token account layout: `mint(32) owner(32) amount(8) …` (165 bytes total).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenAccountState {
    pub mint:   Pubkey,
    pub owner:  Pubkey,
    pub amount: u64,
}

/// Deserialize the leading fields of an SPL token account.
pub fn parse_token_account(data: &[u8]) -> Result<TokenAccountState> {
    if data.len() < 72 {
        return Err(Error::Parse {
            offset: 64,
            reason: format!("token account is {} bytes; need at least 72", data.len()),
        });
    }
    Ok(TokenAccountState {
        mint:   read_pubkey(data, 0)?,
        owner:  read_pubkey(data, 32)?,
        amount: read_u64(data, 64)?,
    })
}

/// Read only the `amount` field from a packed SPL token account.
pub fn parse_token_amount(data: &[u8]) -> Result<u64> {
    Ok(parse_token_account(data)?.amount)
}

// ─── SPL mint ─────────────────────────────────────────────────────────────────

/// Decoded SPL mint fields the client needs.
///
/// Mint layout: `mint_authority(36) supply(8) decimals(1) …` (82 bytes total).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MintState {
    pub supply:   u64,
    pub decimals: u8,
}

/// Deserialize an SPL mint account.
pub fn parse_mint(data: &[u8]) -> Result<MintState> {
    if data.len() < 82 {
        return Err(Error::Parse {
            offset: 36,
            reason: format!("mint account is {} bytes; expected 82", data.len()),
        });
    }
    Ok(MintState {
        supply:   read_u64(data, 36)?,
        decimals: data[44],
    })
}

// ─── Byte-slice primitives ────────────────────────────────────────────────────

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    let b: [u8; 32] = data[offset..offset + 32]
        .try_into()
        .map_err(|_| Error::Parse {
            offset,
            reason: "slice too short for Pubkey (32 bytes)".into(),
        })?;
    Ok(Pubkey::from(b))
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    let b: [u8; 8] = data[offset..offset + 8]
        .try_into()
        .map_err(|_| Error::Parse { offset, reason: "slice too short for u64".into() })?;
    Ok(u64::from_le_bytes(b))
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a synthetic 165-byte SPL token account blob.
    fn token_account_blob(mint: Pubkey, owner: Pubkey, amount: u64) -> Vec<u8> {
        let mut data = vec![0u8; 165];
        data[0..32].copy_from_slice(mint.as_ref());
        data[32..64].copy_from_slice(owner.as_ref());
        data[64..72].copy_from_slice(&amount.to_le_bytes());
        data
    }

    #[test]
    fn token_account_round_trips_amount() {
        let mint = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        // Above 2^53 — must survive without precision loss.
        let amount = 16_000_000_000_000_000_000u64;
        let parsed = parse_token_account(&token_account_blob(mint, owner, amount)).unwrap();
        assert_eq!(parsed.mint, mint);
        assert_eq!(parsed.owner, owner);
        assert_eq!(parsed.amount, amount);
    }

    #[test]
    fn short_token_account_is_a_parse_error_not_zero() {
        let err = parse_token_amount(&[0u8; 64]).unwrap_err();
        match err {
            Error::Parse { offset, .. } => assert_eq!(offset, 64),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn mint_decodes_supply_and_decimals() {
        let mut data = vec![0u8; 82];
        data[36..44].copy_from_slice(&1_000_000_000_000u64.to_le_bytes());
        data[44] = 8;
        let mint = parse_mint(&data).unwrap();
        assert_eq!(mint.supply, 1_000_000_000_000);
        assert_eq!(mint.decimals, 8);
    }

    #[test]
    fn pool_state_round_trips() {
        let mut data = vec![0u8; SWAP_POOL_LEN];
        data[8] = 1; // version
        data[9] = 254; // bump
        let token_a_reserve = Pubkey::new_unique();
        let fee_account = Pubkey::new_unique();
        data[42..74].copy_from_slice(token_a_reserve.as_ref());
        data[202..234].copy_from_slice(fee_account.as_ref());
        data[267..275].copy_from_slice(&1u64.to_le_bytes());            // slope num
        data[275..283].copy_from_slice(&200_000_000u64.to_le_bytes());  // slope den
        data[283..291].copy_from_slice(&150u64.to_le_bytes());          // price num
        data[291..299].copy_from_slice(&3u64.to_le_bytes());            // price den

        let pool = parse_swap_pool(&data).unwrap();
        assert_eq!(pool.version, 1);
        assert_eq!(pool.bump_seed, 254);
        assert_eq!(pool.token_a_reserve, token_a_reserve);
        assert_eq!(pool.fee_account, fee_account);
        assert_eq!(
            pool.curve,
            LinearCurve {
                slope_numerator:                   1,
                slope_denominator:                 200_000_000,
                initial_token_a_price_numerator:   150,
                initial_token_a_price_denominator: 3,
            }
        );
    }

    #[test]
    fn truncated_pool_is_a_parse_error() {
        assert!(matches!(
            parse_swap_pool(&vec![0u8; SWAP_POOL_LEN - 1]),
            Err(Error::Parse { .. })
        ));
    }
}
