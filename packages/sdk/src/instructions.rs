//! Low-level instruction builders for the on-chain TBC program.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for simulation or signing and submission. The TBC program is an Anchor
//! program; its binary interface is fixed and treated as a black box here —
//! these builders only marshal arguments into its compiled layout.
//!
//! Anchor instruction discriminators: `sha256("global:{name}")[..8]`.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    sysvar,
};
use std::str::FromStr;

// ─── Well-known program IDs ───────────────────────────────────────────────────

pub(crate) fn spl_token_id() -> Pubkey {
    Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap()
}

pub(crate) fn ata_program_id() -> Pubkey {
    Pubkey::from_str("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL").unwrap()
}

pub(crate) fn metadata_program_id() -> Pubkey {
    Pubkey::from_str("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s").unwrap()
}

pub(crate) fn system_program_id() -> Pubkey {
    Pubkey::from_str("11111111111111111111111111111111").unwrap()
}

// ─── PDA derivation helpers ───────────────────────────────────────────────────

/// Derive the swap-authority PDA that signs for reserve transfers.
///
/// Seeded by the pool state account alone — one authority per pool.
pub fn derive_swap_authority(token_swap: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[token_swap.as_ref()], program_id)
}

/// Derive the Associated Token Account for a wallet + mint.
pub fn derive_ata(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    let token_prog = spl_token_id();
    Pubkey::find_program_address(
        &[wallet.as_ref(), token_prog.as_ref(), mint.as_ref()],
        &ata_program_id(),
    )
    .0
}

/// Derive the Metaplex metadata PDA for a mint.
pub fn derive_metadata(mint: &Pubkey) -> (Pubkey, u8) {
    let metadata_prog = metadata_program_id();
    Pubkey::find_program_address(
        &[b"metadata", metadata_prog.as_ref(), mint.as_ref()],
        &metadata_prog,
    )
}

// ─── Discriminator ────────────────────────────────────────────────────────────

fn disc(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let h = solana_sdk::hash::hash(preimage.as_bytes());
    h.to_bytes()[..8].try_into().unwrap()
}

// ─── swap ─────────────────────────────────────────────────────────────────────

/// Build the `swap` instruction.
///
/// `source` / `destination` are the user's token accounts; `swap_source` /
/// `swap_destination` are the pool reserves for the same direction.
/// `amount_out` is the program's minimum-out argument and is passed through
/// opaquely — `0` is accepted unconditionally.
#[allow(clippy::too_many_arguments)]
pub fn swap_ix(
    program_id:              &Pubkey,
    token_swap:              &Pubkey,
    swap_authority:          &Pubkey,
    user_transfer_authority: &Pubkey,
    source:                  &Pubkey,
    destination:             &Pubkey,
    swap_source:             &Pubkey,
    swap_destination:        &Pubkey,
    pool_mint:               &Pubkey,
    pool_fee:                &Pubkey,
    amount_in:               u64,
    amount_out:              u64,
) -> Instruction {
    let mut data = disc("swap").to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());
    data.extend_from_slice(&amount_out.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*token_swap,              false),
            AccountMeta::new_readonly(*swap_authority,          false),
            AccountMeta::new_readonly(*user_transfer_authority, true),
            AccountMeta::new(*source,           false),  // mut
            AccountMeta::new(*destination,      false),  // mut
            AccountMeta::new(*swap_source,      false),  // mut
            AccountMeta::new(*swap_destination, false),  // mut
            AccountMeta::new(*pool_mint,        false),  // mut (fee mint)
            AccountMeta::new(*pool_fee,         false),  // mut
            AccountMeta::new_readonly(spl_token_id(), false),
        ],
        data,
    }
}

// ─── initialize_linear_price_curve ───────────────────────────────────────────

/// Build the `initialize_linear_price_curve` instruction.
///
/// `token_swap` must be a fresh keypair — the program initialises it as the
/// pool state account, so it must be included as an additional signer.
/// `token_a` / `token_b` are the reserve token accounts, already funded with
/// the initial token-B liquidity and owned by the swap-authority PDA.
#[allow(clippy::too_many_arguments)]
pub fn initialize_linear_price_curve_ix(
    program_id:                        &Pubkey,
    token_swap:                        &Pubkey,
    token_a:                           &Pubkey,
    token_b:                           &Pubkey,
    pool_mint:                         &Pubkey,
    fee_account:                       &Pubkey,
    destination:                       &Pubkey,
    slope_numerator:                   u64,
    slope_denominator:                 u64,
    initial_token_a_price_numerator:   u64,
    initial_token_a_price_denominator: u64,
) -> Instruction {
    let (swap_authority, _) = derive_swap_authority(token_swap, program_id);

    let mut data = disc("initialize_linear_price_curve").to_vec();
    data.extend_from_slice(&slope_numerator.to_le_bytes());
    data.extend_from_slice(&slope_denominator.to_le_bytes());
    data.extend_from_slice(&initial_token_a_price_numerator.to_le_bytes());
    data.extend_from_slice(&initial_token_a_price_denominator.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*token_swap,             true),   // mut + signer (init)
            AccountMeta::new_readonly(swap_authority, false),
            AccountMeta::new(*token_a,                false),  // mut
            AccountMeta::new(*token_b,                false),  // mut
            AccountMeta::new(*pool_mint,              false),  // mut
            AccountMeta::new(*fee_account,            false),  // mut
            AccountMeta::new(*destination,            false),  // mut
            AccountMeta::new_readonly(spl_token_id(), false),
        ],
        data,
    }
}

// ─── add_metadata (Metaplex CreateMetadataAccountV3) ─────────────────────────

/// Build a Metaplex Token Metadata `CreateMetadataAccountV3` instruction.
///
/// Attaches `name` / `symbol` / `uri` to `mint`. `payer` must also be the
/// mint authority; it becomes the metadata update authority.
pub fn add_metadata_ix(
    mint:   &Pubkey,
    payer:  &Pubkey,
    name:   &str,
    symbol: &str,
    uri:    &str,
) -> Instruction {
    let (metadata, _) = derive_metadata(mint);

    // CreateMetadataAccountV3 = variant 33, args borsh-encoded:
    //   DataV2 { name, symbol, uri, seller_fee_basis_points: u16,
    //            creators: None, collection: None, uses: None }
    //   is_mutable: bool, collection_details: None
    let mut data = vec![33u8];
    push_borsh_string(&mut data, name);
    push_borsh_string(&mut data, symbol);
    push_borsh_string(&mut data, uri);
    data.extend_from_slice(&0u16.to_le_bytes()); // seller_fee_basis_points
    data.push(0); // creators: None
    data.push(0); // collection: None
    data.push(0); // uses: None
    data.push(1); // is_mutable: true
    data.push(0); // collection_details: None

    Instruction {
        program_id: metadata_program_id(),
        accounts: vec![
            AccountMeta::new(metadata,            false),  // mut PDA (init)
            AccountMeta::new_readonly(*mint,      false),
            AccountMeta::new_readonly(*payer,     true),   // mint authority
            AccountMeta::new(*payer,              true),   // payer
            AccountMeta::new_readonly(*payer,     true),   // update authority
            AccountMeta::new_readonly(system_program_id(), false),
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data,
    }
}

/// Borsh string: u32 little-endian length prefix, then UTF-8 bytes.
fn push_borsh_string(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
    buf.extend_from_slice(s.as_bytes());
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(byte: u8) -> Pubkey {
        Pubkey::from([byte; 32])
    }

    #[test]
    fn swap_authority_derivation_is_deterministic() {
        let pool = pk(7);
        let program = pk(9);
        let (a1, bump1) = derive_swap_authority(&pool, &program);
        let (a2, bump2) = derive_swap_authority(&pool, &program);
        assert_eq!(a1, a2);
        assert_eq!(bump1, bump2);
        // The authority must differ from its seeds.
        assert_ne!(a1, pool);
        assert_ne!(a1, program);
    }

    #[test]
    fn swap_ix_marshals_amounts_little_endian() {
        let ix = swap_ix(
            &pk(1), &pk(2), &pk(3), &pk(4), &pk(5), &pk(6), &pk(7), &pk(8), &pk(9), &pk(10),
            2400 * 100_000_000,
            0,
        );
        assert_eq!(ix.data.len(), 8 + 8 + 8);
        assert_eq!(ix.data[8..16], (240_000_000_000u64).to_le_bytes());
        assert_eq!(ix.data[16..24], 0u64.to_le_bytes());
        // 9 pool/user accounts + token program
        assert_eq!(ix.accounts.len(), 10);
        assert_eq!(ix.accounts[9].pubkey, spl_token_id());
        // Only the user transfer authority signs.
        let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, pk(4));
    }

    #[test]
    fn init_curve_ix_marshals_four_u64_args() {
        let ix = initialize_linear_price_curve_ix(
            &pk(1), &pk(2), &pk(3), &pk(4), &pk(5), &pk(6), &pk(7),
            1, 200_000_000, 150, 3,
        );
        assert_eq!(ix.data.len(), 8 + 4 * 8);
        assert_eq!(ix.data[8..16], 1u64.to_le_bytes());
        assert_eq!(ix.data[16..24], 200_000_000u64.to_le_bytes());
        assert_eq!(ix.data[24..32], 150u64.to_le_bytes());
        assert_eq!(ix.data[32..40], 3u64.to_le_bytes());
        // Pool state account signs at init.
        assert!(ix.accounts[0].is_signer);
        assert!(ix.accounts[0].is_writable);
    }

    #[test]
    fn metadata_ix_targets_the_metadata_program() {
        let mint = pk(11);
        let payer = pk(12);
        let ix = add_metadata_ix(&mint, &payer, "Rally", "RLY", "https://example.com/rly.json");
        assert_eq!(ix.program_id, metadata_program_id());
        assert_eq!(ix.accounts[0].pubkey, derive_metadata(&mint).0);
        // variant byte + len-prefixed "Rally"
        assert_eq!(ix.data[0], 33);
        assert_eq!(&ix.data[1..5], &5u32.to_le_bytes());
        assert_eq!(&ix.data[5..10], b"Rally");
    }
}
