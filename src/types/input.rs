//! Operator input conversion.

use alloy::{
    hex,
    primitives::{Address, TxHash},
};

use crate::error::{AppError, Result};

/// Parse and validate an Ethereum address typed by the operator.
///
/// Validates:
/// - Address format (40 hex characters, `0x` prefix optional)
/// - Hex digits only
///
/// Mixed-case input is accepted whatever its checksum.
pub fn parse_address(s: &str) -> Result<Address> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(AppError::InvalidAddress("address cannot be empty".into()));
    }

    let digits = strip_hex_prefix(trimmed);

    if digits.len() != 40 {
        return Err(AppError::InvalidAddress(format!(
            "address must have 40 hex characters, got {}: {}",
            digits.len(),
            s
        )));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(AppError::InvalidAddress(format!("address contains non-hex characters: {s}")));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes)?;
    Ok(Address::from(bytes))
}

/// Convert operator text into a transaction hash without validating it.
///
/// The `0x` prefix is optional and an odd digit count is left-padded. Only
/// the leading run of whole hex bytes is decoded, so `0xabzz` keeps `ab`.
/// Input longer than 32 bytes keeps its trailing 32 bytes and shorter input
/// is left-padded with zeros.
pub fn parse_tx_hash(s: &str) -> TxHash {
    let digits = strip_hex_prefix(s.trim());
    let padded = if digits.len() % 2 == 1 { format!("0{digits}") } else { digits.to_string() };

    let valid = padded.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(padded.len());
    let decoded = hex::decode(&padded[..valid & !1]).unwrap_or_default();

    TxHash::left_padding_from(&decoded[decoded.len().saturating_sub(32)..])
}

fn strip_hex_prefix(s: &str) -> &str {
    s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s)
}
