// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Compile-time parameters of the token.

use crate::amount::Amount;

/// Size in bytes of a raw account address
pub const ADDRESS_SIZE_BYTES: usize = 20;

/// Scaling factor of the fixed-point `Amount` representation
pub const AMOUNT_DECIMAL_FACTOR: u128 = 1_000_000_000_000_000_000;

/// Number of fractional decimal places of the token unit
pub const TOKEN_DECIMALS: u8 = 18;

/// Token display name
pub const TOKEN_NAME: &str = "ProtoToken";

/// Token ticker symbol
pub const TOKEN_SYMBOL: &str = "PTK";

/// Whole token units credited to the genesis address at construction
pub const GENESIS_SUPPLY_UNITS: u128 = 1_000;

/// Genesis supply in raw base units
pub const GENESIS_SUPPLY: Amount = Amount::from_raw(GENESIS_SUPPLY_UNITS * AMOUNT_DECIMAL_FACTOR);
