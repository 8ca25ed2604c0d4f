// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the ledger system

use prototoken_models::{Address, Amount};

/// Ledger configuration
#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// account credited with the whole genesis supply at construction
    pub genesis_address: Address,
    /// initial total supply, in raw base units
    pub genesis_supply: Amount,
}
