// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines a configuration structure containing all settings for the token system

use prototoken_models::{Address, Amount, GENESIS_SUPPLY, TOKEN_DECIMALS, TOKEN_NAME, TOKEN_SYMBOL};
use prototoken_time::TokenTime;
use serde::{Deserialize, Serialize};

/// Token configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// token display name
    pub name: String,
    /// token ticker symbol
    pub symbol: String,
    /// number of fractional decimal places of the token unit
    pub decimals: u8,
    /// account credited with the genesis supply; also the token owner
    pub genesis_address: Address,
    /// initial total supply, in raw base units
    pub genesis_supply: Amount,
    /// units created per mint; zero disables minting
    pub initial_mint_amount: Amount,
    /// minimum spacing between successful mints
    pub initial_mint_delay: TokenTime,
}

impl TokenConfig {
    /// Standard construction parameters: the whole genesis supply goes to
    /// `genesis_address`, minting starts disabled and unthrottled.
    pub fn new(genesis_address: Address) -> Self {
        TokenConfig {
            name: TOKEN_NAME.to_string(),
            symbol: TOKEN_SYMBOL.to_string(),
            decimals: TOKEN_DECIMALS,
            genesis_address,
            genesis_supply: GENESIS_SUPPLY,
            initial_mint_amount: Amount::zero(),
            initial_mint_delay: TokenTime::from_secs(0),
        }
    }
}
