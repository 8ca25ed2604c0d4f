// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Mint throttling state machine.
//!
//! Three conceptual states are derived from the stored fields rather than
//! enumerated: minting is disabled while the configured amount is zero;
//! otherwise the controller is ready when the configured delay has elapsed
//! since the last successful mint (a controller that never minted is always
//! ready), and cooling until then.

use crate::TokenError;
use prototoken_models::Amount;
use prototoken_time::TokenTime;

/// Issuance throttle: the configured per-mint amount, the minimum spacing
/// between successful mints and the time of the last one.
#[derive(Debug, Clone)]
pub struct MintController {
    /// units created per successful mint; zero disables minting
    mint_amount: Amount,
    /// minimum spacing between successful mints
    mint_delay: TokenTime,
    /// time of the last successful mint, `None` if none happened yet
    last_mint: Option<TokenTime>,
}

impl MintController {
    /// Creates a controller that has never minted
    pub fn new(mint_amount: Amount, mint_delay: TokenTime) -> Self {
        MintController {
            mint_amount,
            mint_delay,
            last_mint: None,
        }
    }

    /// Currently configured per-mint amount
    pub fn mint_amount(&self) -> Amount {
        self.mint_amount
    }

    /// Currently configured minimum spacing between successful mints
    pub fn mint_delay(&self) -> TokenTime {
        self.mint_delay
    }

    /// Time of the last successful mint, `None` if none happened yet
    pub fn last_mint(&self) -> Option<TokenTime> {
        self.last_mint
    }

    /// Sets the per-mint amount. The cooldown is not reset.
    pub fn set_mint_amount(&mut self, amount: Amount) {
        self.mint_amount = amount;
    }

    /// Sets the minimum spacing between successful mints.
    /// The time of the last mint is not re-validated.
    pub fn set_mint_delay(&mut self, delay: TokenTime) {
        self.mint_delay = delay;
    }

    /// Checks whether a mint may happen at `now`.
    /// A mint is allowed exactly when the configured delay has elapsed since
    /// the last successful one: `now` equal to the end of the cooldown is
    /// already ready.
    ///
    /// # Returns
    /// The amount to credit, or the error ruling the mint out
    pub fn claimable_amount(&self, now: TokenTime) -> Result<Amount, TokenError> {
        if self.mint_amount.is_zero() {
            return Err(TokenError::MintingDisabled);
        }
        if let Some(last_mint) = self.last_mint {
            let ready_at = last_mint.checked_add(self.mint_delay)?;
            if now < ready_at {
                return Err(TokenError::MintCooldownActive(ready_at));
            }
        }
        Ok(self.mint_amount)
    }

    /// Records a successful mint at `now`.
    /// Must only be called once the corresponding credit has been applied.
    pub fn register_mint(&mut self, now: TokenTime) {
        self.last_mint = Some(now);
    }
}
