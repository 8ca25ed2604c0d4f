// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the token facade tying together the ledger, the mint
//! controller and the event store.

use crate::{EventStore, MintController, TokenConfig, TokenError};
use prototoken_ledger::{Ledger, LedgerConfig};
use prototoken_models::{Address, Amount, TokenEvent};
use prototoken_time::TokenTime;
use std::collections::VecDeque;
use tracing::debug;

/// Entry point of the token system.
///
/// Operations execute as discrete, fully-serialized state transitions over
/// `&mut self`: each one validates, then commits all of its writes, or fails
/// and commits none. Caller identity and the current time are explicit
/// arguments supplied by the embedding context; the time is read once per
/// operation and assumed monotonically non-decreasing across operations.
#[derive(Debug, Clone)]
pub struct Token {
    /// token configuration
    config: TokenConfig,
    /// only account allowed to mint and to change the mint settings,
    /// fixed at construction
    owner: Address,
    /// balance and allowance accounting
    ledger: Ledger,
    /// issuance throttle
    mint_controller: MintController,
    /// events emitted by committed operations
    event_store: EventStore,
}

impl Token {
    /// Initializes a new `Token`: the genesis address becomes the owner and
    /// receives the whole genesis supply, minting starts disabled.
    pub fn new(config: TokenConfig) -> Self {
        let ledger = Ledger::new(LedgerConfig {
            genesis_address: config.genesis_address,
            genesis_supply: config.genesis_supply,
        });
        let mint_controller =
            MintController::new(config.initial_mint_amount, config.initial_mint_delay);
        let owner = config.genesis_address;
        Token {
            config,
            owner,
            ledger,
            mint_controller,
            event_store: EventStore::default(),
        }
    }

    /// Token display name
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Token ticker symbol
    pub fn symbol(&self) -> &str {
        &self.config.symbol
    }

    /// Number of fractional decimal places of the token unit
    pub fn decimals(&self) -> u8 {
        self.config.decimals
    }

    /// Account allowed to mint and to change the mint settings
    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Total number of base units in circulation
    pub fn total_supply(&self) -> Amount {
        self.ledger.total_supply()
    }

    /// Balance of an account, zero if it has no entry
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.ledger.get_balance(account)
    }

    /// Remaining spending limit granted by `owner` to `spender`
    pub fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.ledger.get_allowance(owner, spender)
    }

    /// Read access to the underlying ledger
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Read access to the mint state
    pub fn mint_controller(&self) -> &MintController {
        &self.mint_controller
    }

    /// Moves `amount` from the caller to `to` and emits a transfer event.
    pub fn transfer(
        &mut self,
        caller: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.ledger.transfer_coins(caller, to, amount)?;
        self.event_store.push(TokenEvent::Transfer {
            from: Some(caller),
            to,
            amount,
        });
        Ok(())
    }

    /// Overwrites the spending limit granted by the caller to `spender` and
    /// emits an approval event. An amount of zero resets the limit.
    pub fn approve(
        &mut self,
        caller: Address,
        spender: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.ledger.set_allowance(caller, spender, amount);
        self.event_store.push(TokenEvent::Approval {
            owner: caller,
            spender,
            amount,
        });
        Ok(())
    }

    /// Moves `amount` from `from` to `to` on behalf of the caller, spending
    /// from the allowance `from` granted the caller; emits a transfer event.
    pub fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), TokenError> {
        self.ledger.transfer_coins_from(caller, from, to, amount)?;
        self.event_store.push(TokenEvent::Transfer {
            from: Some(from),
            to,
            amount,
        });
        Ok(())
    }

    /// Sets the per-mint amount. Owner only.
    pub fn set_mint_amount(&mut self, caller: Address, amount: Amount) -> Result<(), TokenError> {
        self.check_owner(&caller)?;
        self.mint_controller.set_mint_amount(amount);
        Ok(())
    }

    /// Sets the minimum spacing between successful mints. Owner only.
    pub fn set_mint_delay(&mut self, caller: Address, delay: TokenTime) -> Result<(), TokenError> {
        self.check_owner(&caller)?;
        self.mint_controller.set_mint_delay(delay);
        Ok(())
    }

    /// Creates the configured mint amount and credits it to `to`.
    /// Owner only, gated by the cooldown; `now` is the ambient current time
    /// read once by the calling context.
    ///
    /// The last-mint time is recorded only after the ledger credit
    /// succeeded, so a recorded mint time always corresponds to exactly one
    /// applied credit.
    pub fn mint(
        &mut self,
        caller: Address,
        to: Address,
        now: TokenTime,
    ) -> Result<(), TokenError> {
        self.check_owner(&caller)?;
        let amount = self.mint_controller.claimable_amount(now)?;
        self.ledger.mint_coins(to, amount)?;
        self.mint_controller.register_mint(now);
        self.event_store.push(TokenEvent::Transfer {
            from: None,
            to,
            amount,
        });
        debug!("minted {} to {} at {}", amount, to, now);
        Ok(())
    }

    /// Drains and returns the events emitted since the last call
    pub fn take_events(&mut self) -> VecDeque<TokenEvent> {
        self.event_store.take()
    }

    fn check_owner(&self, caller: &Address) -> Result<(), TokenError> {
        if *caller != self.owner {
            return Err(TokenError::NotAuthorized(*caller));
        }
        Ok(())
    }
}
