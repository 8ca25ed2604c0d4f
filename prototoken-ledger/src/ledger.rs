// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines the ledger associating addresses to their balances and
//! delegated spending allowances.

use crate::{LedgerConfig, LedgerError};
use prototoken_models::{Address, Amount};
use std::collections::BTreeMap;
use tracing::debug;

/// Represents the authoritative record of account balances and delegated
/// spending limits, together with the total supply they must sum up to.
/// Absent entries read as zero, so queries never fail and no entry needs to
/// be pre-populated.
#[derive(Debug, Clone)]
pub struct Ledger {
    /// ledger configuration
    config: LedgerConfig,
    /// total number of base units in circulation
    total_supply: Amount,
    /// balance table, sorted by address
    balances: BTreeMap<Address, Amount>,
    /// allowance table, keyed by (owner, spender)
    allowances: BTreeMap<(Address, Address), Amount>,
}

impl Ledger {
    /// Initializes a new `Ledger` crediting the whole genesis supply to the
    /// genesis address.
    pub fn new(config: LedgerConfig) -> Self {
        let mut balances = BTreeMap::new();
        balances.insert(config.genesis_address, config.genesis_supply);
        let total_supply = config.genesis_supply;
        Ledger {
            config,
            total_supply,
            balances,
            allowances: BTreeMap::new(),
        }
    }

    /// Reference to the configuration the ledger was built with
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Gets the balance of an account
    ///
    /// # Returns
    /// The balance, or zero if the account has no entry
    pub fn get_balance(&self, addr: &Address) -> Amount {
        self.balances.get(addr).copied().unwrap_or_default()
    }

    /// Gets the remaining spending limit granted by `owner` to `spender`
    ///
    /// # Returns
    /// The allowance, or zero if no entry exists for the pair
    pub fn get_allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Total number of base units in circulation
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// # Returns
    /// A copy of every balance entry, sorted by address
    pub fn get_every_address(&self) -> BTreeMap<Address, Amount> {
        self.balances.clone()
    }

    /// Transfers value from one account to another.
    /// No changes are retained in case of failure.
    ///
    /// # Arguments
    /// * `from`: debited account
    /// * `to`: credited account
    /// * `amount`: value to move
    pub fn transfer_coins(
        &mut self,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let from_balance = self.get_balance(&from);
        let new_from_balance =
            from_balance
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientBalance {
                    address: from,
                    required: amount,
                    available: from_balance,
                })?;
        // a self-transfer credits the already-debited balance
        let to_balance = if from == to {
            new_from_balance
        } else {
            self.get_balance(&to)
        };
        let new_to_balance = to_balance.checked_add(amount).ok_or_else(|| {
            LedgerError::ArithmeticFault(format!(
                "crediting {} to {} would overflow its balance",
                amount, to
            ))
        })?;
        self.balances.insert(from, new_from_balance);
        self.balances.insert(to, new_to_balance);
        debug!("transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    /// Overwrites the spending limit granted by `owner` to `spender`.
    /// An amount of zero removes the entry. Always succeeds.
    pub fn set_allowance(&mut self, owner: Address, spender: Address, amount: Amount) {
        if amount.is_zero() {
            self.allowances.remove(&(owner, spender));
        } else {
            self.allowances.insert((owner, spender), amount);
        }
        debug!("allowance of {} on {} set to {}", spender, owner, amount);
    }

    /// Moves value from `from` to `to` on behalf of `spender`.
    /// The remaining allowance of the `(from, spender)` pair is checked
    /// before the balance of `from`; on success it is decremented by
    /// `amount`. No changes are retained in case of failure.
    ///
    /// # Arguments
    /// * `spender`: account spending on behalf of `from`
    /// * `from`: debited account
    /// * `to`: credited account
    /// * `amount`: value to move
    pub fn transfer_coins_from(
        &mut self,
        spender: Address,
        from: Address,
        to: Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let allowance = self.get_allowance(&from, &spender);
        let new_allowance =
            allowance
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientAllowance {
                    owner: from,
                    spender,
                    required: amount,
                    available: allowance,
                })?;
        let from_balance = self.get_balance(&from);
        let new_from_balance =
            from_balance
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientBalance {
                    address: from,
                    required: amount,
                    available: from_balance,
                })?;
        let to_balance = if from == to {
            new_from_balance
        } else {
            self.get_balance(&to)
        };
        let new_to_balance = to_balance.checked_add(amount).ok_or_else(|| {
            LedgerError::ArithmeticFault(format!(
                "crediting {} to {} would overflow its balance",
                amount, to
            ))
        })?;
        if new_allowance.is_zero() {
            self.allowances.remove(&(from, spender));
        } else {
            self.allowances.insert((from, spender), new_allowance);
        }
        self.balances.insert(from, new_from_balance);
        self.balances.insert(to, new_to_balance);
        debug!(
            "transferred {} from {} to {} on behalf of {}",
            amount, from, to, spender
        );
        Ok(())
    }

    /// Credits newly created value to an account, increasing the total
    /// supply by the same amount. Authorization is the caller's
    /// responsibility: the ledger only guards its arithmetic bounds.
    ///
    /// # Arguments
    /// * `to`: credited account
    /// * `amount`: value to create
    pub fn mint_coins(&mut self, to: Address, amount: Amount) -> Result<(), LedgerError> {
        let new_supply = self.total_supply.checked_add(amount).ok_or_else(|| {
            LedgerError::ArithmeticFault(format!(
                "minting {} would overflow the total supply",
                amount
            ))
        })?;
        let new_to_balance = self.get_balance(&to).checked_add(amount).ok_or_else(|| {
            LedgerError::ArithmeticFault(format!(
                "crediting {} to {} would overflow its balance",
                amount, to
            ))
        })?;
        self.total_supply = new_supply;
        self.balances.insert(to, new_to_balance);
        debug!("minted {} to {}", amount, to);
        Ok(())
    }
}
