// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines all possible ledger error categories

use displaydoc::Display;
use prototoken_models::{Address, Amount};
use thiserror::Error;

/// Errors of the ledger component.
/// Every failure is terminal for the attempted operation and leaves the
/// ledger state unchanged.
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// spending address {address} holds {available} which is less than the required {required}
    InsufficientBalance {
        /// debited account
        address: Address,
        /// amount the operation tried to spend
        required: Amount,
        /// balance actually held
        available: Amount,
    },
    /// allowance of {spender} on {owner} is {available} which is less than the required {required}
    InsufficientAllowance {
        /// account whose funds would be moved
        owner: Address,
        /// delegated spender
        spender: Address,
        /// amount the operation tried to move
        required: Amount,
        /// remaining allowance
        available: Amount,
    },
    /// arithmetic fault: {0}
    ArithmeticFault(String),
}
