// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This file defines all possible token error categories

use displaydoc::Display;
use prototoken_ledger::LedgerError;
use prototoken_models::Address;
use prototoken_time::{TimeError, TokenTime};
use thiserror::Error;

/// Errors of the token component.
/// Every failure is terminal for the attempted operation and leaves all
/// state (ledger, mint state, events) unchanged.
#[non_exhaustive]
#[derive(Display, Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// caller {0} is not the token owner
    NotAuthorized(Address),
    /// minting is disabled: the configured mint amount is zero
    MintingDisabled,
    /// mint cooldown active until {0}
    MintCooldownActive(TokenTime),
    /// ledger error: {0}
    LedgerError(#[from] LedgerError),
    /// time error: {0}
    TimeError(#[from] TimeError),
}
