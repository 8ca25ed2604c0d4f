// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Events emitted by committed token operations, for external consumers.

use crate::address::Address;
use crate::amount::Amount;
use serde::{Deserialize, Serialize};

/// Observable side effect of a committed token operation.
/// Exactly one event is emitted per balance-moving or approving operation;
/// failed operations emit nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenEvent {
    /// value moved between accounts
    Transfer {
        /// debited account, `None` when the value was newly created by a mint
        from: Option<Address>,
        /// credited account
        to: Address,
        /// moved value
        amount: Amount,
    },
    /// spending limit granted by an owner to a spender, overwriting any previous limit
    Approval {
        /// granting account
        owner: Address,
        /// account allowed to spend on behalf of `owner`
        spender: Address,
        /// new spending limit
        amount: Amount,
    },
}
