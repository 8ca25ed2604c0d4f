// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! This module represents an event store allowing to store, retrieve and
//! prune the events emitted by committed token operations

use prototoken_models::TokenEvent;
use std::collections::VecDeque;

/// Store for events emitted by token operations, oldest at the front
#[derive(Default, Debug, Clone)]
pub struct EventStore(VecDeque<TokenEvent>);

impl EventStore {
    /// Push a new token event to the store
    pub fn push(&mut self, event: TokenEvent) {
        self.0.push_back(event);
    }

    /// Take the event store
    pub fn take(&mut self) -> VecDeque<TokenEvent> {
        std::mem::take(&mut self.0)
    }

    /// Clear the event store
    pub fn clear(&mut self) {
        self.0.clear()
    }

    /// Prune the event store if its size is over the given limit
    pub fn prune(&mut self, max_events: usize) {
        while self.0.len() > max_events {
            self.0.pop_front();
        }
    }

    /// Extend the event store with another store
    pub fn extend(&mut self, other: EventStore) {
        self.0.extend(other.0);
    }

    /// Number of stored events
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the store holds no event
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
