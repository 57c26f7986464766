//! Ledger events and their publication.
//!
//! Operations never publish directly. They return an [`Outcome`] carrying
//! the events they produced, and the contract entry point publishes them
//! once the operation has committed.

use soroban_sdk::{contracttype, Address, BytesN, Env, String, Symbol, Vec};

use crate::date::Date;

/// A profile was created.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProfileMint {
    pub owner: Address,
    pub profile_id: u64,
    /// SHA-256 of the XDR-encoded profile URI.
    pub uri_hash: BytesN<32>,
}

/// A diary entry was saved.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiaryCreated {
    pub profile_id: u64,
    pub diary_id: u64,
    pub date: Date,
    pub uri: String,
}

/// Follower tokens were credited to an account.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMinted {
    pub account: Address,
    pub token_id: u32,
    pub quantity: u64,
}

/// Collected fees left the contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeesWithdrawn {
    pub to: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum LedgerEvent {
    ProfileMint(ProfileMint),
    DiaryCreated(DiaryCreated),
    TokenMinted(TokenMinted),
    FeesWithdrawn(FeesWithdrawn),
}

/// Result of a committed operation together with the events it emits.
#[derive(Clone, Debug)]
pub struct Outcome<T> {
    pub value: T,
    pub events: Vec<LedgerEvent>,
}

impl<T> Outcome<T> {
    pub fn new(env: &Env, value: T) -> Self {
        Self {
            value,
            events: Vec::new(env),
        }
    }

    pub fn with_event(mut self, event: LedgerEvent) -> Self {
        self.events.push_back(event);
        self
    }

    /// Append the events of another outcome, keeping their order.
    pub fn merge<U>(mut self, other: Outcome<U>) -> Self {
        self.events.append(&other.events);
        self
    }

    /// Publish the events and return the value.
    pub fn publish(self, env: &Env) -> T {
        for event in self.events.iter() {
            publish_event(env, &event);
        }
        self.value
    }
}

fn publish_event(env: &Env, event: &LedgerEvent) {
    match event {
        LedgerEvent::ProfileMint(e) => {
            let topics = (Symbol::new(env, "profile_mint"), e.owner.clone());
            env.events()
                .publish(topics, (e.profile_id, e.uri_hash.clone()));
        }
        LedgerEvent::DiaryCreated(e) => {
            let topics = (Symbol::new(env, "diary_created"), e.profile_id);
            env.events()
                .publish(topics, (e.diary_id, e.date, e.uri.clone()));
        }
        LedgerEvent::TokenMinted(e) => {
            let topics = (Symbol::new(env, "token_minted"), e.account.clone());
            env.events().publish(topics, (e.token_id, e.quantity));
        }
        LedgerEvent::FeesWithdrawn(e) => {
            let topics = (Symbol::new(env, "fees_withdrawn"), e.to.clone());
            env.events().publish(topics, e.amount);
        }
    }
}
