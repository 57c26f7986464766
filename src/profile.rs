//! Profile struct and related types.

use soroban_sdk::{contracttype, Address, String};

/// Whether a profile is listed in the public profile index.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Visibility {
    Public,
    Private,
}

impl Visibility {
    pub fn from_private_flag(is_private: bool) -> Self {
        if is_private {
            Visibility::Private
        } else {
            Visibility::Public
        }
    }
}

/// A publishing surface owned by an account.
///
/// Profiles are created once and never updated or deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Profile {
    /// Sequential id, starting at 1.
    pub id: u64,

    /// Account that created the profile.
    pub owner: Address,

    /// Public or private listing.
    pub visibility: Visibility,

    /// Reference to externally stored profile metadata.
    pub uri: String,
}

impl Profile {
    /// Create a new profile.
    pub fn new(id: u64, owner: Address, visibility: Visibility, uri: String) -> Self {
        Self {
            id,
            owner,
            visibility,
            uri,
        }
    }

    /// Check if this profile appears in the public index.
    pub fn is_public(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub fn is_owned_by(&self, account: &Address) -> bool {
        self.owner == *account
    }
}
