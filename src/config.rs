//! Contract configuration and the fee schedule.

use soroban_sdk::{contracttype, Address};

/// Fee for every profile after an account's first (1 unit at 7 decimals).
pub const DEFAULT_ADDITIONAL_PROFILE_FEE: i128 = 10_000_000;

/// Price of one block of `price_denominator` follower tokens.
pub const DEFAULT_FOLLOWER_UNIT_PRICE: i128 = 10_000_000;

/// Number of follower tokens priced by `follower_unit_price`.
pub const DEFAULT_PRICE_DENOMINATOR: i128 = 100;

/// Purchases of at least this many tokens receive the bulk discount.
pub const DEFAULT_BULK_DISCOUNT_THRESHOLD: u64 = 1_000;

/// Bulk discount in percent.
pub const DEFAULT_BULK_DISCOUNT_RATE: u32 = 10;

/// Follower tokens minted to the owner at initialization.
pub const OWNER_INITIAL_FOLLOWERS: u64 = 1_000;

/// The single fungible token kind tracked by the market.
pub const FOLLOWER_TOKEN_ID: u32 = 1;

/// Deployment-wide settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Contract owner. Receives the bootstrap profile and tokens.
    pub owner: Address,

    /// Stellar Asset Contract used for every fee payment.
    pub payment_token: Address,
}

/// Prices charged by the ledger.
///
/// Amounts are in the smallest unit of the payment token.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSchedule {
    pub additional_profile_fee: i128,
    pub diary_saving_fee: i128,
    pub diary_cover_fee: i128,
    pub follower_unit_price: i128,
    pub price_denominator: i128,
    pub bulk_discount_threshold: u64,
    pub bulk_discount_rate: u32,
}

impl FeeSchedule {
    /// Schedule with the given diary fees and default values for the rest.
    pub fn with_diary_fees(diary_saving_fee: i128, diary_cover_fee: i128) -> Self {
        Self {
            additional_profile_fee: DEFAULT_ADDITIONAL_PROFILE_FEE,
            diary_saving_fee,
            diary_cover_fee,
            follower_unit_price: DEFAULT_FOLLOWER_UNIT_PRICE,
            price_denominator: DEFAULT_PRICE_DENOMINATOR,
            bulk_discount_threshold: DEFAULT_BULK_DISCOUNT_THRESHOLD,
            bulk_discount_rate: DEFAULT_BULK_DISCOUNT_RATE,
        }
    }

    /// Price of a single follower token.
    pub fn unit_price(&self) -> i128 {
        self.follower_unit_price / self.price_denominator
    }

    /// Total price of `quantity` follower tokens, bulk discount applied.
    pub fn follower_price(&self, quantity: u64) -> i128 {
        let raw = self.unit_price() * i128::from(quantity);
        if quantity >= self.bulk_discount_threshold {
            raw - raw * i128::from(self.bulk_discount_rate) / 100
        } else {
            raw
        }
    }
}
