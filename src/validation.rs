//! Amount validation.
//!
//! Payment amounts are signed to match the Stellar token interface. A
//! negative amount is never a valid payment or fee.

use crate::LedgerError;

/// Reject negative payments. Zero is valid (free operations).
pub fn require_payment(paid: i128) -> Result<(), LedgerError> {
    if paid < 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Reject amounts that must move value: zero or negative.
pub fn require_positive(amount: i128) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount);
    }
    Ok(())
}

/// Check a payment against the fee an operation requires.
pub fn require_fee(paid: i128, required: i128) -> Result<(), LedgerError> {
    if paid < required {
        return Err(LedgerError::InsufficientFee);
    }
    Ok(())
}
