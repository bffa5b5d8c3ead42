// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation and derivation logic. Every function here takes
//! fully-materialized records and returns a derived value; nothing in this
//! module touches the database.

use rust_decimal::Decimal;
use thiserror::Error;

pub mod aggregate;
pub mod budget;
pub mod dates;
pub mod goal;
pub mod report;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount {0}: must be greater than zero")]
    InvalidAmount(Decimal),
    #[error("Invalid target amount {0}: must be greater than zero")]
    InvalidTarget(Decimal),
    #[error("Invalid monthly limit {0}: must be greater than zero")]
    InvalidLimit(Decimal),
    #[error("Invalid starting amount {0}: must not be negative")]
    NegativeAmount(Decimal),
}

/// Transaction and contribution amounts must be strictly positive; the
/// transaction type carries the sign when amounts are netted.
pub fn validate_amount(amount: Decimal) -> Result<(), EngineError> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount(amount));
    }
    Ok(())
}
