//! Unified error types for the AMM core.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Variants
//! carry structured fields (expected vs. actual amounts, the denom or
//! address involved) so callers and tests can assert on the exact reason
//! an operation was rejected.
//!
//! No variant is recoverable inside an operation: any error aborts the
//! operation and leaves the pool store untouched.  Only
//! [`AmmError::Internal`] is [fatal](AmmError::is_fatal); it reports
//! corrupted accounting rather than a bad request.

use thiserror::Error;

use crate::domain::{Address, Amount, Claims, Coin, Denom, Timestamp};

/// Errors produced by the pricing engine, the pool store and the
/// operation handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The block time is after the request's deadline.
    #[error("deadline {deadline} has passed (block time {block_time})")]
    DeadlineExpired {
        /// Deadline carried by the request.
        deadline: Timestamp,
        /// Block time reported by the clock.
        block_time: Timestamp,
    },

    /// The sender cannot cover a transfer.
    #[error("{address} has insufficient funds to pay {required}")]
    InsufficientFunds {
        /// Account that would be debited.
        address: Address,
        /// Coin that could not be covered.
        required: Coin,
    },

    /// The computed price is outside the caller's bound.
    ///
    /// For a buy order `limit` is the maximum input and `actual` the
    /// required input; for a sell order `limit` is the minimum output and
    /// `actual` the computed output; for a deposit `limit` is the maximum
    /// paired deposit and `actual` the required one.
    #[error("slippage bound {limit} exceeded (actual {actual})")]
    SlippageExceeded {
        /// Caller-supplied bound.
        limit: Amount,
        /// Amount the pool computed.
        actual: Amount,
    },

    /// No reserve pool exists for the denom.
    #[error("no reserve pool for {0}")]
    PoolNotFound(Denom),

    /// The swap would drain the output reserve to zero or below.
    #[error("insufficient liquidity: requested {requested}, reserve {reserve}")]
    InsufficientLiquidity {
        /// Output amount requested.
        requested: Amount,
        /// Output reserve available.
        reserve: Amount,
    },

    /// A reserve used for pricing is zero.
    #[error("reserve is zero; pool cannot price")]
    InvalidReserve,

    /// Division by zero in a pricing formula.
    #[error("division by zero")]
    DivisionByZero,

    /// The holder does not own enough claim tokens.
    #[error("insufficient claims: held {held}, requested {requested}")]
    InsufficientClaims {
        /// Claims owned by the holder.
        held: Claims,
        /// Claims the holder asked to burn.
        requested: Claims,
    },

    /// The global claim supply is zero.
    #[error("no liquidity to redeem against")]
    NoLiquidity,

    /// Fee parameters violate `0 < fee_n ≤ fee_d`.
    #[error("invalid fee {fee_n}/{fee_d}")]
    InvalidFee {
        /// Numerator.
        fee_n: u64,
        /// Denominator.
        fee_d: u64,
    },

    /// Malformed denom symbol.
    #[error("invalid denom {0:?}")]
    InvalidDenom(String),

    /// Malformed holder address.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// The two assets of a request cannot be paired.
    #[error("invalid asset pair {input} -> {output}")]
    InvalidPair {
        /// First asset of the request.
        input: Denom,
        /// Second asset of the request.
        output: Denom,
    },

    /// Quantity is zero or otherwise unusable.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(&'static str),

    /// The ledger refused a transfer.
    #[error("ledger rejected transfer: {0}")]
    Ledger(#[from] LedgerError),

    /// Internal accounting is inconsistent.
    #[error("internal invariant violated: {0}")]
    Internal(&'static str),
}

impl AmmError {
    /// Returns `true` if the error reports corrupted state.
    ///
    /// A fatal error means the pool store can no longer be trusted; the
    /// host should stop processing rather than retry or continue.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Internal(_))
    }
}

/// Errors reported by a [`Ledger`](crate::traits::Ledger) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The debited account cannot cover the coin.
    #[error("insufficient balance for {0}")]
    InsufficientBalance(Coin),

    /// Any other rejection by the host ledger.
    #[error("{0}")]
    Rejected(String),
}
