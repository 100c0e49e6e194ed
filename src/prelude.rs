//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use unipool::prelude::*;
//! ```

pub use crate::domain::{
    Account, AddLiquidity, AddLiquidityOutcome, Address, Amount, Claims, Coin, Denom, FeeParams,
    OrderSide, RemoveLiquidity, RemoveLiquidityOutcome, Rounding, SwapOrder, SwapOutcome,
    Timestamp, Transfer,
};

pub use crate::traits::{Clock, FeeSource, FromConfig, Ledger};

pub use crate::config::AmmConfig;

pub use crate::store::{PoolStore, ReservePool};

pub use crate::exchange::Exchange;

pub use crate::host::{ManualClock, MemoryLedger};

pub use crate::error::{AmmError, LedgerError};
