//! Swap request.

use core::fmt;

use super::{Address, Coin, Timestamp};

/// Which leg of a swap the caller fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum OrderSide {
    /// Exact output; the input amount is a maximum the caller will pay.
    Buy = 0,
    /// Exact input; the output amount is a minimum the caller will accept.
    Sell = 1,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "Buy"),
            Self::Sell => write!(f, "Sell"),
        }
    }
}

/// A request to swap one asset for another.
///
/// The meaning of the two coins depends on [`is_buy_order`](Self::is_buy_order):
///
/// | Order | `input.amount` | `output.amount` |
/// |-------|----------------|-----------------|
/// | buy   | maximum to pay (slippage bound) | exact amount wanted |
/// | sell  | exact amount sold | minimum to receive (slippage bound) |
///
/// # Examples
///
/// ```
/// use unipool::domain::{Address, Amount, Coin, Denom, OrderSide, SwapOrder, Timestamp};
///
/// let sender = Address::new("alice").expect("valid");
/// let atom = Denom::new("atom").expect("valid");
/// let btc = Denom::new("btcx").expect("valid");
///
/// let order = SwapOrder::sell(
///     sender,
///     Coin::new(atom, Amount::new(100)),
///     Coin::new(btc, Amount::new(90)),
///     Timestamp::from_secs(1_000),
/// );
/// assert_eq!(order.side(), OrderSide::Sell);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOrder {
    sender: Address,
    input: Coin,
    output: Coin,
    is_buy_order: bool,
    deadline: Timestamp,
}

impl SwapOrder {
    /// Creates a swap order from its raw fields.
    #[must_use]
    pub const fn new(
        sender: Address,
        input: Coin,
        output: Coin,
        is_buy_order: bool,
        deadline: Timestamp,
    ) -> Self {
        Self {
            sender,
            input,
            output,
            is_buy_order,
            deadline,
        }
    }

    /// Exact-output order: receive exactly `output`, paying at most `max_input`.
    #[must_use]
    pub const fn buy(sender: Address, max_input: Coin, output: Coin, deadline: Timestamp) -> Self {
        Self::new(sender, max_input, output, true, deadline)
    }

    /// Exact-input order: sell exactly `input`, receiving at least `min_output`.
    #[must_use]
    pub const fn sell(sender: Address, input: Coin, min_output: Coin, deadline: Timestamp) -> Self {
        Self::new(sender, input, min_output, false, deadline)
    }

    /// Returns the sender.
    #[must_use]
    pub const fn sender(&self) -> &Address {
        &self.sender
    }

    /// Returns the input coin.
    #[must_use]
    pub const fn input(&self) -> &Coin {
        &self.input
    }

    /// Returns the output coin.
    #[must_use]
    pub const fn output(&self) -> &Coin {
        &self.output
    }

    /// Returns `true` for an exact-output order.
    #[must_use]
    pub const fn is_buy_order(&self) -> bool {
        self.is_buy_order
    }

    /// Returns the [`OrderSide`] descriptor.
    #[must_use]
    pub const fn side(&self) -> OrderSide {
        if self.is_buy_order {
            OrderSide::Buy
        } else {
            OrderSide::Sell
        }
    }

    /// Returns the deadline.
    #[must_use]
    pub const fn deadline(&self) -> Timestamp {
        self.deadline
    }
}
