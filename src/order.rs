use serde::{Deserialize, Serialize};

/// Which side of the book an order (or a resting level) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The opposite side, i.e. the side an incoming order of `self` crosses into.
    pub fn opposite(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

/// A resting or incoming limit order.
///
/// `size` is the *remaining* quantity: it is decremented in place as the
/// [`Matcher`](crate::matcher) fills it, and the order ceases to exist once
/// it reaches zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    pub trader: String,
    pub symbol: String,
    pub size: i32,
    pub is_buy: bool,
}

impl Order {
    pub fn new(id: u64, trader: impl Into<String>, symbol: impl Into<String>, size: i32, is_buy: bool) -> Self {
        Self {
            id,
            trader: trader.into(),
            symbol: symbol.into(),
            size,
            is_buy,
        }
    }

    pub fn side(&self) -> Side {
        if self.is_buy { Side::Buy } else { Side::Sell }
    }
}
