use std::fmt;

use serde::{Deserialize, Serialize};

use crate::order::Side;

/// Whether a fill came from the pro-rata first pass or absorbed the
/// floor-rounding remainder. See [`crate::matcher`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillKind {
    Normal,
    TieBreaker,
}

/// One execution emitted by the [`Matcher`](crate::matcher) while matching a
/// single incoming order against one resting order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trade {
    pub symbol: String,
    /// The aggressor's (incoming order's) direction.
    pub aggressor_side: Side,
    pub fill: i32,
    pub price: i32,
    pub resting_trader: String,
    pub kind: FillKind,
}

impl fmt::Display for Trade {
    /// Renders the exact line format from the trade tape spec:
    /// `TRADE: <symbol> <BUY|SELL> <fill> @ <price> against <resting_trader>`,
    /// with a ` (tie-breaker)` suffix for tie-breaker fills.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let side = match self.aggressor_side {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        };
        write!(
            f,
            "TRADE: {} {} {} @ {} against {}",
            self.symbol, side, self.fill, self.price, self.resting_trader
        )?;
        if self.kind == FillKind::TieBreaker {
            write!(f, " (tie-breaker)")?;
        }
        Ok(())
    }
}
