use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::{
    error::{BookError, BookResult},
    locator::OrderLocator,
    matcher,
    order::{Order, Side},
    side_index::SideIndex,
    trade::Trade,
};

/// The single-symbol facade: owns both [`SideIndex`]es and the
/// [`OrderLocator`], and implements the crossing loop, rest-on-book path,
/// cancellation and snapshot from spec.md §4.5.
///
/// Single-writer per spec.md §5: every method here takes `&mut self`, so the
/// embedder is responsible for serializing calls (directly, or behind a
/// single-consumer queue) — this type has no internal locking.
pub struct Book {
    symbol: String,
    bids: SideIndex,
    asks: SideIndex,
    locator: OrderLocator,
}

impl Book {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            bids: SideIndex::new(Side::Buy),
            asks: SideIndex::new(Side::Sell),
            locator: OrderLocator::new(),
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn best_bid(&self) -> Option<i32> {
        self.bids.best_price()
    }

    pub fn best_ask(&self) -> Option<i32> {
        self.asks.best_price()
    }

    /// Submits a new limit order. Validates, then runs the crossing loop
    /// against the opposite side, then rests any unfilled remainder on this
    /// order's own side at `price`.
    ///
    /// Validation happens entirely before any mutation: on `Err`, the book is
    /// untouched, per spec.md §7.
    pub fn add_order(
        &mut self,
        id: u64,
        trader: impl Into<String>,
        symbol: impl Into<String>,
        size: i32,
        is_buy: bool,
        price: i32,
    ) -> BookResult<Vec<Trade>> {
        let trader = trader.into();
        let symbol = symbol.into();

        if size <= 0 {
            return Err(BookError::InvalidOrder(format!(
                "size must be positive, got {size}"
            )));
        }
        if price < 0 {
            return Err(BookError::InvalidOrder(format!(
                "price must be non-negative, got {price}"
            )));
        }
        if symbol != self.symbol {
            return Err(BookError::InvalidOrder(format!(
                "symbol mismatch: book is {}, order is {symbol}",
                self.symbol
            )));
        }
        if self.locator.contains(id) {
            return Err(BookError::DuplicateOrderId(id));
        }

        let mut incoming = Order::new(id, trader, symbol, size, is_buy);
        info!(id, is_buy, size, price, "add_order");

        let trades = self.cross(&mut incoming, price);

        if incoming.size > 0 {
            let resting_side = if is_buy { &mut self.bids } else { &mut self.asks };
            let level = resting_side.get_or_create(price);
            level
                .add(incoming.clone())
                .expect("duplicate id already rejected above");
            self.locator
                .insert(incoming.id, incoming.side(), price)
                .expect("duplicate id already rejected above");
        }

        Ok(trades)
    }

    /// Repeatedly consumes the best opposite-side level while it crosses
    /// `incoming`'s limit price, per spec.md §4.5. Buy crosses while
    /// `best_ask <= price`; sell crosses while `best_bid >= price`.
    fn cross(&mut self, incoming: &mut Order, price: i32) -> Vec<Trade> {
        let mut trades = Vec::new();
        let opposite = if incoming.is_buy { &mut self.asks } else { &mut self.bids };

        loop {
            if incoming.size == 0 {
                break;
            }
            let Some(best) = opposite.best_price() else {
                break;
            };
            let crosses = if incoming.is_buy { best <= price } else { best >= price };
            if !crosses {
                break;
            }

            let level = opposite.level_mut(best).expect("best_price implies a level exists");
            trades.extend(matcher::match_level(incoming, level, &mut self.locator));

            if level.is_empty() {
                opposite.remove_level(best);
            }
        }

        trades
    }

    /// Looks up `order_id`, removes it from its resting level, and returns
    /// whether it was found. Idempotent: a second cancel of the same id
    /// returns `false`.
    pub fn cancel(&mut self, order_id: u64) -> bool {
        let Some((side, price)) = self.locator.remove(order_id) else {
            return false;
        };

        let side_index = match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        };
        let Some(level) = side_index.level_mut(price) else {
            warn!(order_id, price, "locator pointed at a missing level");
            return false;
        };
        let removed = level.remove(order_id).is_some();
        if level.is_empty() {
            side_index.remove_level(price);
        }
        info!(order_id, removed, "cancel");
        removed
    }

    /// A price-aggregated view of resting liquidity on each side, ascending
    /// for asks and descending for bids, non-empty levels only.
    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            symbol: self.symbol.clone(),
            asks: self.asks.snapshot_levels(),
            bids: self.bids.snapshot_levels(),
        }
    }
}

/// Line-oriented dump of resting liquidity, formatted per spec.md §6.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub symbol: String,
    pub asks: Vec<(i32, i32)>,
    pub bids: Vec<(i32, i32)>,
}

impl fmt::Display for BookSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Order Book for {} ===", self.symbol)?;
        writeln!(f, "Asks:")?;
        for (price, size) in &self.asks {
            writeln!(f, "Price {price} | Size {size}")?;
        }
        writeln!(f, "Bids:")?;
        for (price, size) in &self.bids {
            writeln!(f, "Price {price} | Size {size}")?;
        }
        Ok(())
    }
}
