use std::collections::BTreeMap;

use crate::{order::Side, price_level::PriceLevel};

/// Price → [`PriceLevel`] for one side of the book, ordered by price.
///
/// An ordered map keyed by price is sufficient, per spec: `best_price` is a
/// single `BTreeMap` bound lookup (O(log n)), and the direction of "best" —
/// max for bids, min for asks — is fixed by which `Side` this index was built
/// for, mirroring the teacher's forward/reverse `BTreeMap` traversal in its
/// single-sided `OrderBook`.
pub struct SideIndex {
    side: Side,
    levels: BTreeMap<i32, PriceLevel>,
}

impl SideIndex {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    /// The best (highest bid / lowest ask) non-empty price, or `None` if this
    /// side has no resting liquidity. The invariant that every entry in
    /// `levels` is non-empty (see [`PriceLevel::is_empty`]) is what lets this
    /// be a direct key lookup rather than a scan-and-skip.
    pub fn best_price(&self) -> Option<i32> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    pub fn level(&self, price: i32) -> Option<&PriceLevel> {
        self.levels.get(&price)
    }

    pub fn level_mut(&mut self, price: i32) -> Option<&mut PriceLevel> {
        self.levels.get_mut(&price)
    }

    pub fn get_or_create(&mut self, price: i32) -> &mut PriceLevel {
        self.levels.entry(price).or_insert_with(|| PriceLevel::new(price))
    }

    /// Drops the (assumed-empty) level at `price`. Leaving a non-empty level
    /// here would violate the "every entry is non-empty" invariant that
    /// `best_price` relies on.
    pub fn remove_level(&mut self, price: i32) {
        debug_assert!(
            self.levels.get(&price).is_none_or(PriceLevel::is_empty),
            "remove_level called on a non-empty level"
        );
        self.levels.remove(&price);
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// `(price, total_size)` pairs for every non-empty level, ascending for
    /// asks and descending for bids — the order spec.md §4.5's `snapshot`
    /// requires.
    pub fn snapshot_levels(&self) -> Vec<(i32, i32)> {
        let pairs = self.levels.iter().map(|(&p, l)| (p, l.total_size()));
        match self.side {
            Side::Buy => pairs.rev().collect(),
            Side::Sell => pairs.collect(),
        }
    }
}
