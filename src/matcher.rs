use tracing::info;

use crate::{
    locator::OrderLocator,
    order::Order,
    price_level::PriceLevel,
    trade::{FillKind, Trade},
};

/// Pro-rata allocation of `incoming`'s size across the resting orders in
/// `level`, per spec.md §4.4.
///
/// Runs a floored, ratio-proportional first pass over every resting order in
/// insertion order, then — if floor-rounding left the incoming order with a
/// remainder — a single tie-breaker fill against whichever resting order had
/// the greatest remaining size after the first pass (ties broken by earliest
/// insertion, since the selector is a strict `>`).
///
/// Mutates `incoming` and the resting orders inside `level` in place, removes
/// any order drained to zero from both `level` and `locator`, and returns the
/// trades emitted, in the order they occurred (first-pass fills in insertion
/// order, tie-breaker last).
pub fn match_level(incoming: &mut Order, level: &mut PriceLevel, locator: &mut OrderLocator) -> Vec<Trade> {
    let available = level.total_size();
    debug_assert!(available > 0, "match_level called on an empty level");
    let ratio = incoming.size as f64 / available as f64;

    let mut trades = Vec::new();
    let mut largest_idx: Option<usize> = None;
    let mut largest_remaining = 0i32;

    let price = level.price();
    let n = level.orders().len();
    for idx in 0..n {
        if incoming.size == 0 {
            break;
        }
        let resting_size = level.orders()[idx].size;
        let raw_fill = (resting_size as f64 * ratio).floor() as i32;
        let fill = raw_fill.min(resting_size).min(incoming.size);

        if fill > 0 {
            level.orders_mut()[idx].size -= fill;
            level.debit(fill);
            incoming.size -= fill;

            let resting_trader = level.orders()[idx].trader.clone();
            trades.push(Trade {
                symbol: incoming.symbol.clone(),
                aggressor_side: incoming.side(),
                fill,
                price,
                resting_trader,
                kind: FillKind::Normal,
            });
        }

        let remaining = level.orders()[idx].size;
        if remaining > largest_remaining {
            largest_remaining = remaining;
            largest_idx = Some(idx);
        }
    }

    if incoming.size > 0 {
        if let Some(idx) = largest_idx {
            let remaining = level.orders()[idx].size;
            if remaining > 0 {
                let final_fill = incoming.size.min(remaining);
                level.orders_mut()[idx].size -= final_fill;
                level.debit(final_fill);
                incoming.size -= final_fill;

                let resting_trader = level.orders()[idx].trader.clone();
                trades.push(Trade {
                    symbol: incoming.symbol.clone(),
                    aggressor_side: incoming.side(),
                    fill: final_fill,
                    price,
                    resting_trader,
                    kind: FillKind::TieBreaker,
                });
            }
        }
    }

    let drained: Vec<u64> = level.orders().iter().filter(|o| o.size == 0).map(|o| o.id).collect();
    for id in &drained {
        level.remove(*id);
        locator.remove(*id);
    }

    info!(
        price,
        fills = trades.len(),
        drained = drained.len(),
        incoming_remaining = incoming.size,
        "matched level"
    );
    trades
}
