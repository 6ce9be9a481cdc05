use std::collections::HashSet;

use tracing::warn;

use crate::{error::BookError, order::Order};

/// All resting orders sharing one price, in insertion order.
///
/// `total_size` is maintained incrementally rather than recomputed, so every
/// mutator here is the single place responsible for keeping
/// `total_size == sum(orders[i].size)`.
#[derive(Debug)]
pub struct PriceLevel {
    price: i32,
    orders: Vec<Order>,
    ids: HashSet<u64>,
    total_size: i32,
}

impl PriceLevel {
    pub fn new(price: i32) -> Self {
        Self {
            price,
            orders: Vec::new(),
            ids: HashSet::new(),
            total_size: 0,
        }
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn total_size(&self) -> i32 {
        self.total_size
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut [Order] {
        &mut self.orders
    }

    /// Decrements `total_size` by `amt`, used by the matcher after it shrinks a
    /// resting order's `size` in place.
    pub fn debit(&mut self, amt: i32) {
        self.total_size -= amt;
    }

    pub fn add(&mut self, order: Order) -> Result<(), BookError> {
        if self.ids.contains(&order.id) {
            return Err(BookError::DuplicateOrderId(order.id));
        }
        self.total_size += order.size;
        self.ids.insert(order.id);
        self.orders.push(order);
        Ok(())
    }

    /// Removes the order with `id`, if present, preserving the insertion order
    /// of the remaining members.
    pub fn remove(&mut self, id: u64) -> Option<Order> {
        if !self.ids.remove(&id) {
            return None;
        }
        let pos = self.orders.iter().position(|o| o.id == id)?;
        let order = self.orders.remove(pos);
        self.total_size -= order.size;
        if self.orders.is_empty() {
            warn!(price = self.price, "price level drained to empty");
        }
        Some(order)
    }

    pub fn contains(&self, id: u64) -> bool {
        self.ids.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(id: u64, size: i32) -> Order {
        Order::new(id, format!("trader-{id}"), "SYM", size, true)
    }

    #[test]
    fn add_tracks_total_size_and_rejects_duplicates() {
        let mut level = PriceLevel::new(100);
        level.add(order(1, 10)).unwrap();
        level.add(order(2, 5)).unwrap();
        assert_eq!(level.total_size(), 15);

        let err = level.add(order(1, 1)).unwrap_err();
        assert_eq!(err, BookError::DuplicateOrderId(1));
    }

    #[test]
    fn remove_updates_total_size_and_preserves_order() {
        let mut level = PriceLevel::new(100);
        level.add(order(1, 10)).unwrap();
        level.add(order(2, 5)).unwrap();
        level.add(order(3, 7)).unwrap();

        let removed = level.remove(2).unwrap();
        assert_eq!(removed.size, 5);
        assert_eq!(level.total_size(), 17);
        let ids: Vec<u64> = level.iter().map(|o| o.id).collect();
        assert_eq!(ids, vec![1, 3]);

        assert!(level.remove(2).is_none());
    }

    #[test]
    fn is_empty_tracks_membership() {
        let mut level = PriceLevel::new(100);
        assert!(level.is_empty());
        level.add(order(1, 10)).unwrap();
        assert!(!level.is_empty());
        level.remove(1);
        assert!(level.is_empty());
        assert_eq!(level.total_size(), 0);
    }
}
