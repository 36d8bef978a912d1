use serde::{Deserialize, Serialize};

/// One line in the shopping cart.
///
/// Invariant: `quantity` is always at least 1. A line whose quantity would
/// drop to zero is removed from the cart instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub quantity: u32,
}

/// The shopping cart: an ordered sequence of lines, at most one per
/// product id.
///
/// Insertion order is preserved but carries no meaning. All mutation goes
/// through the methods here so the one-line-per-product invariant holds
/// after every operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product: increments an existing line, or appends
    /// a new line with quantity 1.
    pub fn add(&mut self, id: impl Into<String>) {
        let id = id.into();
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem { id, quantity: 1 }),
        }
    }

    /// Increments the quantity of an existing line. Returns `false` if the
    /// product is not in the cart.
    pub fn increase(&mut self, id: &str) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrements the quantity of an existing line, removing the line when
    /// the quantity would drop to zero. Returns `false` if the product is
    /// not in the cart.
    pub fn decrease(&mut self, id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        if self.items[pos].quantity <= 1 {
            self.items.remove(pos);
        } else {
            self.items[pos].quantity -= 1;
        }
        true
    }

    /// Removes a line entirely. Returns `false` if the product is not in
    /// the cart.
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.items.iter().position(|i| i.id == id) else {
            return false;
        };
        self.items.remove(pos);
        true
    }

    /// Empties the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Sum of quantities across all lines; this is what the badge shows.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(cart: &Cart) -> Vec<&str> {
        cart.items().iter().map(|i| i.id.as_str()).collect()
    }

    /// No operation sequence may produce two lines with the same id.
    fn assert_invariant(cart: &Cart) {
        let mut seen = std::collections::HashSet::new();
        for item in cart.items() {
            assert!(seen.insert(&item.id), "duplicate line for {}", item.id);
            assert!(item.quantity >= 1, "zero-quantity line for {}", item.id);
        }
    }

    #[test]
    fn add_increments_existing_line() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("a");
        cart.add("b");

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.get("a").unwrap().quantity, 2);
        assert_eq!(cart.total_quantity(), 3);
        assert_invariant(&cart);
    }

    #[test]
    fn decrease_at_one_removes_the_line() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("b");

        assert!(cart.decrease("a"));
        assert!(!cart.contains("a"));
        assert_eq!(ids(&cart), vec!["b"]);
        assert_invariant(&cart);
    }

    #[test]
    fn decrease_above_one_keeps_the_line() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("a");

        assert!(cart.decrease("a"));
        assert_eq!(cart.get("a").unwrap().quantity, 1);
        assert_invariant(&cart);
    }

    #[test]
    fn operations_on_missing_ids_are_noops() {
        let mut cart = Cart::new();
        cart.add("a");

        assert!(!cart.increase("ghost"));
        assert!(!cart.decrease("ghost"));
        assert!(!cart.remove("ghost"));
        assert_eq!(cart.total_quantity(), 1);
    }

    #[test]
    fn invariant_holds_across_mixed_sequences() {
        let mut cart = Cart::new();
        for op in [
            "add:a", "add:b", "add:a", "inc:b", "dec:a", "add:c", "rm:b", "dec:a", "add:a",
            "inc:c", "dec:c", "dec:c",
        ] {
            let (op, id) = op.split_once(':').unwrap();
            match op {
                "add" => cart.add(id),
                "inc" => {
                    cart.increase(id);
                }
                "dec" => {
                    cart.decrease(id);
                }
                "rm" => {
                    cart.remove(id);
                }
                _ => unreachable!(),
            }
            assert_invariant(&cart);
        }
        assert_eq!(ids(&cart), vec!["a"]);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cart = Cart::new();
        cart.add("a");
        cart.add("b");
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_quantity(), 0);
    }
}
