use crate::ProductId;
use serde::{Deserialize, Serialize};

/// One line of a cart: a product and how many units of it.
///
/// Invariant: `quantity >= 1` while the line is present. A removal that
/// would bring it to zero drops the line instead of retaining it at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    #[serde(rename = "ProductId")]
    pub product_id: ProductId,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
}

impl CartItem {
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }

    /// A single unit, which is what the views send on add and remove.
    pub fn single(product_id: ProductId) -> Self {
        Self::new(product_id, 1)
    }
}

/// The cart as the backend reports it: item lines plus the email attached to
/// the session. Doubles as the `GET /cart/{workflowID}` response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartSnapshot {
    #[serde(rename = "Items", default)]
    pub items: Vec<CartItem>,
    #[serde(rename = "Email", default)]
    pub email: String,
}

/// Merge added units into an item list, keeping at most one line per product.
pub fn add_units(items: &mut Vec<CartItem>, item: CartItem) {
    match items.iter_mut().find(|i| i.product_id == item.product_id) {
        Some(existing) => existing.quantity += item.quantity,
        None => items.push(item),
    }
}

/// Subtract removed units from an item list.
///
/// An absent product id is a no-op: the removal may have raced a state
/// reset, and the authoritative copy lives on the backend either way. A
/// line whose quantity reaches zero is dropped.
pub fn remove_units(items: &mut Vec<CartItem>, product_id: ProductId, quantity: u32) {
    let Some(pos) = items.iter().position(|i| i.product_id == product_id) else {
        return;
    };
    if items[pos].quantity <= quantity {
        items.remove(pos);
    } else {
        items[pos].quantity -= quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_decrements_without_dropping_the_line() {
        let mut items = vec![CartItem::new(0, 2)];
        remove_units(&mut items, 0, 1);
        assert_eq!(items, vec![CartItem::new(0, 1)]);
    }

    #[test]
    fn remove_at_quantity_one_drops_the_line() {
        let mut items = vec![CartItem::new(0, 1)];
        remove_units(&mut items, 0, 1);
        assert!(items.is_empty());
    }

    #[test]
    fn remove_of_absent_product_is_a_noop() {
        let mut items = vec![CartItem::new(0, 2)];
        remove_units(&mut items, 7, 1);
        assert_eq!(items, vec![CartItem::new(0, 2)]);
    }

    #[test]
    fn remove_of_more_units_than_present_drops_the_line() {
        let mut items = vec![CartItem::new(0, 2)];
        remove_units(&mut items, 0, 5);
        assert!(items.is_empty());
    }

    #[test]
    fn add_merges_quantity_per_product() {
        let mut items = vec![CartItem::new(0, 1)];
        add_units(&mut items, CartItem::single(0));
        add_units(&mut items, CartItem::single(3));
        assert_eq!(items, vec![CartItem::new(0, 2), CartItem::new(3, 1)]);
    }

    #[test]
    fn cart_snapshot_decodes_wire_casing() {
        let snapshot: CartSnapshot = serde_json::from_str(
            r#"{"Items":[{"ProductId":2,"Quantity":3}],"Email":"a@b.c"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.items, vec![CartItem::new(2, 3)]);
        assert_eq!(snapshot.email, "a@b.c");
    }
}
