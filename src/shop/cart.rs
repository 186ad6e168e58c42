use crate::catalog::{Catalog, Fragrance};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

const FREE_SHIPPING_ABOVE_CENTS: u64 = 10_000;
const FLAT_SHIPPING_CENTS: u64 = 999;
const TAX_PERCENT: u64 = 8;

/// Upper bound for a single cart line.
pub const MAX_QUANTITY: u32 = 99;

pub const DEFAULT_SIZE: &str = "100ml";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Fragrance {0} does not exist")]
    UnknownFragrance(String),

    #[error("Cart item {0} does not exist")]
    UnknownItem(String),

    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    #[error("Quantity cannot exceed {max}", max = MAX_QUANTITY)]
    QuantityTooLarge,
}

#[derive(Clone, Serialize, Debug, PartialEq, Eq)]
pub struct CartItem {
    pub id: String,
    pub fragrance_id: String,
    pub size: String,
    pub quantity: u32,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct OrderSummary {
    pub item_count: u64,
    pub subtotal: f64,
    pub shipping: f64,
    pub free_shipping: bool,
    pub tax: f64,
    pub total: f64,
}

#[derive(Serialize, Debug)]
pub struct CartLine<'a> {
    #[serde(flatten)]
    pub item: &'a CartItem,
    pub fragrance: &'a Fragrance,
    pub line_total: f64,
}

#[derive(Serialize, Debug)]
pub struct CartView<'a> {
    pub items: Vec<CartLine<'a>>,
    pub summary: OrderSummary,
}

fn to_cents(dollars: f64) -> u64 {
    (dollars * 100.0).round().max(0.0) as u64
}

fn to_dollars(cents: u64) -> f64 {
    cents as f64 / 100.0
}

#[derive(Clone, Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds a fragrance in the given size. Adding a fragrance/size pair that is
    /// already in the cart bumps that line's quantity instead.
    pub fn add(
        &mut self,
        catalog: &Catalog,
        fragrance_id: &str,
        size: &str,
        quantity: u32,
    ) -> Result<&CartItem, CartError> {
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if quantity > MAX_QUANTITY {
            return Err(CartError::QuantityTooLarge);
        }
        if catalog.get_fragrance(fragrance_id).is_none() {
            return Err(CartError::UnknownFragrance(fragrance_id.to_string()));
        }
        let index = match self
            .items
            .iter()
            .position(|i| i.fragrance_id == fragrance_id && i.size == size)
        {
            Some(index) => {
                let item = &mut self.items[index];
                item.quantity = item
                    .quantity
                    .checked_add(quantity)
                    .filter(|q| *q <= MAX_QUANTITY)
                    .ok_or(CartError::QuantityTooLarge)?;
                index
            }
            None => {
                self.items.push(CartItem {
                    id: Uuid::new_v4().to_string(),
                    fragrance_id: fragrance_id.to_string(),
                    size: size.to_string(),
                    quantity,
                });
                self.items.len() - 1
            }
        };
        Ok(&self.items[index])
    }

    /// Sets a line's quantity, a quantity of 0 removes the line.
    pub fn update_quantity(&mut self, item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return self.remove(item_id);
        }
        if quantity > MAX_QUANTITY {
            return Err(CartError::QuantityTooLarge);
        }
        match self.items.iter_mut().find(|i| i.id == item_id) {
            Some(item) => {
                item.quantity = quantity;
                Ok(())
            }
            None => Err(CartError::UnknownItem(item_id.to_string())),
        }
    }

    pub fn remove(&mut self, item_id: &str) -> Result<(), CartError> {
        let before = self.items.len();
        self.items.retain(|i| i.id != item_id);
        if self.items.len() == before {
            return Err(CartError::UnknownItem(item_id.to_string()));
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn summary(&self, catalog: &Catalog) -> OrderSummary {
        let mut item_count = 0u64;
        let mut subtotal = 0u64;
        for item in self.items.iter() {
            if let Some(fragrance) = catalog.get_fragrance(&item.fragrance_id) {
                item_count += u64::from(item.quantity);
                subtotal += to_cents(fragrance.price) * item.quantity as u64;
            }
        }
        let free_shipping = subtotal > FREE_SHIPPING_ABOVE_CENTS;
        let shipping = if subtotal == 0 || free_shipping {
            0
        } else {
            FLAT_SHIPPING_CENTS
        };
        let tax = (subtotal * TAX_PERCENT + 50) / 100;
        OrderSummary {
            item_count,
            subtotal: to_dollars(subtotal),
            shipping: to_dollars(shipping),
            free_shipping,
            tax: to_dollars(tax),
            total: to_dollars(subtotal + shipping + tax),
        }
    }

    pub fn view<'a>(&'a self, catalog: &'a Catalog) -> CartView<'a> {
        let items = self
            .items
            .iter()
            .filter_map(|item| {
                catalog.get_fragrance(&item.fragrance_id).map(|fragrance| CartLine {
                    item,
                    fragrance,
                    line_total: to_dollars(to_cents(fragrance.price) * item.quantity as u64),
                })
            })
            .collect();
        CartView {
            items,
            summary: self.summary(catalog),
        }
    }
}
