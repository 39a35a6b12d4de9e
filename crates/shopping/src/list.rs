use std::fmt;

use crate::format_quantity;

#[derive(Clone, Debug, PartialEq)]
pub struct ShoppingItem {
    pub area: String,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl ShoppingItem {
    pub fn display_quantity(&self) -> Option<String> {
        self.quantity.map(format_quantity)
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(quantity) = self.display_quantity() else {
            return write!(f, "{}", self.name);
        };

        match self.unit.as_deref() {
            Some(unit) if !unit.is_empty() => write!(f, "{}: {quantity} {unit}", self.name),
            _ => write!(f, "{}: {quantity}", self.name),
        }
    }
}

/// Merged shopping items, sorted by area then ingredient name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShoppingList {
    pub items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items grouped by supermarket area, in list order.
    pub fn areas(&self) -> Vec<(&str, &[ShoppingItem])> {
        self.items
            .chunk_by(|a, b| a.area == b.area)
            .map(|chunk| (chunk[0].area.as_str(), chunk))
            .collect()
    }

    /// One line per item, ready to paste into a notes app.
    pub fn to_checklist(&self) -> String {
        self.items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
