use rust_decimal::Decimal;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Running per-key sums that remember the order keys were first seen.
///
/// Serializes as a JSON object in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderedTotals {
    entries: Vec<(String, Decimal)>,
    index: HashMap<String, usize>,
}

impl OrderedTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the entry for `key`, starting it at zero if unseen.
    ///
    /// Returns the new total, or `None` with the entry left unchanged when
    /// the sum overflows.
    pub fn checked_add(&mut self, key: &str, amount: Decimal) -> Option<Decimal> {
        match self.index.get(key) {
            Some(&position) => {
                let total = self.entries[position].1.checked_add(amount)?;
                self.entries[position].1 = total;
                Some(total)
            }
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
                Some(amount)
            }
        }
    }

    /// Whether `checked_add(key, amount)` would succeed
    pub fn can_add(&self, key: &str, amount: Decimal) -> bool {
        self.get(key)
            .is_none_or(|total| total.checked_add(amount).is_some())
    }

    pub fn get(&self, key: &str) -> Option<Decimal> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> Decimal {
        self.entries.iter().map(|(_, amount)| *amount).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.entries
            .iter()
            .map(|(key, amount)| (key.as_str(), *amount))
    }

    /// Entries sorted by amount descending; equal amounts keep first-seen order
    pub fn ranked(&self) -> Vec<(String, Decimal)> {
        let mut ranked = self.entries.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

impl Serialize for OrderedTotals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, amount) in &self.entries {
            map.serialize_entry(key, amount)?;
        }
        map.end()
    }
}
