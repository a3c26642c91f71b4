//! Feature / Advantage / Benefit items
//!
//! FAB is the only framework whose field set grows: one item per product
//! feature. The item list is never empty, so the editor always has a card to
//! type into and removal of the last card is refused.

use serde::Deserialize;
use thiserror::Error;

use super::fields::{FieldSpec, FAB_FIELDS};

/// Errors from editing the FAB item list
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FabError {
    /// Removing the item would leave the list empty
    #[error("cannot remove the last remaining feature")]
    LastItem,

    /// Item index past the end of the list
    #[error("feature index {index} out of range (have {len})")]
    OutOfRange { index: usize, len: usize },

    /// An item list must contain at least one item
    #[error("at least one feature is required")]
    Empty,
}

/// One of the three text fields of a [`FabItem`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FabField {
    Feature,
    Advantage,
    Benefit,
}

/// A single feature with its advantage and benefit
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FabItem {
    /// Stable identifier for list reconciliation; not part of any output
    #[serde(skip)]
    pub id: usize,
    pub feature: String,
    pub advantage: String,
    pub benefit: String,
}

impl FabItem {
    pub fn new(
        feature: impl Into<String>,
        advantage: impl Into<String>,
        benefit: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            feature: feature.into(),
            advantage: advantage.into(),
            benefit: benefit.into(),
        }
    }

    /// Field values paired with their specs: feature, advantage, benefit
    pub fn entries(&self) -> [(&'static FieldSpec, &str); 3] {
        [
            (&FAB_FIELDS[0], self.feature.as_str()),
            (&FAB_FIELDS[1], self.advantage.as_str()),
            (&FAB_FIELDS[2], self.benefit.as_str()),
        ]
    }

    /// True if any field has content after trimming
    pub fn is_filled(&self) -> bool {
        !self.feature.trim().is_empty()
            || !self.advantage.trim().is_empty()
            || !self.benefit.trim().is_empty()
    }

    fn field_mut(&mut self, field: FabField) -> &mut String {
        match field {
            FabField::Feature => &mut self.feature,
            FabField::Advantage => &mut self.advantage,
            FabField::Benefit => &mut self.benefit,
        }
    }
}

/// Ordered, non-empty list of FAB items
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<FabItem>")]
pub struct FabFields {
    items: Vec<FabItem>,
    next_id: usize,
}

impl FabFields {
    /// A list holding a single blank item
    pub fn new() -> Self {
        Self {
            items: vec![FabItem {
                id: 1,
                ..FabItem::default()
            }],
            next_id: 2,
        }
    }

    pub fn items(&self) -> &[FabItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FabItem> {
        self.items.iter()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, index: usize) -> Option<&FabItem> {
        self.items.get(index)
    }

    /// Append an item, assigning it a fresh id
    pub fn push(&mut self, mut item: FabItem) -> usize {
        let id = self.next_id;
        item.id = id;
        self.next_id += 1;
        self.items.push(item);
        id
    }

    /// Append a blank item and return its id
    pub fn push_blank(&mut self) -> usize {
        self.push(FabItem::default())
    }

    /// Remove the item at `index`, refusing to empty the list
    pub fn remove(&mut self, index: usize) -> Result<FabItem, FabError> {
        if index >= self.items.len() {
            return Err(FabError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        if self.items.len() <= 1 {
            return Err(FabError::LastItem);
        }
        Ok(self.items.remove(index))
    }

    /// Replace one field of the item at `index`
    pub fn update(
        &mut self,
        index: usize,
        field: FabField,
        value: impl Into<String>,
    ) -> Result<(), FabError> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(FabError::OutOfRange { index, len })?;
        *item.field_mut(field) = value.into();
        Ok(())
    }
}

impl Default for FabFields {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<FabItem>> for FabFields {
    type Error = FabError;

    /// Build a list from items in order, numbering ids from 1
    fn try_from(items: Vec<FabItem>) -> Result<Self, Self::Error> {
        if items.is_empty() {
            return Err(FabError::Empty);
        }
        let items: Vec<FabItem> = items
            .into_iter()
            .zip(1..)
            .map(|(item, id)| FabItem { id, ..item })
            .collect();
        let next_id = items.len() + 1;
        Ok(Self { items, next_id })
    }
}
