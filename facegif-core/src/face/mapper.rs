//! Seed-to-face mapping.
//!
//! The byte-slicing scheme below is the compatibility contract for every face ever generated:
//!
//! 1. `digest = SHA-256(seed.as_bytes())`
//! 2. for category `i` in catalog order: `word = u32::from_be_bytes(digest[4 * i..4 * i + 4])`
//! 3. `index[i] = word % category_len[i]`
//!
//! Slices never overlap, which caps a catalog at [`MAX_CATEGORIES`] categories.

use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};

use crate::{
    catalog::model::{Category, ComponentCatalog, ComponentOption},
    foundation::error::{FaceError, FaceResult},
};

const DIGEST_LEN: usize = 32;
const WORD_LEN: usize = 4;

/// Most categories a catalog may define.
pub const MAX_CATEGORIES: usize = DIGEST_LEN / WORD_LEN;

/// One option index per catalog category, in catalog order.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FaceDescriptor(Vec<u32>);

/// A descriptor entry resolved against its catalog.
#[derive(Clone, Copy, Debug)]
pub struct Selection<'a> {
    /// The category the entry belongs to.
    pub category: &'a Category,
    /// The chosen option.
    pub option: &'a ComponentOption,
}

impl FaceDescriptor {
    /// Wrap raw indices. Bounds are checked by [`FaceDescriptor::resolve`].
    pub fn from_indices(indices: Vec<u32>) -> Self {
        Self(indices)
    }

    /// Option indices in catalog order.
    pub fn indices(&self) -> &[u32] {
        &self.0
    }

    /// Look up the category and option behind every index.
    pub fn resolve<'a>(&self, catalog: &'a ComponentCatalog) -> FaceResult<Vec<Selection<'a>>> {
        let categories = catalog.categories();
        if self.0.len() != categories.len() {
            return Err(FaceError::render(format!(
                "descriptor has {} indices but the catalog has {} categories",
                self.0.len(),
                categories.len()
            )));
        }

        self.0
            .iter()
            .zip(categories)
            .map(|(&idx, category)| {
                let option = category.options.get(idx as usize).ok_or_else(|| {
                    FaceError::render(format!(
                        "index {idx} out of range for category '{}' ({} options)",
                        category.name,
                        category.len()
                    ))
                })?;
                Ok(Selection { category, option })
            })
            .collect()
    }
}

/// Map a seed to its face. Total over all strings, including the empty one.
pub fn map(seed: &str, catalog: &ComponentCatalog) -> FaceDescriptor {
    let digest: [u8; DIGEST_LEN] = Sha256::digest(seed.as_bytes()).into();

    let indices = catalog
        .categories()
        .iter()
        .zip(digest.chunks_exact(WORD_LEN))
        .map(|(category, word)| {
            let word = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
            // Catalog validation guarantees 1..=u32::MAX options.
            word % category.len() as u32
        })
        .collect();

    FaceDescriptor(indices)
}

/// Map every seed, preserving seed-list order and repeats.
pub fn map_all<S: AsRef<str>>(seeds: &[S], catalog: &ComponentCatalog) -> Vec<FaceDescriptor> {
    seeds.iter().map(|s| map(s.as_ref(), catalog)).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/face/mapper.rs"]
mod tests;
