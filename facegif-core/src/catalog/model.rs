use std::collections::BTreeSet;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::template,
    face::mapper::MAX_CATEGORIES,
    foundation::core::Canvas,
    foundation::error::{FaceError, FaceResult},
    render::compose::svg_document,
    render::raster::parse_svg,
};

/// How a category contributes to a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    /// Options are SVG fragments drawn onto the canvas in category order.
    Layer,
    /// Options are CSS colors substituted into `{name}` placeholders of layer fragments.
    Paint,
}

/// One selectable option of a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentOption {
    /// Stable identifier, unique within its category.
    pub id: String,
    /// SVG fragment (layer) or CSS color (paint).
    pub value: String,
}

impl ComponentOption {
    /// Build an option from an id and its value.
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

/// A named, ordered list of options.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name; also the placeholder name for paint categories.
    pub name: String,
    /// Layer or paint.
    pub kind: CategoryKind,
    /// Selectable options, in index order.
    pub options: Vec<ComponentOption>,
}

impl Category {
    /// Number of selectable options.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Always `false` for a validated catalog.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

/// Serialized form of a [`ComponentCatalog`]; validated on conversion.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogDef {
    /// Frame size in pixels.
    pub canvas: Canvas,
    /// Categories in z-order.
    pub categories: Vec<Category>,
}

/// The immutable palette every face is drawn from.
///
/// Category order is both the descriptor index order and the drawing z-order. A catalog can only
/// be obtained through validation and exposes no mutation API, so it can be built once at startup
/// and shared by reference (or `Arc`) across threads.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogDef", into = "CatalogDef")]
pub struct ComponentCatalog {
    canvas: Canvas,
    categories: Vec<Category>,
}

impl ComponentCatalog {
    /// Validate and build a catalog.
    pub fn new(canvas: Canvas, categories: Vec<Category>) -> FaceResult<Self> {
        let canvas = Canvas::new(canvas.width, canvas.height)?;
        validate_categories(&categories)?;
        let catalog = Self { canvas, categories };
        catalog.check_layers_parse()?;
        Ok(catalog)
    }

    /// Parse and validate a catalog from JSON text.
    pub fn from_json_str(json: &str) -> FaceResult<Self> {
        let def: CatalogDef = serde_json::from_str(json)
            .map_err(|e| FaceError::catalog(format!("parse catalog JSON: {e}")))?;
        Self::try_from(def)
    }

    /// Parse and validate a catalog from a JSON reader.
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> FaceResult<Self> {
        let def: CatalogDef = serde_json::from_reader(reader)
            .map_err(|e| FaceError::catalog(format!("parse catalog JSON: {e}")))?;
        Self::try_from(def)
    }

    /// Frame size shared by every rendered face.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Categories in z-order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Option count per category, in catalog order.
    pub fn category_sizes(&self) -> Vec<usize> {
        self.categories.iter().map(Category::len).collect()
    }

    /// Number of distinct faces: the product of all category sizes.
    pub fn combination_count(&self) -> u64 {
        self.categories.iter().map(|c| c.len() as u64).product()
    }

    // Every layer option must form a valid SVG once placeholders are filled, so a bad asset fails
    // at load time and never mid-request.
    fn check_layers_parse(&self) -> FaceResult<()> {
        for category in &self.categories {
            if category.kind != CategoryKind::Layer {
                continue;
            }
            for option in &category.options {
                let fragment = template::fill(&option.value, |name| {
                    self.category(name).map(|paint| paint.options[0].value.as_str())
                })
                .map_err(|name| {
                    FaceError::catalog(format!(
                        "option '{}/{}' references unknown paint '{name}'",
                        category.name, option.id
                    ))
                })?;
                let layer = (category.name.as_str(), fragment.as_str());
                let doc = svg_document(self.canvas, [layer]);
                parse_svg(doc.as_bytes())
                    .with_context(|| format!("option '{}/{}'", category.name, option.id))
                    .map_err(|e| FaceError::catalog(format!("{e:#}")))?;
            }
        }
        Ok(())
    }
}

impl TryFrom<CatalogDef> for ComponentCatalog {
    type Error = FaceError;

    fn try_from(def: CatalogDef) -> FaceResult<Self> {
        Self::new(def.canvas, def.categories)
    }
}

impl From<ComponentCatalog> for CatalogDef {
    fn from(catalog: ComponentCatalog) -> Self {
        Self {
            canvas: catalog.canvas,
            categories: catalog.categories,
        }
    }
}

fn validate_categories(categories: &[Category]) -> FaceResult<()> {
    if categories.is_empty() {
        return Err(FaceError::catalog("catalog must have at least one category"));
    }
    if categories.len() > MAX_CATEGORIES {
        return Err(FaceError::catalog(format!(
            "catalog has {} categories (max {MAX_CATEGORIES})",
            categories.len()
        )));
    }

    let mut names = BTreeSet::new();
    for category in categories {
        if !template::is_placeholder_name(&category.name) {
            return Err(FaceError::catalog(format!(
                "category name '{}' must be non-empty ASCII alphanumerics, '_' or '-'",
                category.name
            )));
        }
        if !names.insert(category.name.as_str()) {
            return Err(FaceError::catalog(format!(
                "duplicate category '{}'",
                category.name
            )));
        }
        if category.options.is_empty() {
            return Err(FaceError::catalog(format!(
                "category '{}' has no options",
                category.name
            )));
        }
        if u32::try_from(category.options.len()).is_err() {
            return Err(FaceError::catalog(format!(
                "category '{}' has too many options",
                category.name
            )));
        }

        let mut ids = BTreeSet::new();
        for option in &category.options {
            if option.id.is_empty() {
                return Err(FaceError::catalog(format!(
                    "category '{}' has an option with an empty id",
                    category.name
                )));
            }
            if !ids.insert(option.id.as_str()) {
                return Err(FaceError::catalog(format!(
                    "category '{}' has duplicate option '{}'",
                    category.name, option.id
                )));
            }
            if category.kind == CategoryKind::Paint && !is_plain_color(&option.value) {
                return Err(FaceError::catalog(format!(
                    "paint '{}/{}' is not a plain color value",
                    category.name, option.id
                )));
            }
        }
    }

    for category in categories.iter().filter(|c| c.kind == CategoryKind::Layer) {
        for option in &category.options {
            for name in template::placeholders(&option.value) {
                let is_paint = categories
                    .iter()
                    .any(|c| c.kind == CategoryKind::Paint && c.name == name);
                if !is_paint {
                    return Err(FaceError::catalog(format!(
                        "option '{}/{}' references unknown paint '{name}'",
                        category.name, option.id
                    )));
                }
            }
        }
    }

    Ok(())
}

// Paint values are spliced into attribute values.
fn is_plain_color(value: &str) -> bool {
    !value.trim().is_empty() && !value.contains(['"', '\'', '<', '>', '&', '{', '}'])
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
