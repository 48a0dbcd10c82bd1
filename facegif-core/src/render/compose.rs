use std::fmt::Write as _;

use crate::{
    catalog::model::{CategoryKind, ComponentCatalog},
    catalog::template,
    face::mapper::FaceDescriptor,
    foundation::core::Canvas,
    foundation::error::{FaceError, FaceResult},
};

/// Build the SVG document for one face.
///
/// Layer categories are emitted in catalog order, each inside `<g id="{category}">`, so later
/// categories paint over earlier ones. Paint selections fill the `{name}` placeholders. Nothing is
/// drawn behind the layers; uncovered pixels stay transparent.
pub fn compose_svg(descriptor: &FaceDescriptor, catalog: &ComponentCatalog) -> FaceResult<String> {
    let picks = descriptor.resolve(catalog)?;

    let paint = |name: &str| {
        picks
            .iter()
            .find(|s| s.category.kind == CategoryKind::Paint && s.category.name == name)
            .map(|s| s.option.value.as_str())
    };

    let mut layers = Vec::with_capacity(picks.len());
    for pick in picks.iter().filter(|s| s.category.kind == CategoryKind::Layer) {
        let fragment = template::fill(&pick.option.value, paint).map_err(|name| {
            FaceError::render(format!(
                "option '{}/{}' references unknown paint '{name}'",
                pick.category.name, pick.option.id
            ))
        })?;
        layers.push((pick.category.name.as_str(), fragment));
    }

    Ok(svg_document(
        catalog.canvas(),
        layers.iter().map(|(name, frag)| (*name, frag.as_str())),
    ))
}

/// Wrap `(group id, fragment)` pairs in an SVG root sized to `canvas`.
pub(crate) fn svg_document<'a, I>(canvas: Canvas, layers: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let Canvas { width, height } = canvas;
    let mut out = String::with_capacity(1024);
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    );
    for (id, fragment) in layers {
        let _ = write!(out, r#"<g id="{id}">{fragment}</g>"#);
    }
    out.push_str("</svg>");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/compose.rs"]
mod tests;
