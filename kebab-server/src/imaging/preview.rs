//! Builder preview
//!
//! Layer list, small inline SVG and a sentence describing the composition.
//! Served by `POST /api/ingredients/preview`; never touches the network.

use std::fmt::Write;

use shared::models::{
    Ingredient, IngredientCategory, KebabPreview, LayerKind, PreviewLayer, PreviewSize, SizeKey,
    SizeSpec, Visualization,
};

use super::svg::escape_xml;
use crate::catalog::Catalog;
use crate::composer::ResolvedComposition;

const DEFAULT_BASE_NAME: &str = "White Flour Tortilla";
const DEFAULT_BASE_COLOR: &str = "#F5E6D3";

/// Percent of the tortilla a layer covers, by size
pub fn coverage(kind: LayerKind, size: SizeKey) -> Option<u8> {
    let by_size = |small, medium, large, family| match size {
        SizeKey::Small => small,
        SizeKey::Medium => medium,
        SizeKey::Large => large,
        SizeKey::Family => family,
    };
    match kind {
        LayerKind::Base => None,
        LayerKind::Protein => Some(by_size(70, 75, 80, 85)),
        LayerKind::Vegetable => Some(by_size(50, 60, 70, 80)),
        LayerKind::Sauce => Some(by_size(30, 40, 50, 60)),
        LayerKind::Extra => Some(by_size(40, 50, 60, 70)),
    }
}

fn layer_kind(category: IngredientCategory) -> LayerKind {
    match category {
        IngredientCategory::Tortilla => LayerKind::Base,
        IngredientCategory::Protein => LayerKind::Protein,
        IngredientCategory::Vegetable => LayerKind::Vegetable,
        IngredientCategory::Sauce => LayerKind::Sauce,
        IngredientCategory::Extra => LayerKind::Extra,
    }
}

fn layer(ing: &Ingredient, size: SizeKey) -> PreviewLayer {
    let kind = layer_kind(ing.category);
    PreviewLayer {
        kind,
        name: ing.name.clone(),
        color: ing.color.clone(),
        image: ing.image.clone(),
        coverage: coverage(kind, size),
    }
}

fn base_layer(catalog: &Catalog, composition: &ResolvedComposition) -> PreviewLayer {
    let selected = composition.in_category(IngredientCategory::Tortilla);
    match selected.first().copied().or_else(|| catalog.default_base()) {
        Some(base) => layer(base, composition.size_key()),
        None => PreviewLayer {
            kind: LayerKind::Base,
            name: DEFAULT_BASE_NAME.to_string(),
            color: DEFAULT_BASE_COLOR.to_string(),
            image: String::new(),
            coverage: None,
        },
    }
}

pub fn build_preview(catalog: &Catalog, composition: &ResolvedComposition) -> KebabPreview {
    let spec = &composition.size;
    let key = composition.size_key();

    let base = base_layer(catalog, composition);
    let mut layers = vec![base.clone()];
    for category in [
        IngredientCategory::Protein,
        IngredientCategory::Vegetable,
        IngredientCategory::Sauce,
        IngredientCategory::Extra,
    ] {
        layers.extend(
            composition
                .in_category(category)
                .into_iter()
                .map(|ing| layer(ing, key)),
        );
    }

    KebabPreview {
        size: PreviewSize {
            name: key,
            dimensions: format!("{}cm x {}cm", spec.length, spec.diameter),
            length: spec.length,
            width: spec.diameter,
            weight: spec.weight,
            serves: spec.serves.clone(),
            description: spec.description.clone(),
        },
        visualization: Visualization {
            svg: preview_svg(spec, &base.color, composition),
            description: describe(spec, composition),
        },
        layers,
    }
}

/// Side view: plate, tortilla, then protein / vegetable / sauce layers
pub fn preview_svg(spec: &SizeSpec, base_color: &str, composition: &ResolvedComposition) -> String {
    let width = (spec.length * 15.0).min(400.0);
    let height = (spec.diameter * 25.0).min(200.0);
    let cx = width / 2.0;
    let cy = height / 2.0;

    let mut svg = format!(
        r##"<svg width="{width}" height="{height}" viewBox="0 0 {width} {height}" xmlns="http://www.w3.org/2000/svg">"##
    );
    let _ = write!(
        svg,
        r##"<ellipse cx="{cx}" cy="{py}" rx="{prx}" ry="15" fill="#E6E6FA" stroke="#D3D3D3" stroke-width="2"/>"##,
        py = height - 10.0,
        prx = (cx - 10.0).max(0.0),
    );
    let _ = write!(
        svg,
        r##"<ellipse cx="{cx}" cy="{cy}" rx="{rx}" ry="{ry}" fill="{color}" stroke="#D2B48C" stroke-width="1"/>"##,
        rx = (cx - 20.0).max(0.0),
        ry = (cy - 20.0).max(0.0),
        color = escape_xml(base_color),
    );

    let proteins = composition.in_category(IngredientCategory::Protein);
    let half = proteins.len() as f64 / 2.0;
    for (i, ing) in proteins.iter().enumerate() {
        let _ = write!(
            svg,
            r##"<ellipse cx="{x}" cy="{y}" rx="{rx}" ry="12" fill="{color}" opacity="0.8"/>"##,
            x = cx + (i as f64 - half) * 20.0,
            y = cy - 5.0,
            rx = width / 3.0,
            color = escape_xml(&ing.color),
        );
    }

    let vegetables = composition.in_category(IngredientCategory::Vegetable);
    let half = vegetables.len() as f64 / 2.0;
    for (i, ing) in vegetables.iter().enumerate() {
        let _ = write!(
            svg,
            r##"<circle cx="{x}" cy="{y}" r="8" fill="{color}" opacity="0.7"/>"##,
            x = cx + (i as f64 - half) * 15.0,
            y = cy - 10.0,
            color = escape_xml(&ing.color),
        );
    }

    for (i, ing) in composition
        .in_category(IngredientCategory::Sauce)
        .iter()
        .enumerate()
    {
        let y = cy - 15.0 - (i as f64 * 3.0);
        let _ = write!(
            svg,
            r##"<path d="M {x1} {y} Q {cx} {qy} {x2} {y}" stroke="{color}" stroke-width="3" fill="none" opacity="0.6"/>"##,
            x1 = width / 4.0,
            qy = y - 5.0,
            x2 = 3.0 * width / 4.0,
            color = escape_xml(&ing.color),
        );
    }

    let _ = write!(
        svg,
        r##"<text x="10" y="20" font-family="Arial" font-size="12" fill="#333">{} - {}cm</text></svg>"##,
        spec.key.as_str().to_uppercase(),
        spec.length,
    );
    svg
}

fn lower_names(items: &[&Ingredient]) -> Vec<String> {
    items.iter().map(|ing| ing.name.to_lowercase()).collect()
}

/// "Medium kebab (20cm x 5cm) featuring ... Weighs approximately 250g and serves 1-2."
pub fn describe(spec: &SizeSpec, composition: &ResolvedComposition) -> String {
    let tortilla = composition.in_category(IngredientCategory::Tortilla);
    let proteins = lower_names(&composition.in_category(IngredientCategory::Protein));
    let vegetables = lower_names(&composition.in_category(IngredientCategory::Vegetable));
    let sauces = lower_names(&composition.in_category(IngredientCategory::Sauce));
    let extras = lower_names(&composition.in_category(IngredientCategory::Extra));

    let mut parts = Vec::new();
    match (tortilla.first(), proteins.is_empty()) {
        (Some(base), false) => parts.push(format!(
            "{} wrapped around {}",
            base.name.to_lowercase(),
            proteins.join(" and ")
        )),
        (Some(base), true) => parts.push(base.name.to_lowercase()),
        (None, false) => parts.push(proteins.join(" and ")),
        (None, true) => {}
    }
    if !vegetables.is_empty() {
        parts.push(format!("topped with {}", vegetables.join(", ")));
    }
    if !sauces.is_empty() {
        parts.push(format!("drizzled with {}", sauces.join(" and ")));
    }
    if !extras.is_empty() {
        parts.push(format!("enhanced with {}", extras.join(" and ")));
    }

    let body = if parts.is_empty() {
        "a plain wrap".to_string()
    } else {
        parts.join(", ")
    };

    format!(
        "{} kebab ({}cm x {}cm) featuring {}. Weighs approximately {}g and serves {}.",
        spec.key.label(),
        spec.length,
        spec.diameter,
        body,
        spec.weight,
        spec.serves
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::composer::resolve_composition;

    fn preview(size: &str, ids: &[u32]) -> KebabPreview {
        let catalog = Catalog::builtin();
        let composition = resolve_composition(&catalog, Some(size), ids).unwrap();
        build_preview(&catalog, &composition)
    }

    #[test]
    fn test_layers_ordered_by_category() {
        let p = preview("large", &[11, 1, 5, 21, 16]);
        let kinds: Vec<_> = p.layers.iter().map(|l| l.kind).collect();
        assert_eq!(
            kinds,
            [
                LayerKind::Base,
                LayerKind::Protein,
                LayerKind::Vegetable,
                LayerKind::Sauce,
                LayerKind::Extra
            ]
        );
        assert_eq!(p.layers[0].name, "Whole Wheat Tortilla");
        assert_eq!(p.layers[0].coverage, None);
        assert_eq!(p.layers[1].coverage, Some(80));
        assert_eq!(p.layers[3].coverage, Some(50));
        assert_eq!(p.size.dimensions, "25cm x 6cm");
    }

    #[test]
    fn test_default_base_when_no_tortilla() {
        let p = preview("small", &[1]);
        assert_eq!(p.layers[0].kind, LayerKind::Base);
        assert_eq!(p.layers[0].name, "White Flour Tortilla");
        assert_eq!(p.layers.len(), 2);
    }

    #[test]
    fn test_svg_dimensions_capped() {
        let p = preview("family", &[20]);
        // 35 * 15 = 525 → 400, 8 * 25 = 200
        assert!(p.visualization.svg.starts_with(r#"<svg width="400" height="200""#));
        assert!(p.visualization.svg.ends_with("</svg>"));
        assert!(p.visualization.svg.contains("FAMILY - 35cm"));

        let p = preview("small", &[20]);
        assert!(p.visualization.svg.starts_with(r#"<svg width="225" height="100""#));
    }

    #[test]
    fn test_description() {
        let p = preview("medium", &[20, 1, 5, 6, 11]);
        assert_eq!(
            p.visualization.description,
            "Medium kebab (20cm x 5cm) featuring white flour tortilla wrapped around grilled chicken, \
             topped with fresh lettuce, fresh tomatoes, drizzled with garlic aioli. \
             Weighs approximately 250g and serves 1-2."
        );

        let p = preview("small", &[]);
        assert_eq!(
            p.visualization.description,
            "Small kebab (15cm x 4cm) featuring a plain wrap. Weighs approximately 150g and serves 1."
        );
    }
}
