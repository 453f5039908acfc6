//! Local vector renderer
//!
//! Last tier of the chain. Pure data-to-markup, no I/O, cannot fail.

use std::fmt::Write;
use std::sync::Arc;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use shared::models::KebabData;

use super::tier::{ImageRequest, ImageTier, TierFailure, TierImages, TierInfo};
use crate::catalog::Catalog;

pub const LOCAL_SVG_INFO: TierInfo = TierInfo {
    service: "Local SVG (Free)",
    model: "SVG-Generator",
    generation_time: "0.1s",
    style: "Vector-Art",
    note: Some("High-quality vector graphics used as fallback"),
};

const MAX_SWATCHES: usize = 12;
const SWATCHES_PER_ROW: usize = 6;
const UNKNOWN_COLOR: &str = "#94a3b8";

/// Escape text for SVG content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn svg_data_uri(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg))
}

/// Renders open/wrapped views from `KebabData`, coloring swatches from the catalog
#[derive(Debug, Clone)]
pub struct LocalSvgRenderer {
    catalog: Arc<Catalog>,
}

impl LocalSvgRenderer {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn render(&self, kebab: &KebabData) -> TierImages {
        TierImages {
            open: svg_data_uri(&self.open_view(kebab)),
            wrapped: svg_data_uri(&wrapped_view(kebab)),
            info: LOCAL_SVG_INFO,
        }
    }

    /// Ingredient swatches laid out on a spread tortilla
    pub fn open_view(&self, kebab: &KebabData) -> String {
        let mut swatches = String::new();
        for (i, name) in kebab.ingredients.iter().take(MAX_SWATCHES).enumerate() {
            let x = 80 + (i % SWATCHES_PER_ROW) * 60;
            let y = 140 + (i / SWATCHES_PER_ROW) * 50;
            let color = self.catalog.color_for_name(name).unwrap_or(UNKNOWN_COLOR);
            let label: String = name.chars().take(10).collect();
            let _ = write!(
                swatches,
                r##"<ellipse cx="{x}" cy="{y}" rx="25" ry="18" fill="{color}" opacity="0.9" stroke="#374151" stroke-width="1"/><text x="{x}" y="{ty}" text-anchor="middle" font-size="9" font-weight="bold" fill="#374151">{label}</text>"##,
                color = escape_xml(color),
                ty = y + 35,
                label = escape_xml(&label),
            );
        }

        let m = &kebab.measurements;
        format!(
            r##"<svg width="500" height="400" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="bg" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="#f8fafc"/><stop offset="100%" stop-color="#e2e8f0"/></linearGradient></defs><rect width="500" height="400" fill="url(#bg)"/><ellipse cx="250" cy="200" rx="220" ry="140" fill="#f4e4bc" stroke="#d4a574" stroke-width="3" opacity="0.9"/><ellipse cx="250" cy="200" rx="210" ry="130" fill="none" stroke="#e6d3a3" stroke-width="1"/>{swatches}<rect x="50" y="20" width="400" height="50" fill="rgba(255,255,255,0.9)" rx="10"/><text x="250" y="40" text-anchor="middle" font-size="22" font-weight="bold" fill="#1f2937">{title} KEBAB - OPEN VIEW</text><text x="250" y="60" text-anchor="middle" font-size="14" fill="#6b7280">All Ingredients Visible</text><rect x="350" y="320" width="130" height="60" fill="rgba(255,255,255,0.95)" stroke="#d1d5db" rx="5"/><text x="415" y="340" text-anchor="middle" font-size="12" font-weight="bold" fill="#374151">SPECIFICATIONS</text><text x="415" y="355" text-anchor="middle" font-size="10" fill="#6b7280">Length: {length}cm</text><text x="415" y="368" text-anchor="middle" font-size="10" fill="#6b7280">Weight: {weight}g</text></svg>"##,
            title = escape_xml(&kebab.size.to_uppercase()),
            length = m.length,
            weight = m.weight,
        )
    }
}

/// Rolled kebab scaled by length and diameter, with measurement annotations
pub fn wrapped_view(kebab: &KebabData) -> String {
    let m = &kebab.measurements;
    // 6 px per cm, halved for the ellipse radii; clamped to stay on the canvas
    let rx = (m.length * 3.0).clamp(10.0, 230.0);
    let ry = (m.diameter * 3.0).clamp(6.0, 120.0);

    format!(
        r##"<svg width="500" height="400" xmlns="http://www.w3.org/2000/svg"><defs><linearGradient id="wrap" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="#f4e4bc"/><stop offset="30%" stop-color="#e6d3a3"/><stop offset="70%" stop-color="#d4a574"/><stop offset="100%" stop-color="#c49a6b"/></linearGradient></defs><rect width="500" height="400" fill="#ffffff"/><ellipse cx="252" cy="202" rx="{srx}" ry="{sry}" fill="rgba(0,0,0,0.1)" opacity="0.5"/><g transform="translate(250, 200)"><ellipse cx="0" cy="0" rx="{rx}" ry="{ry}" fill="url(#wrap)" stroke="#a8845a" stroke-width="2"/><path d="M-{rx},0 Q-{qx},-{qy} 0,0 Q{qx},-{qy} {rx},0" stroke="#9d7349" stroke-width="1.5" fill="none" opacity="0.7"/><path d="M-{rx},0 Q-{qx},{qy} 0,0 Q{qx},{qy} {rx},0" stroke="#9d7349" stroke-width="1.5" fill="none" opacity="0.7"/><circle cx="-{rx}" cy="0" r="3" fill="#8b6914"/><circle cx="{rx}" cy="0" r="3" fill="#8b6914"/></g><line x1="70" y1="280" x2="430" y2="280" stroke="#1f2937" stroke-width="2"/><polygon points="70,275 70,285 60,280" fill="#1f2937"/><polygon points="430,275 430,285 440,280" fill="#1f2937"/><text x="250" y="300" text-anchor="middle" font-size="16" font-weight="bold" fill="#1f2937">{length} cm</text><line x1="180" y1="120" x2="180" y2="280" stroke="#1f2937" stroke-width="2"/><text x="160" y="205" text-anchor="middle" font-size="16" font-weight="bold" fill="#1f2937" transform="rotate(-90, 160, 205)">⌀ {diameter} cm</text><rect x="50" y="20" width="400" height="70" fill="rgba(31,41,55,0.95)" rx="10"/><text x="250" y="45" text-anchor="middle" font-size="24" font-weight="bold" fill="#ffffff">{title} KEBAB</text><text x="250" y="65" text-anchor="middle" font-size="14" fill="#d1d5db">Technical Specifications</text><rect x="350" y="330" width="130" height="50" fill="rgba(255,255,255,0.95)" stroke="#d1d5db" rx="5"/><text x="415" y="352" text-anchor="middle" font-size="12" font-weight="bold" fill="#374151">WEIGHT</text><text x="415" y="370" text-anchor="middle" font-size="12" fill="#6b7280">{weight}g</text></svg>"##,
        srx = rx + 5.0,
        sry = ry + 3.0,
        qx = rx / 2.0,
        qy = ry / 2.0,
        length = m.length,
        diameter = m.diameter,
        weight = m.weight,
        title = escape_xml(&kebab.size.to_uppercase()),
    )
}

#[async_trait]
impl ImageTier for LocalSvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    async fn generate(&self, request: &ImageRequest) -> Result<TierImages, TierFailure> {
        Ok(self.render(&request.kebab))
    }
}
