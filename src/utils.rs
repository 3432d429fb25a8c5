//! Utility functions

use crate::constants::APP_NAME;
use anyhow::{Context, Result};
use std::path::PathBuf;

// Chain-link glyph on an orange disc, square viewBox for window/taskbar icons
pub const ICON_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 64 64"><circle cx="32" cy="32" r="32" fill="#f97316"/><g fill="none" stroke="#fff" stroke-width="5" stroke-linecap="round" stroke-linejoin="round"><path d="M29 35a9 9 0 0 0 13 1l7-7a9 9 0 0 0-13-13l-3 3"/><path d="M35 29a9 9 0 0 0-13-1l-7 7a9 9 0 0 0 13 13l3-3"/></g></svg>"##;

/// Rasterize the icon SVG to a square RGBA image (for window/taskbar icons).
pub fn rasterize_icon(size: u32) -> Result<(Vec<u8>, u32, u32)> {
    let tree = resvg::usvg::Tree::from_str(ICON_SVG, &resvg::usvg::Options::default())
        .context("Failed to parse icon SVG")?;
    let scale = size as f32 / tree.size().width();
    let mut pixmap =
        resvg::tiny_skia::Pixmap::new(size, size).context("Invalid icon pixmap size")?;
    resvg::render(
        &tree,
        resvg::usvg::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );
    Ok((premul_to_straight(&pixmap), size, size))
}

fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}

/// Per-user data directory: local storage and logs
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Image URI for a local file path, as understood by the egui file loader
pub fn file_uri(path: &str) -> String {
    format!("file://{}", path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rasterize_icon_size() {
        let (pixels, w, h) = rasterize_icon(32).unwrap();
        assert_eq!((w, h), (32, 32));
        assert_eq!(pixels.len(), 32 * 32 * 4);
    }

    #[test]
    fn test_file_uri() {
        assert_eq!(file_uri("assets/avatar.jpg"), "file://assets/avatar.jpg");
    }
}
