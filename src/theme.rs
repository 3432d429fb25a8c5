//! Centralized theme constants for Link Hub
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Gray scale
// =============================================================================
const WHITE: Color32 = Color32::WHITE;
const GRAY_100: Color32 = Color32::from_rgb(0xf3, 0xf4, 0xf6);
const GRAY_200: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
const GRAY_300: Color32 = Color32::from_rgb(0xd1, 0xd5, 0xdb);
const GRAY_400: Color32 = Color32::from_rgb(0x9c, 0xa3, 0xaf);
const GRAY_500: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
const GRAY_600: Color32 = Color32::from_rgb(0x4b, 0x55, 0x63);
const GRAY_700: Color32 = Color32::from_rgb(0x37, 0x41, 0x51);
const GRAY_800: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
const GRAY_900: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);

// =============================================================================
// COLORS - Accents
// =============================================================================
const ORANGE_100: Color32 = Color32::from_rgb(0xff, 0xed, 0xd5);
const ORANGE_200: Color32 = Color32::from_rgb(0xfe, 0xd7, 0xaa);
const ORANGE_300: Color32 = Color32::from_rgb(0xfd, 0xba, 0x74);
const ORANGE_400: Color32 = Color32::from_rgb(0xfb, 0x92, 0x3c);
const ORANGE_500: Color32 = Color32::from_rgb(0xf9, 0x73, 0x16);
const ORANGE_600: Color32 = Color32::from_rgb(0xea, 0x58, 0x0c);
const RED_500: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);
const RED_600: Color32 = Color32::from_rgb(0xdc, 0x26, 0x26);
const RED_700: Color32 = Color32::from_rgb(0xb9, 0x1c, 0x1c);
const YELLOW_300: Color32 = Color32::from_rgb(0xfd, 0xe0, 0x47);

/// Colors for one presentation mode
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub bg: Color32,
    pub text: Color32,
    pub name: Color32,
    pub bio: Color32,
    pub avatar_border: Color32,

    pub card: Color32,
    pub card_hover: Color32,
    pub card_stripe: Color32,
    pub card_icon: Color32,
    pub card_title: Color32,
    pub card_description: Color32,
    pub card_external: Color32,

    pub toggle: Color32,
    pub toggle_hover: Color32,
    pub toggle_icon: Color32,

    pub footer_bg: Color32,
    pub footer_text: Color32,
}

pub const LIGHT: Palette = Palette {
    bg: WHITE,
    text: GRAY_900,
    name: RED_600,
    bio: GRAY_700,
    avatar_border: ORANGE_500,
    card: ORANGE_100,
    card_hover: ORANGE_200,
    card_stripe: RED_500,
    card_icon: RED_600,
    card_title: RED_700,
    card_description: GRAY_600,
    card_external: GRAY_500,
    toggle: ORANGE_500,
    toggle_hover: ORANGE_600,
    toggle_icon: WHITE,
    footer_bg: GRAY_200,
    footer_text: GRAY_700,
};

pub const DARK: Palette = Palette {
    bg: GRAY_900,
    text: GRAY_100,
    name: ORANGE_400,
    bio: GRAY_300,
    avatar_border: ORANGE_500,
    card: GRAY_800,
    card_hover: GRAY_700,
    card_stripe: ORANGE_500,
    card_icon: ORANGE_400,
    card_title: ORANGE_300,
    card_description: GRAY_400,
    card_external: GRAY_400,
    toggle: GRAY_700,
    toggle_hover: GRAY_600,
    toggle_icon: YELLOW_300,
    footer_bg: GRAY_800,
    footer_text: GRAY_400,
};

impl Palette {
    pub fn for_theme(theme: egui::Theme) -> &'static Palette {
        match theme {
            egui::Theme::Light => &LIGHT,
            egui::Theme::Dark => &DARK,
        }
    }
}

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_NAME: f32 = 36.0;
pub const FONT_BIO: f32 = 18.0;
pub const FONT_CARD_TITLE: f32 = 20.0;
pub const FONT_CARD_DESCRIPTION: f32 = 14.0;
pub const FONT_FOOTER: f32 = 15.0;

// =============================================================================
// DIMENSIONS - Layout
// =============================================================================
pub const LINKS_MAX_WIDTH: f32 = 768.0;
pub const PAGE_MARGIN: i8 = 16;

// =============================================================================
// DIMENSIONS - Components
// =============================================================================
pub const AVATAR_SIZE: f32 = 128.0;
pub const AVATAR_BORDER: f32 = 4.0;
pub const CARD_HEIGHT: f32 = 84.0;
pub const CARD_PADDING: f32 = 20.0;
pub const CARD_STRIPE: f32 = 4.0;
pub const CARD_ICON: f32 = 32.0;
pub const CARD_EXTERNAL_ICON: f32 = 20.0;
pub const TOGGLE_SIZE: f32 = 48.0;
pub const TOGGLE_ICON: f32 = 24.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_CARD: u8 = 12;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 16.0;
pub const SPACING_XL: f32 = 24.0;
pub const SPACING_XXL: f32 = 48.0;

// =============================================================================
// HELPER - Fonts
// =============================================================================
pub fn install_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);
}

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================

/// Install visuals for both themes. Switching mode is then only a theme change.
pub fn apply_visuals(ctx: &egui::Context) {
    for theme in [egui::Theme::Light, egui::Theme::Dark] {
        let palette = Palette::for_theme(theme);
        let mut visuals = theme.default_visuals();
        visuals.panel_fill = palette.bg;
        visuals.window_fill = palette.bg;
        visuals.extreme_bg_color = palette.bg;
        visuals.hyperlink_color = palette.name;
        visuals.widgets.noninteractive.fg_stroke = egui::Stroke::new(1.0, palette.text);
        visuals.interact_cursor = Some(egui::CursorIcon::PointingHand);
        ctx.set_visuals_of(theme, visuals);
    }

    ctx.all_styles_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.scroll.bar_width = 6.0;
        style.spacing.scroll.floating = false;
    });
}

// =============================================================================
// HELPER - Footer frame
// =============================================================================
pub fn footer_frame(palette: &Palette) -> egui::Frame {
    egui::Frame::new()
        .fill(palette.footer_bg)
        .corner_radius(egui::CornerRadius {
            nw: RADIUS_CARD,
            ne: RADIUS_CARD,
            sw: 0,
            se: 0,
        })
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Returns (fill, draw_rect) for a custom-painted button with hover/press effects.
/// Uses `hover_fill` on hover and shrinks slightly on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    hover_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (hover_fill, rect.shrink(1.5))
    } else if response.hovered() {
        (hover_fill, rect)
    } else {
        (base_fill, rect)
    }
}
