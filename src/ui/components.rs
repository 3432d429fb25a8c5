//! Reusable UI components
//!
//! Custom-painted widgets for the profile page: the floating theme toggle,
//! the avatar and the link cards.

use crate::theme::{self, Palette};
use crate::types::LinkEntry;
use eframe::egui;
use egui_phosphor::regular as icons;

/// Round theme toggle. Shows the sun in dark mode and the moon in light mode.
pub fn theme_toggle(
    ui: &mut egui::Ui,
    id: egui::Id,
    is_dark: bool,
    palette: &Palette,
) -> egui::Response {
    let size = egui::vec2(theme::TOGGLE_SIZE, theme::TOGGLE_SIZE);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let response = ui.interact(rect, id, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) =
            theme::button_visual(&response, palette.toggle, palette.toggle_hover, rect);
        let painter = ui.painter();
        painter.circle_filled(
            draw_rect.center() + egui::vec2(0.0, 2.0),
            draw_rect.width() / 2.0,
            egui::Color32::from_black_alpha(40),
        );
        painter.circle_filled(draw_rect.center(), draw_rect.width() / 2.0, fill);
        painter.text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            if is_dark { icons::SUN } else { icons::MOON },
            egui::FontId::proportional(theme::TOGGLE_ICON),
            palette.toggle_icon,
        );
    }

    response.widget_info(|| {
        egui::WidgetInfo::labeled(egui::WidgetType::Button, true, "Toggle dark mode")
    });
    response
        .on_hover_text("Toggle dark mode")
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Circular profile picture with an accent ring. A missing file shows the
/// loader's error placeholder.
pub fn avatar(ui: &mut egui::Ui, uri: &str, palette: &Palette) {
    let size = egui::vec2(theme::AVATAR_SIZE, theme::AVATAR_SIZE);
    let response = ui.add(
        egui::Image::new(uri)
            .fit_to_exact_size(size)
            .maintain_aspect_ratio(false)
            .corner_radius(theme::AVATAR_SIZE / 2.0),
    );
    let rect = response.rect;
    ui.painter().circle_stroke(
        rect.center(),
        rect.width() / 2.0,
        egui::Stroke::new(theme::AVATAR_BORDER, palette.avatar_border),
    );
}

/// Id of the clickable card for a link
pub fn link_card_id(entry: &LinkEntry) -> egui::Id {
    egui::Id::new(("link_card", entry.id))
}

/// One outbound link: icon, title, description and a trailing external marker.
pub fn link_card(ui: &mut egui::Ui, entry: &LinkEntry, palette: &Palette) -> egui::Response {
    let size = egui::vec2(ui.available_width(), theme::CARD_HEIGHT);
    let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
    let response = ui.interact(rect, link_card_id(entry), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let (fill, rect) = theme::button_visual(&response, palette.card, palette.card_hover, rect);
        let painter = ui.painter();
        let radius = theme::RADIUS_CARD;

        painter.rect_filled(
            rect.translate(egui::vec2(0.0, 2.0)),
            f32::from(radius),
            egui::Color32::from_black_alpha(24),
        );
        painter.rect_filled(rect, f32::from(radius), fill);

        let stripe = egui::Rect::from_min_max(
            rect.min,
            egui::pos2(rect.min.x + theme::CARD_STRIPE, rect.max.y),
        );
        painter.rect_filled(
            stripe,
            egui::CornerRadius {
                nw: radius,
                sw: radius,
                ne: 0,
                se: 0,
            },
            palette.card_stripe,
        );

        let icon_x = rect.min.x + theme::CARD_PADDING + theme::CARD_ICON / 2.0;
        painter.text(
            egui::pos2(icon_x, rect.center().y),
            egui::Align2::CENTER_CENTER,
            entry.icon.glyph(),
            egui::FontId::proportional(theme::CARD_ICON),
            palette.card_icon,
        );

        let text_x = icon_x + theme::CARD_ICON / 2.0 + theme::SPACING_LG;
        painter.text(
            egui::pos2(text_x, rect.center().y - theme::SPACING_SM),
            egui::Align2::LEFT_BOTTOM,
            &entry.title,
            egui::FontId::proportional(theme::FONT_CARD_TITLE),
            palette.card_title,
        );
        painter.text(
            egui::pos2(text_x, rect.center().y + theme::SPACING_SM),
            egui::Align2::LEFT_TOP,
            &entry.description,
            egui::FontId::proportional(theme::FONT_CARD_DESCRIPTION),
            palette.card_description,
        );

        painter.text(
            egui::pos2(rect.max.x - theme::CARD_PADDING, rect.center().y),
            egui::Align2::RIGHT_CENTER,
            icons::ARROW_SQUARE_OUT,
            egui::FontId::proportional(theme::CARD_EXTERNAL_ICON),
            palette.card_external,
        );
    }

    response.widget_info(|| egui::WidgetInfo::labeled(egui::WidgetType::Link, true, &entry.title));
    response
        .on_hover_text(entry.url.as_str())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
