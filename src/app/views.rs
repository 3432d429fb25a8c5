//! View rendering (header, link list, footer, theme toggle)

use super::App;
use crate::theme::{self, Palette};
use crate::ui::components::{avatar, link_card, theme_toggle};
use eframe::egui;

pub(crate) fn toggle_id() -> egui::Id {
    egui::Id::new("theme_toggle")
}

impl App {
    /// Render one frame of the page
    pub fn ui(&mut self, ctx: &egui::Context) {
        self.apply_theme(ctx);
        let palette = Palette::for_theme(self.dark_mode.theme());

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(palette.bg)
                    .inner_margin(egui::Margin::same(theme::PAGE_MARGIN)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            let width = ui.available_width().min(theme::LINKS_MAX_WIDTH);
                            ui.allocate_ui_with_layout(
                                egui::vec2(width, 0.0),
                                egui::Layout::top_down(egui::Align::Center),
                                |ui| {
                                    self.render_header(ui, palette);
                                    self.render_links(ui, palette);
                                },
                            );
                            self.render_footer(ui, palette);
                        });
                    });
            });

        // Drawn last so it floats above the scrolling content
        self.render_toggle(ctx, palette);
    }

    fn render_header(&self, ui: &mut egui::Ui, palette: &Palette) {
        ui.add_space(theme::SPACING_XXL);
        avatar(ui, &self.avatar_uri, palette);
        ui.add_space(theme::SPACING_LG);
        ui.label(
            egui::RichText::new(&self.profile.display_name)
                .size(theme::FONT_NAME)
                .strong()
                .color(palette.name),
        );
        ui.add_space(theme::SPACING_SM);
        ui.add(
            egui::Label::new(
                egui::RichText::new(&self.profile.bio)
                    .size(theme::FONT_BIO)
                    .color(palette.bio),
            )
            .wrap(),
        );
        ui.add_space(theme::SPACING_XL + theme::SPACING_MD);
    }

    fn render_links(&mut self, ui: &mut egui::Ui, palette: &Palette) {
        let gap = theme::SPACING_XL - ui.spacing().item_spacing.y;
        let mut clicked = None;
        for entry in self.links.entries() {
            if link_card(ui, entry, palette).clicked() {
                clicked = Some(entry.id);
            }
            ui.add_space(gap);
        }
        if let Some(id) = clicked {
            self.follow_link(id);
        }
        ui.add_space(theme::SPACING_XXL - gap);
    }

    fn render_footer(&self, ui: &mut egui::Ui, palette: &Palette) {
        theme::footer_frame(palette).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(&self.profile.footer)
                    .size(theme::FONT_FOOTER)
                    .color(palette.footer_text),
            );
        });
    }

    fn render_toggle(&mut self, ctx: &egui::Context, palette: &Palette) {
        let is_dark = self.dark_mode.is_dark();
        let response = egui::Area::new(toggle_id().with("area"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(theme::SPACING_LG, theme::SPACING_LG))
            .show(ctx, |ui| theme_toggle(ui, toggle_id(), is_dark, palette));
        if response.inner.clicked() {
            self.toggle_dark_mode(ctx);
        }
    }
}
