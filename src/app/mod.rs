//! App module - contains the main application state and logic

mod views;

use crate::links::{Launcher, LinkDirectory, SystemLauncher};
use crate::preference::DarkModePreference;
use crate::storage::LocalStorage;
use crate::theme;
use crate::types::Profile;
use crate::utils::file_uri;
use eframe::egui;
use tracing::{debug, info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) profile: Profile,
    pub(crate) avatar_uri: String,
    pub(crate) links: LinkDirectory,
    pub(crate) dark_mode: DarkModePreference,
    pub(crate) storage: LocalStorage,
    pub(crate) launcher: Box<dyn Launcher>,
    // Theme last pushed to the egui context
    pub(crate) applied_theme: Option<egui::Theme>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        profile: Profile,
        links: LinkDirectory,
        storage: LocalStorage,
    ) -> Self {
        theme::install_fonts(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply_visuals(&cc.egui_ctx);

        let mut app = Self::with_parts(profile, links, storage, Box::new(SystemLauncher));
        app.apply_theme(&cc.egui_ctx);
        app
    }

    /// Build the app state without a window. The stored preference is read
    /// and immediately written back, so the key exists after first launch.
    pub fn with_parts(
        profile: Profile,
        links: LinkDirectory,
        mut storage: LocalStorage,
        launcher: Box<dyn Launcher>,
    ) -> Self {
        let dark_mode = DarkModePreference::load(&storage);
        dark_mode.persist(&mut storage);
        info!(dark_mode = dark_mode.is_dark(), "Theme preference loaded");

        Self {
            avatar_uri: file_uri(&profile.avatar),
            profile,
            links,
            dark_mode,
            storage,
            launcher,
            applied_theme: None,
        }
    }

    /// Push the current preference to the UI root if it changed
    pub fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.dark_mode.theme();
        if self.applied_theme != Some(theme) {
            ctx.set_theme(theme);
            self.applied_theme = Some(theme);
            debug!(?theme, "Theme applied");
        }
    }

    pub fn toggle_dark_mode(&mut self, ctx: &egui::Context) {
        let dark = self.dark_mode.toggle(&mut self.storage);
        info!(dark_mode = dark, "Theme toggled");
        self.apply_theme(ctx);
        ctx.request_repaint();
    }

    /// Open the link with `id` through the launcher
    pub fn follow_link(&mut self, id: u32) {
        let Some(entry) = self.links.get(id) else {
            warn!(id, "Unknown link id");
            return;
        };
        let link = entry.external_link();
        info!(
            url = %link.href,
            new_context = link.opens_new_context(),
            no_referrer = link.has_rel("noreferrer"),
            no_opener = link.has_rel("noopener"),
            "Opening link"
        );
        if let Err(e) = self.launcher.open(&link) {
            warn!(error = %e, url = %link.href, "Failed to open link");
        }
    }
}
