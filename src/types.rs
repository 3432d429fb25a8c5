//! Common types and data structures

use egui_phosphor::regular as icons;

/// Icon shown next to a link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkIcon {
    Discord,
    Instagram,
    Spotify,
    Steam,
    TikTok,
}

impl LinkIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            LinkIcon::Discord => icons::DISCORD_LOGO,
            LinkIcon::Instagram => icons::INSTAGRAM_LOGO,
            LinkIcon::Spotify => icons::SPOTIFY_LOGO,
            LinkIcon::Steam => icons::STEAM_LOGO,
            LinkIcon::TikTok => icons::TIKTOK_LOGO,
        }
    }
}

/// One outbound profile link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEntry {
    pub id: u32,
    pub title: String,
    pub url: String,
    pub icon: LinkIcon,
    pub description: String,
}

impl LinkEntry {
    pub fn new(id: u32, title: &str, url: &str, icon: LinkIcon, description: &str) -> Self {
        Self {
            id,
            title: title.to_owned(),
            url: url.to_owned(),
            icon,
            description: description.to_owned(),
        }
    }
}

/// Header and footer content of the page
#[derive(Debug, Clone)]
pub struct Profile {
    pub display_name: String,
    pub bio: String,
    /// Path to the profile picture
    pub avatar: String,
    pub footer: String,
}
