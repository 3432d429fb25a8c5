//! Fixed profile content: header, footer and the outbound links

use crate::constants::AVATAR_PATH;
use crate::types::{LinkEntry, LinkIcon, Profile};

pub fn profile() -> Profile {
    Profile {
        display_name: "RODE".to_owned(),
        bio: "Hello".to_owned(),
        avatar: AVATAR_PATH.to_owned(),
        footer: "© 2025 RODE. All rights reserved.".to_owned(),
    }
}

/// Outbound links in declaration order. Display order comes from `LinkDirectory`.
pub fn personal_links() -> Vec<LinkEntry> {
    vec![
        LinkEntry::new(
            3,
            "Discord Server",
            "https://discord.com/invite/141",
            LinkIcon::Discord,
            "Join my community and get in touch.",
        ),
        LinkEntry::new(
            2,
            "Instagram",
            "https://www.instagram.com/rode.im/?hl=ar",
            LinkIcon::Instagram,
            "See my visual work and photography.",
        ),
        LinkEntry::new(
            7,
            "Spotify Playlist",
            "https://open.spotify.com/playlist/4ooWF8hWvwH7crGLhsY1f2",
            LinkIcon::Spotify,
            "Listen to my favourite music.",
        ),
        LinkEntry::new(
            6,
            "Steam Profile",
            "https://steamcommunity.com/id/RODEEEEEE/",
            LinkIcon::Steam,
            "Check out my games and play with me.",
        ),
        LinkEntry::new(
            1,
            "TikTok",
            "https://www.tiktok.com/@_.3bq",
            LinkIcon::TikTok,
            "Watch short, fun videos.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_link_ids_are_unique() {
        let links = personal_links();
        let ids: HashSet<u32> = links.iter().map(|l| l.id).collect();
        assert_eq!(ids.len(), links.len());
    }

    #[test]
    fn test_links_are_https() {
        for link in personal_links() {
            assert!(link.url.starts_with("https://"), "{}", link.url);
        }
    }
}
