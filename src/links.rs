//! Link directory: locale-aware ordering and external navigation

use crate::types::LinkEntry;
use anyhow::{anyhow, Result};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;
use tracing::debug;

/// Links always open in a new browsing context
pub const NEW_BROWSING_CONTEXT: &str = "_blank";
/// No referrer is sent and the opened page gets no handle back to us
pub const SAFE_REL: &str = "noopener noreferrer";

/// Compares titles the way a reader of `locale` expects them ordered
pub struct TitleCollator {
    collator: Collator,
}

impl TitleCollator {
    pub fn new(locale: &str) -> Result<Self> {
        let parsed: Locale = locale
            .parse()
            .map_err(|e| anyhow!("invalid collation locale {locale:?}: {e}"))?;
        let collator = Collator::try_new(&parsed.into(), CollatorOptions::new())
            .map_err(|e| anyhow!("no collation data for {locale:?}: {e}"))?;
        debug!(locale, "Title collator ready");
        Ok(Self { collator })
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

/// The fixed link list, sorted once by title
pub struct LinkDirectory {
    entries: Vec<LinkEntry>,
}

impl LinkDirectory {
    pub fn new(mut entries: Vec<LinkEntry>, collator: &TitleCollator) -> Self {
        // Ties fall back to the id so the result never depends on input order
        entries.sort_by(|a, b| {
            collator
                .compare(&a.title, &b.title)
                .then_with(|| a.id.cmp(&b.id))
        });
        Self { entries }
    }

    pub fn entries(&self) -> &[LinkEntry] {
        &self.entries
    }

    pub fn get(&self, id: u32) -> Option<&LinkEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

/// Navigation target for one link, with anchor semantics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalLink {
    pub href: String,
    pub target: &'static str,
    pub rel: &'static str,
}

impl ExternalLink {
    pub fn opens_new_context(&self) -> bool {
        self.target == NEW_BROWSING_CONTEXT
    }

    pub fn has_rel(&self, token: &str) -> bool {
        self.rel.split_whitespace().any(|t| t == token)
    }
}

impl LinkEntry {
    pub fn external_link(&self) -> ExternalLink {
        ExternalLink {
            href: self.url.clone(),
            target: NEW_BROWSING_CONTEXT,
            rel: SAFE_REL,
        }
    }
}

/// Hands a link off to whatever actually opens it
pub trait Launcher {
    fn open(&mut self, link: &ExternalLink) -> std::io::Result<()>;
}

/// Opens links with the OS default handler.
///
/// The launch is detached, so the browser starts a fresh context with no
/// referrer and no opener.
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open(&mut self, link: &ExternalLink) -> std::io::Result<()> {
        open::that_detached(&link.href)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::personal_links;
    use crate::types::LinkIcon;
    use std::collections::HashSet;

    fn collator() -> TitleCollator {
        TitleCollator::new("en").unwrap()
    }

    fn entry(id: u32, title: &str) -> LinkEntry {
        LinkEntry::new(id, title, "https://example.com", LinkIcon::Discord, "")
    }

    fn titles(dir: &LinkDirectory) -> Vec<&str> {
        dir.entries().iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_sort_ignores_case() {
        let dir = LinkDirectory::new(vec![entry(1, "Beta"), entry(2, "alpha")], &collator());
        assert_eq!(titles(&dir), vec!["alpha", "Beta"]);
    }

    #[test]
    fn test_sort_places_accents_with_base_letter() {
        let dir = LinkDirectory::new(
            vec![entry(1, "ezra"), entry(2, "école"), entry(3, "eclair")],
            &collator(),
        );
        assert_eq!(titles(&dir), vec!["eclair", "école", "ezra"]);
    }

    #[test]
    fn test_sort_independent_of_input_order() {
        let c = collator();
        let forward = LinkDirectory::new(personal_links(), &c);

        let mut reversed = personal_links();
        reversed.reverse();
        let mut rotated = personal_links();
        rotated.rotate_left(2);

        assert_eq!(forward.entries(), LinkDirectory::new(reversed, &c).entries());
        assert_eq!(forward.entries(), LinkDirectory::new(rotated, &c).entries());
    }

    #[test]
    fn test_fixed_links_sorted_by_title() {
        let c = collator();
        let dir = LinkDirectory::new(personal_links(), &c);
        assert_eq!(dir.entries().len(), 5);
        for pair in dir.entries().windows(2) {
            assert_ne!(c.compare(&pair[0].title, &pair[1].title), Ordering::Greater);
        }
    }

    #[test]
    fn test_equal_titles_ordered_by_id() {
        let dir = LinkDirectory::new(vec![entry(9, "same"), entry(4, "same")], &collator());
        let ids: Vec<u32> = dir.entries().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![4, 9]);
    }

    #[test]
    fn test_get_by_id() {
        let dir = LinkDirectory::new(personal_links(), &collator());
        assert_eq!(dir.get(7).map(|e| e.title.as_str()), Some("Spotify Playlist"));
        assert!(dir.get(42).is_none());
    }

    #[test]
    fn test_external_links_are_safe() {
        let fixed: HashSet<String> = personal_links().into_iter().map(|l| l.url).collect();
        let dir = LinkDirectory::new(personal_links(), &collator());
        for entry in dir.entries() {
            let link = entry.external_link();
            assert!(fixed.contains(&link.href));
            assert!(link.opens_new_context());
            assert!(link.has_rel("noopener"));
            assert!(link.has_rel("noreferrer"));
        }
    }

    #[test]
    fn test_invalid_locale_rejected() {
        assert!(TitleCollator::new("not a locale!").is_err());
    }
}
