//! Current-page highlighting for `.nav-link` anchors.
//!
//! A link is active when its `href` attribute equals the page path exactly;
//! there is no prefix matching, so `/projects/7` does not light up
//! `/projects`.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Class toggled on the active link.
pub const ACTIVE_CLASS: &str = "active";

/// Class marking navigation anchors.
pub const NAV_LINK_CLASS: &str = "nav-link";

/// Active flag for each link, in input order. Links without an `href` are
/// never active.
#[must_use]
pub fn active_links(current_path: &str, hrefs: &[Option<&str>]) -> Vec<bool> {
    hrefs.iter().map(|href| *href == Some(current_path)).collect()
}
