//! Sidebar navigation tracking
//!
//! Sections are observed against a horizontal band of the viewport.
//! Whenever a section starts intersecting the band, the sidebar link
//! pointing at it becomes the only active one.

use tracing::trace;

/// Observation band, expressed like observer root margins
///
/// Margins are fractions of the viewport height; negative values shrink
/// the band. The defaults leave a band from 40% to 50% of the height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverBand {
    pub top_margin: f64,
    pub bottom_margin: f64,
    /// Minimum visible fraction of a section to count as intersecting
    pub threshold: f64,
}

impl Default for ObserverBand {
    fn default() -> Self {
        Self {
            top_margin: -0.4,
            bottom_margin: -0.5,
            threshold: 0.1,
        }
    }
}

impl ObserverBand {
    /// Top and bottom edges of the band for a viewport height
    pub fn zone(&self, viewport_height: f64) -> (f64, f64) {
        let top = -self.top_margin * viewport_height;
        let bottom = viewport_height + self.bottom_margin * viewport_height;
        (top, bottom)
    }

    /// Fraction of a section's height inside the band
    pub fn intersection_ratio(&self, section: &SectionBounds, viewport_height: f64) -> f64 {
        let (zone_top, zone_bottom) = self.zone(viewport_height);
        let overlap = section.bottom.min(zone_bottom) - section.top.max(zone_top);
        if overlap <= 0.0 {
            return 0.0;
        }
        let height = section.bottom - section.top;
        if height <= 0.0 {
            return 0.0;
        }
        (overlap / height).min(1.0)
    }

    /// Whether a section counts as intersecting the band
    ///
    /// Simplified from a browser observer, which reports any overlap as
    /// intersecting even when a section has just dropped below the
    /// threshold. Here a section only intersects while at least
    /// `threshold` of it lies in the band, so such a section is reported
    /// as leaving and never activates its link.
    pub fn is_intersecting(&self, section: &SectionBounds, viewport_height: f64) -> bool {
        let ratio = self.intersection_ratio(section, viewport_height);
        ratio > 0.0 && ratio >= self.threshold
    }
}

/// A section's position relative to the top of the viewport
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBounds {
    pub id: Option<String>,
    pub top: f64,
    pub bottom: f64,
}

impl SectionBounds {
    pub fn new(id: Option<&str>, top: f64, bottom: f64) -> Self {
        Self {
            id: id.map(str::to_string),
            top,
            bottom,
        }
    }
}

/// A change in one section's intersection state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionEntry {
    pub id: Option<String>,
    pub intersecting: bool,
}

/// A sidebar link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    active: bool,
}

impl NavLink {
    pub fn new(href: &str) -> Self {
        Self {
            href: href.to_string(),
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Sidebar links and their active flags
#[derive(Debug, Clone, Default)]
pub struct Sidebar {
    links: Vec<NavLink>,
}

impl Sidebar {
    pub fn new(hrefs: &[&str]) -> Self {
        Self {
            links: hrefs.iter().map(|href| NavLink::new(href)).collect(),
        }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    /// Href of the first active link
    pub fn active_href(&self) -> Option<&str> {
        self.links
            .iter()
            .find(|link| link.active)
            .map(|link| link.href.as_str())
    }

    /// Make `#id` the active link; no id deactivates every link
    pub fn activate(&mut self, id: Option<&str>) {
        let target = id.map(|id| format!("#{}", id));
        for link in &mut self.links {
            link.active = target.as_deref() == Some(link.href.as_str());
        }
    }

    /// Apply observer entries in order; only intersecting ones count
    pub fn observe(&mut self, entries: &[SectionEntry]) {
        for entry in entries.iter().filter(|entry| entry.intersecting) {
            self.activate(entry.id.as_deref());
        }
    }
}

/// Observer that reports only sections whose state changed
#[derive(Debug, Clone, Default)]
pub struct NavTracker {
    band: ObserverBand,
    intersecting: Vec<bool>,
}

impl NavTracker {
    pub fn new(band: ObserverBand) -> Self {
        Self {
            band,
            intersecting: Vec::new(),
        }
    }

    /// Compute entries for the current layout
    ///
    /// The first call reports every section, later calls only those
    /// whose intersection state flipped.
    pub fn entries(&mut self, sections: &[SectionBounds], viewport_height: f64) -> Vec<SectionEntry> {
        let first = self.intersecting.len() != sections.len();
        if first {
            self.intersecting = vec![false; sections.len()];
        }

        let mut entries = Vec::new();
        for (index, section) in sections.iter().enumerate() {
            let now = self.band.is_intersecting(section, viewport_height);
            if first || now != self.intersecting[index] {
                trace!(id = ?section.id, intersecting = now, "section changed");
                entries.push(SectionEntry {
                    id: section.id.clone(),
                    intersecting: now,
                });
            }
            self.intersecting[index] = now;
        }
        entries
    }

    /// Recompute entries and apply them to the sidebar
    pub fn update(&mut self, sidebar: &mut Sidebar, sections: &[SectionBounds], viewport_height: f64) {
        let entries = self.entries(sections, viewport_height);
        sidebar.observe(&entries);
    }
}
