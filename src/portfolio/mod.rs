// SPDX-License-Identifier: MPL-2.0
//! Portfolio manifest: the static description of what the app shows.
//!
//! A portfolio is a TOML file listing hero slides and gallery photos. The
//! manifest is immutable once loaded; all interactive state (filtering,
//! lightbox sessions) lives in the UI controllers and refers back to photos
//! by index.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::path::Path;

/// Width, in pixels, requested for full-size lightbox renditions.
const FULL_SIZE_WIDTH: &str = "2400";

#[derive(RustEmbed)]
#[folder = "assets/portfolio/"]
struct Asset;

/// One hero slide: an image plus the kinetic word shown next to it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Slide {
    /// `http(s)` URL or local file path.
    pub source: String,
    /// Descriptive text shown while the slide loads.
    pub alt: String,
    /// Word displayed by the kinetic label while this slide is front.
    pub word: String,
}

/// One gallery photo.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Photo {
    /// `http(s)` URL or local file path.
    pub source: String,
    /// Descriptive text, also the caption fallback.
    pub alt: String,
    /// Optional caption title; falls back to `alt` in the lightbox.
    #[serde(default)]
    pub title: Option<String>,
    /// Category label matched against filter chips.
    pub category: String,
}

impl Photo {
    /// Lightbox caption: title first, then non-empty alt text. `None` means
    /// the caller should substitute its localized generic label.
    pub fn caption(&self) -> Option<&str> {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => Some(title),
            _ if !self.alt.is_empty() => Some(&self.alt),
            _ => None,
        }
    }
}

/// A loaded portfolio manifest.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub slides: Vec<Slide>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Portfolio {
    /// Parses a manifest from TOML text and validates it.
    pub fn parse(text: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(text).map_err(|e| Error::Manifest(e.to_string()))?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Loads a manifest from a file on disk.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Manifest(format!("{}: {e}", path.display())))?;
        Self::parse(&text)
    }

    /// Returns the portfolio embedded in the binary.
    ///
    /// The embedded manifest is validated by a unit test, so a parse failure
    /// here is a build defect and panics.
    pub fn embedded_default() -> Self {
        let file = Asset::get("default.toml").expect("embedded default portfolio missing");
        let text = String::from_utf8_lossy(file.data.as_ref()).to_string();
        Self::parse(&text).expect("embedded default portfolio is invalid")
    }

    fn validate(&self) -> Result<()> {
        for (i, slide) in self.slides.iter().enumerate() {
            if slide.source.is_empty() {
                return Err(Error::Manifest(format!("slide {i} has an empty source")));
            }
        }
        for (i, photo) in self.photos.iter().enumerate() {
            if photo.source.is_empty() {
                return Err(Error::Manifest(format!("photo {i} has an empty source")));
            }
            if photo.category.is_empty() {
                return Err(Error::Manifest(format!("photo {i} has an empty category")));
            }
        }
        Ok(())
    }

    /// Distinct category labels in first-appearance order. Filter chips are
    /// built from this list, prefixed by the "all" sentinel.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for photo in &self.photos {
            if !seen.contains(&photo.category.as_str()) {
                seen.push(photo.category.as_str());
            }
        }
        seen
    }
}

/// Derives a full-resolution source by rewriting a `w=<digits>` query
/// parameter to the lightbox width. Sources without such a parameter
/// (including local paths) are returned unchanged.
pub fn full_size_source(source: &str) -> String {
    let Some(query_start) = source.find('?') else {
        return source.to_string();
    };
    let (base, query) = source.split_at(query_start + 1);

    let mut rewritten = Vec::new();
    let mut changed = false;
    for param in query.split('&') {
        match param.strip_prefix("w=") {
            Some(value) if !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit()) => {
                rewritten.push(format!("w={FULL_SIZE_WIDTH}"));
                changed = true;
            }
            _ => rewritten.push(param.to_string()),
        }
    }

    if changed {
        format!("{base}{}", rewritten.join("&"))
    } else {
        source.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [[slides]]
        source = "https://example.com/a.jpg?w=1400"
        alt = "A"
        word = "one"

        [[photos]]
        source = "https://example.com/b.jpg?q=80&w=800"
        alt = "B"
        title = "Photo B"
        category = "travel"

        [[photos]]
        source = "https://example.com/c.jpg"
        alt = ""
        category = "portrait"
    "#;

    #[test]
    fn parses_minimal_manifest() {
        let portfolio = Portfolio::parse(MINIMAL).expect("parse failed");
        assert_eq!(portfolio.slides.len(), 1);
        assert_eq!(portfolio.photos.len(), 2);
        assert_eq!(portfolio.photos[0].title.as_deref(), Some("Photo B"));
    }

    #[test]
    fn rejects_empty_category() {
        let text = r#"
            [[photos]]
            source = "x.jpg"
            alt = "x"
            category = ""
        "#;
        assert!(matches!(Portfolio::parse(text), Err(Error::Manifest(_))));
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let portfolio = Portfolio::parse(MINIMAL).expect("parse failed");
        assert_eq!(portfolio.categories(), vec!["travel", "portrait"]);
    }

    #[test]
    fn caption_prefers_title_then_alt() {
        let portfolio = Portfolio::parse(MINIMAL).expect("parse failed");
        assert_eq!(portfolio.photos[0].caption(), Some("Photo B"));
        assert_eq!(portfolio.photos[1].caption(), None); // empty alt, no title
    }

    #[test]
    fn full_size_rewrites_width_parameter() {
        assert_eq!(
            full_size_source("https://example.com/b.jpg?q=80&w=800&fit=crop"),
            "https://example.com/b.jpg?q=80&w=2400&fit=crop"
        );
        assert_eq!(
            full_size_source("https://example.com/b.jpg?w=800"),
            "https://example.com/b.jpg?w=2400"
        );
    }

    #[test]
    fn full_size_leaves_other_sources_unchanged() {
        assert_eq!(full_size_source("photos/local.jpg"), "photos/local.jpg");
        assert_eq!(
            full_size_source("https://example.com/b.jpg?q=80&width=800"),
            "https://example.com/b.jpg?q=80&width=800"
        );
    }

    #[test]
    fn embedded_default_is_valid() {
        let portfolio = Portfolio::embedded_default();
        assert!(portfolio.slides.len() >= 2);
        assert!(!portfolio.photos.is_empty());
    }

    #[test]
    fn load_from_path_reads_file() {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("portfolio.toml");
        std::fs::write(&path, MINIMAL).expect("failed to write manifest");

        let portfolio = Portfolio::load_from_path(&path).expect("load failed");
        assert_eq!(portfolio.photos.len(), 2);
    }

    #[test]
    fn load_from_missing_path_is_manifest_error() {
        let err = Portfolio::load_from_path(Path::new("/nonexistent/portfolio.toml"));
        assert!(matches!(err, Err(Error::Manifest(_))));
    }
}
