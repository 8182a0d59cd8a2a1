//! Page content model
//!
//! The homepage is data: nav links, sections, slides, and tab panes,
//! deserialized from TOML. A default page ships embedded in the binary;
//! users can point at their own file with `--page` or `page.path` in the
//! config. All id lookups are fallible so a dangling anchor degrades to a
//! logged no-op instead of a crash.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default page content embedded at compile time
pub const DEFAULT_PAGE: &str = include_str!("../defaults/page.toml");

/// The whole page: title, nav bar links, and an ordered list of sections
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// An in-page navigation link: a label and the section id it jumps to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub target: String,
}

/// Fields shared by every section kind
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionBase {
    /// Anchor id nav links resolve against
    pub id: String,
    /// Whether the section scroll-fades in (default) or is always visible
    #[serde(default = "default_fade")]
    pub fade: bool,
}

/// Section definition - enum with kind-specific variants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Section {
    /// Top-of-page banner with the typed tagline
    #[serde(rename = "hero")]
    Hero {
        #[serde(flatten)]
        base: SectionBase,
        heading: String,
        #[serde(default)]
        tagline: String,
    },

    /// Plain heading-plus-paragraphs prose
    #[serde(rename = "text")]
    Text {
        #[serde(flatten)]
        base: SectionBase,
        heading: String,
        #[serde(default)]
        paragraphs: Vec<String>,
    },

    /// Tab buttons switching between content panes
    #[serde(rename = "tabs")]
    Tabs {
        #[serde(flatten)]
        base: SectionBase,
        heading: String,
        #[serde(default)]
        buttons: Vec<TabButton>,
        #[serde(default)]
        panes: Vec<TabPane>,
    },

    /// Slide carousel with prev/next controls
    #[serde(rename = "gallery")]
    Gallery {
        #[serde(flatten)]
        base: SectionBase,
        heading: String,
        #[serde(default)]
        slides: Vec<Slide>,
    },

    /// Blurb plus the contact form
    #[serde(rename = "contact")]
    Contact {
        #[serde(flatten)]
        base: SectionBase,
        heading: String,
        #[serde(default)]
        blurb: String,
    },
}

/// A tab button and the pane key it declares as its target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabButton {
    pub label: String,
    pub target: String,
}

/// A tab content pane, addressed by key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabPane {
    pub key: String,
    #[serde(default)]
    pub lines: Vec<String>,
}

/// One gallery slide: a title, ASCII art, and a caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub art: Vec<String>,
    #[serde(default)]
    pub caption: String,
}

fn default_title() -> String {
    "BababoiOS".to_string()
}

fn default_fade() -> bool {
    true
}

impl Section {
    pub fn base(&self) -> &SectionBase {
        match self {
            Section::Hero { base, .. }
            | Section::Text { base, .. }
            | Section::Tabs { base, .. }
            | Section::Gallery { base, .. }
            | Section::Contact { base, .. } => base,
        }
    }

    pub fn id(&self) -> &str {
        &self.base().id
    }

    /// Kind name as written in the TOML, for log and lint messages
    pub fn kind_name(&self) -> &'static str {
        match self {
            Section::Hero { .. } => "hero",
            Section::Text { .. } => "text",
            Section::Tabs { .. } => "tabs",
            Section::Gallery { .. } => "gallery",
            Section::Contact { .. } => "contact",
        }
    }
}

impl Page {
    /// Load page content from a file, or the embedded default when `path`
    /// is None
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let contents = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read page file {:?}", path))?;
                Self::from_toml(&contents)
                    .with_context(|| format!("Failed to parse page file {:?}", path))
            }
            None => Self::from_toml(DEFAULT_PAGE).context("Failed to parse embedded default page"),
        }
    }

    pub fn from_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Look up a section by anchor id. Missing ids are a normal outcome
    /// the caller handles, not an error.
    pub fn section(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id() == id)
    }

    /// Position of a section in page order
    pub fn section_index(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|s| s.id() == id)
    }

    /// Tagline of the first hero section, if the page has one
    pub fn tagline(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            Section::Hero { tagline, .. } => Some(tagline.as_str()),
            _ => None,
        })
    }

    /// Slides of the first gallery section; empty when the page has none
    pub fn slides(&self) -> &[Slide] {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Gallery { slides, .. } => Some(slides.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// Buttons and panes of the first tabs section; empty when absent
    pub fn tabs(&self) -> (&[TabButton], &[TabPane]) {
        self.sections
            .iter()
            .find_map(|s| match s {
                Section::Tabs { buttons, panes, .. } => {
                    Some((buttons.as_slice(), panes.as_slice()))
                }
                _ => None,
            })
            .unwrap_or((&[], &[]))
    }

    /// Id of the first contact section, for the form focus shortcut
    pub fn contact_id(&self) -> Option<&str> {
        self.sections.iter().find_map(|s| match s {
            Section::Contact { base, .. } => Some(base.id.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_page_parses() {
        let page = Page::load(None).unwrap();
        assert_eq!(page.title, "BababoiOS");
        assert!(!page.nav.is_empty());
        assert!(!page.sections.is_empty());
    }

    #[test]
    fn test_default_page_anchors_resolve() {
        let page = Page::load(None).unwrap();
        for link in &page.nav {
            assert!(
                page.section(&link.target).is_some(),
                "nav link '{}' should resolve",
                link.label
            );
        }
    }

    #[test]
    fn test_default_page_tagline() {
        let page = Page::load(None).unwrap();
        assert_eq!(
            page.tagline(),
            Some("Welcome to BababoiOS — Fast, Secure, and Open.")
        );
    }

    #[test]
    fn test_default_page_tabs_match_panes() {
        let page = Page::load(None).unwrap();
        let (buttons, panes) = page.tabs();
        assert!(!buttons.is_empty());
        for button in buttons {
            assert!(
                panes.iter().any(|p| p.key == button.target),
                "tab '{}' should have a pane",
                button.label
            );
        }
    }

    #[test]
    fn test_default_page_has_slides() {
        let page = Page::load(None).unwrap();
        assert!(page.slides().len() >= 2);
    }

    #[test]
    fn test_missing_section_is_none() {
        let page = Page::load(None).unwrap();
        assert!(page.section("no-such-section").is_none());
        assert!(page.section_index("no-such-section").is_none());
    }

    #[test]
    fn test_section_kinds_parse() {
        let page = Page::from_toml(
            r#"
            title = "Test"

            [[nav]]
            label = "Top"
            target = "top"

            [[sections]]
            kind = "hero"
            id = "top"
            heading = "Hi"
            tagline = "typed"

            [[sections]]
            kind = "text"
            id = "body"
            fade = false
            heading = "Body"
            paragraphs = ["one", "two"]
            "#,
        )
        .unwrap();

        assert_eq!(page.sections.len(), 2);
        assert_eq!(page.sections[0].kind_name(), "hero");
        assert!(page.sections[0].base().fade);
        assert!(!page.sections[1].base().fade);
        assert_eq!(page.tagline(), Some("typed"));
        assert_eq!(page.contact_id(), None);
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result = Page::from_toml(
            r#"
            [[sections]]
            kind = "video"
            id = "x"
            heading = "X"
            "#,
        );
        assert!(result.is_err());
    }
}
