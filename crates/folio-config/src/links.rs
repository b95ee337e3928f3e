//! Navigation entries declared in the site configuration.

use serde::Deserialize;

use crate::ConfigError;

/// Reference to a documentation page by slug.
///
/// Used for the footer's "Docs" and "Modules" sections.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct DocLink {
    /// Page slug (e.g., "overview").
    pub slug: String,
    /// Display label.
    pub label: String,
}

impl DocLink {
    pub(crate) fn new(slug: &str, label: &str) -> Self {
        Self {
            slug: slug.to_owned(),
            label: label.to_owned(),
        }
    }
}

/// Link to an external profile or repository.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
    /// Absolute URL, rendered verbatim.
    pub href: String,
    /// Display label.
    pub label: String,
}

/// Where a header link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkTarget {
    /// Internal documentation page, resolved against the base path.
    Doc(String),
    /// External URL, passed through unchanged.
    External(String),
}

/// Validated header navigation entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderLink {
    pub target: LinkTarget,
    pub label: String,
}

/// Header link as written in TOML, before the shape check.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct HeaderLinkRaw {
    doc: Option<String>,
    href: Option<String>,
    label: String,
}

impl HeaderLinkRaw {
    /// Check that exactly one of `doc` or `href` is set.
    ///
    /// Empty strings count as unset.
    pub(crate) fn resolve(self, index: usize) -> Result<HeaderLink, ConfigError> {
        let doc = self.doc.filter(|s| !s.is_empty());
        let href = self.href.filter(|s| !s.is_empty());

        let target = match (doc, href) {
            (Some(doc), None) => LinkTarget::Doc(doc),
            (None, Some(href)) => LinkTarget::External(href),
            (Some(_), Some(_)) => {
                return Err(ConfigError::Validation(format!(
                    "header_links[{index}] sets both `doc` and `href`, expected exactly one"
                )));
            }
            (None, None) => {
                return Err(ConfigError::Validation(format!(
                    "header_links[{index}] must set either `doc` or `href`"
                )));
            }
        };

        Ok(HeaderLink {
            target,
            label: self.label,
        })
    }
}

/// Footer "Docs" entries used when the configuration declares none.
pub(crate) fn default_footer_docs() -> Vec<DocLink> {
    vec![
        DocLink::new("overview", "Overview"),
        DocLink::new("example", "One-Minute Example"),
    ]
}
