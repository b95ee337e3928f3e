//! Markup-agnostic render tree handed to the templating host.

use serde::Serialize;

/// `target` attribute for links that open in a new browsing context.
const NEW_CONTEXT_TARGET: &str = "_blank";

/// `rel` attribute that keeps the opened page from reaching back.
const SAFE_REL: &str = "noreferrer noopener";

/// Single navigable link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    /// Display label.
    pub label: String,
    /// Resolved URL (internal) or verbatim href (external).
    pub href: String,
    /// True for links leaving the site.
    pub external: bool,
    /// Suggested `target` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<&'static str>,
    /// Suggested `rel` attribute.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rel: Option<&'static str>,
}

impl Link {
    /// Link to a page of this site.
    pub(crate) fn internal(label: &str, href: String) -> Self {
        Self {
            label: label.to_owned(),
            href,
            external: false,
            target: None,
            rel: None,
        }
    }

    /// Link leaving the site, opened safely in a new context.
    pub(crate) fn external(label: &str, href: &str) -> Self {
        Self {
            label: label.to_owned(),
            href: href.to_owned(),
            external: true,
            target: Some(NEW_CONTEXT_TARGET),
            rel: Some(SAFE_REL),
        }
    }
}

/// Kind of footer sitemap section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    Docs,
    Modules,
    Social,
}

impl SectionKind {
    /// Heading shown above the section.
    pub fn heading(self) -> &'static str {
        match self {
            Self::Docs => "Docs",
            Self::Modules => "Modules",
            Self::Social => "Social",
        }
    }
}

/// Labeled group of links in the footer sitemap.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SitemapSection {
    pub kind: SectionKind,
    pub heading: String,
    pub links: Vec<Link>,
}

impl SitemapSection {
    /// Build a section, or `None` when there is nothing to list.
    pub(crate) fn non_empty(kind: SectionKind, links: Vec<Link>) -> Option<Self> {
        if links.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            heading: kind.heading().to_owned(),
            links,
        })
    }
}

/// Footer content: sitemap sections followed by the copyright line.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FooterTree {
    pub sections: Vec<SitemapSection>,
    pub copyright: String,
}

impl FooterTree {
    /// Section of the given kind, if rendered.
    pub fn section(&self, kind: SectionKind) -> Option<&SitemapSection> {
        self.sections.iter().find(|s| s.kind == kind)
    }
}
