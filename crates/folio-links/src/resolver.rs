//! Doc and page URL resolution against a [`SiteConfig`].

use folio_config::{LinkTarget, SiteConfig};

use crate::path::join_url;

/// Resolves slugs to base-path-aware URLs.
///
/// Borrows the base path and docs segment from the configuration; it holds
/// no other state, so every call with the same inputs returns the same URL.
#[derive(Clone, Copy, Debug)]
pub struct LinkResolver<'a> {
    base_url: &'a str,
    docs_url: Option<&'a str>,
    origin: Option<&'a str>,
}

impl<'a> LinkResolver<'a> {
    /// Create a resolver for `config`.
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            base_url: config.base_url(),
            docs_url: config.docs_url(),
            origin: config.url(),
        }
    }

    /// URL of a documentation page.
    ///
    /// `base_url` + `docs_url/` + `language/` + `slug`, where absent or empty
    /// segments are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use folio_config::SiteConfig;
    /// use folio_links::LinkResolver;
    ///
    /// let config = SiteConfig::from_toml_str(r#"
    /// title = "LeanProps"
    /// tagline = "Property-based testing"
    /// base_url = "/leanprops/"
    /// docs_url = "docs"
    /// "#).unwrap();
    /// let links = LinkResolver::new(&config);
    ///
    /// assert_eq!(links.doc_url("leanprops-core", Some("ja")), "/leanprops/docs/ja/leanprops-core");
    /// assert_eq!(links.doc_url("overview", None), "/leanprops/docs/overview");
    /// ```
    pub fn doc_url(&self, slug: &str, language: Option<&str>) -> String {
        join_url(
            self.base_url,
            &[self.docs_url.unwrap_or_default(), language.unwrap_or_default(), slug],
        )
    }

    /// URL of a non-documentation page.
    ///
    /// Same as [`doc_url`](Self::doc_url) without the docs segment.
    pub fn page_url(&self, slug: &str, language: Option<&str>) -> String {
        join_url(self.base_url, &[language.unwrap_or_default(), slug])
    }

    /// Resolve a configured link target.
    ///
    /// Doc targets go through [`doc_url`](Self::doc_url); external hrefs are
    /// returned unchanged.
    pub fn resolve(&self, target: &LinkTarget, language: Option<&str>) -> String {
        match target {
            LinkTarget::Doc(slug) => self.doc_url(slug, language),
            LinkTarget::External(href) => href.clone(),
        }
    }

    /// Absolute URL of a documentation page, for canonical and social tags.
    ///
    /// Returns `None` when neither `base_url` nor `url` carries an origin.
    pub fn absolute_doc_url(&self, slug: &str, language: Option<&str>) -> Option<String> {
        let path = self.doc_url(slug, language);
        if is_absolute(self.base_url) {
            return Some(path);
        }
        self.origin
            .map(|origin| format!("{}{path}", origin.trim_end_matches('/')))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}
