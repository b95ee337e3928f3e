//! Site configuration for folio.
//!
//! Parses `folio.toml` with serde and provides auto-discovery of the
//! config file in parent directories. A [`SiteConfig`] only exists in
//! resolved and validated form: it is built once before the first page
//! render and is read-only afterwards, so it can be shared across
//! rendering threads without locking.
//!
//! ## Resolution
//!
//! - `base_url` is normalized to a leading and a single trailing `/`
//! - `docs_url` keeps single inner `/` only and none at the ends, empty means no segment
//! - `{year}` in `copyright` is replaced by the current year
//! - every `header_links` entry must set exactly one of `doc` or `href`
//!
//! ## Environment Variable Expansion
//!
//! `url`, `base_url` and `docs_url` support `${VAR}` and `${VAR:-default}`.

mod expand;
mod links;

use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::Deserialize;

pub use links::{DocLink, HeaderLink, LinkTarget, SocialLink};

use links::HeaderLinkRaw;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

/// Placeholder in `copyright` replaced by the build year.
const YEAR_PLACEHOLDER: &str = "{year}";

/// Theme colors, opaque to folio and passed through to the rendering host.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Colors {
    /// Primary theme color (e.g., "#8E2555").
    pub primary: String,
    /// Secondary theme color.
    pub secondary: String,
}

/// Code highlighting settings.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Highlighter theme name.
    pub theme: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_owned(),
        }
    }
}

/// Placement of the in-page table of contents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnPageNav {
    /// Rendered in a separate column next to the content.
    #[default]
    Separate,
    /// Not rendered.
    None,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field (e.g., "`base_url`").
        field: String,
        /// Error message (e.g., "${`SITE_BASE`} not set").
        message: String,
    },
}

/// Site configuration as parsed from TOML.
#[derive(Debug, Deserialize)]
#[serde(default)]
struct SiteConfigRaw {
    title: String,
    tagline: String,
    url: Option<String>,
    base_url: String,
    docs_url: Option<String>,
    project_name: Option<String>,
    organization_name: Option<String>,
    custom_docs_path: Option<String>,
    header_links: Vec<HeaderLinkRaw>,
    footer_docs: Option<Vec<DocLink>>,
    module_links: Vec<DocLink>,
    social_links: Vec<SocialLink>,
    colors: Colors,
    copyright: String,
    highlight: HighlightConfig,
    scripts: Vec<String>,
    on_page_nav: OnPageNav,
    clean_url: bool,
    og_image: Option<String>,
    twitter_image: Option<String>,
}

impl Default for SiteConfigRaw {
    fn default() -> Self {
        Self {
            title: String::new(),
            tagline: String::new(),
            url: None,
            base_url: "/".to_owned(),
            docs_url: None,
            project_name: None,
            organization_name: None,
            custom_docs_path: None,
            header_links: Vec::new(),
            footer_docs: None,
            module_links: Vec::new(),
            social_links: Vec::new(),
            colors: Colors::default(),
            copyright: String::new(),
            highlight: HighlightConfig::default(),
            scripts: Vec::new(),
            on_page_nav: OnPageNav::default(),
            clean_url: true,
            og_image: None,
            twitter_image: None,
        }
    }
}

impl SiteConfigRaw {
    /// Expand env vars, normalize paths and check link shapes.
    fn resolve(self, year: i32) -> Result<SiteConfig, ConfigError> {
        let url = expand::expand_optional(self.url, "url")?;
        let base_url = expand::expand_env(&self.base_url, "base_url")?;
        let docs_url = expand::expand_optional(self.docs_url, "docs_url")?;

        let header_links = self
            .header_links
            .into_iter()
            .enumerate()
            .map(|(index, link)| link.resolve(index))
            .collect::<Result<Vec<_>, _>>()?;

        let config = SiteConfig {
            title: self.title,
            tagline: self.tagline,
            url: url.filter(|u| !u.is_empty()),
            base_url: normalize_base_url(&base_url),
            docs_url: docs_url.as_deref().and_then(normalize_segment),
            project_name: self.project_name,
            organization_name: self.organization_name,
            custom_docs_path: self.custom_docs_path,
            header_links,
            footer_docs: self.footer_docs.unwrap_or_else(links::default_footer_docs),
            module_links: self.module_links,
            social_links: self.social_links,
            colors: self.colors,
            copyright: self
                .copyright
                .replace(YEAR_PLACEHOLDER, &year.to_string()),
            highlight: self.highlight,
            scripts: self.scripts,
            on_page_nav: self.on_page_nav,
            clean_url: self.clean_url,
            og_image: self.og_image,
            twitter_image: self.twitter_image,
            config_path: None,
        };

        config.validate()?;
        tracing::debug!(
            base_url = %config.base_url,
            docs_url = config.docs_url.as_deref().unwrap_or(""),
            "Resolved site configuration"
        );
        Ok(config)
    }
}

/// Resolved site configuration.
///
/// Constructed once via [`SiteConfig::load`] or [`SiteConfig::from_toml_str`]
/// and read-only afterwards.
#[derive(Clone, Debug)]
pub struct SiteConfig {
    title: String,
    tagline: String,
    url: Option<String>,
    base_url: String,
    docs_url: Option<String>,
    project_name: Option<String>,
    organization_name: Option<String>,
    custom_docs_path: Option<String>,
    header_links: Vec<HeaderLink>,
    footer_docs: Vec<DocLink>,
    module_links: Vec<DocLink>,
    social_links: Vec<SocialLink>,
    colors: Colors,
    copyright: String,
    highlight: HighlightConfig,
    scripts: Vec<String>,
    on_page_nav: OnPageNav,
    clean_url: bool,
    og_image: Option<String>,
    twitter_image: Option<String>,
    config_path: Option<PathBuf>,
}

impl SiteConfig {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `folio.toml` in current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no file exists, or any parse,
    /// expansion or validation error.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match config_path {
            Some(path) if !path.exists() => {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Some(path) => path.to_path_buf(),
            None => Self::discover_from(&std::env::current_dir().unwrap_or_default())?,
        };

        Self::load_from_file(&path)
    }

    /// Parse configuration from TOML, stamping `{year}` with the current year.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Self::from_toml_str_with_year(content, chrono::Local::now().year())
    }

    /// Parse configuration from TOML with an explicit copyright year.
    ///
    /// # Errors
    ///
    /// Returns error if parsing, expansion or validation fails.
    pub fn from_toml_str_with_year(content: &str, year: i32) -> Result<Self, ConfigError> {
        let raw: SiteConfigRaw = toml::from_str(content)?;
        raw.resolve(year)
    }

    /// Search for config file in `start` and its parents.
    ///
    /// Reports `start/folio.toml` as missing when no file is found.
    fn discover_from(start: &Path) -> Result<PathBuf, ConfigError> {
        let mut current = start.to_path_buf();
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                tracing::debug!(path = %candidate.display(), "Discovered site configuration");
                return Ok(candidate);
            }
            if !current.pop() {
                return Err(ConfigError::NotFound(start.join(CONFIG_FILENAME)));
            }
        }
    }

    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config = Self::from_toml_str(&content)?;
        config.config_path = Some(path.to_path_buf());

        tracing::info!(
            path = %path.display(),
            title = %config.title,
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.title, "title")?;
        require_non_empty(&self.tagline, "tagline")?;
        if let Some(url) = &self.url {
            require_http_url(url, "url")?;
        }

        for (i, link) in self.header_links.iter().enumerate() {
            require_non_empty(&link.label, &format!("header_links[{i}].label"))?;
        }
        validate_doc_links(&self.footer_docs, "footer_docs")?;
        validate_doc_links(&self.module_links, "module_links")?;
        for (i, link) in self.social_links.iter().enumerate() {
            require_non_empty(&link.href, &format!("social_links[{i}].href"))?;
            require_non_empty(&link.label, &format!("social_links[{i}].label"))?;
        }

        Ok(())
    }

    /// Site title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Site tagline.
    pub fn tagline(&self) -> &str {
        &self.tagline
    }

    /// Absolute site origin (e.g., `https://example.github.io`).
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Path prefix for every page, always ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Extra path segment for documentation pages, without separators.
    pub fn docs_url(&self) -> Option<&str> {
        self.docs_url.as_deref()
    }

    pub fn project_name(&self) -> Option<&str> {
        self.project_name.as_deref()
    }

    pub fn organization_name(&self) -> Option<&str> {
        self.organization_name.as_deref()
    }

    /// Directory the rendered docs are read from, relative to the config file.
    pub fn custom_docs_path(&self) -> Option<&str> {
        self.custom_docs_path.as_deref()
    }

    /// Top navigation entries, in declaration order.
    pub fn header_links(&self) -> &[HeaderLink] {
        &self.header_links
    }

    /// Entries of the footer's "Docs" section.
    pub fn footer_docs(&self) -> &[DocLink] {
        &self.footer_docs
    }

    /// Entries of the footer's "Modules" section.
    pub fn module_links(&self) -> &[DocLink] {
        &self.module_links
    }

    /// Entries of the footer's "Social" section, possibly empty.
    pub fn social_links(&self) -> &[SocialLink] {
        &self.social_links
    }

    pub fn colors(&self) -> &Colors {
        &self.colors
    }

    /// Copyright line with the year already filled in.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    /// Extra script URLs included on every page.
    pub fn scripts(&self) -> &[String] {
        &self.scripts
    }

    pub fn on_page_nav(&self) -> OnPageNav {
        self.on_page_nav
    }

    /// Whether pages are served without an `.html` extension.
    pub fn clean_url(&self) -> bool {
        self.clean_url
    }

    pub fn og_image(&self) -> Option<&str> {
        self.og_image.as_deref()
    }

    pub fn twitter_image(&self) -> Option<&str> {
        self.twitter_image.as_deref()
    }

    /// Path to the config file (set when loaded from disk).
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }
}

/// Normalize a base path to a leading and exactly one trailing `/`.
///
/// Absolute `http(s)://` URLs keep their origin; only the path part is
/// normalized.
fn normalize_base_url(value: &str) -> String {
    let (origin, path) = split_origin(value.trim());
    let path = path.split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>();
    if path.is_empty() {
        format!("{origin}/")
    } else {
        format!("{origin}/{}/", path.join("/"))
    }
}

/// Split `https://host/path` into `("https://host", "/path")`.
fn split_origin(value: &str) -> (&str, &str) {
    for scheme in ["http://", "https://"] {
        if let Some(rest) = value.strip_prefix(scheme) {
            let end = rest.find('/').map_or(value.len(), |i| scheme.len() + i);
            return value.split_at(end);
        }
    }
    ("", value)
}

/// Collapse separators to single `/` with none at the ends; `None` when empty.
fn normalize_segment(value: &str) -> Option<String> {
    let parts = value.trim().split('/').filter(|s| !s.is_empty()).collect::<Vec<_>>();
    (!parts.is_empty()).then(|| parts.join("/"))
}

fn validate_doc_links(links: &[DocLink], field: &str) -> Result<(), ConfigError> {
    for (i, link) in links.iter().enumerate() {
        require_non_empty(&link.slug, &format!("{field}[{i}].slug"))?;
        require_non_empty(&link.label, &format!("{field}[{i}].label"))?;
    }
    Ok(())
}

/// Require a string field to contain more than whitespace.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    static_assertions::assert_impl_all!(SiteConfig: Send, Sync, Clone);

    const LEANPROPS_TOML: &str = r##"
title = "LeanProps"
tagline = "Simple enumerative property-based testing for Scala"
url = "https://makenowjust.github.com"
base_url = "/leanprops/"
project_name = "leanprops"
organization_name = "MakeNowJust"
custom_docs_path = "website/target/mdoc"
copyright = '(C) {year} TSUYUSATO "MakeNowJust" Kitsune'
on_page_nav = "separate"
og_image = "img/docusaurus.png"
twitter_image = "img/docusaurus.png"

[colors]
primary = "#8E2555"
secondary = "#5C203B"

[[header_links]]
doc = "overview"
label = "Docs"

[[header_links]]
href = "https://github.com/MakeNowJust/leanprops"
label = "GitHub"

[[module_links]]
slug = "leanprops-core"
label = "leanprops-core"

[[module_links]]
slug = "leanprops-magnolia"
label = "leanprops-magnolia"

[[social_links]]
href = "https://twitter.com/make_now_just"
label = "Twitter"

[[social_links]]
href = "https://github.com/MakeNowJust/leanprops"
label = "GitHub"
"##;

    const MINIMAL_TOML: &str = r#"
title = "Site"
tagline = "A site"
"#;

    /// Assert that parsing fails validation with expected substrings.
    fn assert_validation_error(toml: &str, expected_substrings: &[&str]) {
        let err = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap_err();
        assert!(
            matches!(err, ConfigError::Validation(_)),
            "Expected ConfigError::Validation, got {err:?}"
        );
        let msg = err.to_string();
        for s in expected_substrings {
            assert!(
                msg.contains(s),
                "Expected error to contain '{s}', got: {msg}"
            );
        }
    }

    #[test]
    fn test_parse_full_config() {
        let config = SiteConfig::from_toml_str_with_year(LEANPROPS_TOML, 2019).unwrap();

        assert_eq!(config.title(), "LeanProps");
        assert_eq!(config.url(), Some("https://makenowjust.github.com"));
        assert_eq!(config.base_url(), "/leanprops/");
        assert_eq!(config.docs_url(), None);
        assert_eq!(config.project_name(), Some("leanprops"));
        assert_eq!(config.organization_name(), Some("MakeNowJust"));
        assert_eq!(config.custom_docs_path(), Some("website/target/mdoc"));
        assert_eq!(
            config.copyright(),
            r#"(C) 2019 TSUYUSATO "MakeNowJust" Kitsune"#
        );
        assert_eq!(
            config.colors(),
            &Colors {
                primary: "#8E2555".to_owned(),
                secondary: "#5C203B".to_owned(),
            }
        );
        assert_eq!(
            config.header_links(),
            &[
                HeaderLink {
                    target: LinkTarget::Doc("overview".to_owned()),
                    label: "Docs".to_owned(),
                },
                HeaderLink {
                    target: LinkTarget::External(
                        "https://github.com/MakeNowJust/leanprops".to_owned()
                    ),
                    label: "GitHub".to_owned(),
                },
            ]
        );
        assert_eq!(config.module_links().len(), 2);
        assert_eq!(config.social_links().len(), 2);
        assert_eq!(config.og_image(), Some("img/docusaurus.png"));
        assert!(config.config_path().is_none());
    }

    #[test]
    fn test_parse_minimal_config_defaults() {
        let config = SiteConfig::from_toml_str_with_year(MINIMAL_TOML, 2024).unwrap();

        assert_eq!(config.base_url(), "/");
        assert_eq!(config.docs_url(), None);
        assert_eq!(config.url(), None);
        assert!(config.header_links().is_empty());
        assert!(config.module_links().is_empty());
        assert!(config.social_links().is_empty());
        assert_eq!(config.footer_docs(), links::default_footer_docs().as_slice());
        assert_eq!(config.highlight().theme, "default");
        assert_eq!(config.on_page_nav(), OnPageNav::Separate);
        assert!(config.clean_url());
        assert!(config.scripts().is_empty());
        assert_eq!(config.copyright(), "");
    }

    #[test]
    fn test_footer_docs_override() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[footer_docs]]
slug = "getting-started"
label = "Getting Started"

[[footer_docs]]
slug = "api"
label = "API"

[[footer_docs]]
slug = "faq"
label = "FAQ"
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        let slugs: Vec<_> = config.footer_docs().iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, ["getting-started", "api", "faq"]);
    }

    #[test]
    fn test_empty_footer_docs_stays_empty() {
        let toml = r#"
title = "Site"
tagline = "A site"
footer_docs = []
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        assert!(config.footer_docs().is_empty());
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("/leanprops/"), "/leanprops/");
        assert_eq!(normalize_base_url("/leanprops"), "/leanprops/");
        assert_eq!(normalize_base_url("leanprops"), "/leanprops/");
        assert_eq!(normalize_base_url("/a//b///"), "/a/b/");
        assert_eq!(normalize_base_url(""), "/");
        assert_eq!(normalize_base_url("/"), "/");
        assert_eq!(normalize_base_url("//"), "/");
    }

    #[test]
    fn test_normalize_base_url_keeps_origin() {
        assert_eq!(
            normalize_base_url("https://example.com/docs"),
            "https://example.com/docs/"
        );
        assert_eq!(normalize_base_url("http://example.com"), "http://example.com/");
    }

    #[test]
    fn test_base_url_normalized_on_load() {
        let toml = r#"
title = "Site"
tagline = "A site"
base_url = "leanprops"
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        assert_eq!(config.base_url(), "/leanprops/");
    }

    #[test]
    fn test_docs_url_normalized() {
        assert_eq!(normalize_segment("docs"), Some("docs".to_owned()));
        assert_eq!(normalize_segment("/docs/"), Some("docs".to_owned()));
        assert_eq!(normalize_segment(""), None);
        assert_eq!(normalize_segment("/"), None);
        assert_eq!(normalize_segment("docs//api"), Some("docs/api".to_owned()));
        assert_eq!(normalize_segment("//docs///api/"), Some("docs/api".to_owned()));
    }

    #[test]
    fn test_docs_url_inner_separators_collapsed_on_load() {
        let toml = r#"
title = "Site"
tagline = "A site"
base_url = "/site/"
docs_url = "docs//api"
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        assert_eq!(config.docs_url(), Some("docs/api"));
    }

    #[test]
    fn test_empty_docs_url_is_absent() {
        let toml = r#"
title = "Site"
tagline = "A site"
docs_url = ""
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        assert_eq!(config.docs_url(), None);
    }

    #[test]
    fn test_copyright_year_replaced_everywhere() {
        let toml = r#"
title = "Site"
tagline = "A site"
copyright = "{year} Foo, since {year}"
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2031).unwrap();
        assert_eq!(config.copyright(), "2031 Foo, since 2031");
    }

    #[test]
    fn test_copyright_uses_current_year() {
        let toml = r#"
title = "Site"
tagline = "A site"
copyright = "(C) {year}"
"#;
        let config = SiteConfig::from_toml_str(toml).unwrap();
        assert!(!config.copyright().contains(YEAR_PLACEHOLDER));
        assert_eq!(
            config.copyright(),
            format!("(C) {}", chrono::Local::now().year())
        );
    }

    #[test]
    fn test_validate_title_empty() {
        assert_validation_error("tagline = \"x\"", &["title", "empty"]);
    }

    #[test]
    fn test_validate_title_whitespace_only() {
        assert_validation_error("title = \"  \"\ntagline = \"x\"", &["title", "empty"]);
    }

    #[test]
    fn test_validate_tagline_whitespace_only() {
        assert_validation_error("title = \"x\"\ntagline = \"\t \"", &["tagline", "empty"]);
    }

    #[test]
    fn test_validate_tagline_empty() {
        assert_validation_error("title = \"x\"", &["tagline", "empty"]);
    }

    #[test]
    fn test_validate_url_scheme() {
        let toml = r#"
title = "Site"
tagline = "A site"
url = "ftp://example.com"
"#;
        assert_validation_error(toml, &["url", "http"]);
    }

    #[test]
    fn test_validate_header_link_both_targets() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[header_links]]
doc = "overview"
href = "https://example.com"
label = "Docs"
"#;
        assert_validation_error(toml, &["header_links[0]", "both"]);
    }

    #[test]
    fn test_validate_header_link_no_target() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[header_links]]
doc = "overview"
label = "Docs"

[[header_links]]
label = "Nowhere"
"#;
        assert_validation_error(toml, &["header_links[1]"]);
    }

    #[test]
    fn test_validate_header_link_label() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[header_links]]
doc = "overview"
"#;
        assert_validation_error(toml, &["header_links[0].label"]);
    }

    #[test]
    fn test_validate_module_slug_empty() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[module_links]]
slug = ""
label = "core"
"#;
        assert_validation_error(toml, &["module_links[0].slug"]);
    }

    #[test]
    fn test_validate_social_href_empty() {
        let toml = r#"
title = "Site"
tagline = "A site"

[[social_links]]
href = ""
label = "Twitter"
"#;
        assert_validation_error(toml, &["social_links[0].href"]);
    }

    #[test]
    fn test_parse_error() {
        let err = SiteConfig::from_toml_str_with_year("title = ", 2024).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_expand_env_in_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("FOLIO_TEST_SITE_BASE", "/preview/leanprops");
        }

        let toml = r#"
title = "Site"
tagline = "A site"
base_url = "${FOLIO_TEST_SITE_BASE}"
docs_url = "${FOLIO_TEST_SITE_DOCS_UNSET:-docs}"
"#;
        let config = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap();
        assert_eq!(config.base_url(), "/preview/leanprops/");
        assert_eq!(config.docs_url(), Some("docs"));

        unsafe {
            std::env::remove_var("FOLIO_TEST_SITE_BASE");
        }
    }

    #[test]
    fn test_expand_env_missing_var() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::remove_var("FOLIO_TEST_MISSING_ORIGIN");
        }

        let toml = r#"
title = "Site"
tagline = "A site"
url = "${FOLIO_TEST_MISSING_ORIGIN}"
"#;
        let err = SiteConfig::from_toml_str_with_year(toml, 2024).unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("FOLIO_TEST_MISSING_ORIGIN"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, LEANPROPS_TOML).unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.title(), "LeanProps");
        assert_eq!(config.config_path(), Some(path.as_path()));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");

        let err = SiteConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == path));
    }

    #[test]
    fn test_discover_reports_start_dir_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let start = dir.path().join("site");

        let err = SiteConfig::discover_from(&start).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(p) if p == start.join(CONFIG_FILENAME)));
    }

    #[test]
    fn test_discover_finds_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("website").join("pages");
        std::fs::create_dir_all(&nested).unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, MINIMAL_TOML).unwrap();

        assert_eq!(SiteConfig::discover_from(&nested).unwrap(), path);
    }

    #[test]
    fn test_load_invalid_file_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILENAME);
        std::fs::write(&path, "title = \"Site\"\n").unwrap();

        let err = SiteConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }
}
