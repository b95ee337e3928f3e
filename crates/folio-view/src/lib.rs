//! Footer and navigation render trees for folio.
//!
//! This crate provides:
//! - [`render_footer`]: sitemap sections and copyright for the page footer
//! - [`render_header_nav`]: resolved links for the top navigation bar
//!
//! Output is a plain [`FooterTree`] / [`Link`] structure (serializable with
//! serde) that the templating host turns into markup.
//!
//! # Quick Start
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use folio_config::SiteConfig;
//! use folio_view::{SectionKind, render_footer};
//!
//! let config = SiteConfig::from_toml_str(r#"
//! title = "LeanProps"
//! tagline = "Simple enumerative property-based testing for Scala"
//! base_url = "/leanprops/"
//!
//! [[module_links]]
//! slug = "leanprops-core"
//! label = "leanprops-core"
//! "#)?;
//!
//! let footer = render_footer(&config, None);
//! let modules = footer.section(SectionKind::Modules).unwrap();
//! assert_eq!(modules.links[0].href, "/leanprops/leanprops-core");
//! assert!(footer.section(SectionKind::Social).is_none());
//! # Ok(())
//! # }
//! ```

mod footer;
mod nav;
mod tree;

pub use footer::render_footer;
pub use nav::render_header_nav;
pub use tree::{FooterTree, Link, SectionKind, SitemapSection};
