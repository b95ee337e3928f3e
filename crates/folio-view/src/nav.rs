//! Header navigation links for the host's top bar.

use folio_config::{LinkTarget, SiteConfig};
use folio_links::LinkResolver;

use crate::tree::Link;

/// Resolve the configured header links, in order.
pub fn render_header_nav(config: &SiteConfig, language: Option<&str>) -> Vec<Link> {
    let links = LinkResolver::new(config);

    config
        .header_links()
        .iter()
        .map(|entry| match &entry.target {
            LinkTarget::Doc(slug) => Link::internal(&entry.label, links.doc_url(slug, language)),
            LinkTarget::External(href) => Link::external(&entry.label, href),
        })
        .collect()
}
