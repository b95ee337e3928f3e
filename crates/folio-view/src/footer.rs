//! Footer rendering.

use folio_config::{DocLink, SiteConfig};
use folio_links::LinkResolver;

use crate::tree::{FooterTree, Link, SectionKind, SitemapSection};

/// Build the footer for one page render.
///
/// Sections appear in the order Docs, Modules, Social; a section whose
/// configured list is empty is left out. Doc links resolve through
/// [`LinkResolver::doc_url`], social links are passed through as external.
pub fn render_footer(config: &SiteConfig, language: Option<&str>) -> FooterTree {
    let links = LinkResolver::new(config);

    let doc_links = |entries: &[DocLink]| -> Vec<Link> {
        entries
            .iter()
            .map(|entry| Link::internal(&entry.label, links.doc_url(&entry.slug, language)))
            .collect()
    };

    let social = config
        .social_links()
        .iter()
        .map(|entry| Link::external(&entry.label, &entry.href))
        .collect();

    let sections: Vec<SitemapSection> = [
        SitemapSection::non_empty(SectionKind::Docs, doc_links(config.footer_docs())),
        SitemapSection::non_empty(SectionKind::Modules, doc_links(config.module_links())),
        SitemapSection::non_empty(SectionKind::Social, social),
    ]
    .into_iter()
    .flatten()
    .collect();

    tracing::debug!(
        sections = sections.len(),
        language = language.unwrap_or_default(),
        "Rendered footer"
    );

    FooterTree {
        sections,
        copyright: config.copyright().to_owned(),
    }
}
