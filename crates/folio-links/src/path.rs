//! URL path joining.

/// Append `segments` to `base`, separated by exactly one `/`.
///
/// `base` must already end with `/`. Every segment is trimmed of leading
/// and trailing separators and skipped when empty. Intermediate segments are
/// followed by `/`; the last one is appended bare, so an empty last segment
/// leaves the URL ending in a separator.
///
/// # Examples
///
/// ```
/// use folio_links::join_url;
///
/// assert_eq!(join_url("/site/", &["docs", "ja", "intro"]), "/site/docs/ja/intro");
/// assert_eq!(join_url("/site/", &["/docs/", "", "/intro"]), "/site/docs/intro");
/// assert_eq!(join_url("/site/", &["docs", ""]), "/site/docs/");
/// ```
pub fn join_url(base: &str, segments: &[&str]) -> String {
    let capacity = base.len() + segments.iter().map(|s| s.len() + 1).sum::<usize>();
    let mut url = String::with_capacity(capacity);
    url.push_str(base);

    if let Some((last, dirs)) = segments.split_last() {
        for dir in dirs {
            let dir = dir.trim_matches('/');
            if !dir.is_empty() {
                url.push_str(dir);
                url.push('/');
            }
        }
        url.push_str(last.trim_matches('/'));
    }

    url
}
