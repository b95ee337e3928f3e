//! Base-path-aware URL resolution for folio.
//!
//! [`LinkResolver`] turns a page slug plus an optional language tag into a
//! URL under the site's base path. It performs no I/O and keeps no state
//! beyond borrowed configuration values, so it can be created per render
//! and called from any number of threads.
//!
//! An empty language tag is treated like an absent one.

mod path;
mod resolver;

pub use path::join_url;
pub use resolver::LinkResolver;
