//! Client core for the Opoint article search API.
//!
//! [`query`] compiles a term and field scopes into the provider's query string,
//! [`opoint`] sends it, and [`normalize`] turns whatever document schema comes
//! back into canonical [`normalize::Document`]s for [`format`] to render.

pub mod format;
pub mod normalize;
pub mod opoint;
pub mod query;
pub mod search;
pub mod text;

pub const USER_AGENT: &str = concat!("article-explorer/", env!("CARGO_PKG_VERSION"));
