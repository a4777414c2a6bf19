/// One raw upstream news item, in either of the two observed stream shapes.
///
/// The wire layer maps each stream entry onto this union once; every field
/// is optional and the normalizer owns the fallback defaults. New stream
/// shapes become new variants here rather than scattered field lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawNewsItem {
    /// An entry with a nested `content` object (title, provider, click-through
    /// URL, and an RFC 3339 publication timestamp).
    Enriched {
        /// The headline, if present.
        title: Option<String>,
        /// The click-through link, if the nested URL chain is intact.
        url: Option<String>,
        /// The provider display name, if present.
        source: Option<String>,
        /// The raw `pubDate` string, if present.
        pub_date: Option<String>,
    },
    /// A flat entry with top-level `title`/`link`/`publisher` fields and no
    /// publication timestamp.
    Flat {
        /// The headline, if present.
        title: Option<String>,
        /// The article link, if present.
        url: Option<String>,
        /// The publisher name, if present.
        source: Option<String>,
    },
}
