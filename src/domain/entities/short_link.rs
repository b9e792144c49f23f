//! ShortLink entity: one alias mapped to one target URL.

/// A stored alias → URL mapping.
///
/// `alias` is unique among live links and never changes after creation.
/// Several aliases may point at the same `url`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let link = ShortLink::new(7, "promo1".to_string(), "https://a.com".to_string());

        assert_eq!(link.id, 7);
        assert_eq!(link.alias, "promo1");
        assert_eq!(link.url, "https://a.com");
    }
}
