//! Outbound retailer search links.
//!
//! These are opaque search-URL templates, not an integration contract: the
//! product name is URL-encoded and spliced into each retailer's site search.
//! Nothing here talks to a retailer.

use std::collections::BTreeMap;

/// Retailer key → search-URL prefix. The product name is appended encoded.
const TEMPLATES: [(&str, &str); 8] = [
    ("amazon", "https://www.amazon.in/s?k="),
    ("amante", "https://www.amantelingerie.in/search?q="),
    ("clovia", "https://www.clovia.com/search/?q="),
    ("enamor", "https://www.enamor.co.in/search?q="),
    ("flipkart", "https://www.flipkart.com/search?q="),
    ("myntra", "https://www.myntra.com/search?q="),
    ("shyaway", "https://www.shyaway.com/catalogsearch/result/?q="),
    ("zivame", "https://www.zivame.com/search?q="),
];

/// Builds the full retailer-key → URL map for one product name.
///
/// `BTreeMap` keeps the JSON object ordering stable across responses.
pub fn search_links(product_name: &str) -> BTreeMap<&'static str, String> {
    let query = urlencoding::encode(product_name);
    TEMPLATES
        .iter()
        .map(|(key, prefix)| (*key, format!("{prefix}{query}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_retailer_is_present() {
        let links = search_links("Comfort 80B bra");
        let keys: Vec<_> = links.keys().copied().collect();
        assert_eq!(
            keys,
            ["amante", "amazon", "clovia", "enamor", "flipkart", "myntra", "shyaway", "zivame"]
        );
    }

    #[test]
    fn product_name_is_url_encoded() {
        let links = search_links("Comfort 80B Daily / Casual bra");
        let amazon = &links["amazon"];
        assert_eq!(
            amazon,
            "https://www.amazon.in/s?k=Comfort%2080B%20Daily%20%2F%20Casual%20bra"
        );
        // No raw spaces or slashes survive in the query.
        let query = amazon.split_once("?k=").unwrap().1;
        assert!(!query.contains(' ') && !query.contains('/'));
    }
}
