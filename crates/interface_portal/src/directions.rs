//! External directions links
//!
//! Pure string formatting: the provider path plus two percent-encoded
//! address segments. No network call is ever made.

/// Builds a directions URL from an origin to a destination address
pub fn directions_url(base_url: &str, from_address: &str, to_address: &str) -> String {
    format!(
        "{}/{}/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(from_address),
        urlencoding::encode(to_address),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://www.google.com/maps/dir";

    #[test]
    fn test_addresses_are_percent_encoded() {
        let url = directions_url(
            BASE,
            "45 Stirling Highway, Nedlands WA 6009",
            "197 Wellington Street, Perth WA 6000",
        );

        assert_eq!(
            url,
            "https://www.google.com/maps/dir/45%20Stirling%20Highway%2C%20Nedlands%20WA%206009/197%20Wellington%20Street%2C%20Perth%20WA%206000"
        );
    }

    #[test]
    fn test_trailing_slash_on_base_is_tolerated() {
        let url = directions_url("https://maps.example.com/dir/", "A", "B");
        assert_eq!(url, "https://maps.example.com/dir/A/B");
    }
}
