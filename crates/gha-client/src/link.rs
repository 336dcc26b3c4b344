//! `Link` response-header parsing.

use reqwest::header::{HeaderMap, LINK};
use url::Url;

/// Extracts the next page number from a `Link` header, if any.
///
/// GitHub paginates list responses with RFC 5988 web links:
/// `<https://api.github.com/...?page=3>; rel="next", <...>; rel="last"`.
pub(crate) fn next_page(headers: &HeaderMap) -> Option<u32> {
    let header = headers.get(LINK)?.to_str().ok()?;

    for part in header.split(',') {
        let mut sections = part.split(';');
        let target = sections.next()?.trim();
        if !sections.any(|param| param.trim() == "rel=\"next\"") {
            continue;
        }

        let target = target.strip_prefix('<')?.strip_suffix('>')?;
        let url = Url::parse(target).ok()?;
        return url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(link: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_static(link));
        headers
    }

    #[test]
    fn test_next_page_from_github_style_header() {
        let headers = headers(
            "<https://api.github.com/repos/o/r/actions/runs?per_page=100&page=2>; rel=\"next\", \
             <https://api.github.com/repos/o/r/actions/runs?per_page=100&page=5>; rel=\"last\"",
        );

        assert_eq!(next_page(&headers), Some(2));
    }

    #[test]
    fn test_last_page_has_no_next_link() {
        let headers = headers(
            "<https://api.github.com/repos/o/r/actions/runs?page=1>; rel=\"prev\", \
             <https://api.github.com/repos/o/r/actions/runs?page=1>; rel=\"first\"",
        );

        assert_eq!(next_page(&headers), None);
    }

    #[test]
    fn test_missing_header_means_single_page() {
        assert_eq!(next_page(&HeaderMap::new()), None);
    }
}
