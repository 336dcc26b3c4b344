//! Draining a cursor-paginated list endpoint into one ordered collection.

use std::future::Future;

/// Number of items requested per page. Fixed; only the total limit of a
/// listing is configurable.
pub const PER_PAGE: u32 = 100;

/// Options for requesting one page from a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Page number to fetch, starting at 1.
    pub page: u32,
    /// Number of items per page.
    pub per_page: u32,
}

impl PageRequest {
    /// Request for the first page of a listing.
    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: PER_PAGE,
        }
    }
}

/// One page of results plus the cursor for the page after it.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// Items in the order the endpoint returned them.
    pub items: Vec<T>,
    /// Page number of the page after this one, `None` once the listing is
    /// exhausted.
    pub next_page: Option<u32>,
}

/// Fetches every page of a listing and returns the concatenated items.
///
/// `fetch` is called once per page, starting with the first page; it returns
/// that page's items plus the cursor of the page after it. Items accumulate
/// in arrival order, duplicates included. A `limit` greater than zero caps
/// the result at exactly `limit` items, dropping any excess from the page
/// that crosses the threshold; zero means fetch until the source reports no
/// next page. The first fetch error aborts the whole listing with that error
/// and the pages already fetched are discarded.
///
/// An empty page with a next cursor is followed, not treated as the end.
/// Termination relies on the source eventually reporting no next page (or
/// the limit being reached); a source that hands out cursors forever would
/// keep this loop running forever.
pub async fn fetch_all<T, E, F, Fut>(mut fetch: F, limit: usize) -> Result<Vec<T>, E>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>, E>>,
{
    let mut request = PageRequest::first();
    let mut items = Vec::new();

    loop {
        let page = fetch(request).await?;
        items.extend(page.items);

        if limit > 0 && items.len() >= limit {
            items.truncate(limit);
            break;
        }

        match page.next_page {
            Some(next) => request.page = next,
            None => break,
        }
    }

    Ok(items)
}
