//! Length-aware pagination
//!
//! A [`Page`] knows its items, the total number of matching records and the
//! request that produced it, which is enough to render a page-link control
//! without another round trip to the data source.

use serde::{Deserialize, Serialize};

/// Page size used when the caller does not ask for one
pub const DEFAULT_PER_PAGE: u32 = 15;

/// Upper bound on page size accepted from a request
pub const MAX_PER_PAGE: u32 = 100;

/// Pages shown on each side of the current page in the link window
pub const DEFAULT_ON_EACH_SIDE: u32 = 3;

/// A request for one page of results (1-based page numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    page: u32,
    per_page: u32,
}

impl PageRequest {
    /// Creates a request, clamping page to at least 1 and per_page to `1..=MAX_PER_PAGE`
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// First page with the default page size
    pub fn first() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Number of records to skip
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// Number of records to take
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// One entry of the page-link window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageElement {
    /// A numbered page link
    Page(u32),
    /// A `...` separator between ranges
    Gap,
}

/// One page of results plus the total count across all pages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    items: Vec<T>,
    total: u64,
    request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, request: PageRequest) -> Self {
        Self { items, total, request }
    }

    /// An empty first page
    pub fn empty(request: PageRequest) -> Self {
        Self::new(Vec::new(), 0, request)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn current_page(&self) -> u32 {
        self.request.page()
    }

    pub fn per_page(&self) -> u32 {
        self.request.per_page()
    }

    /// Last page number, never less than 1
    pub fn last_page(&self) -> u32 {
        let per_page = u64::from(self.request.per_page());
        let pages = self.total.div_ceil(per_page).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    pub fn on_first_page(&self) -> bool {
        self.current_page() <= 1
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page() < self.last_page()
    }

    /// True when there is anything to paginate between
    pub fn has_pages(&self) -> bool {
        self.current_page() != 1 || self.has_more_pages()
    }

    pub fn previous_page(&self) -> Option<u32> {
        (!self.on_first_page()).then(|| self.current_page() - 1)
    }

    pub fn next_page(&self) -> Option<u32> {
        self.has_more_pages().then(|| self.current_page() + 1)
    }

    /// 1-based position of the first item on this page across all pages
    pub fn first_item(&self) -> Option<u64> {
        (!self.items.is_empty()).then(|| self.request.offset() + 1)
    }

    /// 1-based position of the last item on this page across all pages
    pub fn last_item(&self) -> Option<u64> {
        self.first_item().map(|first| first + self.items.len() as u64 - 1)
    }

    /// Maps the items while keeping the paging information
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    /// Fallible [`Page::map`]; the first error aborts the whole page
    pub fn try_map<U, E, F>(self, f: F) -> Result<Page<U>, E>
    where
        F: FnMut(T) -> Result<U, E>,
    {
        Ok(Page {
            items: self.items.into_iter().map(f).collect::<Result<_, _>>()?,
            total: self.total,
            request: self.request,
        })
    }

    /// The page-number window to render between the previous/next controls
    ///
    /// Short page ranges are listed in full. Longer ones keep the first two
    /// and last two pages, a slider of `on_each_side` pages around the
    /// current one, and `Gap` markers where pages were skipped.
    pub fn elements(&self, on_each_side: u32) -> Vec<PageElement> {
        if !self.has_pages() {
            return Vec::new();
        }

        let current = i64::from(self.current_page());
        let last = i64::from(self.last_page());
        let side = i64::from(on_each_side);

        if last < side * 2 + 8 {
            return range(1, last);
        }

        let window = side + 4;
        let start = range(1, 2);
        let finish = range(last - 1, last);

        let mut elements = Vec::new();
        if current <= window {
            elements.extend(range(1, window + side));
            elements.push(PageElement::Gap);
            elements.extend(finish);
        } else if current > last - window {
            elements.extend(start);
            elements.push(PageElement::Gap);
            elements.extend(range(last - (window + (side - 1)), last));
        } else {
            elements.extend(start);
            elements.push(PageElement::Gap);
            elements.extend(range(current - side, current + side));
            elements.push(PageElement::Gap);
            elements.extend(finish);
        }
        elements
    }
}

fn range(from: i64, to: i64) -> Vec<PageElement> {
    (from.max(1)..=to)
        .filter_map(|page| u32::try_from(page).ok())
        .map(PageElement::Page)
        .collect()
}
