use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const PAGE_SIZE_OPTIONS: &[usize] = &[5, 10, 20, 50];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize, total_pages: usize) {
        self.page = page.clamp(1, total_pages.max(1));
    }

    pub fn previous(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    pub fn next(&mut self, total_pages: usize) {
        if self.page < total_pages {
            self.page += 1;
        }
    }
}

/// Page metadata returned by server-paginated endpoints under `meta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    #[serde(default)]
    pub total_pages: usize,
    #[serde(default)]
    pub total_items: usize,
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Records of the 1-based `page`; empty past the end.
pub fn slice_page<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= records.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    Page(usize),
    Ellipsis,
}

const FULL_RANGE_LIMIT: usize = 5;

/// Condensed page list for the page controls. Up to five pages are listed
/// in full. Beyond that the first and last page are always shown, with the
/// first four pages near the start, the last four near the end, and the
/// current page with its neighbours in between.
pub fn page_items(current: usize, total: usize) -> Vec<PageItem> {
    if total <= FULL_RANGE_LIMIT {
        return (1..=total).map(PageItem::Page).collect();
    }

    let mut items = Vec::with_capacity(7);
    if current <= 3 {
        items.extend((1..=4).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    } else if current >= total - 2 {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((total - 3..=total).map(PageItem::Page));
    } else {
        items.push(PageItem::Page(1));
        items.push(PageItem::Ellipsis);
        items.extend((current - 1..=current + 1).map(PageItem::Page));
        items.push(PageItem::Ellipsis);
        items.push(PageItem::Page(total));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::PageItem::{Ellipsis, Page};

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn slices_cover_list_without_gaps() {
        let records: Vec<u32> = (1..=23).collect();
        let pages = total_pages(records.len(), 5);
        let stitched: Vec<u32> = (1..=pages)
            .flat_map(|page| slice_page(&records, page, 5).to_vec())
            .collect();
        assert_eq!(stitched, records);
        assert_eq!(slice_page(&records, 5, 5), &[21, 22, 23]);
        assert!(slice_page(&records, 6, 5).is_empty());
    }

    #[test]
    fn short_ranges_are_listed_in_full() {
        assert_eq!(
            page_items(2, 5),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert!(page_items(1, 0).is_empty());
    }

    #[test]
    fn first_page_of_ten() {
        assert_eq!(
            page_items(1, 10),
            vec![Page(1), Page(2), Page(3), Page(4), Ellipsis, Page(10)]
        );
    }

    #[test]
    fn middle_page_of_ten() {
        assert_eq!(
            page_items(5, 10),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn last_page_of_ten() {
        assert_eq!(
            page_items(10, 10),
            vec![Page(1), Ellipsis, Page(7), Page(8), Page(9), Page(10)]
        );
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut pagination = Pagination::new(10);
        pagination.previous();
        assert_eq!(pagination.page, 1);
        pagination.next(2);
        pagination.next(2);
        assert_eq!(pagination.page, 2);
        pagination.go_to(40, 3);
        assert_eq!(pagination.page, 3);
        pagination.set_page_size(20);
        assert_eq!(pagination, Pagination { page: 1, page_size: 20 });
    }

    #[test]
    fn page_meta_reads_camel_case() {
        let meta: PageMeta =
            serde_json::from_value(serde_json::json!({"totalPages": 4, "totalItems": 37}))
                .unwrap();
        assert_eq!(meta.total_pages, 4);
        assert_eq!(meta.total_items, 37);
    }
}
