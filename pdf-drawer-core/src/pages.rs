//! Page selection lists such as `3,1` or `1-3,5`
//!
//! Page numbers are 1-based, as written by users.

use crate::error::{DrawError, Result};
use std::str::FromStr;

/// One comma-separated item of a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSpec {
    /// Every page of the document
    All,
    /// A single page
    Single(u32),
    /// Pages `start..=end`
    Range(u32, u32),
}

/// An ordered page selection; items may repeat or overlap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    items: Vec<PageSpec>,
}

impl PageSelection {
    /// Parse a selection
    ///
    /// Examples:
    /// - "all" -> every page in document order
    /// - "3,1" -> page 3 then page 1
    /// - "1-3,5" -> pages 1, 2, 3 and 5
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(DrawError::InvalidPageSelection(
                "No pages selected".to_string(),
            ));
        }

        let items = s.split(',').map(parse_item).collect::<Result<Vec<_>>>()?;
        Ok(Self { items })
    }

    pub fn from_pages(pages: impl IntoIterator<Item = u32>) -> Self {
        Self {
            items: pages.into_iter().map(PageSpec::Single).collect(),
        }
    }

    pub fn items(&self) -> &[PageSpec] {
        &self.items
    }

    /// Expand into page numbers, checking each against `page_count`
    pub fn page_numbers(&self, page_count: usize) -> Result<Vec<u32>> {
        let mut pages = Vec::new();
        for item in &self.items {
            match *item {
                PageSpec::All => pages.extend((1..=page_count).filter_map(|p| u32::try_from(p).ok())),
                PageSpec::Single(page) => pages.push(check(page, page_count)?),
                PageSpec::Range(start, end) => {
                    check(start, page_count)?;
                    check(end, page_count)?;
                    pages.extend(start..=end);
                }
            }
        }

        if pages.is_empty() {
            return Err(DrawError::InvalidPageSelection(
                "No pages selected".to_string(),
            ));
        }
        Ok(pages)
    }
}

impl FromStr for PageSelection {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_item(item: &str) -> Result<PageSpec> {
    let item = item.trim();

    if item.eq_ignore_ascii_case("all") {
        return Ok(PageSpec::All);
    }

    if let Some((start, end)) = item.split_once('-') {
        let start = parse_page(start)?;
        let end = parse_page(end)?;
        if start > end {
            return Err(DrawError::InvalidPageSelection(format!(
                "Start {start} is greater than end {end}"
            )));
        }
        return Ok(PageSpec::Range(start, end));
    }

    parse_page(item).map(PageSpec::Single)
}

fn parse_page(s: &str) -> Result<u32> {
    let s = s.trim();
    let page = s
        .parse::<u32>()
        .map_err(|_| DrawError::InvalidPageSelection(format!("Invalid page: '{s}'")))?;
    if page == 0 {
        return Err(DrawError::InvalidPageSelection(
            "Page numbers start at 1".to_string(),
        ));
    }
    Ok(page)
}

fn check(page: u32, page_count: usize) -> Result<u32> {
    if page as usize > page_count {
        Err(DrawError::InvalidPageNumber(page))
    } else {
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_list() {
        let selection = PageSelection::parse("3,1").unwrap();
        assert_eq!(selection.items(), &[PageSpec::Single(3), PageSpec::Single(1)]);
        assert_eq!(selection.page_numbers(5).unwrap(), vec![3, 1]);
    }

    #[test]
    fn test_parse_ranges() {
        let selection: PageSelection = " 1-3 , 5 ".parse().unwrap();
        assert_eq!(
            selection.items(),
            &[PageSpec::Range(1, 3), PageSpec::Single(5)]
        );
        assert_eq!(selection.page_numbers(5).unwrap(), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_parse_all() {
        let selection = PageSelection::parse("ALL").unwrap();
        assert_eq!(selection.page_numbers(3).unwrap(), vec![1, 2, 3]);
        assert!(selection.page_numbers(0).is_err());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let selection = PageSelection::parse("2,2,1-2").unwrap();
        assert_eq!(selection.page_numbers(2).unwrap(), vec![2, 2, 1, 2]);
    }

    #[test]
    fn test_invalid_selections() {
        assert!(matches!(
            PageSelection::parse(""),
            Err(DrawError::InvalidPageSelection(_))
        ));
        assert!(PageSelection::parse("0").is_err());
        assert!(PageSelection::parse("1-0").is_err());
        assert!(PageSelection::parse("4-2").is_err());
        assert!(PageSelection::parse("a").is_err());
        assert!(PageSelection::parse("1,,2").is_err());
        assert!(PageSelection::parse("-1").is_err());
    }

    #[test]
    fn test_out_of_range_pages() {
        let selection = PageSelection::parse("1,6").unwrap();
        assert!(matches!(
            selection.page_numbers(5),
            Err(DrawError::InvalidPageNumber(6))
        ));

        let selection = PageSelection::from_pages([2, 9]);
        assert!(selection.page_numbers(3).is_err());
    }
}
