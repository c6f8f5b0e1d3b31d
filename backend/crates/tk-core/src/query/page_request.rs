use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;

/// Keyword accepted in place of a number to address the final page
pub const LAST_PAGE: &str = "last";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSelector {
    Number(u64),
    Last,
}

/// Which page of a list to return, and how large pages are
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub selector: PageSelector,
    pub size: u64,
}

impl PageRequest {
    pub fn first(size: u64) -> Self {
        Self {
            selector: PageSelector::Number(1),
            size,
        }
    }

    /// Parse the raw `page` query value. Absent or empty means page 1.
    #[track_caller]
    pub fn parse(raw: Option<&str>, size: u64) -> CoreErrorResult<Self> {
        let selector = match raw.map(str::trim) {
            None | Some("") => PageSelector::Number(1),
            Some(LAST_PAGE) => PageSelector::Last,
            Some(value) => match value.parse::<u64>() {
                Ok(number) if number >= 1 => PageSelector::Number(number),
                _ => {
                    return Err(CoreError::InvalidPage {
                        value: value.to_string(),
                        location: ErrorLocation::from(Location::caller()),
                    });
                }
            },
        };

        Ok(Self {
            selector,
            size: size.max(1),
        })
    }

    /// Number of pages needed for `count` rows. An empty list still has one page.
    pub fn num_pages(&self, count: u64) -> u64 {
        count.div_ceil(self.size).max(1)
    }

    /// Resolve to a concrete page number, failing if it lies past the end.
    #[track_caller]
    pub fn resolve(&self, count: u64) -> CoreErrorResult<u64> {
        let num_pages = self.num_pages(count);
        match self.selector {
            PageSelector::Last => Ok(num_pages),
            PageSelector::Number(number) if number <= num_pages => Ok(number),
            PageSelector::Number(number) => Err(CoreError::InvalidPage {
                value: number.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    /// Row offset of a resolved page number
    pub fn offset(&self, number: u64) -> u64 {
        (number.saturating_sub(1)).saturating_mul(self.size)
    }
}
