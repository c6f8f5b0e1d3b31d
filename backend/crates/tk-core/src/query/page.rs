/// One page of results together with the totals needed for navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total rows across all pages
    pub count: u64,
    /// 1-based page number
    pub number: u64,
    pub size: u64,
}

impl<T> Page<T> {
    pub fn num_pages(&self) -> u64 {
        self.count.div_ceil(self.size.max(1)).max(1)
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages()
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn next_number(&self) -> Option<u64> {
        self.has_next().then(|| self.number + 1)
    }

    pub fn previous_number(&self) -> Option<u64> {
        self.has_previous().then(|| self.number - 1)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            number: self.number,
            size: self.size,
        }
    }
}
