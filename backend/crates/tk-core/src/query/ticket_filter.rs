/// Row filters for listing tickets. Empty strings count as "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
}

impl TicketFilter {
    pub fn new(category: Option<&str>, search: Option<&str>) -> Self {
        Self {
            category: non_empty(category),
            search: non_empty(search),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.search.is_none()
    }

    /// Lowercased `search` as a `LIKE` pattern with `\` as the escape
    /// character, so that `%` and `_` in the term match literally. It is
    /// matched against the lowercased copies of title and description.
    pub fn search_pattern(&self) -> Option<String> {
        self.search.as_deref().map(|term| {
            let term = term.to_lowercase();
            let mut pattern = String::with_capacity(term.len() + 2);
            pattern.push('%');
            for c in term.chars() {
                if matches!(c, '%' | '_' | '\\') {
                    pattern.push('\\');
                }
                pattern.push(c);
            }
            pattern.push('%');
            pattern
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}
