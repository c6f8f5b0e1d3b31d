pub const DEFAULT_MAX_TITLE_LENGTH: usize = 255;
pub const DEFAULT_MAX_DESCRIPTION_LENGTH: usize = 100;
pub const DEFAULT_MAX_CATEGORY_LENGTH: usize = 50;
pub const DEFAULT_MAX_PRIORITY_LENGTH: usize = 20;

/// Per-field maximum lengths, counted in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TicketLimits {
    pub max_title_length: usize,
    pub max_description_length: usize,
    pub max_category_length: usize,
    pub max_priority_length: usize,
}

impl Default for TicketLimits {
    fn default() -> Self {
        Self {
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_description_length: DEFAULT_MAX_DESCRIPTION_LENGTH,
            max_category_length: DEFAULT_MAX_CATEGORY_LENGTH,
            max_priority_length: DEFAULT_MAX_PRIORITY_LENGTH,
        }
    }
}
