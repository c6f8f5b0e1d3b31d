use crate::PageLinks;

use tk_core::{Page, Ticket};

use serde::Serialize;

/// Page envelope for ticket lists
#[derive(Debug, Serialize)]
pub struct TicketPageResponse {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Ticket>,
}

impl TicketPageResponse {
    pub fn from_page(page: Page<Ticket>, links: &PageLinks) -> Self {
        Self {
            count: page.count,
            next: page.next_number().map(|number| links.link(number)),
            previous: page.previous_number().map(|number| links.link(number)),
            results: page.items,
        }
    }
}
