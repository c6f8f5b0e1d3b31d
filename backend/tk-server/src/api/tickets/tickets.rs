//! Ticket REST API handlers
//!
//! Every successful write clears the response cache before returning so
//! later list and detail reads are never served stale.

use crate::{
    ApiError, ApiResult, AppState, AuthenticatedUser, DeleteResponse, ListTicketsQuery,
    PageLinks, TicketBody, TicketId, TicketPageResponse,
};

use tk_core::{Page, PageRequest, Ticket, TicketFilter, TicketOrdering};
use tk_db::TicketRepository;

use axum::{
    Extension, Json,
    extract::{OriginalUri, State},
    http::{HeaderMap, StatusCode},
};

// =============================================================================
// Handlers
// =============================================================================

/// GET /tickets
///
/// Filter by category, search title/description, order, then paginate
pub async fn list_tickets(
    State(state): State<AppState>,
    OriginalUri(uri): OriginalUri,
    headers: HeaderMap,
    query: ListTicketsQuery,
) -> ApiResult<Json<TicketPageResponse>> {
    let filter = TicketFilter::new(query.category.as_deref(), query.search.as_deref());
    let ordering = TicketOrdering::parse(query.ordering.as_deref());
    let request = PageRequest::parse(query.page.as_deref(), state.page_size)?;

    let count = TicketRepository::count(&state.pool, &filter).await?;
    let number = request.resolve(count)?;

    let items = TicketRepository::find_filtered(
        &state.pool,
        &filter,
        &ordering,
        request.size,
        request.offset(number),
    )
    .await?;

    let page = Page {
        items,
        count,
        number,
        size: request.size,
    };
    let links = PageLinks::from_request(&headers, &uri);

    Ok(Json(TicketPageResponse::from_page(page, &links)))
}

/// GET /tickets/{id}
pub async fn get_ticket(
    State(state): State<AppState>,
    TicketId(id): TicketId,
) -> ApiResult<Json<Ticket>> {
    let ticket = load_ticket(&state, id).await?;
    Ok(Json(ticket))
}

/// POST /tickets
///
/// Validate every field, persist, return 201 with the stored ticket
pub async fn create_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    TicketBody(input): TicketBody,
) -> ApiResult<(StatusCode, Json<Ticket>)> {
    let new_ticket = state.validator.validate_full(&input)?;

    let ticket = TicketRepository::create(&state.pool, &new_ticket).await?;

    state.invalidate_cache().await;
    state.metrics.ticket_created();
    log::info!("Ticket {} created by {}", ticket.id, user.0);

    Ok((StatusCode::CREATED, Json(ticket)))
}

/// PUT /tickets/{id}
///
/// Replace all fields of an existing ticket
pub async fn update_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    TicketId(id): TicketId,
    TicketBody(input): TicketBody,
) -> ApiResult<Json<Ticket>> {
    let mut ticket = load_ticket(&state, id).await?;

    let replacement = state.validator.validate_full(&input)?;
    ticket.apply(replacement.into());

    save_ticket(&state, &ticket).await?;
    log::info!("Ticket {} replaced by {}", ticket.id, user.0);

    Ok(Json(ticket))
}

/// PATCH /tickets/{id}
///
/// Replace only the supplied fields. An empty body changes nothing.
pub async fn patch_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    TicketId(id): TicketId,
    TicketBody(input): TicketBody,
) -> ApiResult<Json<Ticket>> {
    let mut ticket = load_ticket(&state, id).await?;

    let changes = state.validator.validate_partial(&input)?;
    if changes.is_empty() {
        log::debug!("Ticket {} patched with no changes", ticket.id);
        return Ok(Json(ticket));
    }
    ticket.apply(changes);

    save_ticket(&state, &ticket).await?;
    log::info!("Ticket {} updated by {}", ticket.id, user.0);

    Ok(Json(ticket))
}

/// DELETE /tickets/{id}
pub async fn delete_ticket(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    TicketId(id): TicketId,
) -> ApiResult<Json<DeleteResponse>> {
    if !TicketRepository::delete(&state.pool, id).await? {
        return Err(ApiError::ticket_not_found());
    }

    state.invalidate_cache().await;
    state.metrics.ticket_deleted();
    log::info!("Ticket {} deleted by {}", id, user.0);

    Ok(Json(DeleteResponse::ticket_deleted()))
}

// =============================================================================
// Helpers
// =============================================================================

async fn load_ticket(state: &AppState, id: i64) -> ApiResult<Ticket> {
    TicketRepository::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(ApiError::ticket_not_found)
}

/// Persist an update; a row that vanished since it was loaded is a 404
async fn save_ticket(state: &AppState, ticket: &Ticket) -> ApiResult<()> {
    if !TicketRepository::update(&state.pool, ticket).await? {
        return Err(ApiError::ticket_not_found());
    }

    state.invalidate_cache().await;
    state.metrics.ticket_updated();
    Ok(())
}
