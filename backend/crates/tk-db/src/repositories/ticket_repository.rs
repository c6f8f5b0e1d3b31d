//! Ticket repository: CRUD plus filtered, ordered, paginated listing.
//!
//! All methods are stateless and take any SQLite executor, so they can run
//! against the pool or inside a transaction.

use crate::{DbError, Result as DbErrorResult};

use tk_core::{NewTicket, Ticket, TicketFilter, TicketOrdering};

use std::panic::Location;

use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{QueryBuilder, Row, Sqlite};

const SELECT_COLUMNS: &str = "SELECT id, title, description, category, priority FROM tickets";
const SELECT_BY_ID: &str =
    "SELECT id, title, description, category, priority FROM tickets WHERE id = ?";

pub struct TicketRepository;

impl TicketRepository {
    /// Insert a ticket and return it with its assigned id
    pub async fn create<'e, E>(executor: E, ticket: &NewTicket) -> DbErrorResult<Ticket>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO tickets
                    (title, description, category, priority, title_folded, description_folded)
                VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(&ticket.category)
        .bind(&ticket.priority)
        .bind(ticket.title.to_lowercase())
        .bind(ticket.description.to_lowercase())
        .execute(executor)
        .await?;

        Ok(Ticket {
            id: result.last_insert_rowid(),
            title: ticket.title.clone(),
            description: ticket.description.clone(),
            category: ticket.category.clone(),
            priority: ticket.priority.clone(),
        })
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Ticket>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(executor)
            .await?;

        row.map(|r| ticket_from_row(&r)).transpose()
    }

    /// Overwrite every mutable column. Returns false if the id no longer exists.
    pub async fn update<'e, E>(executor: E, ticket: &Ticket) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tickets
                SET title = ?, description = ?, category = ?, priority = ?,
                    title_folded = ?, description_folded = ?
                WHERE id = ?
            "#,
        )
        .bind(&ticket.title)
        .bind(&ticket.description)
        .bind(&ticket.category)
        .bind(&ticket.priority)
        .bind(ticket.title.to_lowercase())
        .bind(ticket.description.to_lowercase())
        .bind(ticket.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Hard delete. Returns false if nothing was removed.
    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tickets WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Number of tickets matching `filter`
    pub async fn count<'e, E>(executor: E, filter: &TicketFilter) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM tickets");
        push_filter(&mut builder, filter);

        let count: i64 = builder.build_query_scalar().fetch_one(executor).await?;

        u64::try_from(count).map_err(|e| DbError::Initialization {
            message: format!("Negative ticket count {}: {}", count, e),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// One window of matching tickets in the requested order
    pub async fn find_filtered<'e, E>(
        executor: E,
        filter: &TicketFilter,
        ordering: &TicketOrdering,
        limit: u64,
        offset: u64,
    ) -> DbErrorResult<Vec<Ticket>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let mut builder = QueryBuilder::<Sqlite>::new(SELECT_COLUMNS);
        push_filter(&mut builder, filter);

        // Column names and directions come from closed enums, never from input
        let order_by: Vec<String> = ordering
            .resolved()
            .iter()
            .map(|(field, direction)| format!("{} {}", field.column(), direction.as_sql()))
            .collect();
        builder.push(" ORDER BY ").push(order_by.join(", "));

        builder
            .push(" LIMIT ")
            .push_bind(to_sql_int(limit)?)
            .push(" OFFSET ")
            .push_bind(to_sql_int(offset)?);

        let rows = builder.build().fetch_all(executor).await?;

        rows.iter().map(ticket_from_row).collect()
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &TicketFilter) {
    let mut separator = " WHERE ";

    if let Some(category) = &filter.category {
        builder
            .push(separator)
            .push("category = ")
            .push_bind(category.clone());
        separator = " AND ";
    }

    if let Some(pattern) = filter.search_pattern() {
        // Folded columns hold lowercased text, and the pattern is lowercased too
        builder
            .push(separator)
            .push("(title_folded LIKE ")
            .push_bind(pattern.clone())
            .push(" ESCAPE '\\' OR description_folded LIKE ")
            .push_bind(pattern)
            .push(" ESCAPE '\\')");
    }
}

#[track_caller]
fn to_sql_int(value: u64) -> DbErrorResult<i64> {
    i64::try_from(value).map_err(|e| DbError::Initialization {
        message: format!("Value {} out of range for SQLite integer: {}", value, e),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn ticket_from_row(row: &SqliteRow) -> DbErrorResult<Ticket> {
    Ok(Ticket {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        category: row.try_get("category")?,
        priority: row.try_get("priority")?,
    })
}
