//! FTS5 search index over the text fields of `albums`
//!
//! The index is an external-content table: it stores only tokens and points
//! back at `albums.seq`. Triggers keep it current while it exists; writes made
//! while it is dropped are picked up by the rebuild in [`create_index`].

use digger_core::{error::Result, types::SearchRequest};
use sqlx::SqlitePool;

/// Name of the FTS5 table
pub const TABLE: &str = "albums_fts";

const TRIGGERS: [&str; 3] = ["albums_fts_insert", "albums_fts_delete", "albums_fts_update"];

const CREATE_STATEMENTS: [&str; 5] = [
    "CREATE VIRTUAL TABLE IF NOT EXISTS albums_fts USING fts5(
        artist, owner, title, format, comments,
        content='albums', content_rowid='seq'
    )",
    "CREATE TRIGGER IF NOT EXISTS albums_fts_insert AFTER INSERT ON albums BEGIN
        INSERT INTO albums_fts(rowid, artist, owner, title, format, comments)
        VALUES (new.seq, new.artist, new.owner, new.title, new.format, new.comments);
    END",
    "CREATE TRIGGER IF NOT EXISTS albums_fts_delete AFTER DELETE ON albums BEGIN
        INSERT INTO albums_fts(albums_fts, rowid, artist, owner, title, format, comments)
        VALUES ('delete', old.seq, old.artist, old.owner, old.title, old.format, old.comments);
    END",
    "CREATE TRIGGER IF NOT EXISTS albums_fts_update AFTER UPDATE ON albums BEGIN
        INSERT INTO albums_fts(albums_fts, rowid, artist, owner, title, format, comments)
        VALUES ('delete', old.seq, old.artist, old.owner, old.title, old.format, old.comments);
        INSERT INTO albums_fts(rowid, artist, owner, title, format, comments)
        VALUES (new.seq, new.artist, new.owner, new.title, new.format, new.comments);
    END",
    "INSERT INTO albums_fts(albums_fts) VALUES ('rebuild')",
];

/// Drop the index table and its triggers
pub async fn drop_index(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;
    for trigger in TRIGGERS {
        sqlx::query(&format!("DROP TRIGGER IF EXISTS {}", trigger))
            .execute(&mut *tx)
            .await?;
    }
    sqlx::query(&format!("DROP TABLE IF EXISTS {}", TABLE))
        .execute(&mut *tx)
        .await?;
    tx.commit().await?;

    tracing::debug!("Search index dropped");
    Ok(())
}

/// Create the index if needed and rebuild it from every stored album
pub async fn create_index(pool: &SqlitePool) -> Result<()> {
    let mut tx = pool.begin().await?;
    for statement in CREATE_STATEMENTS {
        sqlx::query(statement).execute(&mut *tx).await?;
    }
    tx.commit().await?;

    tracing::debug!("Search index created");
    Ok(())
}

/// Translate a search request into an FTS5 query
///
/// Every term must appear in the requested column. Terms are alphanumeric, so
/// quoting them is enough to keep FTS5 operators out of user input.
pub fn match_expression(request: &SearchRequest) -> String {
    let column = request.field.as_str();
    request
        .terms()
        .iter()
        .map(|term| format!("{} : \"{}\"", column, term))
        .collect::<Vec<_>>()
        .join(" AND ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use digger_core::types::SearchField;

    #[test]
    fn test_match_expression_scopes_every_term() {
        let request = SearchRequest::new(SearchField::Artist, "The Offspring").unwrap();
        assert_eq!(
            match_expression(&request),
            "artist : \"The\" AND artist : \"Offspring\""
        );
    }

    #[test]
    fn test_match_expression_strips_operators() {
        let request = SearchRequest::new(SearchField::Comments, "great OR \"bad\"*").unwrap();
        assert_eq!(
            match_expression(&request),
            "comments : \"great\" AND comments : \"OR\" AND comments : \"bad\""
        );
    }
}
