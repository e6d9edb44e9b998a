use crate::search_index;
use digger_core::{
    error::{DiggerError, Result},
    types::*,
};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

const ALBUM_COLUMNS: &str =
    "id, artist, owner, title, condition, format, comments, price, for_sale";

fn from_row(row: &SqliteRow) -> Album {
    Album {
        entity_id: AlbumId::new(row.get::<String, _>("id")),
        artist: row.get("artist"),
        owner: row.get("owner"),
        title: row.get("title"),
        condition: row.get("condition"),
        format: row.get("format"),
        comments: row.get("comments"),
        price: row.get("price"),
        for_sale: row.get("for_sale"),
    }
}

pub async fn get_by_id(pool: &SqlitePool, id: &AlbumId) -> Result<Option<Album>> {
    let row = sqlx::query(&format!(
        "SELECT {} FROM albums WHERE id = ?",
        ALBUM_COLUMNS
    ))
    .bind(id.as_str())
    .fetch_optional(pool)
    .await?;

    Ok(row.as_ref().map(from_row))
}

/// Store order is insertion order
pub async fn page(pool: &SqlitePool, page: PageRequest) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM albums ORDER BY seq LIMIT ? OFFSET ?",
        ALBUM_COLUMNS
    ))
    .bind(i64::from(page.count))
    .bind(i64::from(page.offset))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}

pub async fn count(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar("SELECT COUNT(*) FROM albums")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

pub async fn create(pool: &SqlitePool, album: NewAlbum) -> Result<Album> {
    let album = album.with_id(AlbumId::generate());

    sqlx::query(
        "INSERT INTO albums (id, artist, owner, title, condition, format, comments, price, for_sale)
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(album.entity_id.as_str())
    .bind(&album.artist)
    .bind(&album.owner)
    .bind(&album.title)
    .bind(album.condition)
    .bind(&album.format)
    .bind(&album.comments)
    .bind(album.price)
    .bind(album.for_sale)
    .execute(pool)
    .await?;

    Ok(album)
}

pub async fn update(pool: &SqlitePool, album: &Album) -> Result<Album> {
    let result = sqlx::query(
        "UPDATE albums
         SET artist = ?, owner = ?, title = ?, condition = ?, format = ?,
             comments = ?, price = ?, for_sale = ?
         WHERE id = ?",
    )
    .bind(&album.artist)
    .bind(&album.owner)
    .bind(&album.title)
    .bind(album.condition)
    .bind(&album.format)
    .bind(&album.comments)
    .bind(album.price)
    .bind(album.for_sale)
    .bind(album.entity_id.as_str())
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DiggerError::AlbumNotFound(album.entity_id.clone()));
    }

    Ok(album.clone())
}

pub async fn delete(pool: &SqlitePool, id: &AlbumId) -> Result<bool> {
    let result = sqlx::query("DELETE FROM albums WHERE id = ?")
        .bind(id.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn delete_all(pool: &SqlitePool) -> Result<u64> {
    let result = sqlx::query("DELETE FROM albums").execute(pool).await?;
    Ok(result.rows_affected())
}

/// Requires the search index; fails with a database error when it is missing
pub async fn search(pool: &SqlitePool, request: &SearchRequest) -> Result<Vec<Album>> {
    let rows = sqlx::query(&format!(
        "SELECT {} FROM albums
         WHERE seq IN (SELECT rowid FROM {} WHERE {} MATCH ?)
         ORDER BY seq",
        ALBUM_COLUMNS,
        search_index::TABLE,
        search_index::TABLE
    ))
    .bind(search_index::match_expression(request))
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(from_row).collect())
}
