use chrono::{SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension};
use crate::errors::QuipsterError;
use crate::models::{JokeUpdate, NewJoke, StoredJoke};
use super::Database;

const JOKE_COLUMNS: &str = "id, user_id, content, topic, joke_type, category, model_used, tokens_used, cost_usd, user_rating, favorited, shared, created_at";

fn row_to_joke(row: &rusqlite::Row) -> rusqlite::Result<StoredJoke> {
    Ok(StoredJoke {
        id: row.get(0)?,
        user_id: row.get(1)?,
        content: row.get(2)?,
        topic: row.get(3)?,
        joke_type: row.get(4)?,
        category: row.get(5)?,
        model_used: row.get(6)?,
        tokens_used: row.get::<_, i64>(7)?.max(0) as u64,
        cost_usd: row.get(8)?,
        user_rating: row.get::<_, Option<i64>>(9)?.map(|r| r as u8),
        favorited: row.get(10)?,
        shared: row.get(11)?,
        created_at: row.get(12)?,
    })
}

fn fetch_joke(conn: &Connection, user_id: &str, id: &str) -> Result<Option<StoredJoke>, QuipsterError> {
    conn.query_row(
        &format!("SELECT {} FROM jokes WHERE id = ?1 AND user_id = ?2", JOKE_COLUMNS),
        rusqlite::params![id, user_id],
        row_to_joke,
    )
    .optional()
    .map_err(|e| QuipsterError::Database(format!("Query error: {}", e)))
}

impl Database {
    pub fn insert_joke(&self, joke: &NewJoke) -> Result<StoredJoke, QuipsterError> {
        let stored = StoredJoke {
            id: uuid::Uuid::new_v4().to_string(),
            user_id: joke.user_id.clone(),
            content: joke.content.clone(),
            topic: joke.topic.clone(),
            joke_type: joke.joke_type.clone(),
            category: joke.category.clone(),
            model_used: joke.model_used.clone(),
            tokens_used: joke.tokens_used,
            cost_usd: joke.cost_usd,
            user_rating: None,
            favorited: false,
            shared: false,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        };

        let conn = self.lock()?;
        conn.execute(
            &format!("INSERT INTO jokes ({}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, NULL, 0, 0, ?10)", JOKE_COLUMNS),
            rusqlite::params![
                stored.id,
                stored.user_id,
                stored.content,
                stored.topic,
                stored.joke_type,
                stored.category,
                stored.model_used,
                stored.tokens_used as i64,
                stored.cost_usd,
                stored.created_at,
            ],
        ).map_err(|e| QuipsterError::Database(format!("Failed to save joke: {}", e)))?;
        Ok(stored)
    }

    pub fn get_joke(&self, user_id: &str, id: &str) -> Result<Option<StoredJoke>, QuipsterError> {
        let conn = self.lock()?;
        fetch_joke(&conn, user_id, id)
    }

    /// Newest first; ties on the timestamp fall back to insertion order.
    pub fn list_jokes(&self, user_id: &str, limit: usize, offset: usize) -> Result<Vec<StoredJoke>, QuipsterError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM jokes WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC LIMIT ?2 OFFSET ?3",
            JOKE_COLUMNS
        )).map_err(|e| QuipsterError::Database(format!("Query failed: {}", e)))?;

        let rows = stmt.query_map(rusqlite::params![user_id, limit as i64, offset as i64], row_to_joke)
            .map_err(|e| QuipsterError::Database(format!("Query error: {}", e)))?;

        let mut results = Vec::new();
        for row in rows {
            results.push(row.map_err(|e| QuipsterError::Database(format!("Row error: {}", e)))?);
        }
        Ok(results)
    }

    pub fn count_jokes(&self, user_id: &str) -> Result<u64, QuipsterError> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row(
            "SELECT COUNT(*) FROM jokes WHERE user_id = ?1",
            rusqlite::params![user_id],
            |row| row.get(0),
        ).map_err(|e| QuipsterError::Database(format!("Count failed: {}", e)))?;
        Ok(count as u64)
    }

    /// Apply the set fields of `update`. Returns `None` when the joke does not
    /// exist or belongs to another user.
    pub fn update_joke(&self, user_id: &str, id: &str, update: &JokeUpdate) -> Result<Option<StoredJoke>, QuipsterError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "UPDATE jokes SET user_rating = COALESCE(?3, user_rating), favorited = COALESCE(?4, favorited), shared = COALESCE(?5, shared) WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![
                id,
                user_id,
                update.user_rating.map(i64::from),
                update.favorited,
                update.shared,
            ],
        ).map_err(|e| QuipsterError::Database(format!("Update failed: {}", e)))?;

        if affected == 0 {
            return Ok(None);
        }
        fetch_joke(&conn, user_id, id)
    }

    pub fn delete_joke(&self, user_id: &str, id: &str) -> Result<bool, QuipsterError> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "DELETE FROM jokes WHERE id = ?1 AND user_id = ?2",
            rusqlite::params![id, user_id],
        ).map_err(|e| QuipsterError::Database(format!("Delete failed: {}", e)))?;
        Ok(affected > 0)
    }
}
