use crate::errors::QuipsterError;
use crate::models::{JokeUpdate, NewJoke, StoredJoke};
use super::Database;

/// Persistence sink for joke history. Calls are synchronous and short; the
/// SQLite implementation serializes them behind its connection mutex.
pub trait JokeStore: Send + Sync {
    fn save_joke(&self, joke: &NewJoke) -> Result<StoredJoke, QuipsterError>;
    fn get_joke(&self, user_id: &str, id: &str) -> Result<Option<StoredJoke>, QuipsterError>;
    fn list_jokes(&self, user_id: &str, limit: usize, offset: usize) -> Result<Vec<StoredJoke>, QuipsterError>;
    fn count_jokes(&self, user_id: &str) -> Result<u64, QuipsterError>;
    fn update_joke(&self, user_id: &str, id: &str, update: &JokeUpdate) -> Result<Option<StoredJoke>, QuipsterError>;
    fn delete_joke(&self, user_id: &str, id: &str) -> Result<bool, QuipsterError>;
}

impl JokeStore for Database {
    fn save_joke(&self, joke: &NewJoke) -> Result<StoredJoke, QuipsterError> {
        self.insert_joke(joke)
    }

    fn get_joke(&self, user_id: &str, id: &str) -> Result<Option<StoredJoke>, QuipsterError> {
        Database::get_joke(self, user_id, id)
    }

    fn list_jokes(&self, user_id: &str, limit: usize, offset: usize) -> Result<Vec<StoredJoke>, QuipsterError> {
        Database::list_jokes(self, user_id, limit, offset)
    }

    fn count_jokes(&self, user_id: &str) -> Result<u64, QuipsterError> {
        Database::count_jokes(self, user_id)
    }

    fn update_joke(&self, user_id: &str, id: &str, update: &JokeUpdate) -> Result<Option<StoredJoke>, QuipsterError> {
        Database::update_joke(self, user_id, id, update)
    }

    fn delete_joke(&self, user_id: &str, id: &str) -> Result<bool, QuipsterError> {
        Database::delete_joke(self, user_id, id)
    }
}
