pub mod connection;
pub mod jokes;
pub mod schema;
pub mod store;

pub use connection::Database;
pub use store::JokeStore;
