//! Single write connection behind `tokio::sync::Mutex`.
//! Serialized writes, so concurrent upserts to one feature are last-write-wins.

use rusqlite::Connection;
use tokio::sync::Mutex;

use weightbank_core::errors::WeightsResult;

/// A single connection protected by an async mutex.
pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    /// Wrap an already configured and migrated connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// Acquire the lock and execute a closure with the connection.
    pub async fn with_conn<F, T>(&self, f: F) -> WeightsResult<T>
    where
        F: FnOnce(&Connection) -> WeightsResult<T>,
    {
        let guard = self.conn.lock().await;
        f(&guard)
    }
}
