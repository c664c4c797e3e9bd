//! Connection pool and blocking helpers shared by the `PostgreSQL` adapters.
//!
//! The four component adapters persist into one database, so they share the
//! pool type and the `spawn_blocking` plumbing; each maps failures into its
//! own port error type via the caller-provided mapper.

use diesel::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError, PooledConnection};

/// `PostgreSQL` connection pool type used by all adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// Pooled connection type for internal use.
pub(crate) type PooledConn = PooledConnection<ConnectionManager<PgConnection>>;

/// Runs a blocking Diesel operation on a dedicated thread pool.
///
/// Wraps the closure in [`tokio::task::spawn_blocking`] so synchronous
/// database work never blocks the async executor; join errors are mapped
/// into the caller's error type.
pub(crate) async fn run_blocking<F, T, E, M>(f: F, map_join_err: M) -> Result<T, E>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: Send + 'static,
    M: FnOnce(tokio::task::JoinError) -> E,
{
    tokio::task::spawn_blocking(f).await.map_err(map_join_err)?
}

/// Obtains a connection from the pool with a caller-provided error mapper.
pub(crate) fn get_conn<E, M>(pool: &PgPool, map_err: M) -> Result<PooledConn, E>
where
    M: FnOnce(PoolError) -> E,
{
    pool.get().map_err(map_err)
}
