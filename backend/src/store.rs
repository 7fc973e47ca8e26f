use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

#[derive(Debug, thiserror::Error)]
pub(crate) enum StoreError {
    #[error("could not open database at {}: {source}", path.display())]
    Open { path: PathBuf, source: sqlx::Error },
    #[error("could not create memos table: {0}")]
    Schema(#[source] sqlx::Error),
    #[error(transparent)]
    Query(#[from] sqlx::Error),
}

#[derive(Clone)]
pub(crate) struct MemoStore {
    pool: SqlitePool,
}

impl MemoStore {
    pub(crate) async fn open(path: &Path) -> Result<Self, StoreError> {
        log::info!("opening memo database at {}", path.display());
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Open {
                path: path.to_path_buf(),
                source,
            })?;
        Self::with_schema(pool).await
    }

    // One connection that never expires, so every query sees the same database.
    #[cfg(test)]
    pub(crate) async fn in_memory() -> Result<Self, StoreError> {
        let options = "sqlite::memory:"
            .parse::<SqliteConnectOptions>()
            .map_err(|source| StoreError::Open {
                path: PathBuf::from(":memory:"),
                source,
            })?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None::<std::time::Duration>)
            .max_lifetime(None::<std::time::Duration>)
            .connect_with(options)
            .await
            .map_err(|source| StoreError::Open {
                path: PathBuf::from(":memory:"),
                source,
            })?;
        Self::with_schema(pool).await
    }

    async fn with_schema(pool: SqlitePool) -> Result<Self, StoreError> {
        sqlx::query(
            r#"
        CREATE TABLE IF NOT EXISTS memos (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            body TEXT NOT NULL
        )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(StoreError::Schema)?;
        Ok(Self { pool })
    }

    pub(crate) async fn list(&self) -> Result<Vec<common::Memo>, StoreError> {
        let rows = sqlx::query_as::<_, (i64, String)>(
            r#"
        SELECT
            id, body
        FROM memos
        ORDER BY id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows
            .into_iter()
            .map(|(id, body)| common::Memo { id, body })
            .collect())
    }

    pub(crate) async fn insert(&self, body: String) -> Result<common::Memo, StoreError> {
        let result = sqlx::query(
            r#"
        INSERT INTO memos
            (body)
        VALUES(?)
            "#,
        )
        .bind(&body)
        .execute(&self.pool)
        .await?;
        Ok(common::Memo {
            id: result.last_insert_rowid(),
            body,
        })
    }

    pub(crate) async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn fresh_store_is_empty() {
        let store = MemoStore::in_memory().await.unwrap();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn insert_assigns_increasing_ids() {
        let store = MemoStore::in_memory().await.unwrap();
        let a = store.insert("a".to_string()).await.unwrap();
        let b = store.insert("b".to_string()).await.unwrap();
        let c = store.insert("c".to_string()).await.unwrap();

        assert!(a.id < b.id && b.id < c.id);
        assert_eq!(c.body, "c");
    }

    #[actix_web::test]
    async fn list_returns_newest_first() {
        let store = MemoStore::in_memory().await.unwrap();
        for body in ["a", "b", "c"] {
            store.insert(body.to_string()).await.unwrap();
        }

        let bodies: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|memo| memo.body)
            .collect();
        assert_eq!(bodies, ["c", "b", "a"]);
    }

    #[actix_web::test]
    async fn reopening_keeps_memos_and_never_reuses_ids() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("memos.db");

        let store = MemoStore::open(&path).await.unwrap();
        store.insert("first".to_string()).await.unwrap();
        let second = store.insert("second".to_string()).await.unwrap();
        store.close().await;

        let store = MemoStore::open(&path).await.unwrap();
        let memos = store.list().await.unwrap();
        assert_eq!(memos.len(), 2);
        assert_eq!(memos[0], second);

        let third = store.insert("third".to_string()).await.unwrap();
        assert!(third.id > second.id);
        store.close().await;
    }

    #[actix_web::test]
    async fn open_fails_when_directory_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("memos.db");

        match MemoStore::open(&path).await {
            Err(StoreError::Open { path: reported, .. }) => assert_eq!(reported, path),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("opened a database in a missing directory"),
        }
    }

    #[actix_web::test]
    async fn closed_store_reports_query_errors() {
        let store = MemoStore::in_memory().await.unwrap();
        store.close().await;

        assert!(matches!(store.list().await, Err(StoreError::Query(_))));
        assert!(matches!(
            store.insert("late".to_string()).await,
            Err(StoreError::Query(_))
        ));
    }
}
