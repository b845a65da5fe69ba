//! SQLite User Repository

use async_trait::async_trait;
use sqlx::FromRow;

use super::DbPool;
use crate::application::ports::{RepositoryError, UserRepositoryPort};
use crate::domain::user::{User, UserRef};

/// SQLite User Repository
pub struct SqliteUserRepository {
    pool: DbPool,
}

impl SqliteUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// name/email 列允许 NULL（外部建表时可能存在）
#[derive(FromRow)]
struct UserRow {
    id: i64,
    name: Option<String>,
    email: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            name: row.name.unwrap_or_default(),
            email: row.email.unwrap_or_default(),
        }
    }
}

#[async_trait]
impl UserRepositoryPort for SqliteUserRepository {
    async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows: Vec<UserRow> = sqlx::query_as("SELECT id, name, email FROM users")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    async fn find_by_id(&self, id: &UserRef) -> Result<Option<User>, RepositoryError> {
        let query = sqlx::query_as::<_, UserRow>("SELECT id, name, email FROM users WHERE id = ?");
        let query = match id {
            UserRef::Int(v) => query.bind(*v),
            UserRef::Text(s) => query.bind(s.as_str()),
        };

        let row = query.fetch_optional(&self.pool).await?;

        Ok(row.map(User::from))
    }

    async fn insert(&self, name: &str, email: &str) -> Result<i64, RepositoryError> {
        let result = sqlx::query("INSERT INTO users (name, email) VALUES (?, ?)")
            .bind(name)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn update(
        &self,
        id: &UserRef,
        name: Option<&str>,
        email: Option<&str>,
    ) -> Result<u64, RepositoryError> {
        let query = sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE(?, name), email = COALESCE(?, email)
            WHERE id = ?
            "#,
        )
        .bind(name)
        .bind(email);
        let query = match id {
            UserRef::Int(v) => query.bind(*v),
            UserRef::Text(s) => query.bind(s.as_str()),
        };

        let result = query.execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: &UserRef) -> Result<u64, RepositoryError> {
        let query = sqlx::query("DELETE FROM users WHERE id = ?");
        let query = match id {
            UserRef::Int(v) => query.bind(*v),
            UserRef::Text(s) => query.bind(s.as_str()),
        };

        let result = query.execute(&self.pool).await?;

        Ok(result.rows_affected())
    }
}
