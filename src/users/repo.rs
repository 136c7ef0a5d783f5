use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::users::dto::UpdateUserRequest;
use crate::users::repo_types::{NewUser, User};

impl User {
    /// Find a user by email.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, last_login, created_at, updated_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    /// Find a user by ID.
    pub async fn find_by_id(db: &PgPool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, last_login, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    /// Insert a new user row and return it.
    pub async fn insert(db: &PgPool, new: NewUser<'_>) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password_hash, role, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, role, status, last_login, created_at, updated_at
            "#,
        )
        .bind(new.name)
        .bind(new.email)
        .bind(new.password_hash)
        .bind(new.role)
        .bind(new.status)
        .fetch_one(db)
        .await
    }

    /// Stamp `last_login`; touches nothing else.
    pub async fn update_last_login(db: &PgPool, id: Uuid) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE users SET last_login = now() WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }

    /// Replace the mutable fields of a user row. `None` means no such row.
    pub async fn update(
        db: &PgPool,
        id: Uuid,
        fields: &UpdateUserRequest,
    ) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            UPDATE users
            SET name = $2, email = $3, role = $4, status = $5, updated_at = now()
            WHERE id = $1
            RETURNING id, name, email, password_hash, role, status, last_login, created_at, updated_at
            "#,
        )
        .bind(id)
        .bind(&fields.name)
        .bind(&fields.email)
        .bind(&fields.role)
        .bind(&fields.status)
        .fetch_optional(db)
        .await
    }

    /// Physically delete a user row; returns the number of rows removed.
    pub async fn delete(db: &PgPool, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;
        Ok(result.rows_affected())
    }

    /// All user rows.
    pub async fn list(db: &PgPool) -> Result<Vec<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password_hash, role, status, last_login, created_at, updated_at
            FROM users
            ORDER BY created_at
            "#,
        )
        .fetch_all(db)
        .await
    }

    /// User rows matching the supplied predicates. Every variable value is
    /// bound, never interpolated.
    pub async fn filter(
        db: &PgPool,
        role: Option<&str>,
        status: Option<&str>,
    ) -> Result<Vec<User>, sqlx::Error> {
        let mut query = QueryBuilder::<Postgres>::new(
            "SELECT id, name, email, password_hash, role, status, last_login, created_at, updated_at \
             FROM users WHERE 1=1",
        );
        if let Some(role) = role {
            query.push(" AND role = ").push_bind(role);
        }
        if let Some(status) = status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY created_at");

        query.build_query_as::<User>().fetch_all(db).await
    }
}
