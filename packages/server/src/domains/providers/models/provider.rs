use anyhow::Result;
use sqlx::PgConnection;

use crate::common::{Page, ProviderId};

/// Provider model - an entity offering services, unique by email
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Provider {
    pub id: ProviderId,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub language: String,
    pub currency: String,
}

/// Input for creating a new provider
#[derive(Debug, Clone)]
pub struct CreateProvider {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub language: String,
    pub currency: String,
}

/// Partial update for a provider. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProvider {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub language: Option<String>,
    pub currency: Option<String>,
}

impl UpdateProvider {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Copy every supplied field onto `provider`.
    pub fn apply(self, provider: &mut Provider) {
        if let Some(name) = self.name {
            provider.name = name;
        }
        if let Some(email) = self.email {
            provider.email = email;
        }
        if let Some(phone_number) = self.phone_number {
            provider.phone_number = phone_number;
        }
        if let Some(language) = self.language {
            provider.language = language;
        }
        if let Some(currency) = self.currency {
            provider.currency = currency;
        }
    }
}

impl Provider {
    /// Find provider by ID, returning None if not found
    pub async fn find_by_id_optional(id: ProviderId, conn: &mut PgConnection) -> Result<Option<Self>> {
        let provider = sqlx::query_as::<_, Self>("SELECT * FROM providers WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?;
        Ok(provider)
    }

    /// Find provider by ID and lock the row until the session ends
    pub async fn find_by_id_for_update(
        id: ProviderId,
        conn: &mut PgConnection,
    ) -> Result<Option<Self>> {
        let provider =
            sqlx::query_as::<_, Self>("SELECT * FROM providers WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        Ok(provider)
    }

    pub async fn exists(id: ProviderId, conn: &mut PgConnection) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM providers WHERE id = $1)")
                .bind(id)
                .fetch_one(&mut *conn)
                .await?;
        Ok(exists)
    }

    /// Find one page of providers, oldest first
    pub async fn find_page(page: &Page, conn: &mut PgConnection) -> Result<Vec<Self>> {
        let providers = sqlx::query_as::<_, Self>(
            "SELECT * FROM providers ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(page.limit)
        .bind(page.offset)
        .fetch_all(&mut *conn)
        .await?;
        Ok(providers)
    }

    /// Create a new provider
    pub async fn create(input: CreateProvider, conn: &mut PgConnection) -> Result<Self> {
        let provider = sqlx::query_as::<_, Self>(
            r#"
            INSERT INTO providers (name, email, phone_number, language, currency)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&input.name)
        .bind(&input.email)
        .bind(&input.phone_number)
        .bind(&input.language)
        .bind(&input.currency)
        .fetch_one(&mut *conn)
        .await?;
        Ok(provider)
    }

    /// Write every column of this provider back to its row
    pub async fn save(&self, conn: &mut PgConnection) -> Result<Self> {
        let provider = sqlx::query_as::<_, Self>(
            r#"
            UPDATE providers SET
                name = $2,
                email = $3,
                phone_number = $4,
                language = $5,
                currency = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(self.id)
        .bind(&self.name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(&self.language)
        .bind(&self.currency)
        .fetch_one(&mut *conn)
        .await?;
        Ok(provider)
    }

    /// Delete a provider (its service areas cascade).
    /// Returns false if no row matched.
    pub async fn delete(id: ProviderId, conn: &mut PgConnection) -> Result<bool> {
        let result = sqlx::query("DELETE FROM providers WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all providers
    pub async fn count(conn: &mut PgConnection) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM providers")
            .fetch_one(&mut *conn)
            .await?;
        Ok(count)
    }
}
