//! PostgreSQL sink with idempotent upserts.
//!
//! Districts are keyed by unique domain and leads by unique email, so
//! repeated full re-runs converge on one row each: the second write's
//! mutable fields are applied, identity fields are left alone.

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{SinkError, SinkResult};
use crate::types::DistrictRecord;

/// Rows touched by one save.
#[derive(Debug, Default, Clone, Copy)]
pub struct SaveStats {
    pub districts: usize,
    pub leads: usize,
}

pub struct PostgresSink {
    pool: PgPool,
}

impl PostgresSink {
    /// Connect and run migrations.
    pub async fn new(database_url: &str) -> SinkResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await
            .map_err(|e| SinkError::Storage(e.to_string().into()))?;

        Self::from_pool(pool).await
    }

    /// Reuse an existing connection pool.
    pub async fn from_pool(pool: PgPool) -> SinkResult<Self> {
        let sink = Self { pool };
        sink.run_migrations().await?;
        Ok(sink)
    }

    async fn run_migrations(&self) -> SinkResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS districts (
                id UUID PRIMARY KEY,
                district_name TEXT NOT NULL,
                domain TEXT NOT NULL UNIQUE,
                enrollment INTEGER NOT NULL DEFAULT 0,
                city TEXT,
                state TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| SinkError::Storage(e.to_string().into()))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS leads (
                id UUID PRIMARY KEY,
                district_id UUID NOT NULL REFERENCES districts(id),
                full_name TEXT NOT NULL,
                first_name TEXT NOT NULL,
                last_name TEXT NOT NULL,
                title TEXT NOT NULL,
                email TEXT NOT NULL UNIQUE,
                phone TEXT,
                linkedin_url TEXT,
                persona TEXT NOT NULL,
                enriched_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| SinkError::Storage(e.to_string().into()))?;

        Ok(())
    }

    /// Upsert districts (by domain) and their contacts (by email).
    ///
    /// Districts without a domain and contacts without an email have no
    /// identity key and are skipped with a log line.
    pub async fn save(&self, districts: &[DistrictRecord]) -> SinkResult<SaveStats> {
        let mut stats = SaveStats::default();

        for district in districts {
            let Some(domain) = district.domain.as_deref() else {
                debug!(district = %district.name, "No domain, not persistable");
                continue;
            };

            let (district_id,): (Uuid,) = sqlx::query_as(
                r#"
                INSERT INTO districts (id, district_name, domain, enrollment, city, state)
                VALUES ($1, $2, $3, $4, $5, $6)
                ON CONFLICT (domain) DO UPDATE SET
                    district_name = EXCLUDED.district_name,
                    enrollment = EXCLUDED.enrollment,
                    city = EXCLUDED.city,
                    state = EXCLUDED.state
                RETURNING id
                "#,
            )
            .bind(Uuid::now_v7())
            .bind(&district.name)
            .bind(domain)
            .bind(district.enrollment as i32)
            .bind(district.city.as_deref())
            .bind(district.state.as_deref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| SinkError::Storage(e.to_string().into()))?;

            stats.districts += 1;

            for contact in &district.contacts {
                let Some(email) = contact.email.as_deref() else {
                    debug!(person = %contact.full_name, "No email, not persistable");
                    continue;
                };

                sqlx::query(
                    r#"
                    INSERT INTO leads (
                        id, district_id, full_name, first_name, last_name,
                        title, email, phone, linkedin_url, persona
                    ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    ON CONFLICT (email) DO UPDATE SET
                        title = EXCLUDED.title,
                        phone = EXCLUDED.phone,
                        linkedin_url = EXCLUDED.linkedin_url,
                        persona = EXCLUDED.persona,
                        enriched_at = NOW()
                    "#,
                )
                .bind(Uuid::now_v7())
                .bind(district_id)
                .bind(&contact.full_name)
                .bind(&contact.first_name)
                .bind(&contact.last_name)
                .bind(&contact.title)
                .bind(email)
                .bind(contact.phone.as_deref())
                .bind(contact.linkedin_url.as_deref())
                .bind(contact.persona.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| SinkError::Storage(e.to_string().into()))?;

                stats.leads += 1;
            }
        }

        info!(
            districts = stats.districts,
            leads = stats.leads,
            "Saved to Postgres"
        );
        Ok(stats)
    }
}
