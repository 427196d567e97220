//! Contact repository for database operations
//!
//! Every read/update/delete here filters by both the contact id and the
//! owning user's id. A contact belonging to another user is
//! indistinguishable from a missing one at this layer.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

/// Contact record from database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContactRecord {
    pub id: i64,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    pub additional_info: Option<String>,
    pub owner_id: i64,
    pub created_at: DateTime<Utc>,
}

/// Mutable contact fields for create and full-replace update
#[derive(Debug, Clone)]
pub struct ContactFields {
    pub name: String,
    pub surname: String,
    pub email: String,
    pub phone: String,
    pub birthday: NaiveDate,
    pub additional_info: Option<String>,
}

/// Contact repository for database operations
pub struct ContactRepository;

impl ContactRepository {
    /// Create a new contact owned by the given user
    pub async fn create(pool: &PgPool, owner_id: i64, fields: ContactFields) -> Result<ContactRecord> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            INSERT INTO contacts (name, surname, email, phone, birthday, additional_info, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.surname)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.birthday)
        .bind(&fields.additional_info)
        .bind(owner_id)
        .fetch_one(pool)
        .await?;

        Ok(record)
    }

    /// List contacts owned by a user, in insertion order.
    ///
    /// When `search` is given, only contacts whose name or email contains
    /// it (case-insensitive) are returned. The search term is always a
    /// bound parameter.
    pub async fn list(
        pool: &PgPool,
        owner_id: i64,
        skip: i64,
        limit: i64,
        search: Option<&str>,
    ) -> Result<Vec<ContactRecord>> {
        let records = match search {
            Some(term) => {
                let pattern = format!("%{}%", term);
                sqlx::query_as::<_, ContactRecord>(
                    r#"
                    SELECT id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
                    FROM contacts
                    WHERE owner_id = $1 AND (name ILIKE $2 OR email ILIKE $2)
                    ORDER BY id
                    OFFSET $3 LIMIT $4
                    "#,
                )
                .bind(owner_id)
                .bind(pattern)
                .bind(skip)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ContactRecord>(
                    r#"
                    SELECT id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
                    FROM contacts
                    WHERE owner_id = $1
                    ORDER BY id
                    OFFSET $2 LIMIT $3
                    "#,
                )
                .bind(owner_id)
                .bind(skip)
                .bind(limit)
                .fetch_all(pool)
                .await?
            }
        };

        Ok(records)
    }

    /// Fetch a single contact by id, scoped to its owner
    pub async fn find(pool: &PgPool, id: i64, owner_id: i64) -> Result<Option<ContactRecord>> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            SELECT id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
            FROM contacts
            WHERE id = $1 AND owner_id = $2
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Full replace of all mutable fields, scoped to the owner.
    ///
    /// Returns `None` when the contact is missing or owned by someone
    /// else; the row is left untouched in that case.
    pub async fn update(
        pool: &PgPool,
        id: i64,
        owner_id: i64,
        fields: ContactFields,
    ) -> Result<Option<ContactRecord>> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            UPDATE contacts SET
                name = $3,
                surname = $4,
                email = $5,
                phone = $6,
                birthday = $7,
                additional_info = $8
            WHERE id = $1 AND owner_id = $2
            RETURNING id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .bind(&fields.name)
        .bind(&fields.surname)
        .bind(&fields.email)
        .bind(&fields.phone)
        .bind(fields.birthday)
        .bind(&fields.additional_info)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }

    /// Delete a contact, scoped to the owner.
    ///
    /// Returns the deleted row, or `None` when absent.
    pub async fn delete(pool: &PgPool, id: i64, owner_id: i64) -> Result<Option<ContactRecord>> {
        let record = sqlx::query_as::<_, ContactRecord>(
            r#"
            DELETE FROM contacts
            WHERE id = $1 AND owner_id = $2
            RETURNING id, name, surname, email, phone, birthday, additional_info, owner_id, created_at
            "#,
        )
        .bind(id)
        .bind(owner_id)
        .fetch_optional(pool)
        .await?;

        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    // Integration tests require database - see backend/tests/
}
