//! Customer contact list, addressed by name.

use crate::domain::model::Customer;
use crate::domain::{matches_filter, title_case};
use anyhow::{Context, Result};
use sqlx::SqlitePool;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct CustomerDirectory {
    pool: SqlitePool,
}

impl CustomerDirectory {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Saves a customer under the title-cased `name`. An existing customer with that name has
    /// its phone and email replaced; otherwise a new record is created.
    pub async fn save(&self, name: &str, phone: &str, email: &str) -> Result<Customer> {
        let name = title_case(name);
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_scalar::<_, i64>(
            "SELECT id FROM customers WHERE name = ?1 ORDER BY id ASC LIMIT 1",
        )
        .bind(&name)
        .fetch_optional(&mut *tx)
        .await?;

        let id = match existing {
            Some(id) => {
                sqlx::query("UPDATE customers SET phone = ?1, email = ?2 WHERE id = ?3")
                    .bind(phone)
                    .bind(email)
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .context("failed to update customer")?;
                id
            }
            None => sqlx::query("INSERT INTO customers (name, phone, email) VALUES (?1, ?2, ?3)")
                .bind(&name)
                .bind(phone)
                .bind(email)
                .execute(&mut *tx)
                .await
                .context("failed to insert customer")?
                .last_insert_rowid(),
        };

        tx.commit().await?;
        debug!(id, customer = %name, updated = existing.is_some(), "saved customer");

        Ok(Customer {
            id,
            name,
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }

    /// Removes customers whose name is exactly `name`. Returns whether any matched.
    pub async fn delete(&self, name: &str) -> Result<bool> {
        let removed = sqlx::query("DELETE FROM customers WHERE name = ?1")
            .bind(name)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete customer {}", name))?
            .rows_affected()
            > 0;
        debug!(customer = name, removed, "deleted customer");
        Ok(removed)
    }

    pub async fn list(&self) -> Result<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, phone, email FROM customers ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .context("failed to list customers")?;
        Ok(customers)
    }

    /// Customers whose name or phone contains `term` (case-insensitive).
    pub async fn search(&self, term: &str) -> Result<Vec<Customer>> {
        Ok(self
            .list()
            .await?
            .into_iter()
            .filter(|c| matches_filter(&c.name, Some(term)) || matches_filter(&c.phone, Some(term)))
            .collect())
    }
}
