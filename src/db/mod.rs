mod schema;

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use rust_decimal::Decimal;
use std::path::Path;
use std::str::FromStr;

use crate::models::*;

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let db = Self { conn };
        db.init_schema().context("Schema initialization failed")?;
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute_batch(schema::SCHEMA)?;
        Ok(())
    }

    // ── Transactions ──────────────────────────────────────────

    pub(crate) fn insert_transaction(&self, txn: &Transaction) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO transactions (date, amount, description, category)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                txn.date,
                txn.amount.to_string(),
                txn.description,
                txn.category,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_transactions(&self) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, date, amount, description, category FROM transactions ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(2)?;
            Ok(Transaction {
                id: Some(row.get(0)?),
                date: row.get(1)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
                description: row.get(3)?,
                category: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Budgets ───────────────────────────────────────────────

    pub(crate) fn insert_budget(&self, budget: &Budget) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO budgets (category, amount) VALUES (?1, ?2)",
            params![budget.category, budget.amount.to_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_budgets(&self) -> Result<Vec<Budget>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, category, amount FROM budgets ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            let amount_str: String = row.get(2)?;
            Ok(Budget {
                id: Some(row.get(0)?),
                category: row.get(1)?,
                amount: Decimal::from_str(&amount_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Goals ─────────────────────────────────────────────────

    pub(crate) fn insert_goal(&self, goal: &Goal) -> Result<i64> {
        self.conn.execute(
            "INSERT INTO goals (name, target) VALUES (?1, ?2)",
            params![goal.name, goal.target.to_string()],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    pub(crate) fn get_goals(&self) -> Result<Vec<Goal>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, target FROM goals ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            let target_str: String = row.get(2)?;
            Ok(Goal {
                id: Some(row.get(0)?),
                name: row.get(1)?,
                target: Decimal::from_str(&target_str).unwrap_or_default(),
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    // ── Maintenance ───────────────────────────────────────────

    /// Deletes every row from all three tables. Table definitions stay,
    /// and the auto-increment counters do not restart.
    pub(crate) fn reset_all(&self) -> Result<()> {
        self.conn
            .execute_batch("DELETE FROM transactions; DELETE FROM budgets; DELETE FROM goals;")
            .context("Failed to reset data")?;
        Ok(())
    }

    /// Writes the whole transactions table to `path` in ascending id
    /// order, overwriting any existing file. An empty table still
    /// produces a header-only file. Returns the number of rows written.
    pub(crate) fn export_to_csv(&self, path: &Path) -> Result<usize> {
        let txns = self.get_transactions()?;

        let mut wtr = csv::Writer::from_path(path)
            .with_context(|| format!("Failed to create export file: {}", path.display()))?;
        wtr.write_record(["id", "date", "amount", "description", "category"])?;
        for txn in &txns {
            wtr.write_record([
                txn.id.unwrap_or(0).to_string(),
                txn.date.clone(),
                txn.amount.to_string(),
                txn.description.clone(),
                txn.category.clone(),
            ])?;
        }
        wtr.flush()
            .with_context(|| format!("Failed to write export file: {}", path.display()))?;
        Ok(txns.len())
    }
}
