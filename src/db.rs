// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::PathBuf;

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Moneymap", "moneymap"));

const DEFAULT_CATEGORIES: &[(&str, &str, &str)] = &[
    ("Salary", "income", "#10b981"),
    ("Freelance", "income", "#14b8a6"),
    ("Investments", "income", "#06b6d4"),
    ("Other Income", "income", "#22c55e"),
    ("Food", "expense", "#f59e0b"),
    ("Transportation", "expense", "#3b82f6"),
    ("Housing", "expense", "#8b5cf6"),
    ("Shopping", "expense", "#ec4899"),
    ("Entertainment", "expense", "#f43f5e"),
    ("Bills & Utilities", "expense", "#64748b"),
    ("Healthcare", "expense", "#ef4444"),
    ("Other Expense", "expense", "#a3a3a3"),
];

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("moneymap.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    let mut conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&mut conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &mut Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    PRAGMA foreign_keys = ON;

    CREATE TABLE IF NOT EXISTS categories(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('income','expense')),
        color TEXT NOT NULL DEFAULT '#64748b',
        is_default INTEGER NOT NULL DEFAULT 0,
        UNIQUE(name, type)
    );

    CREATE TABLE IF NOT EXISTS transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT NOT NULL,
        amount TEXT NOT NULL,
        category TEXT NOT NULL,
        type TEXT NOT NULL CHECK(type IN ('income','expense')),
        description TEXT NOT NULL DEFAULT '',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    CREATE INDEX IF NOT EXISTS idx_transactions_date ON transactions(date);
    CREATE INDEX IF NOT EXISTS idx_transactions_category ON transactions(category);

    CREATE TABLE IF NOT EXISTS budgets(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        month TEXT NOT NULL,
        category TEXT NOT NULL,
        monthly_limit TEXT NOT NULL,
        UNIQUE(month, category)
    );

    CREATE TABLE IF NOT EXISTS goals(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        target_amount TEXT NOT NULL,
        current_amount TEXT NOT NULL DEFAULT '0',
        deadline TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );

    CREATE TABLE IF NOT EXISTS accounts(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL UNIQUE,
        bank_name TEXT NOT NULL,
        account_number TEXT NOT NULL,
        account_type TEXT NOT NULL CHECK(account_type IN ('Checking','Savings','Credit Card','Other')),
        currency TEXT NOT NULL DEFAULT 'USD',
        balance TEXT NOT NULL DEFAULT '0',
        created_at TEXT NOT NULL DEFAULT (datetime('now'))
    );
    "#,
    )?;
    seed_default_categories(conn)?;
    Ok(())
}

/// Built-in categories are created once and marked default so they cannot be
/// removed; user-created categories live alongside them.
pub fn seed_default_categories(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO categories(name, type, color, is_default) VALUES (?1, ?2, ?3, 1)",
    )?;
    for (name, typ, color) in DEFAULT_CATEGORIES {
        stmt.execute(rusqlite::params![name, typ, color])?;
    }
    Ok(())
}
