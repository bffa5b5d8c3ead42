// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Record-store adapter: typed list/get/create/update/delete per entity.
//! All SQL and column naming stays here; the aggregation engine only ever
//! sees the canonical model structs.

use anyhow::{Context, Result, anyhow};
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::Decimal;

use crate::models::{BankAccount, Budget, Category, SavingsGoal, Transaction, TransactionType};
use crate::utils::parse_date;

#[derive(Debug, Default, Clone)]
pub struct TxFilter {
    pub month: Option<String>,
    pub category: Option<String>,
    pub r#type: Option<TransactionType>,
    pub limit: Option<usize>,
}

pub fn list_transactions(conn: &Connection, filter: &TxFilter) -> Result<Vec<Transaction>> {
    let mut sql = String::from(
        "SELECT id, date, amount, category, type, description FROM transactions WHERE 1=1",
    );
    let mut params_vec: Vec<String> = Vec::new();
    if let Some(month) = &filter.month {
        sql.push_str(" AND substr(date,1,7)=?");
        params_vec.push(month.clone());
    }
    if let Some(cat) = &filter.category {
        sql.push_str(" AND category=?");
        params_vec.push(cat.clone());
    }
    if let Some(t) = filter.r#type {
        sql.push_str(" AND type=?");
        params_vec.push(t.as_str().to_string());
    }
    sql.push_str(" ORDER BY date DESC, id DESC");
    if let Some(limit) = filter.limit {
        sql.push_str(" LIMIT ?");
        params_vec.push(limit.to_string());
    }

    let mut stmt = conn.prepare(&sql)?;
    let mut rows = if params_vec.is_empty() {
        stmt.query([])?
    } else {
        let params: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        stmt.query(rusqlite::params_from_iter(params))?
    };

    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(transaction_from_row(
            r.get(0)?,
            r.get(1)?,
            r.get(2)?,
            r.get(3)?,
            r.get(4)?,
            r.get(5)?,
        )?);
    }
    Ok(data)
}

pub fn get_transaction(conn: &Connection, id: i64) -> Result<Transaction> {
    let row: Option<(String, String, String, String, String)> = conn
        .query_row(
            "SELECT date, amount, category, type, description FROM transactions WHERE id=?1",
            params![id],
            |r| {
                Ok((
                    r.get(0)?,
                    r.get(1)?,
                    r.get(2)?,
                    r.get(3)?,
                    r.get(4)?,
                ))
            },
        )
        .optional()?;
    let (date, amount, category, typ, description) =
        row.ok_or_else(|| anyhow!("Transaction {} not found", id))?;
    transaction_from_row(id, date, amount, category, typ, description)
}

pub fn insert_transaction(
    conn: &Connection,
    date: NaiveDate,
    amount: Decimal,
    category: &str,
    r#type: TransactionType,
    description: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO transactions(date, amount, category, type, description)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            date.to_string(),
            amount.to_string(),
            category,
            r#type.as_str(),
            description
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_transaction(conn: &Connection, id: i64) -> Result<()> {
    let n = conn.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
    if n == 0 {
        return Err(anyhow!("Transaction {} not found", id));
    }
    Ok(())
}

fn transaction_from_row(
    id: i64,
    date: String,
    amount: String,
    category: String,
    r#type: String,
    description: String,
) -> Result<Transaction> {
    Ok(Transaction {
        id,
        date: parse_date(&date)?,
        amount: amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transactions", amount))?,
        category,
        r#type: TransactionType::parse(&r#type)?,
        description,
    })
}

pub fn list_categories(
    conn: &Connection,
    r#type: Option<TransactionType>,
) -> Result<Vec<Category>> {
    let mut sql =
        String::from("SELECT id, name, type, color, is_default FROM categories WHERE 1=1");
    if r#type.is_some() {
        sql.push_str(" AND type=?1");
    }
    sql.push_str(" ORDER BY type, name");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match r#type {
        Some(t) => stmt.query(params![t.as_str()])?,
        None => stmt.query([])?,
    };
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let typ: String = r.get(2)?;
        data.push(Category {
            id: r.get(0)?,
            name: r.get(1)?,
            r#type: TransactionType::parse(&typ)?,
            color: r.get(3)?,
            is_default: r.get(4)?,
        });
    }
    Ok(data)
}

pub fn category_exists(conn: &Connection, name: &str, r#type: TransactionType) -> Result<bool> {
    let found: Option<i64> = conn
        .query_row(
            "SELECT id FROM categories WHERE name=?1 AND type=?2",
            params![name, r#type.as_str()],
            |r| r.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

pub fn insert_category(
    conn: &Connection,
    name: &str,
    r#type: TransactionType,
    color: &str,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO categories(name, type, color, is_default) VALUES (?1, ?2, ?3, 0)",
        params![name, r#type.as_str(), color],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_category(conn: &Connection, name: &str, r#type: TransactionType) -> Result<()> {
    let is_default: Option<bool> = conn
        .query_row(
            "SELECT is_default FROM categories WHERE name=?1 AND type=?2",
            params![name, r#type.as_str()],
            |r| r.get(0),
        )
        .optional()?;
    match is_default {
        None => Err(anyhow!("Category '{}' not found", name)),
        Some(true) => Err(anyhow!("Cannot delete default category '{}'", name)),
        Some(false) => {
            conn.execute(
                "DELETE FROM categories WHERE name=?1 AND type=?2",
                params![name, r#type.as_str()],
            )?;
            Ok(())
        }
    }
}

pub fn list_budgets(conn: &Connection, month: Option<&str>) -> Result<Vec<Budget>> {
    let mut sql = String::from("SELECT id, month, category, monthly_limit FROM budgets WHERE 1=1");
    if month.is_some() {
        sql.push_str(" AND month=?1");
    }
    sql.push_str(" ORDER BY month DESC, category");
    let mut stmt = conn.prepare(&sql)?;
    let mut rows = match month {
        Some(m) => stmt.query(params![m])?,
        None => stmt.query([])?,
    };
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let limit: String = r.get(3)?;
        data.push(Budget {
            id: r.get(0)?,
            month: r.get(1)?,
            category: r.get(2)?,
            monthly_limit: limit
                .parse::<Decimal>()
                .with_context(|| format!("Invalid monthly limit '{}' in budgets", limit))?,
        });
    }
    Ok(data)
}

/// Upsert by the (month, category) natural key: at most one budget exists per
/// pair, and setting again replaces the limit.
pub fn upsert_budget(
    conn: &Connection,
    month: &str,
    category: &str,
    monthly_limit: Decimal,
) -> Result<()> {
    conn.execute(
        "INSERT INTO budgets(month, category, monthly_limit) VALUES (?1,?2,?3)
         ON CONFLICT(month, category) DO UPDATE SET monthly_limit=excluded.monthly_limit",
        params![month, category, monthly_limit.to_string()],
    )?;
    Ok(())
}

pub fn delete_budget(conn: &Connection, month: &str, category: &str) -> Result<()> {
    let n = conn.execute(
        "DELETE FROM budgets WHERE month=?1 AND category=?2",
        params![month, category],
    )?;
    if n == 0 {
        return Err(anyhow!("No budget for {} / {}", month, category));
    }
    Ok(())
}

pub fn list_goals(conn: &Connection) -> Result<Vec<SavingsGoal>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, target_amount, current_amount, deadline FROM goals ORDER BY deadline",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        data.push(goal_from_row(
            r.get(0)?,
            r.get(1)?,
            r.get(2)?,
            r.get(3)?,
            r.get(4)?,
        )?);
    }
    Ok(data)
}

pub fn get_goal(conn: &Connection, name: &str) -> Result<SavingsGoal> {
    let row: Option<(i64, String, String, String)> = conn
        .query_row(
            "SELECT id, target_amount, current_amount, deadline FROM goals WHERE name=?1",
            params![name],
            |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?)),
        )
        .optional()?;
    let (id, target, current, deadline) =
        row.ok_or_else(|| anyhow!("Goal '{}' not found", name))?;
    goal_from_row(id, name.to_string(), target, current, deadline)
}

pub fn insert_goal(
    conn: &Connection,
    name: &str,
    target_amount: Decimal,
    current_amount: Decimal,
    deadline: NaiveDate,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO goals(name, target_amount, current_amount, deadline) VALUES (?1,?2,?3,?4)",
        params![
            name,
            target_amount.to_string(),
            current_amount.to_string(),
            deadline.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn set_goal_amount(conn: &Connection, id: i64, current_amount: Decimal) -> Result<()> {
    let n = conn.execute(
        "UPDATE goals SET current_amount=?1 WHERE id=?2",
        params![current_amount.to_string(), id],
    )?;
    if n == 0 {
        return Err(anyhow!("Goal {} not found", id));
    }
    Ok(())
}

pub fn delete_goal(conn: &Connection, name: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM goals WHERE name=?1", params![name])?;
    if n == 0 {
        return Err(anyhow!("Goal '{}' not found", name));
    }
    Ok(())
}

fn goal_from_row(
    id: i64,
    name: String,
    target_amount: String,
    current_amount: String,
    deadline: String,
) -> Result<SavingsGoal> {
    Ok(SavingsGoal {
        id,
        name,
        target_amount: target_amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid target amount '{}' in goals", target_amount))?,
        current_amount: current_amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid current amount '{}' in goals", current_amount))?,
        deadline: parse_date(&deadline)?,
    })
}

pub fn list_accounts(conn: &Connection) -> Result<Vec<BankAccount>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, bank_name, account_number, account_type, currency, balance
         FROM accounts ORDER BY name",
    )?;
    let mut rows = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = rows.next()? {
        let balance: String = r.get(6)?;
        data.push(BankAccount {
            id: r.get(0)?,
            name: r.get(1)?,
            bank_name: r.get(2)?,
            account_number: r.get(3)?,
            account_type: r.get(4)?,
            currency: r.get(5)?,
            balance: balance
                .parse::<Decimal>()
                .with_context(|| format!("Invalid balance '{}' in accounts", balance))?,
        });
    }
    Ok(data)
}

pub fn insert_account(conn: &Connection, account: &BankAccount) -> Result<i64> {
    conn.execute(
        "INSERT INTO accounts(name, bank_name, account_number, account_type, currency, balance)
         VALUES (?1,?2,?3,?4,?5,?6)",
        params![
            account.name,
            account.bank_name,
            account.account_number,
            account.account_type,
            account.currency,
            account.balance.to_string()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_account(conn: &Connection, name: &str) -> Result<()> {
    let n = conn.execute("DELETE FROM accounts WHERE name=?1", params![name])?;
    if n == 0 {
        return Err(anyhow!("Account '{}' not found", name));
    }
    Ok(())
}
