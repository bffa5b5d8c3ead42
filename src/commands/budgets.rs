// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;

use crate::engine::budget::{evaluate_budget, validate_limit};
use crate::engine::dates::current_month_key;
use crate::models::{BudgetEvaluation, TransactionType};
use crate::store::{self, TxFilter};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_decimal, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let month = parse_month(sub.get_one::<String>("month").unwrap().trim())?;
            let category = sub.get_one::<String>("category").unwrap().trim();
            store::delete_budget(conn, &month, category)?;
            println!("Removed budget for {} / {}", month, category);
        }
        Some(("report", sub)) => report(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn set(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let month = parse_month(sub.get_one::<String>("month").unwrap().trim())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let limit = parse_decimal(sub.get_one::<String>("limit").unwrap().trim())?;
    validate_limit(limit)?;
    if !store::category_exists(conn, &category, TransactionType::Expense)? {
        return Err(anyhow!("Expense category '{}' not found", category));
    }
    store::upsert_budget(conn, &month, &category, limit)?;
    println!("Budget set for {} / {} = {}", month, category, fmt_money(&limit));
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m.trim())?),
        None => None,
    };
    let data = store::list_budgets(conn, month.as_deref())?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|b| {
                vec![
                    b.month.clone(),
                    b.category.clone(),
                    fmt_money(&b.monthly_limit),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Month", "Category", "Limit"], rows));
    }
    Ok(())
}

fn report(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m.trim())?,
        None => current_month_key(),
    };
    let evaluations = evaluate_month(conn, &month)?;
    if !maybe_print_json(json_flag, jsonl_flag, &evaluations)? {
        let rows: Vec<Vec<String>> = evaluations
            .iter()
            .map(|e| {
                vec![
                    e.category.clone(),
                    fmt_money(&e.monthly_limit),
                    fmt_money(&e.spent),
                    fmt_money(&e.remaining),
                    fmt_percent(&e.percentage),
                    e.status.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Category", "Limit", "Spent", "Remaining", "Used", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

/// Evaluate every budget for a month against that month's expenses, most
/// consumed first (the dashboard's ordering).
pub fn evaluate_month(conn: &Connection, month: &str) -> Result<Vec<BudgetEvaluation>> {
    let budgets = store::list_budgets(conn, Some(month))?;
    let transactions = store::list_transactions(
        conn,
        &TxFilter {
            month: Some(month.to_string()),
            r#type: Some(TransactionType::Expense),
            ..TxFilter::default()
        },
    )?;
    let mut evaluations: Vec<BudgetEvaluation> = budgets
        .iter()
        .map(|b| evaluate_budget(b, &transactions))
        .collect();
    evaluations.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    Ok(evaluations)
}
