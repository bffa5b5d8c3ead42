// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

use crate::engine::aggregate::aggregate_by_month;
use crate::engine::dates::{current_month_key, month_key, month_range};
use crate::engine::report::summarize;
use crate::store::{self, TxFilter};
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("cashflow", sub)) => cashflow(conn, sub)?,
        Some(("overview", sub)) => overview(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    // Period scoping happens here, before the summarizer ever runs: either a
    // single month or a whole calendar year.
    let transactions = match (
        sub.get_one::<String>("month"),
        sub.get_one::<String>("year"),
    ) {
        (Some(_), Some(_)) => {
            return Err(anyhow!("Use either --month or --year, not both"));
        }
        (Some(m), None) => {
            let month = parse_month(m.trim())?;
            store::list_transactions(
                conn,
                &TxFilter {
                    month: Some(month),
                    ..TxFilter::default()
                },
            )?
        }
        (None, Some(y)) => {
            let year: i32 = y
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid year '{}', expected YYYY", y))?;
            let prefix = format!("{:04}-", year);
            store::list_transactions(conn, &TxFilter::default())?
                .into_iter()
                .filter(|t| t.date.to_string().starts_with(&prefix))
                .collect()
        }
        (None, None) => store::list_transactions(
            conn,
            &TxFilter {
                month: Some(current_month_key()),
                ..TxFilter::default()
            },
        )?,
    };

    let summary = summarize(&transactions);
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        println!(
            "Income: {}   Expenses: {}   Net: {}   Savings rate: {}   Transactions: {}",
            fmt_money(&summary.income),
            fmt_money(&summary.expenses),
            fmt_money(&summary.net_income),
            fmt_percent(&summary.savings_rate),
            summary.transaction_count
        );
        let rows: Vec<Vec<String>> = summary
            .category_breakdown
            .iter()
            .map(|s| {
                vec![
                    s.category.clone(),
                    fmt_money(&s.amount),
                    fmt_percent(&s.percentage),
                ]
            })
            .collect();
        println!("{}", pretty_table(&["Category", "Spent", "Share"], rows));
    }
    Ok(())
}

fn cashflow(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let months: usize = *sub.get_one::<usize>("months").unwrap();

    let transactions = store::list_transactions(conn, &TxFilter::default())?;
    let keys = month_range(&current_month_key(), months)?;
    let flows = aggregate_by_month(&transactions, keys);
    if !maybe_print_json(json_flag, jsonl_flag, &flows)? {
        let rows: Vec<Vec<String>> = flows
            .iter()
            .map(|f| {
                vec![
                    f.month.clone(),
                    fmt_money(&f.income),
                    fmt_money(&f.expenses),
                    fmt_money(&(f.income - f.expenses)),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Month", "Income", "Expenses", "Net"], rows)
        );
    }
    Ok(())
}

fn overview(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let all = store::list_transactions(conn, &TxFilter::default())?;
    let total = summarize(&all);
    let month = current_month_key();
    let this_month: Vec<_> = all
        .iter()
        .filter(|t| month_key(t.date) == month)
        .cloned()
        .collect();
    let monthly = summarize(&this_month);

    let payload = json!({
        "total_balance": total.net_income,
        "total_income": total.income,
        "total_expenses": total.expenses,
        "month": month,
        "monthly_income": monthly.income,
        "monthly_expenses": monthly.expenses,
        "monthly_net": monthly.net_income,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let rows = vec![
            vec!["Balance (all time)".to_string(), fmt_money(&total.net_income)],
            vec!["Income (all time)".to_string(), fmt_money(&total.income)],
            vec!["Expenses (all time)".to_string(), fmt_money(&total.expenses)],
            vec![format!("Income ({})", month), fmt_money(&monthly.income)],
            vec![format!("Expenses ({})", month), fmt_money(&monthly.expenses)],
            vec![format!("Net ({})", month), fmt_money(&monthly.net_income)],
        ];
        println!("{}", pretty_table(&["Metric", "Amount"], rows));
    }
    Ok(())
}
