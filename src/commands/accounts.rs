// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;
use rust_decimal::Decimal;
use serde_json::json;

use crate::models::BankAccount;
use crate::store;
use crate::utils::{fmt_money, maybe_print_json, parse_decimal, pretty_table};

const ACCOUNT_TYPES: [&str; 4] = ["Checking", "Savings", "Credit Card", "Other"];

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("summary", sub)) => summary(conn, sub)?,
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            store::delete_account(conn, name)?;
            println!("Removed account '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let account_type = sub.get_one::<String>("type").unwrap().trim().to_string();
    if !ACCOUNT_TYPES.contains(&account_type.as_str()) {
        return Err(anyhow!(
            "Invalid account type '{}', expected one of {}",
            account_type,
            ACCOUNT_TYPES.join("|")
        ));
    }
    let account = BankAccount {
        id: 0,
        name: sub.get_one::<String>("name").unwrap().trim().to_string(),
        bank_name: sub.get_one::<String>("bank").unwrap().trim().to_string(),
        account_number: sub.get_one::<String>("number").unwrap().trim().to_string(),
        account_type,
        currency: sub.get_one::<String>("currency").unwrap().trim().to_uppercase(),
        balance: parse_decimal(sub.get_one::<String>("balance").unwrap().trim())?,
    };
    store::insert_account(conn, &account)?;
    println!(
        "Added account '{}' ({} at {}, {})",
        account.name,
        account.account_type,
        account.bank_name,
        fmt_money(&account.balance)
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = store::list_accounts(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|a| {
                vec![
                    a.name.clone(),
                    a.bank_name.clone(),
                    mask_number(&a.account_number),
                    a.account_type.clone(),
                    a.currency.clone(),
                    fmt_money(&a.balance),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Name", "Bank", "Number", "Type", "CCY", "Balance"],
                rows,
            )
        );
    }
    Ok(())
}

fn summary(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let accounts = store::list_accounts(conn)?;
    let total: Decimal = accounts.iter().map(|a| a.balance).sum();
    let by_type = |t: &str| -> Decimal {
        accounts
            .iter()
            .filter(|a| a.account_type == t)
            .map(|a| a.balance)
            .sum()
    };
    let checking = by_type("Checking");
    let savings = by_type("Savings");

    let payload = json!({
        "total_balance": total,
        "accounts": accounts.len(),
        "checking_balance": checking,
        "savings_balance": savings,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let rows = vec![
            vec!["Total balance".to_string(), fmt_money(&total)],
            vec!["Accounts".to_string(), accounts.len().to_string()],
            vec!["Checking".to_string(), fmt_money(&checking)],
            vec!["Savings".to_string(), fmt_money(&savings)],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}

/// Show only the last four digits, dashboard-style.
fn mask_number(number: &str) -> String {
    let tail: String = number
        .chars()
        .rev()
        .take(4)
        .collect::<Vec<_>>()
        .into_iter()
        .rev()
        .collect();
    format!("****{}", tail)
}
