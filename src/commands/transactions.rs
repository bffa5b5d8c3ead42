// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use rusqlite::Connection;

use crate::engine::validate_amount;
use crate::models::TransactionType;
use crate::store::{self, TxFilter};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let t = store::get_transaction(conn, id)?;
            store::delete_transaction(conn, id)?;
            println!(
                "Deleted transaction {}: {} {} {} ({})",
                id,
                t.date,
                fmt_money(&t.amount),
                t.category,
                t.r#type.as_str()
            );
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let date = parse_date(sub.get_one::<String>("date").unwrap().trim())?;
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let category = sub.get_one::<String>("category").unwrap().trim().to_string();
    let r#type = TransactionType::parse(sub.get_one::<String>("type").unwrap().trim())?;
    let description = sub.get_one::<String>("description").unwrap().to_string();

    validate_amount(amount)?;
    if !store::category_exists(conn, &category, r#type)? {
        return Err(anyhow!(
            "Category '{}' not found for type {}",
            category,
            r#type.as_str()
        ));
    }

    store::insert_transaction(conn, date, amount, &category, r#type, &description)?;
    println!(
        "Recorded {} {} on {} ({})",
        r#type.as_str(),
        fmt_money(&amount),
        date,
        category
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let filter = filter_from_matches(sub)?;
    let data = store::list_transactions(conn, &filter)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.r#type.as_str().to_string(),
                    t.category.clone(),
                    fmt_money(&t.amount),
                    t.description.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Category", "Amount", "Description"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn filter_from_matches(sub: &clap::ArgMatches) -> Result<TxFilter> {
    let month = match sub.get_one::<String>("month") {
        Some(m) => Some(parse_month(m.trim())?),
        None => None,
    };
    let r#type = match sub.get_one::<String>("type") {
        Some(t) => Some(TransactionType::parse(t.trim())?),
        None => None,
    };
    Ok(TxFilter {
        month,
        category: sub.get_one::<String>("category").map(|s| s.trim().to_string()),
        r#type,
        limit: sub.get_one::<usize>("limit").copied(),
    })
}
