// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use serde_json::json;

use crate::store::{self, TxFilter};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut data = store::list_transactions(conn, &TxFilter::default())?;
    // list is newest-first for display; exports go oldest-first
    data.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["id", "date", "amount", "category", "type", "description"])?;
            for t in &data {
                wtr.write_record([
                    t.id.to_string(),
                    t.date.to_string(),
                    t.amount.to_string(),
                    t.category.clone(),
                    t.r#type.as_str().to_string(),
                    t.description.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = data
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date.to_string(),
                        "amount": t.amount,
                        "category": t.category,
                        "type": t.r#type.as_str(),
                        "description": t.description,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
        }
    }
    println!("Exported {} transactions to {}", data.len(), out);
    Ok(())
}
