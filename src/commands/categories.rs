// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::models::TransactionType;
use crate::store;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let r#type = TransactionType::parse(sub.get_one::<String>("type").unwrap().trim())?;
            let color = sub.get_one::<String>("color").unwrap();
            store::insert_category(conn, name, r#type, color)?;
            println!("Added {} category '{}'", r#type.as_str(), name);
        }
        Some(("list", sub)) => {
            let json_flag = sub.get_flag("json");
            let jsonl_flag = sub.get_flag("jsonl");
            let r#type = match sub.get_one::<String>("type") {
                Some(t) => Some(TransactionType::parse(t.trim())?),
                None => None,
            };
            let data = store::list_categories(conn, r#type)?;
            if !maybe_print_json(json_flag, jsonl_flag, &data)? {
                let rows: Vec<Vec<String>> = data
                    .iter()
                    .map(|c| {
                        vec![
                            c.name.clone(),
                            c.r#type.as_str().to_string(),
                            c.color.clone(),
                            if c.is_default { "yes".into() } else { "".into() },
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Category", "Type", "Color", "Default"], rows)
                );
            }
        }
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            let r#type = TransactionType::parse(sub.get_one::<String>("type").unwrap().trim())?;
            store::delete_category(conn, name, r#type)?;
            println!("Removed category '{}'", name);
        }
        _ => {}
    }
    Ok(())
}
