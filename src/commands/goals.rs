// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;

use crate::engine::goal::{apply_contribution, evaluate_goal, validate_initial, validate_target};
use crate::models::GoalEvaluation;
use crate::store;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("contribute", sub)) => contribute(conn, sub)?,
        Some(("rm", sub)) => {
            let name = sub.get_one::<String>("name").unwrap().trim();
            store::delete_goal(conn, name)?;
            println!("Removed goal '{}'", name);
        }
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim().to_string();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap().trim())?;
    let initial = parse_decimal(sub.get_one::<String>("initial").unwrap().trim())?;
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap().trim())?;
    validate_target(target)?;
    validate_initial(initial)?;
    store::insert_goal(conn, &name, target, initial, deadline)?;
    println!(
        "Added goal '{}': {} by {}",
        name,
        fmt_money(&target),
        deadline
    );
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let today = chrono::Local::now().date_naive();
    let evaluations: Vec<GoalEvaluation> = store::list_goals(conn)?
        .iter()
        .map(|g| evaluate_goal(g, today))
        .collect();
    if !maybe_print_json(json_flag, jsonl_flag, &evaluations)? {
        let rows: Vec<Vec<String>> = evaluations
            .iter()
            .map(|e| {
                vec![
                    e.name.clone(),
                    fmt_money(&e.current_amount),
                    fmt_money(&e.target_amount),
                    fmt_percent(&e.progress_percent),
                    e.deadline.to_string(),
                    e.days_remaining.to_string(),
                    e.status.as_str().to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Goal", "Saved", "Target", "Progress", "Deadline", "Days Left", "Status"],
                rows,
            )
        );
    }
    Ok(())
}

fn contribute(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let name = sub.get_one::<String>("name").unwrap().trim();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?;
    let goal = store::get_goal(conn, name)?;
    let updated = apply_contribution(&goal, amount)?;
    store::set_goal_amount(conn, updated.id, updated.current_amount)?;
    println!(
        "Added {} to '{}' ({} of {})",
        fmt_money(&amount),
        name,
        fmt_money(&updated.current_amount),
        fmt_money(&updated.target_amount)
    );
    Ok(())
}
