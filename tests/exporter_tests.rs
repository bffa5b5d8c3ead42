// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneymap::models::TransactionType;
use moneymap::{cli, commands::exporter, store};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    moneymap::db::init_schema(&mut conn).unwrap();
    store::insert_transaction(
        &conn,
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        Decimal::from_str_exact("50.25").unwrap(),
        "Food",
        TransactionType::Expense,
        "groceries",
    )
    .unwrap();
    store::insert_transaction(
        &conn,
        NaiveDate::from_ymd_opt(2024, 3, 4).unwrap(),
        Decimal::from(4000),
        "Salary",
        TransactionType::Income,
        "march pay",
    )
    .unwrap();
    conn
}

fn run_export(conn: &Connection, format: &str, out: &str) {
    let matches = cli::build_cli().get_matches_from([
        "moneymap",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    let Some(("export", export_m)) = matches.subcommand() else {
        panic!("no export subcommand");
    };
    exporter::handle(conn, export_m).unwrap();
}

#[test]
fn csv_export_is_oldest_first_with_header() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tx.csv");
    run_export(&conn, "csv", path.to_str().unwrap());

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "id,date,amount,category,type,description");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].contains("2024-03-01"));
    assert!(lines[1].contains("50.25"));
    assert!(lines[2].contains("2024-03-04"));
}

#[test]
fn json_export_round_trips() {
    let conn = setup();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tx.json");
    run_export(&conn, "json", path.to_str().unwrap());

    let content = std::fs::read_to_string(&path).unwrap();
    let items: serde_json::Value = serde_json::from_str(&content).unwrap();
    let arr = items.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["category"], "Food");
    assert_eq!(arr[0]["type"], "expense");
    assert_eq!(arr[1]["description"], "march pay");
}
