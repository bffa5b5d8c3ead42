// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneymap::models::TransactionType;
use moneymap::store::{self, TxFilter};
use moneymap::{cli, commands::transactions};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    moneymap::db::init_schema(&mut conn).unwrap();
    let rows = [
        ("2024-03-01", "50", "Food", TransactionType::Expense),
        ("2024-03-02", "30", "Food", TransactionType::Expense),
        ("2024-03-03", "20", "Transportation", TransactionType::Expense),
        ("2024-03-04", "4000", "Salary", TransactionType::Income),
        ("2024-04-01", "75", "Food", TransactionType::Expense),
    ];
    for (date, amount, category, typ) in rows {
        store::insert_transaction(
            &conn,
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            Decimal::from_str_exact(amount).unwrap(),
            category,
            typ,
            "",
        )
        .unwrap();
    }
    conn
}

fn list_matches(args: &[&str]) -> clap::ArgMatches {
    let matches = cli::build_cli().get_matches_from(args);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    list_m.clone()
}

#[test]
fn list_is_newest_first_and_limit_respected() {
    let conn = setup();
    let sub = list_matches(&["moneymap", "tx", "list", "--limit", "2"]);
    let filter = transactions::filter_from_matches(&sub).unwrap();
    let rows = store::list_transactions(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].date.to_string(), "2024-04-01");
    assert_eq!(rows[1].date.to_string(), "2024-03-04");
}

#[test]
fn category_filter_actually_applies() {
    let conn = setup();
    let sub = list_matches(&["moneymap", "tx", "list", "--category", "Food"]);
    let filter = transactions::filter_from_matches(&sub).unwrap();
    let rows = store::list_transactions(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|t| t.category == "Food"));
}

#[test]
fn month_and_type_filters_combine() {
    let conn = setup();
    let sub = list_matches(&[
        "moneymap", "tx", "list", "--month", "2024-03", "--type", "expense",
    ]);
    let filter = transactions::filter_from_matches(&sub).unwrap();
    let rows = store::list_transactions(&conn, &filter).unwrap();
    assert_eq!(rows.len(), 3);
    assert!(rows.iter().all(|t| t.r#type == TransactionType::Expense));
}

#[test]
fn add_via_cli_validates_and_persists() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from([
        "moneymap",
        "tx",
        "add",
        "--date",
        "2024-03-09",
        "--amount",
        "12.50",
        "--category",
        "Food",
        "--type",
        "expense",
        "--description",
        "lunch",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&conn, tx_m).unwrap();

    let rows = store::list_transactions(
        &conn,
        &TxFilter {
            month: Some("2024-03".into()),
            category: Some("Food".into()),
            ..TxFilter::default()
        },
    )
    .unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].description, "lunch");
    assert_eq!(rows[0].amount, Decimal::from_str_exact("12.50").unwrap());
}

#[test]
fn add_rejects_non_positive_amount() {
    let conn = setup();
    // equals form: a bare "-5" would parse as a flag, not a value
    let matches = cli::build_cli().get_matches_from([
        "moneymap", "tx", "add", "--date", "2024-03-09", "--amount=-5", "--category", "Food",
        "--type", "expense",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let err = transactions::handle(&conn, tx_m).unwrap_err();
    assert!(err.to_string().contains("Invalid amount"));
}

#[test]
fn add_rejects_unknown_category_for_type() {
    let conn = setup();
    // Salary exists as income, not as expense
    let matches = cli::build_cli().get_matches_from([
        "moneymap", "tx", "add", "--date", "2024-03-09", "--amount", "5", "--category", "Salary",
        "--type", "expense",
    ]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let err = transactions::handle(&conn, tx_m).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn delete_missing_transaction_is_not_found() {
    let conn = setup();
    let err = store::delete_transaction(&conn, 999).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn get_transaction_by_id_round_trips() {
    let conn = setup();
    let rows = store::list_transactions(&conn, &TxFilter::default()).unwrap();
    let want = &rows[0];
    let got = store::get_transaction(&conn, want.id).unwrap();
    assert_eq!(got.date, want.date);
    assert_eq!(got.amount, want.amount);
    assert_eq!(got.category, want.category);
    assert_eq!(got.r#type, want.r#type);

    let err = store::get_transaction(&conn, 999).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn rm_via_cli_echoes_and_deletes_the_row() {
    let conn = setup();
    let rows = store::list_transactions(&conn, &TxFilter::default()).unwrap();
    let id = rows[0].id;
    let matches =
        cli::build_cli().get_matches_from(["moneymap", "tx", "rm", "--id", &id.to_string()]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    transactions::handle(&conn, tx_m).unwrap();
    let err = store::get_transaction(&conn, id).unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn default_categories_are_seeded_and_protected() {
    let conn = setup();
    let cats = store::list_categories(&conn, Some(TransactionType::Expense)).unwrap();
    assert!(cats.iter().any(|c| c.name == "Food" && c.is_default));

    let err = store::delete_category(&conn, "Food", TransactionType::Expense).unwrap_err();
    assert!(err.to_string().contains("default"));

    // user-created categories come and go freely
    store::insert_category(&conn, "Pets", TransactionType::Expense, "#888888").unwrap();
    store::delete_category(&conn, "Pets", TransactionType::Expense).unwrap();
}
