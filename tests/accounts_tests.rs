// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use moneymap::models::BankAccount;
use moneymap::store;
use rusqlite::Connection;
use rust_decimal::Decimal;

fn account(name: &str, account_type: &str, balance: &str) -> BankAccount {
    BankAccount {
        id: 0,
        name: name.to_string(),
        bank_name: "First National".to_string(),
        account_number: "000111222333".to_string(),
        account_type: account_type.to_string(),
        currency: "USD".to_string(),
        balance: Decimal::from_str_exact(balance).unwrap(),
    }
}

#[test]
fn balances_sum_per_type() {
    let mut conn = Connection::open_in_memory().unwrap();
    moneymap::db::init_schema(&mut conn).unwrap();

    store::insert_account(&conn, &account("Everyday", "Checking", "1200.50")).unwrap();
    store::insert_account(&conn, &account("Rainy Day", "Savings", "5000")).unwrap();
    store::insert_account(&conn, &account("Card", "Credit Card", "-350.25")).unwrap();

    let accounts = store::list_accounts(&conn).unwrap();
    let total: Decimal = accounts.iter().map(|a| a.balance).sum();
    assert_eq!(total, Decimal::from_str_exact("5850.25").unwrap());

    let checking: Decimal = accounts
        .iter()
        .filter(|a| a.account_type == "Checking")
        .map(|a| a.balance)
        .sum();
    assert_eq!(checking, Decimal::from_str_exact("1200.50").unwrap());
}

#[test]
fn schema_rejects_unknown_account_type() {
    let mut conn = Connection::open_in_memory().unwrap();
    moneymap::db::init_schema(&mut conn).unwrap();
    let err = store::insert_account(&conn, &account("Weird", "Offshore", "10")).unwrap_err();
    assert!(err.to_string().to_lowercase().contains("check"));
}

#[test]
fn remove_missing_account_is_not_found() {
    let mut conn = Connection::open_in_memory().unwrap();
    moneymap::db::init_schema(&mut conn).unwrap();
    let err = store::delete_account(&conn, "Nope").unwrap_err();
    assert!(err.to_string().contains("not found"));
}
