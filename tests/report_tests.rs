// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneymap::engine::report::summarize;
use moneymap::models::{Transaction, TransactionType};
use rust_decimal::Decimal;

fn tx(date: &str, amount: &str, category: &str, r#type: TransactionType) -> Transaction {
    Transaction {
        id: 0,
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: Decimal::from_str_exact(amount).unwrap(),
        category: category.to_string(),
        r#type,
        description: String::new(),
    }
}

#[test]
fn empty_set_is_all_zeroes() {
    let summary = summarize(&[]);
    assert_eq!(summary.income, Decimal::ZERO);
    assert_eq!(summary.expenses, Decimal::ZERO);
    assert_eq!(summary.net_income, Decimal::ZERO);
    assert_eq!(summary.savings_rate, Decimal::ZERO);
    assert_eq!(summary.transaction_count, 0);
    assert!(summary.category_breakdown.is_empty());
}

#[test]
fn totals_and_savings_rate() {
    let txs = vec![
        tx("2024-03-01", "4000", "Salary", TransactionType::Income),
        tx("2024-03-05", "1000", "Rent", TransactionType::Expense),
        tx("2024-03-10", "500", "Food", TransactionType::Expense),
        tx("2024-03-15", "1500", "Shopping", TransactionType::Expense),
    ];
    let summary = summarize(&txs);
    assert_eq!(summary.income, Decimal::from(4000));
    assert_eq!(summary.expenses, Decimal::from(3000));
    assert_eq!(summary.net_income, Decimal::from(1000));
    assert_eq!(summary.savings_rate, Decimal::from(25));
    assert_eq!(summary.transaction_count, 4);
}

#[test]
fn zero_income_means_zero_savings_rate() {
    let txs = vec![tx("2024-03-05", "100", "Food", TransactionType::Expense)];
    let summary = summarize(&txs);
    assert_eq!(summary.net_income, Decimal::from(-100));
    assert_eq!(summary.savings_rate, Decimal::ZERO);
}

#[test]
fn breakdown_shares_of_total_expenses() {
    let txs = vec![
        tx("2024-03-01", "1000", "Rent", TransactionType::Expense),
        tx("2024-03-02", "200", "Food", TransactionType::Expense),
        tx("2024-03-03", "100", "Food", TransactionType::Expense),
    ];
    let summary = summarize(&txs);
    assert_eq!(summary.expenses, Decimal::from(1300));
    assert_eq!(summary.category_breakdown.len(), 2);

    let rent = &summary.category_breakdown[0];
    assert_eq!(rent.category, "Rent");
    assert_eq!(rent.amount, Decimal::from(1000));
    assert_eq!(rent.percentage.round_dp(1), Decimal::from_str_exact("76.9").unwrap());

    let food = &summary.category_breakdown[1];
    assert_eq!(food.category, "Food");
    assert_eq!(food.amount, Decimal::from(300));
    assert_eq!(food.percentage.round_dp(1), Decimal::from_str_exact("23.1").unwrap());
}

#[test]
fn income_only_set_has_empty_breakdown() {
    let txs = vec![tx("2024-03-01", "4000", "Salary", TransactionType::Income)];
    let summary = summarize(&txs);
    assert_eq!(summary.income, Decimal::from(4000));
    assert_eq!(summary.savings_rate, Decimal::from(100));
    assert!(summary.category_breakdown.is_empty());
}
