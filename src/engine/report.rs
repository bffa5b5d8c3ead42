// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::aggregate::aggregate_by_category;
use crate::models::{CategorySlice, ReportSummary, Transaction, TransactionType};

/// Summarize an arbitrary transaction set: totals, net income, savings rate,
/// and the per-category share of total expenses. Period scoping (month or
/// year) is the caller's job; it pre-filters before calling in.
pub fn summarize(transactions: &[Transaction]) -> ReportSummary {
    let income: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Income)
        .map(|t| t.amount)
        .sum();
    let expenses: Decimal = transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
        .map(|t| t.amount)
        .sum();
    let net_income = income - expenses;
    // Zero income means a zero savings rate, not an error.
    let savings_rate = if income > Decimal::ZERO {
        net_income / income * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let category_breakdown = aggregate_by_category(transactions, TransactionType::Expense)
        .into_iter()
        .map(|(category, amount)| CategorySlice {
            category,
            amount,
            percentage: if expenses > Decimal::ZERO {
                amount / expenses * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            },
        })
        .collect();
    ReportSummary {
        income,
        expenses,
        net_income,
        savings_rate,
        transaction_count: transactions.len(),
        category_breakdown,
    }
}
