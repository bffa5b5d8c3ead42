// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::dates::month_key;
use crate::models::{MonthFlow, Transaction, TransactionType};

/// Bucket transactions into the supplied month keys, summing income and
/// expense amounts per month. The result has one entry per key in input
/// order; transactions whose month matches none of the keys are ignored.
pub fn aggregate_by_month<I>(transactions: &[Transaction], month_keys: I) -> Vec<MonthFlow>
where
    I: IntoIterator<Item = String>,
{
    let mut flows: Vec<MonthFlow> = month_keys
        .into_iter()
        .map(|month| MonthFlow {
            month,
            income: Decimal::ZERO,
            expenses: Decimal::ZERO,
        })
        .collect();
    for t in transactions {
        let key = month_key(t.date);
        if let Some(flow) = flows.iter_mut().find(|f| f.month == key) {
            match t.r#type {
                TransactionType::Income => flow.income += t.amount,
                TransactionType::Expense => flow.expenses += t.amount,
            }
        }
    }
    flows
}

/// Total amount per category, restricted to transactions of the given type.
/// Categories with no matching transactions are absent. Sorted descending by
/// amount; the sort is stable, so equal totals keep first-encounter order.
pub fn aggregate_by_category(
    transactions: &[Transaction],
    r#type: TransactionType,
) -> Vec<(String, Decimal)> {
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    for t in transactions {
        if t.r#type != r#type {
            continue;
        }
        match totals.iter_mut().find(|(name, _)| *name == t.category) {
            Some((_, total)) => *total += t.amount,
            None => totals.push((t.category.clone(), t.amount)),
        }
    }
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals
}
