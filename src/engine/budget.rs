// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::engine::EngineError;
use crate::engine::dates::month_key;
use crate::models::{Budget, BudgetEvaluation, BudgetStatus, Transaction, TransactionType};

const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Join a budget against the transactions that count toward it: expenses in
/// the budget's category whose date falls in the budget's month. Remaining
/// may be negative when overspent.
///
/// A zero monthly limit cannot be created through `validate_limit`, but rows
/// predating that rule are still evaluated finitely: no spending reads as 0%,
/// any spending reads as 100% and classifies Over Budget. Infinity/NaN never
/// leave this function.
pub fn evaluate_budget(budget: &Budget, transactions: &[Transaction]) -> BudgetEvaluation {
    let spent: Decimal = transactions
        .iter()
        .filter(|t| {
            t.r#type == TransactionType::Expense
                && t.category == budget.category
                && month_key(t.date) == budget.month
        })
        .map(|t| t.amount)
        .sum();
    let remaining = budget.monthly_limit - spent;
    let percentage = if budget.monthly_limit > Decimal::ZERO {
        spent / budget.monthly_limit * HUNDRED
    } else if spent.is_zero() {
        Decimal::ZERO
    } else {
        HUNDRED
    };
    BudgetEvaluation {
        category: budget.category.clone(),
        month: budget.month.clone(),
        monthly_limit: budget.monthly_limit,
        spent,
        remaining,
        percentage,
        status: status_for(percentage),
    }
}

pub fn status_for(percentage: Decimal) -> BudgetStatus {
    if percentage >= HUNDRED {
        BudgetStatus::OverBudget
    } else if percentage >= Decimal::from(75) {
        BudgetStatus::Warning
    } else {
        BudgetStatus::OnTrack
    }
}

/// Creation-time rule: budgets must carry a positive monthly limit.
pub fn validate_limit(monthly_limit: Decimal) -> Result<(), EngineError> {
    if monthly_limit <= Decimal::ZERO {
        return Err(EngineError::InvalidLimit(monthly_limit));
    }
    Ok(())
}
