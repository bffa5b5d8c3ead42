// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::engine::EngineError;
use crate::engine::dates::days_between;
use crate::models::{GoalEvaluation, GoalStatus, SavingsGoal};

/// Derive progress, days remaining, and status for a savings goal as of
/// `today`. A completed goal stays Completed even past its deadline.
pub fn evaluate_goal(goal: &SavingsGoal, today: NaiveDate) -> GoalEvaluation {
    let progress_percent = if goal.target_amount > Decimal::ZERO {
        goal.current_amount / goal.target_amount * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };
    let days_remaining = days_between(goal.deadline, today);
    let status = if progress_percent >= Decimal::ONE_HUNDRED {
        GoalStatus::Completed
    } else if days_remaining < 0 {
        GoalStatus::Overdue
    } else if days_remaining < 30 {
        GoalStatus::Urgent
    } else {
        GoalStatus::OnTrack
    };
    GoalEvaluation {
        name: goal.name.clone(),
        target_amount: goal.target_amount,
        current_amount: goal.current_amount,
        deadline: goal.deadline,
        progress_percent,
        days_remaining,
        status,
    }
}

/// Add a contribution to a goal. Contributions only ever increase the
/// current amount; there is no clamp at the target, so over-contributing
/// simply reads as progress above 100%.
pub fn apply_contribution(goal: &SavingsGoal, amount: Decimal) -> Result<SavingsGoal, EngineError> {
    if amount <= Decimal::ZERO {
        return Err(EngineError::InvalidAmount(amount));
    }
    let mut updated = goal.clone();
    updated.current_amount += amount;
    Ok(updated)
}

/// Creation-time rule: goals must carry a positive target amount.
pub fn validate_target(target_amount: Decimal) -> Result<(), EngineError> {
    if target_amount <= Decimal::ZERO {
        return Err(EngineError::InvalidTarget(target_amount));
    }
    Ok(())
}

/// Creation-time rule: a goal may start at zero, but never below it.
/// Contributions only add, so a non-negative start keeps the current amount
/// non-negative for the goal's whole life.
pub fn validate_initial(initial_amount: Decimal) -> Result<(), EngineError> {
    if initial_amount < Decimal::ZERO {
        return Err(EngineError::NegativeAmount(initial_amount));
    }
    Ok(())
}
