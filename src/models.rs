// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(anyhow!(
                "Invalid transaction type '{}', expected income|expense",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub r#type: TransactionType,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub r#type: TransactionType,
    pub color: String,
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub month: String, // YYYY-MM
    pub monthly_limit: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingsGoal {
    pub id: i64,
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankAccount {
    pub id: i64,
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub account_type: String, // Checking | Savings | Credit Card | Other
    pub currency: String,
    pub balance: Decimal,
}

// Derived view models below are computed on every read and never persisted.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BudgetStatus {
    OnTrack,
    Warning,
    OverBudget,
}

impl BudgetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::OnTrack => "On Track",
            BudgetStatus::Warning => "Warning",
            BudgetStatus::OverBudget => "Over Budget",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BudgetEvaluation {
    pub category: String,
    pub month: String,
    pub monthly_limit: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Decimal,
    pub status: BudgetStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    Completed,
    Overdue,
    Urgent,
    OnTrack,
}

impl GoalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalStatus::Completed => "Completed",
            GoalStatus::Overdue => "Overdue",
            GoalStatus::Urgent => "Urgent",
            GoalStatus::OnTrack => "On Track",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GoalEvaluation {
    pub name: String,
    pub target_amount: Decimal,
    pub current_amount: Decimal,
    pub deadline: NaiveDate,
    pub progress_percent: Decimal,
    pub days_remaining: i64,
    pub status: GoalStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct MonthFlow {
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategorySlice {
    pub category: String,
    pub amount: Decimal,
    pub percentage: Decimal,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub income: Decimal,
    pub expenses: Decimal,
    pub net_income: Decimal,
    pub savings_rate: Decimal,
    pub transaction_count: usize,
    pub category_breakdown: Vec<CategorySlice>,
}
