// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::store::{self, TxFilter};
use crate::utils::pretty_table;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transactions pointing at categories that no longer exist
    let categories = store::list_categories(conn, None)?;
    for t in store::list_transactions(conn, &TxFilter::default())? {
        let known = categories
            .iter()
            .any(|c| c.name == t.category && c.r#type == t.r#type);
        if !known {
            rows.push(vec![
                "unknown_category".into(),
                format!("tx {} -> {} ({})", t.id, t.category, t.r#type.as_str()),
            ]);
        }
        if t.amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_amount".into(),
                format!("tx {} amount {}", t.id, t.amount),
            ]);
        }
    }

    // 2) Budgets whose limit predates the positive-limit rule
    for b in store::list_budgets(conn, None)? {
        if b.monthly_limit <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_limit".into(),
                format!("budget {} / {} limit {}", b.month, b.category, b.monthly_limit),
            ]);
        }
    }

    // 3) Goals that can never report progress, or that undercut the
    //    contributions-only-grow invariant
    for g in store::list_goals(conn)? {
        if g.target_amount <= Decimal::ZERO {
            rows.push(vec![
                "non_positive_target".into(),
                format!("goal '{}' target {}", g.name, g.target_amount),
            ]);
        }
        if g.current_amount < Decimal::ZERO {
            rows.push(vec![
                "negative_current_amount".into(),
                format!("goal '{}' current {}", g.name, g.current_amount),
            ]);
        }
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
