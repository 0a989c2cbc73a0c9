// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::pretty_table;
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection) -> Result<()> {
    let mut rows = Vec::new();

    // 1) Transaction amounts that fail to parse or carry a sign
    let mut stmt = conn.prepare("SELECT id, amount FROM transactions ORDER BY id")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let amount_s: String = r.get(1)?;
        match amount_s.parse::<Decimal>() {
            Ok(d) if d.is_sign_negative() => {
                rows.push(vec!["negative_tx_amount".into(), format!("tx {}: {}", id, amount_s)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec!["bad_tx_amount".into(), format!("tx {}: '{}'", id, amount_s)]);
            }
        }
    }

    // 2) Unparseable transaction dates
    let mut stmt2 = conn.prepare("SELECT id, date FROM transactions ORDER BY id")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        let d: String = r.get(1)?;
        if chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_err() {
            rows.push(vec!["bad_tx_date".into(), format!("tx {}: '{}'", id, d)]);
        }
    }

    // 3) Goals with a non-positive target or negative progress
    let mut stmt3 =
        conn.prepare("SELECT id, target_amount, current_amount FROM goals ORDER BY id")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let target_s: String = r.get(1)?;
        let current_s: String = r.get(2)?;
        match target_s.parse::<Decimal>() {
            Ok(d) if d <= Decimal::ZERO => {
                rows.push(vec!["nonpositive_goal_target".into(), format!("goal {}: {}", id, target_s)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec!["bad_goal_target".into(), format!("goal {}: '{}'", id, target_s)]);
            }
        }
        match current_s.parse::<Decimal>() {
            Ok(d) if d.is_sign_negative() => {
                rows.push(vec!["negative_goal_progress".into(), format!("goal {}: {}", id, current_s)]);
            }
            Ok(_) => {}
            Err(_) => {
                rows.push(vec!["bad_goal_progress".into(), format!("goal {}: '{}'", id, current_s)]);
            }
        }
    }

    if rows.is_empty() {
        println!("✅ doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
