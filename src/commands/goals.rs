// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::Goal;
use crate::utils::{fmt_money, get_currency, maybe_print_json, parse_date, parse_decimal, pretty_table};
use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use rusqlite::{Connection, params};
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(conn, sub)?,
        Some(("list", sub)) => list(conn, sub)?,
        Some(("progress", sub)) => progress(conn, sub)?,
        Some(("rm", sub)) => rm(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let title = sub.get_one::<String>("title").unwrap();
    let target = parse_decimal(sub.get_one::<String>("target").unwrap())?;
    if target <= Decimal::ZERO {
        bail!("Target amount must be positive");
    }
    let deadline = parse_date(sub.get_one::<String>("deadline").unwrap())?;
    let category = sub.get_one::<String>("category").unwrap();
    // Invalid or absent starting progress falls back to 0.
    let current = sub
        .get_one::<String>("current")
        .and_then(|s| s.parse::<Decimal>().ok())
        .filter(|d| !d.is_sign_negative())
        .unwrap_or(Decimal::ZERO);

    conn.execute(
        "INSERT INTO goals(title, target_amount, current_amount, deadline, category)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            title,
            target.to_string(),
            current.to_string(),
            deadline.to_string(),
            category
        ],
    )?;
    println!("Added goal '{}': {} by {} ({})", title, target, deadline, category);
    Ok(())
}

/// Replaces the goal's current amount. The amount is not clamped to the
/// target; over-funded goals are allowed and shown as such.
fn progress(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let amount = parse_decimal(sub.get_one::<String>("amount").unwrap())?;
    let n = conn.execute(
        "UPDATE goals SET current_amount=?1 WHERE id=?2",
        params![amount.to_string(), id],
    )?;
    if n == 0 {
        println!("No goal with id {}", id);
    } else {
        println!("Goal {} progress set to {}", id, amount);
    }
    Ok(())
}

fn rm(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap();
    let n = conn.execute("DELETE FROM goals WHERE id=?1", params![id])?;
    if n == 0 {
        println!("No goal with id {}", id);
    } else {
        println!("Deleted goal {}", id);
    }
    Ok(())
}

fn list(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = load_all(conn)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let ccy = get_currency(conn)?;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|g| {
                vec![
                    g.id.to_string(),
                    g.title.clone(),
                    g.category.clone(),
                    format!(
                        "{} of {}",
                        fmt_money(&g.current_amount, &ccy),
                        fmt_money(&g.target_amount, &ccy)
                    ),
                    format!("{:.1}%", g.percent_complete()),
                    fmt_money(&g.remaining(), &ccy),
                    g.deadline.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Title", "Category", "Progress", "Complete", "Remaining", "Deadline"],
                rows,
            )
        );
    }
    Ok(())
}

pub fn load_all(conn: &Connection) -> Result<Vec<Goal>> {
    let mut stmt = conn.prepare(
        "SELECT id, title, target_amount, current_amount, deadline, category
         FROM goals ORDER BY deadline, id",
    )?;
    let mut cur = stmt.query([])?;
    let mut data = Vec::new();
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        let title: String = r.get(1)?;
        let target_s: String = r.get(2)?;
        let current_s: String = r.get(3)?;
        let deadline_s: String = r.get(4)?;
        let category: String = r.get(5)?;
        data.push(Goal {
            id,
            title,
            target_amount: target_s
                .parse()
                .with_context(|| format!("Invalid target '{}' in goals", target_s))?,
            current_amount: current_s
                .parse()
                .with_context(|| format!("Invalid progress '{}' in goals", current_s))?,
            deadline: NaiveDate::parse_from_str(&deadline_s, "%Y-%m-%d")
                .with_context(|| format!("Invalid deadline '{}' in goals", deadline_s))?,
            category,
        });
    }
    Ok(data)
}
