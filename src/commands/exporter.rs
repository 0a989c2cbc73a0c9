// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::transactions;
use crate::models::{Transaction, TxKind};
use crate::utils::parse_date;
use anyhow::{Result, bail};
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(conn, sub),
        _ => Ok(()),
    }
}

/// Keep transactions matching every given filter.
pub fn apply_filters(
    txs: Vec<Transaction>,
    kind: Option<TxKind>,
    year: Option<i32>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
) -> Vec<Transaction> {
    txs.into_iter()
        .filter(|t| kind.map_or(true, |k| t.kind == k))
        .filter(|t| year.map_or(true, |y| t.date.year() == y))
        .filter(|t| from.map_or(true, |d| t.date >= d))
        .filter(|t| to.map_or(true, |d| t.date <= d))
        .collect()
}

/// Default export filename, suffixed with the active kind/year filters.
pub fn default_filename(
    today: NaiveDate,
    kind: Option<TxKind>,
    year: Option<i32>,
    ext: &str,
) -> String {
    let kind_suffix = kind.map(|k| format!("_{}", k.as_str())).unwrap_or_default();
    let year_suffix = year.map(|y| format!("_{}", y)).unwrap_or_default();
    format!("financial_data_{}{}{}.{}", today, kind_suffix, year_suffix, ext)
}

fn export_transactions(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let kind = sub
        .get_one::<String>("kind")
        .map(|s| TxKind::parse(s))
        .transpose()?;
    let year = sub.get_one::<i32>("year").copied();
    let from = sub
        .get_one::<String>("from")
        .map(|s| parse_date(s))
        .transpose()?;
    let to = sub
        .get_one::<String>("to")
        .map(|s| parse_date(s))
        .transpose()?;

    let filtered = apply_filters(transactions::load_all(conn)?, kind, year, from, to);
    if filtered.is_empty() {
        println!("No transactions match the current filters; nothing exported");
        return Ok(());
    }

    let out = match sub.get_one::<String>("out") {
        Some(p) => p.clone(),
        None => default_filename(chrono::Local::now().date_naive(), kind, year, &fmt),
    };

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record(["Date", "Description", "Amount", "Type", "Category"])?;
            for t in &filtered {
                wtr.write_record([
                    t.date.to_string(),
                    t.description.clone(),
                    t.amount.to_string(),
                    t.kind.as_str().to_string(),
                    t.category.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let mut items = Vec::new();
            for t in &filtered {
                items.push(json!({
                    "date": t.date,
                    "description": t.description,
                    "amount": t.amount,
                    "type": t.kind.as_str(),
                    "category": t.category,
                }));
            }
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => unreachable!(),
    }
    println!("Exported {} transactions to {}", filtered.len(), out);
    Ok(())
}
