// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::commands::{goals, transactions};
use crate::summary;
use crate::utils::{fmt_money, get_currency, maybe_print_json, parse_month, pretty_table};
use anyhow::Result;
use chrono::Datelike;
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("overview", sub)) => overview(conn, sub)?,
        Some(("month", sub)) => month(conn, sub)?,
        Some(("spend-by-category", sub)) => spend_by_category(conn, sub)?,
        _ => {}
    }
    Ok(())
}

fn overview(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let txs = transactions::load_all(conn)?;
    let gls = goals::load_all(conn)?;
    let totals = summary::totals(&txs);
    let savings = summary::total_savings(&gls);

    let payload = json!({
        "total_balance": totals.balance,
        "total_income": totals.income,
        "total_expenses": totals.expenses,
        "total_savings": savings,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let ccy = get_currency(conn)?;
        let rows = vec![
            vec!["Total Balance".into(), fmt_money(&totals.balance, &ccy)],
            vec!["Total Income".into(), fmt_money(&totals.income, &ccy)],
            vec!["Total Expenses".into(), fmt_money(&totals.expenses, &ccy)],
            vec!["Total Savings".into(), fmt_money(&savings, &ccy)],
        ];
        println!("{}", pretty_table(&["Summary", "Amount"], rows));
    }
    Ok(())
}

fn month(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let (year, mon) = match sub.get_one::<String>("month") {
        Some(s) => parse_month(s)?,
        None => {
            let today = chrono::Local::now().date_naive();
            (today.year(), today.month())
        }
    };
    let txs = transactions::load_all(conn)?;
    let mt = summary::month_totals(&txs, year, mon);

    let payload = json!({
        "month": format!("{:04}-{:02}", year, mon),
        "income": mt.totals.income,
        "expenses": mt.totals.expenses,
        "net": mt.totals.balance,
        "income_count": mt.income_count,
        "expense_count": mt.expense_count,
    });
    if !maybe_print_json(json_flag, jsonl_flag, &payload)? {
        let ccy = get_currency(conn)?;
        let rows = vec![
            vec![
                "Income".into(),
                fmt_money(&mt.totals.income, &ccy),
                format!("{} transactions", mt.income_count),
            ],
            vec![
                "Expenses".into(),
                fmt_money(&mt.totals.expenses, &ccy),
                format!("{} transactions", mt.expense_count),
            ],
            vec![
                "Net Balance".into(),
                fmt_money(&mt.totals.balance, &ccy),
                format!("{} total", mt.income_count + mt.expense_count),
            ],
        ];
        let hdr = format!("{:04}-{:02}", year, mon);
        println!("{}", pretty_table(&[hdr.as_str(), "Amount", "Count"], rows));
    }
    Ok(())
}

fn spend_by_category(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let mut txs = transactions::load_all(conn)?;
    if let Some(s) = sub.get_one::<String>("month") {
        let (year, mon) = parse_month(s)?;
        txs.retain(|t| t.date.year() == year && t.date.month() == mon);
    }
    let slices = summary::expenses_by_category(&txs);

    if !maybe_print_json(json_flag, jsonl_flag, &slices)? {
        let ccy = get_currency(conn)?;
        let rows: Vec<Vec<String>> = slices
            .iter()
            .map(|s| {
                vec![
                    s.category.clone(),
                    fmt_money(&s.amount, &ccy),
                    format!("{:.0}%", summary::share_percent(&slices, s.amount)),
                    s.color.to_string(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share", "Color"], rows)
        );
    }
    Ok(())
}
