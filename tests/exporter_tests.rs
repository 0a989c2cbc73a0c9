// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use pocketledger::commands::exporter;
use pocketledger::models::{Transaction, TxKind};
use pocketledger::{cli, db};
use rusqlite::Connection;
use tempfile::tempdir;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn.execute(
        "INSERT INTO transactions(date,description,amount,kind,category) VALUES \
        ('2025-01-02','Paycheck','100','income','Work')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO transactions(date,description,amount,kind,category) VALUES \
        ('2025-01-05','Corner Shop, downtown','40','expense','Groceries')",
        [],
    )
    .unwrap();
    conn
}

fn run_export(conn: &Connection, argv: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("export", export_m)) = matches.subcommand() {
        exporter::handle(conn, export_m)
    } else {
        panic!("no export subcommand");
    }
}

#[test]
fn expense_filter_exports_exactly_one_row() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let out_str = out.to_string_lossy().to_string();

    run_export(
        &conn,
        &[
            "pocketledger",
            "export",
            "transactions",
            "--kind",
            "expense",
            "--out",
            &out_str,
        ],
    )
    .unwrap();

    let contents = std::fs::read_to_string(&out).unwrap();
    let mut lines = contents.lines();
    assert_eq!(lines.next().unwrap(), "Date,Description,Amount,Type,Category");
    let row = lines.next().unwrap();
    // Description containing a comma must come out quoted
    assert_eq!(row, "2025-01-05,\"Corner Shop, downtown\",40,expense,Groceries");
    assert_eq!(lines.next(), None);
}

#[test]
fn combined_kind_and_year_filters_are_anded() {
    let txs = vec![
        Transaction {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            description: "Paycheck".into(),
            amount: "100".parse().unwrap(),
            kind: TxKind::Income,
            category: "Work".into(),
        },
        Transaction {
            id: 2,
            date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
            description: "Old paycheck".into(),
            amount: "90".parse().unwrap(),
            kind: TxKind::Income,
            category: "Work".into(),
        },
        Transaction {
            id: 3,
            date: NaiveDate::from_ymd_opt(2025, 1, 5).unwrap(),
            description: "Groceries".into(),
            amount: "40".parse().unwrap(),
            kind: TxKind::Expense,
            category: "Food".into(),
        },
    ];
    let kept = exporter::apply_filters(txs, Some(TxKind::Income), Some(2025), None, None);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 1);
}

#[test]
fn date_range_filter_is_inclusive() {
    let txs = vec![
        Transaction {
            id: 1,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            description: "a".into(),
            amount: "1".parse().unwrap(),
            kind: TxKind::Expense,
            category: "c".into(),
        },
        Transaction {
            id: 2,
            date: NaiveDate::from_ymd_opt(2025, 1, 9).unwrap(),
            description: "b".into(),
            amount: "1".parse().unwrap(),
            kind: TxKind::Expense,
            category: "c".into(),
        },
    ];
    let kept = exporter::apply_filters(
        txs,
        None,
        None,
        Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()),
        Some(NaiveDate::from_ymd_opt(2025, 1, 8).unwrap()),
    );
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].id, 1);
}

#[test]
fn empty_filtered_set_writes_no_file() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.csv");
    let out_str = out.to_string_lossy().to_string();

    run_export(
        &conn,
        &[
            "pocketledger",
            "export",
            "transactions",
            "--year",
            "1999",
            "--out",
            &out_str,
        ],
    )
    .unwrap();
    assert!(!out.exists());
}

#[test]
fn export_rejects_unknown_format() {
    let conn = setup();
    let dir = tempdir().unwrap();
    let out = dir.path().join("export.xml");
    let out_str = out.to_string_lossy().to_string();

    let res = run_export(
        &conn,
        &[
            "pocketledger",
            "export",
            "transactions",
            "--format",
            "xml",
            "--out",
            &out_str,
        ],
    );
    assert!(res.is_err());
    assert!(!out.exists());
}

#[test]
fn default_filename_carries_active_filter_suffixes() {
    let today = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
    assert_eq!(
        exporter::default_filename(today, None, None, "csv"),
        "financial_data_2025-08-31.csv"
    );
    assert_eq!(
        exporter::default_filename(today, Some(TxKind::Expense), Some(2025), "csv"),
        "financial_data_2025-08-31_expense_2025.csv"
    );
}
