// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::commands::goals;
use pocketledger::{cli, db};
use rusqlite::Connection;
use rust_decimal::Decimal;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

fn run(conn: &Connection, argv: &[&str]) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("goal", goal_m)) = matches.subcommand() {
        goals::handle(conn, goal_m)
    } else {
        panic!("no goal subcommand");
    }
}

fn add_goal(conn: &Connection) {
    run(
        conn,
        &[
            "pocketledger",
            "goal",
            "add",
            "--title",
            "Emergency Fund",
            "--target",
            "1000",
            "--deadline",
            "2025-12-31",
            "--category",
            "Savings",
        ],
    )
    .unwrap();
}

#[test]
fn add_defaults_current_to_zero() {
    let conn = setup();
    add_goal(&conn);
    let all = goals::load_all(&conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].current_amount, Decimal::ZERO);
    assert_eq!(all[0].target_amount, Decimal::from(1000));
}

#[test]
fn add_with_invalid_current_falls_back_to_zero() {
    let conn = setup();
    run(
        &conn,
        &[
            "pocketledger",
            "goal",
            "add",
            "--title",
            "Trip",
            "--target",
            "500",
            "--deadline",
            "2025-06-30",
            "--category",
            "Travel",
            "--current",
            "not-a-number",
        ],
    )
    .unwrap();
    let all = goals::load_all(&conn).unwrap();
    assert_eq!(all[0].current_amount, Decimal::ZERO);
}

#[test]
fn nonpositive_target_is_rejected() {
    let conn = setup();
    let res = run(
        &conn,
        &[
            "pocketledger",
            "goal",
            "add",
            "--title",
            "Broken",
            "--target",
            "0",
            "--deadline",
            "2025-06-30",
            "--category",
            "Misc",
        ],
    );
    assert!(res.is_err());
    assert!(goals::load_all(&conn).unwrap().is_empty());
}

#[test]
fn progress_replaces_current_amount() {
    let conn = setup();
    add_goal(&conn);
    run(&conn, &["pocketledger", "goal", "progress", "1", "250"]).unwrap();
    let all = goals::load_all(&conn).unwrap();
    assert_eq!(all[0].current_amount, Decimal::from(250));
    assert_eq!(all[0].percent_complete(), Decimal::from(25));
    assert_eq!(all[0].remaining(), Decimal::from(750));
}

#[test]
fn non_numeric_progress_leaves_amount_unchanged() {
    let conn = setup();
    add_goal(&conn);
    run(&conn, &["pocketledger", "goal", "progress", "1", "250"]).unwrap();

    let res = run(&conn, &["pocketledger", "goal", "progress", "1", "plenty"]);
    assert!(res.is_err());
    let all = goals::load_all(&conn).unwrap();
    assert_eq!(all[0].current_amount, Decimal::from(250));
}

#[test]
fn progress_is_not_clamped_to_target() {
    let conn = setup();
    add_goal(&conn);
    run(&conn, &["pocketledger", "goal", "progress", "1", "1500"]).unwrap();
    let all = goals::load_all(&conn).unwrap();
    assert_eq!(all[0].current_amount, Decimal::from(1500));
    assert_eq!(all[0].remaining(), Decimal::from(-500));
}

#[test]
fn delete_goal_and_absent_id_noop() {
    let conn = setup();
    add_goal(&conn);
    run(&conn, &["pocketledger", "goal", "rm", "7"]).unwrap();
    assert_eq!(goals::load_all(&conn).unwrap().len(), 1);
    run(&conn, &["pocketledger", "goal", "rm", "1"]).unwrap();
    assert!(goals::load_all(&conn).unwrap().is_empty());
}
