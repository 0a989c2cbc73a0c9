// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use pocketledger::commands::currency;
use pocketledger::utils::{fmt_money, get_currency};
use pocketledger::{cli, db};
use rusqlite::Connection;

fn setup() -> Connection {
    let mut conn = Connection::open_in_memory().unwrap();
    db::init_schema(&mut conn).unwrap();
    conn
}

#[test]
fn default_currency_is_usd() {
    let conn = setup();
    assert_eq!(get_currency(&conn).unwrap(), "USD");
}

#[test]
fn set_uppercases_and_persists() {
    let conn = setup();
    let matches = cli::build_cli().get_matches_from(["pocketledger", "currency", "set", "eur"]);
    if let Some(("currency", cur_m)) = matches.subcommand() {
        currency::handle(&conn, cur_m).unwrap();
    } else {
        panic!("no currency subcommand");
    }
    assert_eq!(get_currency(&conn).unwrap(), "EUR");
}

#[test]
fn fmt_money_uses_symbol_with_code_fallback() {
    let amount = "1234.5".parse().unwrap();
    assert_eq!(fmt_money(&amount, "USD"), "$1234.50");
    assert_eq!(fmt_money(&amount, "EUR"), "€1234.50");
    // Unknown code: fall back to `CODE amount`
    assert_eq!(fmt_money(&amount, "XYZ"), "XYZ 1234.50");
}
