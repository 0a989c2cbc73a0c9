// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::utils::{currency_symbol, fmt_money, get_currency, set_currency};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => {
            let code = sub.get_one::<String>("code").unwrap().to_uppercase();
            set_currency(conn, &code)?;
            if currency_symbol(&code).is_none() {
                println!(
                    "Display currency set to {} (no known symbol, amounts shown as '{} 0.00')",
                    code, code
                );
            } else {
                println!("Display currency set to {}", code);
            }
        }
        Some(("show", _)) => {
            let code = get_currency(conn)?;
            let sample = Decimal::new(123456, 2);
            println!("{} — e.g. {}", code, fmt_money(&sample, &code));
        }
        _ => {}
    }
    Ok(())
}
