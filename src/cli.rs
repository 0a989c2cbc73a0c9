// Copyright (c) 2025 Pocketledger.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print output as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print output as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("pocketledger")
        .about("Personal income/expense ledger with savings goals")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Date YYYY-MM-DD (defaults to today)"),
                        )
                        .arg(
                            Arg::new("description")
                                .long("description")
                                .short('d')
                                .required(true),
                        )
                        .arg(Arg::new("amount").long("amount").short('a').required(true))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .short('k')
                                .required(true)
                                .value_parser(["income", "expense"]),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("Filter to YYYY-MM"))
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .value_parser(["income", "expense"]),
                        )
                        .arg(Arg::new("category").long("category"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm").about("Delete a transaction by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("goal")
                .about("Track savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(Arg::new("title").long("title").short('t').required(true))
                        .arg(
                            Arg::new("target")
                                .long("target")
                                .required(true)
                                .help("Target amount"),
                        )
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("Deadline YYYY-MM-DD"),
                        )
                        .arg(
                            Arg::new("category")
                                .long("category")
                                .short('c')
                                .required(true),
                        )
                        .arg(
                            Arg::new("current")
                                .long("current")
                                .help("Starting progress (defaults to 0)"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List goals with progress"),
                ))
                .subcommand(
                    Command::new("progress")
                        .about("Set a goal's current amount")
                        .arg(
                            Arg::new("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(Arg::new("amount").required(true)),
                )
                .subcommand(
                    Command::new("rm").about("Delete a goal by id").arg(
                        Arg::new("id")
                            .required(true)
                            .value_parser(value_parser!(i64)),
                    ),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Summaries derived from the ledger")
                .subcommand(json_flags(
                    Command::new("overview")
                        .about("Total balance, income, expenses and savings"),
                ))
                .subcommand(json_flags(
                    Command::new("month")
                        .about("Income/expense subtotals for one month")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Month YYYY-MM (defaults to the current month)"),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("spend-by-category")
                        .about("Expense breakdown by category")
                        .arg(Arg::new("month").long("month").help("Restrict to YYYY-MM")),
                )),
        )
        .subcommand(
            Command::new("export").about("Export the ledger").subcommand(
                Command::new("transactions")
                    .about("Export filtered transactions")
                    .arg(
                        Arg::new("kind")
                            .long("kind")
                            .value_parser(["income", "expense"]),
                    )
                    .arg(
                        Arg::new("year")
                            .long("year")
                            .value_parser(value_parser!(i32)),
                    )
                    .arg(Arg::new("from").long("from").help("Start date YYYY-MM-DD"))
                    .arg(Arg::new("to").long("to").help("End date YYYY-MM-DD"))
                    .arg(
                        Arg::new("format")
                            .long("format")
                            .default_value("csv")
                            .help("csv or json"),
                    )
                    .arg(
                        Arg::new("out")
                            .long("out")
                            .help("Output path (defaults to financial_data_<date>.csv)"),
                    ),
            ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency")
                .subcommand(
                    Command::new("set")
                        .about("Select the display currency")
                        .arg(Arg::new("code").required(true)),
                )
                .subcommand(Command::new("show").about("Show the selected currency")),
        )
        .subcommand(Command::new("doctor").about("Check the ledger for bad data"))
}
