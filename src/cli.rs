// Copyright (c) AlphaVelocity.
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
    Command::new("moneymap")
        .about("Personal finance dashboard: transactions, budgets, savings goals, and reports")
        .version(clap::crate_version!())
        .subcommand_required(false)
        .subcommand(Command::new("init").about("Initialize the database and seed default categories"))
        .subcommand(
            Command::new("account")
                .about("Manage bank accounts")
                .subcommand(
                    Command::new("add")
                        .about("Add a bank account")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("bank").long("bank").required(true))
                        .arg(Arg::new("number").long("number").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("Checking|Savings|Credit Card|Other"),
                        )
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .arg(Arg::new("balance").long("balance").default_value("0")),
                )
                .subcommand(json_flags(Command::new("list").about("List bank accounts")))
                .subcommand(json_flags(
                    Command::new("summary").about("Total, checking, and savings balances"),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a bank account")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage categories")
                .subcommand(
                    Command::new("add")
                        .about("Add a category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(Arg::new("color").long("color").default_value("#64748b")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List categories")
                        .arg(Arg::new("type").long("type").help("income|expense")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a non-default category")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense"),
                        ),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and inspect transactions")
                .subcommand(
                    Command::new("add")
                        .about("Record a transaction")
                        .arg(Arg::new("date").long("date").required(true).help("YYYY-MM-DD"))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .required(true)
                                .help("income|expense"),
                        )
                        .arg(Arg::new("description").long("description").default_value("")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("type").long("type").help("income|expense"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Set monthly spending limits and track them")
                .subcommand(
                    Command::new("set")
                        .about("Create or replace the budget for a category and month")
                        .arg(Arg::new("month").long("month").required(true).help("YYYY-MM"))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("limit").long("limit").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List budgets")
                        .arg(Arg::new("month").long("month").help("YYYY-MM")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Remove a budget")
                        .arg(Arg::new("month").long("month").required(true))
                        .arg(Arg::new("category").long("category").required(true)),
                )
                .subcommand(json_flags(
                    Command::new("report")
                        .about("Spending against limits for a month")
                        .arg(Arg::new("month").long("month").help("YYYY-MM, defaults to current")),
                )),
        )
        .subcommand(
            Command::new("goal")
                .about("Track savings goals")
                .subcommand(
                    Command::new("add")
                        .about("Add a savings goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("target").long("target").required(true))
                        .arg(Arg::new("initial").long("initial").default_value("0"))
                        .arg(
                            Arg::new("deadline")
                                .long("deadline")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").about("List goals with progress and status"),
                ))
                .subcommand(
                    Command::new("contribute")
                        .about("Add money toward a goal")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(
                    Command::new("rm")
                        .about("Remove a goal")
                        .arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("report")
                .about("Derived reports over recorded transactions")
                .subcommand(json_flags(
                    Command::new("summary")
                        .about("Income, expenses, savings rate, and category breakdown")
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(Arg::new("year").long("year").help("YYYY")),
                ))
                .subcommand(json_flags(
                    Command::new("cashflow")
                        .about("Income vs. expenses per month, oldest first")
                        .arg(
                            Arg::new("months")
                                .long("months")
                                .default_value("6")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("overview")
                        .about("All-time and current-month totals"),
                )),
        )
        .subcommand(
            Command::new("export")
                .about("Export records to a file")
                .subcommand(
                    Command::new("transactions")
                        .about("Export all transactions")
                        .arg(Arg::new("format").long("format").default_value("csv").help("csv|json"))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(Command::new("doctor").about("Scan stored records for integrity issues"))
}
