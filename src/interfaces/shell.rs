use super::format;
use crate::application::machine::VendingMachine;
use crate::application::roles::{Consumer, Operator, WalletHolder};
use crate::domain::item::ItemId;
use crate::error::{Result, VendingError};
use chrono::NaiveDate;
use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::{debug, info, warn};

/// One line of shell input.
#[derive(Parser, Debug)]
#[command(name = "vending", no_binary_name = true)]
struct Line {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the items that can be bought right now
    List,
    /// Show every item, including sold-out ones
    Catalog,
    /// Show the consumer's balance
    Balance,
    /// Add money to the consumer's wallet
    Deposit {
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Buy an item with the consumer's wallet, paying the exact price
    Buy { id: ItemId },
    /// Insert money directly into the machine and select an item
    Insert {
        id: ItemId,
        #[arg(allow_negative_numbers = true)]
        amount: Decimal,
    },
    /// Add units of an item (operator)
    Restock {
        id: ItemId,
        #[arg(allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Empty the register into the operator's wallet (operator)
    Collect,
    /// List recorded sales (operator)
    Sales,
    /// Show revenue, optionally for a single day (YYYY-MM-DD)
    Revenue {
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Print a JSON summary of the machine's state
    Summary,
    /// End the session
    Quit,
}

/// Parses a single shell line such as `insert 3 1500`.
pub fn parse_line(line: &str) -> std::result::Result<Command, clap::Error> {
    Line::try_parse_from(line.split_whitespace()).map(|line| line.command)
}

#[derive(Debug, Serialize)]
struct SalesSummary {
    transactions: usize,
    successful: usize,
    revenue: Decimal,
    register: Decimal,
    consumer_balance: Decimal,
    operator_balance: Decimal,
    items_available: usize,
}

/// An interactive session in front of one machine, with one consumer and one operator.
pub struct Session {
    machine: VendingMachine,
    consumer: Consumer,
    operator: Operator,
    currency: String,
}

impl Session {
    pub fn new(
        machine: VendingMachine,
        consumer: Consumer,
        operator: Operator,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            machine,
            consumer,
            operator,
            currency: currency.into(),
        }
    }

    pub fn machine(&self) -> &VendingMachine {
        &self.machine
    }

    pub fn consumer(&self) -> &Consumer {
        &self.consumer
    }

    pub fn operator(&self) -> &Operator {
        &self.operator
    }

    /// Reads commands line by line until input ends or `quit` is read.
    ///
    /// Command output goes to `out`; a line that fails to parse or execute is
    /// reported on `err` and the session carries on. Blank lines and lines
    /// starting with `#` are skipped.
    pub fn run<R, O, E>(&mut self, input: R, out: &mut O, err: &mut E) -> Result<()>
    where
        R: BufRead,
        O: Write,
        E: Write,
    {
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let command = match parse_line(line) {
                Ok(command) => command,
                Err(e) if e.kind() == ErrorKind::DisplayHelp => {
                    write!(out, "{}", e.render())?;
                    continue;
                }
                Err(e) => {
                    warn!(line, "unrecognised command");
                    writeln!(err, "Error: {}", VendingError::InvalidCommand(e.to_string()))?;
                    continue;
                }
            };

            if command == Command::Quit {
                break;
            }

            match self.execute(command) {
                Ok(lines) => {
                    for output in lines {
                        writeln!(out, "{output}")?;
                    }
                }
                Err(e) => {
                    warn!(line, reason = %e, "command rejected");
                    writeln!(err, "Error: {e}")?;
                }
            }
        }
        Ok(())
    }

    /// Executes one command and returns the lines to display.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        debug!(?command, "executing command");
        let currency = self.currency.clone();
        let money = |value: Decimal| format!("{} {currency}", format::amount(value));

        let lines = match command {
            Command::List => {
                let items = self.machine.list_available();
                if items.is_empty() {
                    vec!["No items available.".to_string()]
                } else {
                    items.iter().map(|i| format::item(i, &currency)).collect()
                }
            }
            Command::Catalog => {
                let items = self.machine.list_all();
                if items.is_empty() {
                    vec!["The machine is empty.".to_string()]
                } else {
                    items.iter().map(|i| format::item(i, &currency)).collect()
                }
            }
            Command::Balance => vec![format!("Balance: {}", money(self.consumer.balance()))],
            Command::Deposit { amount } => {
                self.consumer.deposit(amount)?;
                info!(amount = %amount, "consumer deposit");
                vec![format!(
                    "Deposited {}. Balance: {}",
                    money(amount),
                    money(self.consumer.balance())
                )]
            }
            Command::Buy { id } => self.buy(id, &money)?,
            Command::Insert { id, amount } => {
                let record = self.machine.purchase(id, amount)?;
                if record.is_success() {
                    info!(item = id, tendered = %amount, change = %record.change(), "purchase applied");
                } else {
                    info!(item = id, tendered = %amount, "purchase skipped");
                }
                vec![
                    format::record(&record, &currency),
                    format!("Change: {}", money(record.change())),
                ]
            }
            Command::Restock { id, quantity } => {
                if self.operator.restock(&mut self.machine, id, quantity) {
                    info!(item = id, quantity, "restocked");
                    match self.machine.find_item(id) {
                        Some(item) => vec![format!(
                            "Restocked {}. Stock: {}",
                            item.name(),
                            item.stock()
                        )],
                        None => vec![format!("Restocked item {id}.")],
                    }
                } else {
                    info!(item = id, quantity, "restock skipped");
                    vec![format!("Restock failed for item {id}.")]
                }
            }
            Command::Collect => {
                let collected = self.operator.collect_funds(&mut self.machine)?;
                if collected.is_zero() {
                    vec!["The register is empty.".to_string()]
                } else {
                    info!(amount = %collected, "funds collected");
                    vec![
                        format!("Collected {}.", money(collected)),
                        format!("Operator balance: {}", money(self.operator.balance())),
                    ]
                }
            }
            Command::Sales => {
                let records = self.operator.review_sales(&self.machine);
                if records.is_empty() {
                    vec!["No transactions recorded.".to_string()]
                } else {
                    let mut lines: Vec<String> = records
                        .iter()
                        .map(|r| format::record(r, &currency))
                        .collect();
                    lines.push(format!("Total transactions: {}", records.len()));
                    lines.push(format!(
                        "Revenue: {}",
                        money(self.machine.ledger().total_revenue())
                    ));
                    lines
                }
            }
            Command::Revenue { date: Some(date) } => vec![format!(
                "Revenue on {date}: {}",
                money(self.machine.ledger().revenue_by_date(date))
            )],
            Command::Revenue { date: None } => vec![format!(
                "Revenue: {}",
                money(self.machine.ledger().total_revenue())
            )],
            Command::Summary => {
                let ledger = self.machine.ledger();
                let summary = SalesSummary {
                    transactions: ledger.count(),
                    successful: ledger.success_count(),
                    revenue: ledger.total_revenue().normalize(),
                    register: self.machine.register_balance().normalize(),
                    consumer_balance: self.consumer.balance().normalize(),
                    operator_balance: self.operator.balance().normalize(),
                    items_available: self.machine.list_available().len(),
                };
                vec![serde_json::to_string_pretty(&summary)?]
            }
            Command::Quit => Vec::new(),
        };
        Ok(lines)
    }

    /// Pays for an item from the consumer's wallet.
    ///
    /// The price is taken from the wallet first and handed to the machine as the
    /// tendered amount; if the machine refuses the sale the price is refunded.
    fn buy(&mut self, id: ItemId, money: &impl Fn(Decimal) -> String) -> Result<Vec<String>> {
        let Some(item) = self.machine.find_item(id) else {
            return Ok(vec![format!("Item {id} not found.")]);
        };
        if !item.is_available() {
            return Ok(vec![format!("{} is out of stock.", item.name())]);
        }
        let price = item.price();
        let name = item.name().to_string();

        if !self.consumer.withdraw(price)? {
            info!(item = id, price = %price, "purchase skipped: insufficient balance");
            return Ok(vec![format!(
                "Insufficient balance: {} costs {}, balance is {}.",
                name,
                money(price),
                money(self.consumer.balance())
            )]);
        }

        let record = match self.machine.purchase(id, price) {
            Ok(record) => record,
            Err(e) => {
                self.consumer.deposit(price)?;
                warn!(item = id, price = %price, error = %e, "purchase rejected, refunded");
                return Err(e);
            }
        };
        if record.is_success() {
            info!(item = id, price = %price, tx = record.id(), "purchase applied");
            Ok(vec![
                format!("Purchased {name}."),
                format!("Balance: {}", money(self.consumer.balance())),
            ])
        } else {
            self.consumer.deposit(price)?;
            info!(item = id, price = %price, "purchase skipped, refunded");
            Ok(vec![format!("Purchase failed, {} refunded.", money(price))])
        }
    }
}
