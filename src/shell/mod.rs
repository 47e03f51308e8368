//! Interactive console around a [`Store`].
//!
//! The shell reads one command per line, calls the matching store operation
//! and prints the outcome. Saving is left to the caller once [`Shell::run`]
//! returns.

pub mod command;
pub mod render;

use crate::core::codec::decode_record;
use crate::core::store::Store;
use crate::domain::model::to_fixed_2;
use crate::utils::error::{MarinaError, Result};
use command::{parse_amount, split_payment_args, Command};
use std::io::{BufRead, Write};

const BANNER: &str = "Welcome to the Boat Management System\n-------------------------------------";
const MENU: &str = "(I)nventory, (A)dd, (R)emove, (P)ayment, (M)onth, e(X)it: ";
const CSV_PROMPT: &str = "Please enter the boat data in CSV format: ";
const NAME_PROMPT: &str = "Please enter the boat name: ";
const AMOUNT_PROMPT: &str = "Please enter the amount to be paid: ";

pub struct Shell<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `exit` or end of input. Only console I/O failures end the
    /// loop early.
    pub fn run(&mut self, store: &mut Store) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;

        loop {
            let Some(line) = self.prompt(MENU)? else {
                break;
            };
            if line.is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok((Command::Exit, _)) => break,
                Ok((command, args)) => self.dispatch(store, command, args)?,
                Err(e) => writeln!(self.output, "{}", e.user_friendly_message())?,
            }
        }

        writeln!(self.output, "Exiting the Boat Management System")?;
        Ok(())
    }

    fn dispatch(&mut self, store: &mut Store, command: Command, args: &str) -> Result<()> {
        let outcome = match command {
            Command::Inventory => Ok(render::inventory(store)),
            Command::Add => match self.argument_or_prompt(args, CSV_PROMPT)? {
                Some(csv) => add(store, &csv),
                None => return Ok(()),
            },
            Command::Remove => match self.argument_or_prompt(args, NAME_PROMPT)? {
                Some(name) => store
                    .remove(&name)
                    .map(|_| format!("Boat '{}' removed successfully.\n", name)),
                None => return Ok(()),
            },
            Command::Payment => {
                let (name, amount) = split_payment_args(args);
                let Some(name) = self.argument_or_prompt(name, NAME_PROMPT)? else {
                    return Ok(());
                };
                let Some(amount) = self.argument_or_prompt(amount.unwrap_or(""), AMOUNT_PROMPT)? else {
                    return Ok(());
                };
                pay(store, &name, &amount)
            }
            Command::Month => {
                store.apply_monthly_billing();
                Ok("Monthly charges updated.\n".to_string())
            }
            Command::Exit => Ok(String::new()),
        };

        match outcome {
            Ok(message) => write!(self.output, "{}", message)?,
            Err(e) => {
                tracing::debug!("{:?} failed: {}", command, e);
                writeln!(self.output, "{}", e.user_friendly_message())?;
            }
        }
        Ok(())
    }

    fn argument_or_prompt(&mut self, given: &str, prompt: &str) -> Result<Option<String>> {
        if given.is_empty() {
            self.prompt(prompt)
        } else {
            Ok(Some(given.to_string()))
        }
    }

    /// Writes the prompt and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

fn add(store: &mut Store, csv: &str) -> Result<String> {
    let record = decode_record(csv)?;
    store.add(record)?;
    Ok("Boat added successfully.\n".to_string())
}

fn pay(store: &mut Store, name: &str, amount: &str) -> Result<String> {
    let amount = parse_amount(amount).ok_or_else(|| MarinaError::InvalidAmount {
        amount: amount.to_string(),
    })?;
    let balance = store.apply_payment(name, amount)?;
    Ok(format!(
        "Payment accepted. New balance for '{}' is ${}\n",
        name,
        to_fixed_2(balance)
    ))
}
