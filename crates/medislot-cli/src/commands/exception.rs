use chrono::NaiveDate;
use clap::Subcommand;
use std::path::Path;

use medislot_core::Exception;

use crate::common::parse_interval;
use crate::store::PracticeStore;

#[derive(Subcommand)]
pub enum ExceptionAction {
    /// List date exceptions
    List {
        #[arg(long)]
        json: bool,
    },
    /// Block an entire date
    Block {
        date: NaiveDate,
        /// Reason shown to staff
        #[arg(long, default_value = "")]
        reason: String,
        /// Overwrite an existing exception for the date
        #[arg(long)]
        replace: bool,
    },
    /// Override a date with custom open hours
    Set {
        date: NaiveDate,
        /// Open intervals as HH:MM-HH:MM (repeatable)
        #[arg(required = true)]
        intervals: Vec<String>,
        /// Reason shown to staff
        #[arg(long, default_value = "")]
        reason: String,
        /// Overwrite an existing exception for the date
        #[arg(long)]
        replace: bool,
    },
    /// Remove a date's exception
    Remove { date: NaiveDate },
}

pub fn run(store_path: &Path, action: ExceptionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PracticeStore::load_or_default(store_path)?;
    match action {
        ExceptionAction::List { json } => {
            let exceptions: Vec<&Exception> = store.settings.exceptions.iter().collect();
            if json {
                println!("{}", serde_json::to_string_pretty(&exceptions)?);
            } else if exceptions.is_empty() {
                println!("no exceptions");
            } else {
                for exception in exceptions {
                    if exception.full_day_block {
                        println!("{}  blocked  {}", exception.date, exception.reason);
                    } else {
                        let hours: Vec<String> = exception
                            .custom_intervals
                            .iter()
                            .map(|iv| iv.to_string())
                            .collect();
                        println!("{}  {}  {}", exception.date, hours.join(" "), exception.reason);
                    }
                }
            }
        }
        ExceptionAction::Block {
            date,
            reason,
            replace,
        } => {
            store
                .settings
                .add_exception(Exception::block_day(date, reason), replace)?;
            store.save(store_path)?;
            println!("{date} blocked");
        }
        ExceptionAction::Set {
            date,
            intervals,
            reason,
            replace,
        } => {
            let parsed = intervals
                .iter()
                .map(|raw| parse_interval(raw))
                .collect::<Result<Vec<_>, _>>()?;
            store
                .settings
                .add_exception(Exception::custom(date, reason, parsed), replace)?;
            store.save(store_path)?;
            println!("{date} overridden");
        }
        ExceptionAction::Remove { date } => match store.settings.remove_exception(date) {
            Some(_) => {
                store.save(store_path)?;
                println!("exception for {date} removed");
            }
            None => println!("no exception for {date}"),
        },
    }
    Ok(())
}
