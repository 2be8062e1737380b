use chrono::NaiveDate;
use clap::Subcommand;
use std::path::Path;

use medislot_core::VacationWindow;

use crate::store::PracticeStore;

#[derive(Subcommand)]
pub enum VacationAction {
    /// Show the current vacation window
    Show,
    /// Set the vacation window
    Set {
        start: NaiveDate,
        end: NaiveDate,
        /// Away message surfaced to booking callers
        #[arg(long)]
        message: Option<String>,
    },
    /// Clear the vacation window
    Clear,
}

pub fn run(store_path: &Path, action: VacationAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PracticeStore::load_or_default(store_path)?;
    match action {
        VacationAction::Show => match &store.settings.vacation {
            Some(window) => {
                println!("{}", serde_json::to_string_pretty(window)?);
            }
            None => println!("no vacation window"),
        },
        VacationAction::Set {
            start,
            end,
            message,
        } => {
            let mut window = VacationWindow::new(start, end);
            if let Some(message) = message {
                window = window.with_message(message);
            }
            store.settings.set_vacation(window)?;
            store.save(store_path)?;
            println!("vacation set: {start} to {end}");
        }
        VacationAction::Clear => {
            if store.settings.clear_vacation().is_some() {
                store.save(store_path)?;
                println!("vacation cleared");
            } else {
                println!("no vacation window");
            }
        }
    }
    Ok(())
}
