use clap::Subcommand;
use std::path::Path;

use crate::store::PracticeStore;

#[derive(Subcommand)]
pub enum PolicyAction {
    /// Show the booking policy
    Show,
    /// Update booking policy fields
    Set {
        /// Session length in minutes
        #[arg(long)]
        session: Option<u32>,
        /// Buffer between sessions in minutes
        #[arg(long)]
        buffer: Option<u32>,
        /// Maximum appointments per date
        #[arg(long)]
        max_daily: Option<u32>,
        /// Advance booking horizon in days
        #[arg(long)]
        advance_days: Option<u32>,
    },
}

pub fn run(store_path: &Path, action: PolicyAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PracticeStore::load_or_default(store_path)?;
    match action {
        PolicyAction::Show => {
            println!("{}", serde_json::to_string_pretty(&store.policy)?);
        }
        PolicyAction::Set {
            session,
            buffer,
            max_daily,
            advance_days,
        } => {
            let mut candidate = store.policy;
            if let Some(session) = session {
                candidate.session_minutes = session;
            }
            if let Some(buffer) = buffer {
                candidate.buffer_minutes = buffer;
            }
            if let Some(max_daily) = max_daily {
                candidate.max_daily_appointments = max_daily;
            }
            if let Some(advance_days) = advance_days {
                candidate.advance_booking_days = advance_days;
            }
            candidate.validate()?;
            store.policy = candidate;
            store.save(store_path)?;
            println!("booking policy updated");
        }
    }
    Ok(())
}
