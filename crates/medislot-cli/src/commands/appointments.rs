use chrono::NaiveDate;
use clap::Subcommand;
use std::path::Path;
use uuid::Uuid;

use medislot_core::Appointment;

use crate::store::PracticeStore;

#[derive(Subcommand)]
pub enum AppointmentsAction {
    /// List appointments
    List {
        /// Only this date
        #[arg(long)]
        date: Option<NaiveDate>,
        /// Include cancelled appointments
        #[arg(long)]
        all: bool,
        #[arg(long)]
        json: bool,
    },
    /// Cancel an appointment by id
    Cancel { id: Uuid },
}

pub fn run(store_path: &Path, action: AppointmentsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PracticeStore::load_or_default(store_path)?;
    match action {
        AppointmentsAction::List { date, all, json } => {
            let mut listed: Vec<&Appointment> = store
                .appointments
                .iter()
                .filter(|a| all || a.status.occupies())
                .filter(|a| date.map_or(true, |d| a.date == d))
                .collect();
            listed.sort_by_key(|a| (a.date, a.interval.start));

            if json {
                println!("{}", serde_json::to_string_pretty(&listed)?);
            } else if listed.is_empty() {
                println!("no appointments");
            } else {
                for appointment in listed {
                    println!(
                        "{}  {}  {:?}  {}  {}",
                        appointment.date,
                        appointment.interval,
                        appointment.status,
                        appointment.patient,
                        appointment.id,
                    );
                }
            }
        }
        AppointmentsAction::Cancel { id } => {
            match store.appointments.iter_mut().find(|a| a.id == id) {
                Some(appointment) => {
                    appointment.cancel();
                    store.save(store_path)?;
                    println!("appointment {id} cancelled");
                }
                None => println!("no appointment with id {id}"),
            }
        }
    }
    Ok(())
}
