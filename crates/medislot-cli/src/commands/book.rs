use chrono::NaiveDate;
use clap::Args;
use std::path::Path;

use medislot_core::{Appointment, BookingRequest, BookingValidator, TimeInterval, Verdict};

use crate::common::parse_time;
use crate::store::PracticeStore;

#[derive(Args)]
pub struct BookArgs {
    /// Appointment date
    pub date: NaiveDate,
    /// Session start time (HH:MM)
    pub start: String,
    /// Patient name or reference
    #[arg(long, default_value = "")]
    pub patient: String,
}

pub fn run(store_path: &Path, args: BookArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = PracticeStore::load_or_default(store_path)?;
    let start = parse_time(&args.start)?;
    let end = start + chrono::Duration::minutes(store.policy.session_minutes as i64);
    let interval =
        TimeInterval::new(start, end).ok_or("the session would not fit within the day")?;
    let request = BookingRequest {
        date: args.date,
        interval,
    };

    let today = chrono::Local::now().date_naive();
    let validator = BookingValidator::new(store.policy, today);

    if let Verdict::Rejected(reason) =
        validator.validate(&request, &store.settings, &store.occupancy())?
    {
        println!("rejected: {reason}");
        return Ok(());
    }

    // Re-validate against a fresh read in the same step as the save; another
    // process may have written the store since our first load.
    let mut fresh = PracticeStore::load_or_default(store_path)?;
    if let Verdict::Rejected(reason) =
        validator.validate(&request, &fresh.settings, &fresh.occupancy())?
    {
        println!("rejected: {reason}");
        return Ok(());
    }

    let appointment = Appointment::new(request.date, request.interval, args.patient);
    let id = appointment.id;
    fresh.appointments.push(appointment);
    fresh.save(store_path)?;
    println!("booked {} {} (id {id})", request.date, request.interval);
    Ok(())
}
