use chrono::{Days, NaiveDate};
use clap::Args;
use std::path::Path;

use medislot_core::SlotGenerator;

use crate::store::PracticeStore;

#[derive(Args)]
pub struct SlotsArgs {
    /// First date to include (defaults to today)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last date to include (defaults to the advance booking horizon)
    #[arg(long)]
    pub to: Option<NaiveDate>,
    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(store_path: &Path, args: SlotsArgs) -> Result<(), Box<dyn std::error::Error>> {
    let store = PracticeStore::load_or_default(store_path)?;
    let today = chrono::Local::now().date_naive();
    let from = args.from.unwrap_or(today);
    let to = args.to.unwrap_or_else(|| {
        from.checked_add_days(Days::new(store.policy.advance_booking_days as u64))
            .unwrap_or(from)
    });

    let generator = SlotGenerator::new(store.policy);
    let candidates = generator.generate(&store.settings, from, to)?;
    let bookable = store.occupancy().bookable(candidates, &store.policy);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&bookable)?);
    } else if bookable.is_empty() {
        println!("no bookable slots between {from} and {to}");
    } else {
        for slot in &bookable {
            println!("{}  {}  ({})", slot.date, slot.interval, slot.source);
        }
    }
    Ok(())
}
