use clap::Subcommand;
use std::path::{Path, PathBuf};

use medislot_core::WeeklyTemplate;

use crate::store::PracticeStore;

#[derive(Subcommand)]
pub enum TemplateAction {
    /// Show the weekly template
    Show,
    /// Replace the weekly template from a JSON file
    Set {
        /// Path to a JSON file with all seven day rules
        file: PathBuf,
    },
    /// Reset to an all-closed template
    Reset,
}

pub fn run(store_path: &Path, action: TemplateAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = PracticeStore::load_or_default(store_path)?;
    match action {
        TemplateAction::Show => {
            println!("{}", serde_json::to_string_pretty(&store.settings.template)?);
        }
        TemplateAction::Set { file } => {
            let raw = std::fs::read_to_string(&file)?;
            let candidate: WeeklyTemplate = serde_json::from_str(&raw)?;
            store.settings.save_weekly_template(candidate)?;
            store.save(store_path)?;
            println!("weekly template updated");
        }
        TemplateAction::Reset => {
            store.settings.save_weekly_template(WeeklyTemplate::closed())?;
            store.save(store_path)?;
            println!("weekly template reset");
        }
    }
    Ok(())
}
