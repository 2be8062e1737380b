use clap::{CommandFactory, Parser, Subcommand};

mod commands;
mod common;
mod store;

#[derive(Parser)]
#[command(name = "medislot-cli", version, about = "Medislot practice scheduling CLI")]
struct Cli {
    /// Path to the practice store file (defaults to the user config dir)
    #[arg(long, global = true)]
    store: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Weekly template management
    Template {
        #[command(subcommand)]
        action: commands::template::TemplateAction,
    },
    /// Date exception management
    Exception {
        #[command(subcommand)]
        action: commands::exception::ExceptionAction,
    },
    /// Vacation window management
    Vacation {
        #[command(subcommand)]
        action: commands::vacation::VacationAction,
    },
    /// Booking policy management
    Policy {
        #[command(subcommand)]
        action: commands::policy::PolicyAction,
    },
    /// List bookable slots
    Slots(commands::slots::SlotsArgs),
    /// Request a booking
    Book(commands::book::BookArgs),
    /// Appointment management
    Appointments {
        #[command(subcommand)]
        action: commands::appointments::AppointmentsAction,
    },
    /// Generate shell completions
    Completions {
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let store_path = store::resolve_path(cli.store);
    let result = match cli.command {
        Commands::Template { action } => commands::template::run(&store_path, action),
        Commands::Exception { action } => commands::exception::run(&store_path, action),
        Commands::Vacation { action } => commands::vacation::run(&store_path, action),
        Commands::Policy { action } => commands::policy::run(&store_path, action),
        Commands::Slots(args) => commands::slots::run(&store_path, args),
        Commands::Book(args) => commands::book::run(&store_path, args),
        Commands::Appointments { action } => commands::appointments::run(&store_path, action),
        Commands::Completions { shell } => {
            clap_complete::generate(
                shell,
                &mut Cli::command(),
                "medislot-cli",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
