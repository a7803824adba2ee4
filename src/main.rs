use clap::Parser;
use pharmadir::application::{
    check_records, init, list_pharmacies, show_pharmacy, ConfigService, DirectoryService,
    ListOptions,
};
use pharmadir::cli::{
    format_check_report, format_counts, format_demo_banner, format_open_summary,
    format_pharmacy_detail, format_pharmacy_list, Cli, Commands,
};
use pharmadir::domain::{current_day_key, resolve_reference_time, DayKey, Language};
use pharmadir::error::PharmadirError;
use pharmadir::infrastructure::{
    Config, DirectoryRepository, FileSystemProvider, FileSystemRepository,
};
use std::str::FromStr;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(filter)
        .init();
}

/// Discover the directory and load its config
fn open_repository() -> Result<(FileSystemRepository, Config), PharmadirError> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    debug!(root = %repo.root().display(), ?config, "opened directory");
    Ok((repo, config))
}

fn print_banner(source: &pharmadir::application::DataSource, language: Language) {
    if let Some(banner) = format_demo_banner(source, language) {
        println!("{}\n", banner);
    }
}

fn run(cli: Cli) -> Result<(), PharmadirError> {
    let at = cli.at.as_deref();

    match cli.command {
        Some(Commands::Init {
            path,
            language,
            demo,
        }) => {
            let language = Language::from_str(&language).map_err(PharmadirError::Config)?;
            init::init(&path, language, demo)?;
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!(
                    "language = {}",
                    format!("{:?}", config.language).to_lowercase()
                );
                println!("data_dir = {}", config.data_dir);
                println!("demo_fallback = {}", config.demo_fallback);
                match config.location {
                    Some(location) => println!("location = {}", location),
                    None => println!("location = none"),
                }
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: pharmadir config [--list | <key> [<value>]]");
                println!("Valid keys: language, data_dir, demo_fallback, location");
            }
            Ok(())
        }
        Some(Commands::List { query, day }) => {
            let now = resolve_reference_time(at)?;
            let (repo, config) = open_repository()?;
            let language = config.get_language();
            let day = day
                .map(|d| DayKey::from_str(&d).map_err(PharmadirError::Config))
                .transpose()?;

            let directory = DirectoryService::from_config(&repo, &config).load()?;
            let options = ListOptions {
                query,
                day,
                open_only: false,
            };
            let listing = list_pharmacies(&directory, &options, now);
            let today = current_day_key(now);

            print_banner(&directory.source, language);
            println!("{}\n", format_counts(listing.counts, language));
            print!(
                "{}",
                format_pharmacy_list(&listing.entries, day.unwrap_or(today), today, language)
            );
            Ok(())
        }
        Some(Commands::Open { query }) => {
            let now = resolve_reference_time(at)?;
            let (repo, config) = open_repository()?;
            let language = config.get_language();

            let directory = DirectoryService::from_config(&repo, &config).load()?;
            let options = ListOptions {
                query,
                day: None,
                open_only: true,
            };
            let listing = list_pharmacies(&directory, &options, now);
            let today = current_day_key(now);

            print_banner(&directory.source, language);
            println!("{}\n", format_open_summary(listing.entries.len(), language));
            if !listing.entries.is_empty() {
                print!(
                    "{}",
                    format_pharmacy_list(&listing.entries, today, today, language)
                );
            }
            Ok(())
        }
        Some(Commands::Show { pharmacy }) => {
            let now = resolve_reference_time(at)?;
            let (repo, config) = open_repository()?;
            let language = config.get_language();

            let directory = DirectoryService::from_config(&repo, &config).load()?;
            let detail = show_pharmacy(&directory, &pharmacy, now, config.location)?;

            print_banner(&directory.source, language);
            print!("{}", format_pharmacy_detail(&detail, language));
            Ok(())
        }
        Some(Commands::Check) => {
            let (repo, config) = open_repository()?;
            let provider = FileSystemProvider::new(repo.data_dir(&config));

            let report = check_records(&provider)?;
            print!("{}", format_check_report(&report));
            match report.invalid.into_iter().next() {
                Some((path, message)) => Err(PharmadirError::InvalidRecord { path, message }),
                None => Ok(()),
            }
        }
        None => {
            println!("pharmadir - Pharmacy directory with live opening status");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
