use clap::Parser;
use marina::domain::ports::ConfigProvider;
use marina::utils::logger;
use marina::{CliConfig, LocalStorage, Repository, Settings, Shell};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let settings = match Settings::from_cli(&cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration validation failed: {} ({:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    let repository = Repository::new(LocalStorage::new(settings.data_file()));
    let (mut store, report) = repository.open(settings.capacity());

    if let Some(e) = &report.source_error {
        eprintln!(
            "Failed to open file {}: {}",
            settings.data_file().display(),
            e
        );
    }
    for skipped in &report.skipped {
        eprintln!("Error parsing line {}: {}", skipped.line_number, skipped.error);
    }
    if report.ignored_over_capacity > 0 {
        eprintln!(
            "Marina is full; ignored {} boats from the data file.",
            report.ignored_over_capacity
        );
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock());
    shell.run(&mut store)?;

    if let Err(e) = repository.persist(&store) {
        tracing::error!("Saving failed: {}", e);
        eprintln!("❌ Failed to save {}: {}", settings.data_file().display(), e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    Ok(())
}
