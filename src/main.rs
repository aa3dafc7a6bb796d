use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use fediarchive::probe::check_profiles;
use fediarchive::report::{self, OutputFormat};
use fediarchive::{ArchiveDir, ArchiveSummary, Config, HttpProber, ImportConfig, Importer, ProbeConfig};

#[derive(Parser, Debug)]
#[command(name = "fediarchive")]
#[command(version)]
#[command(about = "Summarize a Mastodon archive or turn it into a static site")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print statistics about an extracted archive
    Stats {
        /// Extracted archive folder
        archive: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Check whether the most boosted and replied profiles are still reachable
        #[arg(long)]
        check_profiles: bool,
    },

    /// Convert an extracted archive into site generator posts
    Import {
        /// Extracted archive folder
        archive: PathBuf,

        /// Site folder to write into
        #[arg(short, long, default_value = "new_site")]
        output: PathBuf,

        /// Import options (TOML)
        #[arg(short, long, default_value = "import_mastodon.toml")]
        config: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, the report to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("fediarchive=info".parse()?)
                .add_directive("reqwest=warn".parse()?),
        )
        .init();

    dotenvy::dotenv().ok();

    let args = Args::parse();

    match args.command {
        Command::Stats {
            archive,
            format,
            output,
            check_profiles,
        } => {
            let config = Config::from_env()?;
            let archive = ArchiveDir::new(archive);
            let summary = ArchiveSummary::collect(&archive)?;

            let mut rendered = report::render_summary(&summary, format)?;
            if check_profiles && format == OutputFormat::Json {
                tracing::warn!("Profile checks are only reported in text output, skipping");
            } else if check_profiles {
                rendered.push_str(&probe_profiles(&summary, &ProbeConfig::from(&config)).await?);
            }

            if let Some(ref path) = output {
                std::fs::write(path, &rendered)?;
                tracing::info!("Output written to: {}", path.display());
            } else {
                println!("{}", rendered);
            }
        }
        Command::Import {
            archive,
            output,
            config,
        } => {
            let import_config = ImportConfig::load(&config)?;
            let importer = Importer::new(ArchiveDir::new(archive), &output, import_config);
            let import_report = importer.run()?;
            println!("{}", report::format_import(&import_report));
            tracing::info!("Site written to: {}", output.display());
        }
    }

    Ok(())
}

async fn probe_profiles(summary: &ArchiveSummary, config: &ProbeConfig) -> anyhow::Result<String> {
    let prober = HttpProber::new(config)?;
    let outbox = &summary.outbox;

    let mut output = String::new();
    let sections = [
        ("most frequently boosted profiles", &outbox.boosted_users),
        ("most replied profiles", &outbox.replied_profiles),
    ];

    for (title, table) in sections {
        let urls: Vec<String> = table
            .top(config.limit)
            .into_iter()
            .map(|(url, _)| url.clone())
            .collect();
        tracing::info!("Checking {} {}", urls.len(), title);

        let results = check_profiles(&prober, &urls, config.concurrency).await;
        output.push_str(&report::format_probe(
            &format!("{} ({})", title, config.limit),
            &results,
        ));
    }

    Ok(output)
}
