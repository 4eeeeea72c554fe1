use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use spotmeta::{ClientConfig, ResolutionDepth, ResolveError, Resolver};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spotmeta-cli")]
#[command(about = "CLI for spotmeta - Spotify metadata resolver", long_about = None)]
struct Cli {
    /// Metadata backend host or base URL (can also be set via SPOTMETA_HOST env var)
    #[arg(long, env = "SPOTMETA_HOST")]
    host: String,

    /// Backend access credential (can also be set via SPOTMETA_PASS env var)
    #[arg(long, env = "SPOTMETA_PASS", hide_env_values = true)]
    pass: String,

    /// How far nested references are followed
    #[arg(short, long, value_enum, default_value_t = Depth::OneLevel)]
    depth: Depth,

    /// Override the thumbnail (oEmbed) endpoint
    #[arg(long)]
    embed_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Depth {
    StubOnly,
    OneLevel,
    Full,
}

impl From<Depth> for ResolutionDepth {
    fn from(d: Depth) -> Self {
        match d {
            Depth::StubOnly => ResolutionDepth::StubOnly,
            Depth::OneLevel => ResolutionDepth::OneLevel,
            Depth::Full => ResolutionDepth::Full,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a track, artist, album or playlist link or URI
    Resolve {
        /// open.spotify.com link or spotify: URI
        reference: String,
    },
    /// Search the catalog
    Search {
        /// Search query
        query: String,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::new(cli.host, cli.pass).with_depth(cli.depth.into());
    if let Some(embed_url) = cli.embed_url {
        config = config.with_embed_url(embed_url);
    }
    let resolver = Resolver::new(config)?;

    match &cli.command {
        Commands::Resolve { reference } => match resolver.resolve(reference).await {
            Ok(entity) => print_json(&entity)?,
            Err(ResolveError::Incomplete { partial, source }) => {
                // Still show what was known before the failure.
                print_json(&partial)?;
                return Err(source.into());
            }
            Err(e) => return Err(e.into()),
        },
        Commands::Search { query } => {
            let results = resolver.search(query).await?;
            if results.is_empty() {
                eprintln!("No results for '{}'", query);
            }
            print_json(&results)?;
        }
    }

    Ok(())
}
