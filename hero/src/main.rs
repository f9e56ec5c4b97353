//! Hero CLI - render the homepage hero banner outside the browser

use clap::{Parser, Subcommand};
use hero_core::{localize_category, FeaturedPost, HeroConfig, HeroView, CATEGORY_OPTIONS};
use owo_colors::OwoColorize as _;
use std::io::{self, Read as _};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"))]
#[command(about = "Render the homepage hero banner for a featured post")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render a featured post to HTML
    Render {
        /// Post JSON file, or `-` for stdin
        #[arg(value_name = "POST")]
        post: PathBuf,

        /// Output file path (writes to file instead of stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit only the hero markup instead of a full page
        #[arg(long)]
        fragment: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Print the resolved hero view as JSON
    View {
        /// Post JSON file, or `-` for stdin
        #[arg(value_name = "POST")]
        post: PathBuf,

        /// Single-line JSON
        #[arg(long)]
        compact: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Translate category slugs to their Nepali labels
    Localize {
        #[arg(value_name = "SLUG", required = true)]
        slugs: Vec<String>,
    },
    /// List the category table
    Categories,
}

#[derive(clap::Args, Debug)]
struct ConfigArgs {
    /// Hero configuration file (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Display offset for timestamps, in minutes east of UTC
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,
}

impl ConfigArgs {
    fn load(&self) -> anyhow::Result<HeroConfig> {
        let mut config = match &self.config {
            Some(path) => HeroConfig::from_file(path)?,
            None => HeroConfig::default(),
        };
        if let Some(minutes) = self.utc_offset {
            config = config.with_utc_offset_minutes(minutes);
        }
        config.validate()?;
        debug!("Hero configuration: {:?}", config);
        Ok(config)
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .compact()
        .without_time()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    debug!("Command line arguments: {:?}", cli);

    if let Err(e) = run(cli.command) {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Render {
            post,
            output,
            fragment,
            config,
        } => {
            let config = config.load()?;
            let post = read_post(&post)?;
            let html = if fragment {
                ui::render_hero(post, config)
            } else {
                ui::render_document(post, config)
            };
            write_output(&html, output.as_deref())
        }
        Commands::View {
            post,
            compact,
            config,
        } => {
            let config = config.load()?;
            let post = read_post(&post)?;
            let view = HeroView::build(post.as_ref(), &config);
            let json = if compact {
                serde_json::to_string(&view)?
            } else {
                serde_json::to_string_pretty(&view)?
            };
            println!("{}", json);
            Ok(())
        }
        Commands::Localize { slugs } => {
            for slug in slugs {
                println!("{}", localize_category(&slug));
            }
            Ok(())
        }
        Commands::Categories => {
            for option in CATEGORY_OPTIONS {
                println!("{:<16} {}", option.value.cyan(), option.label);
            }
            Ok(())
        }
    }
}

fn read_post(path: &Path) -> anyhow::Result<Option<FeaturedPost>> {
    if path == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(FeaturedPost::from_json(&text)?);
    }
    if !path.exists() {
        anyhow::bail!("Post file not found: {}", path.display());
    }
    Ok(FeaturedPost::from_file(path)?)
}

fn write_output(html: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, html)?;
            info!("Wrote hero to {}", path.display());
            eprintln!("{} {}", "Saved:".green().bold(), path.display());
        }
        None => print!("{}", html),
    }
    Ok(())
}
