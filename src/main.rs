use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use muse_inspire::catalog::{filter_quotes, CuratedCatalog, QuoteCatalog};
use muse_inspire::config::Config;
use muse_inspire::design::{
    Alignment, Background, Category, Design, DesignId, DesignPatch, Palette, QuoteSize, Typography,
};
use muse_inspire::server::{init_tracing, StudioServer};
use muse_inspire::ui::preview::{render_preview, render_room_preview};

#[derive(Parser)]
#[command(name = "muse-inspire")]
#[command(about = "Quote art studio: browse quotes, style them, preview the print")]
#[command(version)]
struct Cli {
    /// Config file (defaults to the user config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the studio HTTP server
    Serve {
        /// Override the configured bind address
        #[arg(long)]
        bind: Option<String>,
    },

    /// List curated quotes
    Quotes {
        #[arg(short, long)]
        category: Option<Category>,

        /// Case-insensitive search over text, author and tags
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Print the preview of a curated quote as JSON
    Preview(PreviewArgs),
}

#[derive(Args)]
struct PreviewArgs {
    quote_id: String,

    #[arg(long)]
    typography: Option<Typography>,

    #[arg(long)]
    background: Option<Background>,

    #[arg(long)]
    palette: Option<Palette>,

    #[arg(long)]
    alignment: Option<Alignment>,

    #[arg(long)]
    size: Option<QuoteSize>,

    #[arg(long)]
    hide_author: bool,
}

impl PreviewArgs {
    fn patch(&self) -> DesignPatch {
        DesignPatch {
            typography: self.typography,
            background: self.background,
            palette: self.palette,
            show_author: self.hide_author.then_some(false),
            alignment: self.alignment,
            quote_size: self.size,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().with_context(|| {
            format!("loading config from {}", Config::config_path().display())
        })?,
    };

    match cli.command {
        Commands::Serve { bind } => cmd_serve(&config, bind).await,
        Commands::Quotes { category, search } => cmd_quotes(category, search),
        Commands::Preview(args) => cmd_preview(&args),
    }
}

async fn cmd_serve(config: &Config, bind: Option<String>) -> Result<()> {
    init_tracing(&config.logging.filter);

    let bind_addr = bind.unwrap_or_else(|| config.server.bind_addr.clone());
    let mut server = StudioServer::new(config);
    let addr = server.try_bind(&bind_addr).await?;
    println!("Studio listening on http://{addr}");
    server.run().await?;
    Ok(())
}

fn cmd_quotes(category: Option<Category>, search: Option<String>) -> Result<()> {
    let catalog = CuratedCatalog::new();
    let quotes = filter_quotes(&catalog, category, search.as_deref().unwrap_or(""));
    for quote in &quotes {
        println!(
            "{:<6} {:<18} {}  -- {}",
            quote.id,
            quote.category.as_str(),
            quote.text,
            quote.author
        );
    }
    println!("{} quote(s)", quotes.len());
    Ok(())
}

fn cmd_preview(args: &PreviewArgs) -> Result<()> {
    let catalog = CuratedCatalog::new();
    let quote = catalog
        .lookup(&args.quote_id)
        .with_context(|| format!("quote '{}' not found", args.quote_id))?;
    let design = args.patch().apply(&Design::from_quote(DesignId::generate(), quote));

    let output = serde_json::json!({
        "design": design,
        "preview": render_preview(&design),
        "roomPreview": render_room_preview(&design),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
