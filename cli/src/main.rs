//! slideloader CLI - assemble reveal.js decks from remote markdown slides

mod spinner;

use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;

use slideloader::{
    fetch_documents, ContentRequestConfig, ContentSource, DirectorySource, GitHubContentSource,
    HtmlDeck, HtmlOptions, JsonFormat, LoaderOptions, SlideLoader, DEFAULT_HOST,
};

use spinner::SpinnerTarget;

type CliResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Parser)]
#[command(name = "slideloader")]
#[command(version)]
#[command(about = "Fetch markdown slides from a repository and assemble a reveal.js deck", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the deck and write it as a standalone HTML page
    Build {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Engine theme
        #[arg(long, default_value = "black")]
        theme: String,

        /// Page title
        #[arg(long)]
        title: Option<String>,

        /// Base URL of the engine's assets
        #[arg(long, value_name = "URL")]
        asset_base: Option<String>,
    },

    /// Print the decoded markdown of every slide file, in order
    Cat {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Load the deck and print it as JSON
    Json {
        #[command(flatten)]
        source: SourceArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show the content URL each slide file resolves to
    Url {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show version information
    Version,
}

/// Where the slides come from.
#[derive(Args)]
struct SourceArgs {
    /// Slide files, in presentation order
    #[arg(value_name = "FILE")]
    files: Vec<String>,

    /// JSON manifest with host, owner, repo, base_path and filenames
    #[arg(short, long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Content API host
    #[arg(long, env = "SLIDELOADER_HOST")]
    host: Option<String>,

    /// Repository owner
    #[arg(long, env = "SLIDELOADER_OWNER")]
    owner: Option<String>,

    /// Repository name
    #[arg(long, env = "SLIDELOADER_REPO")]
    repo: Option<String>,

    /// Directory inside the repository holding the slides
    #[arg(long, env = "SLIDELOADER_BASE_PATH")]
    base_path: Option<String>,

    /// Read slides from a local directory instead of the content API
    #[arg(long, value_name = "DIR")]
    local: Option<PathBuf>,

    /// API token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Per-request timeout in seconds (waits indefinitely if not set)
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,
}

impl SourceArgs {
    fn config(&self) -> CliResult<ContentRequestConfig> {
        let mut config = match self.manifest {
            Some(ref path) => ContentRequestConfig::from_json_file(path)?,
            None => ContentRequestConfig::new(String::new(), String::new()),
        };

        if let Some(ref host) = self.host {
            config.host = host.clone();
        }
        if let Some(ref owner) = self.owner {
            config.owner = owner.clone();
        }
        if let Some(ref repo) = self.repo {
            config.repo = repo.clone();
        }
        if let Some(ref base_path) = self.base_path {
            config.base_path = base_path.clone();
        }
        if !self.files.is_empty() {
            config.filenames = self.files.clone();
        }

        // Owner and repo only matter for the content API.
        if self.local.is_some() {
            if config.owner.is_empty() {
                config.owner = "local".to_string();
            }
            if config.repo.is_empty() {
                config.repo = "local".to_string();
            }
        }

        Ok(config)
    }

    fn options(&self) -> LoaderOptions {
        let mut options = LoaderOptions::new();
        if let Some(secs) = self.timeout {
            options = options.with_timeout(Duration::from_secs(secs));
        }
        options
    }

    fn source(&self) -> Box<dyn ContentSource> {
        match self.local {
            Some(ref root) => Box::new(DirectorySource::new(root.clone())),
            None => {
                let mut source = GitHubContentSource::new();
                if let Some(ref token) = self.token {
                    source = source.with_token(token.clone());
                }
                Box::new(source)
            }
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            source,
            output,
            theme,
            title,
            asset_base,
        } => {
            let mut html_options = HtmlOptions::new().with_theme(theme);
            if let Some(title) = title {
                html_options = html_options.with_title(title);
            }
            if let Some(base) = asset_base {
                html_options = html_options.with_asset_base(base);
            }
            cmd_build(&source, output.as_deref(), html_options)
        }
        Commands::Cat { source } => cmd_cat(&source),
        Commands::Json {
            source,
            output,
            compact,
        } => cmd_json(&source, output.as_deref(), compact),
        Commands::Url { source } => cmd_url(&source),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn block_on<F: Future>(future: F) -> CliResult<F::Output> {
    let rt = tokio::runtime::Runtime::new()?;
    Ok(rt.block_on(future))
}

/// Run a load into an HTML target, keeping the error page on failure.
fn load_into(args: &SourceArgs, target: &mut HtmlDeck) -> CliResult<slideloader::Result<()>> {
    let config = args.config()?;
    let mut loader = SlideLoader::from_boxed(config, args.source()).with_options(args.options());

    let mut spinner = SpinnerTarget::new(target)?;
    let outcome = block_on(loader.load(&mut spinner))?;
    if let Ok(ref report) = outcome {
        log::info!("loaded {} section(s) in {:?}", report.section_count, report.elapsed());
    }
    Ok(outcome.map(|_| ()))
}

fn cmd_build(args: &SourceArgs, output: Option<&Path>, options: HtmlOptions) -> CliResult<()> {
    let mut target = HtmlDeck::with_options(options);
    let outcome = load_into(args, &mut target)?;

    let html = target.to_html();
    if let Some(path) = output {
        fs::write(path, &html)?;
        if outcome.is_ok() {
            println!(
                "{} {} ({} sections)",
                "Saved to".green(),
                path.display(),
                target.deck().section_count()
            );
        } else {
            println!("{} {}", "Error page saved to".yellow(), path.display());
        }
    } else {
        println!("{}", html);
    }

    outcome.map_err(Into::into)
}

fn cmd_cat(args: &SourceArgs) -> CliResult<()> {
    let config = args.config()?;
    let source = args.source();
    let documents = block_on(fetch_documents(&config, source.as_ref(), &args.options()))??;

    for (i, doc) in documents.iter().enumerate() {
        if i > 0 {
            println!("\n---\n");
        }
        println!("{}", format!("<!-- {} -->", doc.filename).dimmed());
        println!("{}", doc.text.trim_end());
    }

    Ok(())
}

fn cmd_json(args: &SourceArgs, output: Option<&Path>, compact: bool) -> CliResult<()> {
    let mut target = HtmlDeck::new();
    let outcome = load_into(args, &mut target)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let json = slideloader::render::to_json(target.deck(), format)?;

    if let Some(path) = output {
        fs::write(path, &json)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", json);
    }

    outcome.map_err(Into::into)
}

fn cmd_url(args: &SourceArgs) -> CliResult<()> {
    let config = args.config()?;
    config.validate()?;

    println!("{}", "Content URLs".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (i, filename) in config.filenames.iter().enumerate() {
        let url = config.content_url(filename)?;
        println!("{:>3}. {} {}", i + 1, filename.bold(), url.as_str().dimmed());
    }

    Ok(())
}

fn cmd_version() {
    println!("{} {}", "slideloader".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Remote markdown slide loader");
    println!();
    println!("Default host: {}", DEFAULT_HOST.dimmed());
    println!("License: MIT");
}
