use clap::Parser;
use folio::application::{
    init::init, BuildFeedService, ConfigService, FeedOptions, ListPostsOptions,
    ListPostsService, ListTagsService,
};
use folio::cli::{format_post_list, format_tag_list, Cli, Commands};
use folio::domain::{Collection, SiteConfig};
use folio::error::{FolioError, Result};
use folio::infrastructure::{ContentRepository, FileSystemRepository};
use std::str::FromStr;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref().unwrap_or("warn")) {
        eprintln!("Error: invalid log level: {}", e);
        std::process::exit(1);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_logging(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

/// Discover the site and freeze its configuration for this process
fn open_site() -> Result<(FileSystemRepository, &'static SiteConfig)> {
    let repo = FileSystemRepository::discover()?;
    let config = SiteConfig::install(repo.load_config()?);
    Ok((repo, config))
}

fn parse_collection(name: &str) -> Result<Collection> {
    Collection::from_str(name).map_err(FolioError::UnknownCollection)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { path, site_url } => init(&path, site_url),
        Commands::Posts {
            collection,
            tag,
            page,
        } => {
            let collection = parse_collection(&collection)?;
            let (repo, config) = open_site()?;
            let options = ListPostsOptions {
                collection,
                tag,
                page,
            };
            let listing = ListPostsService::new(repo, config).execute(&options)?;
            println!("{}", format_post_list(&listing).trim_end());
            Ok(())
        }
        Commands::Tags { collection } => {
            let collection = parse_collection(&collection)?;
            let (repo, _config) = open_site()?;
            let tags = ListTagsService::new(repo).execute(collection)?;
            println!("{}", format_tag_list(&tags).trim_end());
            Ok(())
        }
        Commands::Feed { output, site } => {
            let (repo, config) = open_site()?;
            let options = FeedOptions {
                site_url: site,
                output: output.clone(),
            };
            let xml = BuildFeedService::new(repo, config).execute(&options)?;
            match output {
                Some(path) => println!("Wrote feed to {}", path.display()),
                None => println!("{}", xml),
            }
            Ok(())
        }
        Commands::Config { key, list } => {
            let (_repo, config) = open_site()?;
            let service = ConfigService::new(config);

            if list {
                print!("{}", service.list()?);
            } else if let Some(k) = key {
                println!("{}", service.get(&k)?);
            } else {
                println!("Usage: folio config [--list | <key>]");
                println!(
                    "Valid keys: title, title_header, subtitle, description, site_url, \
                    posts_per_page, projects_per_page"
                );
            }
            Ok(())
        }
    }
}
