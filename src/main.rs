use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{CommandFactory, Parser};

use logpuzzle::utils::display_elapsed_time;
use logpuzzle::{Extractor, HttpFetcher, Settings, download_images, logger};

/// Find the puzzle urls in an apache logfile and download the images.
#[derive(Parser)]
#[command(name = "logpuzzle", version)]
struct Cli {
    /// Destination directory for downloaded images
    #[arg(short = 'd', long = "todir", value_name = "DESTDIR")]
    todir: Option<PathBuf>,

    /// Settings file, ./logpuzzle.toml is used when present
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Apache logfile to extract urls from
    logfile: PathBuf,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    if std::env::args_os().len() < 2 {
        eprintln!("{}", Cli::command().render_usage());
        std::process::exit(1);
    }
    let cli = Cli::parse();
    logger::init();

    let settings = Settings::load(cli.config.as_deref())?;
    let urls = Extractor::new(&settings)?.read_urls(&cli.logfile).await?;

    match cli.todir {
        Some(dest_dir) => {
            let start = Instant::now();
            let fetcher = HttpFetcher::new(&settings.user_agent)?;
            download_images(&fetcher, &urls, &dest_dir).await?;
            display_elapsed_time(start.elapsed());
        }
        None => {
            let mut stdout = io::stdout().lock();
            for url in &urls {
                writeln!(stdout, "{}", url)?;
            }
        }
    }

    Ok(())
}
