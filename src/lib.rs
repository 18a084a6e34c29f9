pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod utils;

pub use config::Settings;
pub use extractor::{Extractor, read_urls};
pub use fetcher::{Fetch, HttpFetcher, download_images};
