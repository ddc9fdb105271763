use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::Level;
use crate::core::error::{Error, ErrorKind, Result};
use crate::scoring::scorer::IdfMode;

#[derive(Debug, Clone)]
pub struct Config {
    // HTTP surface
    pub bind_addr: SocketAddr,
    pub index_page: PathBuf,
    pub max_upload_bytes: usize,

    // Query execution
    pub result_cache_size: usize,          // 0 disables the result cache
    pub idf: IdfMode,
    pub require_terms_for_boolean: bool,   // boolean search needs update-terms first
    pub parallel_threshold: usize,         // corpus size at which ranking goes wide

    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            index_page: PathBuf::from("index.html"),
            max_upload_bytes: 10 << 20,            // 10MB multipart limit

            result_cache_size: 256,
            idf: IdfMode::Unary,
            require_terms_for_boolean: true,
            parallel_threshold: 64,

            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Apply command-line overrides on top of the defaults.
    /// Unknown flags are ignored.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut config = Config::default();
        let mut iter = args.iter();

        while let Some(flag) = iter.next() {
            match flag.as_str() {
                "--bind" => config.bind_addr = parse_value(flag, iter.next())?,
                "--index-page" => config.index_page = parse_value(flag, iter.next())?,
                "--max-upload-bytes" => config.max_upload_bytes = parse_value(flag, iter.next())?,
                "--cache-size" => config.result_cache_size = parse_value(flag, iter.next())?,
                "--idf" => config.idf = parse_value(flag, iter.next())?,
                "--parallel-threshold" => config.parallel_threshold = parse_value(flag, iter.next())?,
                "--log-level" => config.log_level = parse_value(flag, iter.next())?,
                "--no-terms-check" => config.require_terms_for_boolean = false,
                _ => {}
            }
        }

        Ok(config)
    }
}

fn parse_value<T>(flag: &str, value: Option<&String>) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let raw = value.ok_or_else(|| {
        Error::new(ErrorKind::InvalidInput, format!("Missing value for {}", flag))
    })?;

    raw.parse().map_err(|e| {
        Error::new(
            ErrorKind::InvalidInput,
            format!("Invalid value '{}' for {}: {}", raw, flag, e),
        )
    })
}
