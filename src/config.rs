//! Command-line arguments and the settings resolved from them.

use std::path::{Path, PathBuf};

use clap::Parser;

/// Directory under the working directory that holds the catalog by default
pub const DATA_DIR: &str = "data";
/// Default catalog file name
pub const DATA_FILE: &str = "books.json";

/// Command-line arguments for the library inventory manager
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Catalog file to load and save (defaults to ./data/books.json)
    #[arg(long, env = "LIBRARY_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

/// Settings the binary runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Catalog file
    pub data_file: PathBuf,
    /// Debug logging requested
    pub verbose: bool,
    /// Colored output enabled
    pub color: bool,
}

impl Config {
    /// Resolve settings from parsed arguments, anchoring the default catalog
    /// path at `cwd`
    #[must_use]
    pub fn from_cli(cli: Cli, cwd: &Path) -> Self {
        Self {
            data_file: cli.data_file.unwrap_or_else(|| Self::default_data_file(cwd)),
            verbose: cli.verbose,
            color: !cli.no_color,
        }
    }

    /// `cwd/data/books.json`
    #[must_use]
    pub fn default_data_file(cwd: &Path) -> PathBuf {
        cwd.join(DATA_DIR).join(DATA_FILE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["library-inventory"]).unwrap();
        let config = Config::from_cli(cli, Path::new("/srv/library"));

        assert_eq!(
            Config::default_data_file(Path::new("/srv/library")),
            PathBuf::from("/srv/library/data/books.json")
        );
        if std::env::var_os("LIBRARY_DATA_FILE").is_none() {
            assert_eq!(config.data_file, PathBuf::from("/srv/library/data/books.json"));
        }
        assert!(!config.verbose);
        assert!(config.color);
    }

    #[test]
    fn test_explicit_flags() {
        let cli = Cli::try_parse_from([
            "library-inventory",
            "--data-file",
            "/tmp/catalog.json",
            "--verbose",
            "--no-color",
        ])
        .unwrap();
        let config = Config::from_cli(cli, Path::new("/srv/library"));

        assert_eq!(config.data_file, PathBuf::from("/tmp/catalog.json"));
        assert!(config.verbose);
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["library-inventory", "--bogus"]).is_err());
    }
}
