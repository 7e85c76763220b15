//! Simple CLI that reads HTML from stdin and prints the parse response as JSON.

use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use rs_declutter::{parse_bytes, Options};
use tracing_subscriber::{fmt, EnvFilter};

/// Extract the main content of an HTML page read from stdin.
#[derive(Parser, Debug)]
#[command(name = "extract_stdin")]
#[command(about = "Read HTML from stdin and print the declutter response as JSON", long_about = None)]
struct Args {
    /// Page URL, used for domain detection and link resolution.
    #[arg(long)]
    url: Option<String>,

    /// JSON file with extraction options (camelCase keys).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Disable partial-selector removal.
    #[arg(long, default_value_t = false)]
    no_partial: bool,

    /// Disable exact-selector removal.
    #[arg(long, default_value_t = false)]
    no_exact: bool,

    /// Strip images from the content.
    #[arg(long, default_value_t = false)]
    no_images: bool,

    /// Log pipeline decisions to stderr.
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Args {
    /// Options from the `--options` file (or defaults) with flags applied on top.
    fn into_options(self) -> Result<Options, String> {
        let mut options = match &self.options {
            Some(path) => load_options(path)?,
            None => Options::default(),
        };
        if self.url.is_some() {
            options.url = self.url;
        }
        if self.no_partial {
            options.remove_partial_selectors = false;
        }
        if self.no_exact {
            options.remove_exact_selectors = false;
        }
        if self.no_images {
            options.remove_images = true;
        }
        if self.debug {
            options.debug = true;
        }
        Ok(options)
    }
}

fn main() {
    let options = Args::parse().into_options().unwrap_or_else(|message| fail(&message));

    init_logging(options.debug);

    let mut html = Vec::new();
    if io::stdin().read_to_end(&mut html).is_err() {
        fail("Failed to read from stdin");
    }

    let response = parse_bytes(&html, &options);

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{json}"),
        Err(e) => fail(&format!("Failed to serialize response: {e}")),
    }
}

fn load_options(path: &Path) -> Result<Options, String> {
    let raw = std::fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&raw).map_err(|e| format!("Invalid options in {}: {e}", path.display()))
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "extract_stdin",
            "--url",
            "https://example.com/post",
            "--no-partial",
            "--no-images",
            "--debug",
        ])
        .unwrap();

        let options = args.into_options().unwrap();
        assert_eq!(options.url.as_deref(), Some("https://example.com/post"));
        assert!(!options.remove_partial_selectors);
        assert!(options.remove_exact_selectors);
        assert!(options.remove_images);
        assert!(options.debug);
    }

    #[test]
    fn test_no_flags_keep_defaults() {
        let options = Args::try_parse_from(["extract_stdin"]).unwrap().into_options().unwrap();
        let defaults = Options::default();
        assert!(options.url.is_none());
        assert!(!options.debug);
        assert_eq!(options.remove_images, defaults.remove_images);
        assert_eq!(options.remove_exact_selectors, defaults.remove_exact_selectors);
        assert_eq!(options.remove_partial_selectors, defaults.remove_partial_selectors);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Args::try_parse_from(["extract_stdin", "--bogus"]).is_err());
    }

    #[test]
    fn test_missing_options_file_is_an_error() {
        let args = Args::try_parse_from(["extract_stdin", "--options", "/nonexistent/declutter.json"]).unwrap();
        assert!(args.into_options().is_err());
    }
}
