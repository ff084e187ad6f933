//! CLI utility helpers

use kmap::{Config, Error, Format, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Value following `--flag` or its short alias
pub fn flag_value<'a>(args: &'a [String], long: &str, short: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == long || a == short)
        .and_then(|i| args.get(i + 1))
        .map(|s| s.as_str())
}

/// Parse --format argument; --json and --html are shorthands
pub fn parse_format_arg(args: &[String]) -> Result<Format> {
    if args.iter().any(|a| a == "--json") {
        return Ok(Format::Json);
    }
    if args.iter().any(|a| a == "--html") {
        return Ok(Format::Html);
    }
    match flag_value(args, "--format", "-f") {
        Some(f) => f.parse(),
        None => Ok(Format::Text),
    }
}

/// Parse --output argument to determine output file path
pub fn parse_output_arg(args: &[String]) -> Option<PathBuf> {
    flag_value(args, "--output", "-o").map(PathBuf::from)
}

/// Load --config if given, else `.kmap.yaml` from the working directory
pub fn load_config(args: &[String]) -> Result<Config> {
    match flag_value(args, "--config", "-c") {
        Some(path) => Config::load(Path::new(path)),
        None => {
            let cwd = std::env::current_dir().map_err(Error::Io)?;
            Config::discover(&cwd)
        }
    }
}

/// Write content to file or stdout
pub fn write_output(path: &Option<PathBuf>, content: &str) -> Result<()> {
    match path {
        Some(p) => {
            fs::write(p, content).map_err(Error::Io)?;
            eprintln!("Written to: {}", p.display());
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_format_flags() {
        assert_eq!(parse_format_arg(&args(&["in.yaml"])).unwrap(), Format::Text);
        assert_eq!(parse_format_arg(&args(&["in.yaml", "--json"])).unwrap(), Format::Json);
        assert_eq!(
            parse_format_arg(&args(&["in.yaml", "-f", "html"])).unwrap(),
            Format::Html
        );
        assert!(parse_format_arg(&args(&["--format", "png"])).is_err());
    }

    #[test]
    fn test_output_flag() {
        assert_eq!(
            parse_output_arg(&args(&["x", "-o", "out.html"])),
            Some(PathBuf::from("out.html"))
        );
        assert_eq!(parse_output_arg(&args(&["x", "--output"])), None);
    }
}
