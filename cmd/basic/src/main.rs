//! Basic Outcome example
//!
//! Parses a small `key = value` listener config through a chain of fallible
//! steps, using `try_ok!` for early return and the defaulting combinators
//! for optional keys.
//!
//! # Usage
//!
//! ```text
//! basic [config-line ...]
//! ```
//!
//! Without arguments a built-in sample is parsed.
//!
//! # Environment Variables
//!
//! - `OUTCOME_LOG_LEVEL=info` - Show progress lines (read once by `diag::init`)
//! - `OUTCOME_FLUSH_EPRINT=1` - Flush diagnostics immediately

use std::fmt;

use outcome::{bail, diag, ensure, oinfo, owarn, try_ok, IntoOutcome, Outcome};

const SAMPLE: &[&str] = &["host = 0.0.0.0", "port = 8080", "# comment", "workers = 4"];

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConfigError {
    Malformed(String),
    Missing(&'static str),
    BadNumber { key: &'static str, raw: String },
    OutOfRange { key: &'static str, value: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Malformed(line) => write!(f, "malformed line: {:?}", line),
            ConfigError::Missing(key) => write!(f, "missing key: {}", key),
            ConfigError::BadNumber { key, raw } => write!(f, "{}: not a number: {:?}", key, raw),
            ConfigError::OutOfRange { key, value } => write!(f, "{}: out of range: {}", key, value),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ListenerConfig {
    host: String,
    port: u16,
    workers: usize,
}

fn split_line(line: &str) -> Outcome<Option<(&str, &str)>, ConfigError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Outcome::Ok(None);
    }
    match line.split_once('=') {
        Some((k, v)) if !k.trim().is_empty() => Outcome::Ok(Some((k.trim(), v.trim()))),
        _ => Outcome::Err(ConfigError::Malformed(line.to_string())),
    }
}

fn lookup<'a>(pairs: &[(&'a str, &'a str)], key: &'static str) -> Outcome<&'a str, ConfigError> {
    pairs
        .iter()
        .rev()
        .find(|(k, _)| *k == key)
        .map(|(_, v)| *v)
        .ok_or_outcome(ConfigError::Missing(key))
}

fn number(pairs: &[(&str, &str)], key: &'static str) -> Outcome<u64, ConfigError> {
    lookup(pairs, key).and_then(|raw| {
        raw.parse::<u64>()
            .ok_or_outcome(ConfigError::BadNumber { key, raw: raw.to_string() })
    })
}

fn parse_config(lines: &[&str]) -> Outcome<ListenerConfig, ConfigError> {
    let mut pairs = Vec::new();
    for &line in lines {
        if let Some(pair) = try_ok!(split_line(line)) {
            pairs.push(pair);
        }
    }

    let port = try_ok!(number(&pairs, "port"));
    ensure!(port > 0 && port <= u16::MAX as u64, ConfigError::OutOfRange { key: "port", value: port });

    let workers = number(&pairs, "workers")
        .or_else(|e| match e {
            ConfigError::Missing(_) => Outcome::Ok(1),
            other => Outcome::Err(other),
        });
    let workers = try_ok!(workers);
    if workers == 0 || workers > 1024 {
        bail!(ConfigError::OutOfRange { key: "workers", value: workers });
    }

    let host = lookup(&pairs, "host")
        .map(str::to_string)
        .unwrap_or_else(|_| "127.0.0.1".to_string());

    Outcome::Ok(ListenerConfig { host, port: port as u16, workers: workers as usize })
}

fn main() {
    println!("=== Outcome Basic Example ===\n");

    // The library never reads the environment on its own.
    diag::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let lines: Vec<&str> = if args.is_empty() {
        SAMPLE.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };

    oinfo!("parsing {} line(s)", lines.len());

    let parsed = parse_config(&lines).inspect_err(|e| owarn!("config rejected: {}", e));
    match parsed.as_ref() {
        Outcome::Ok(cfg) => println!("listening on {}:{} with {} worker(s)", cfg.host, cfg.port, cfg.workers),
        Outcome::Err(e) => println!("error: {}", e),
    }

    let summary = parsed.map_or_else(|e| format!("rejected ({})", e), |cfg| format!("accepted {:?}", cfg));
    println!("\n{}", summary);
    println!("\n=== Example Complete ===");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_parses() {
        let cfg = parse_config(SAMPLE).unwrap();
        assert_eq!(
            cfg,
            ListenerConfig { host: "0.0.0.0".to_string(), port: 8080, workers: 4 }
        );
    }

    #[test]
    fn defaults_for_optional_keys() {
        let cfg = parse_config(&["port=9000"]).unwrap();
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.workers, 1);
    }

    #[test]
    fn later_keys_win() {
        let cfg = parse_config(&["port=1", "port=2"]).unwrap();
        assert_eq!(cfg.port, 2);
    }

    #[test]
    fn malformed_line_stops_parsing() {
        let e = parse_config(&["port=80", "garbage", "workers=x"]).unwrap_err();
        assert_eq!(e, ConfigError::Malformed("garbage".to_string()));
    }

    #[test]
    fn missing_port() {
        assert_eq!(parse_config(&["host=a"]).unwrap_err(), ConfigError::Missing("port"));
    }

    #[test]
    fn bad_numbers() {
        assert_eq!(
            parse_config(&["port=http"]).unwrap_err(),
            ConfigError::BadNumber { key: "port", raw: "http".to_string() }
        );
        assert_eq!(
            parse_config(&["port=80", "workers=many"]).unwrap_err(),
            ConfigError::BadNumber { key: "workers", raw: "many".to_string() }
        );
    }

    #[test]
    fn range_checks() {
        assert_eq!(
            parse_config(&["port=70000"]).unwrap_err(),
            ConfigError::OutOfRange { key: "port", value: 70000 }
        );
        assert_eq!(
            parse_config(&["port=80", "workers=0"]).unwrap_err(),
            ConfigError::OutOfRange { key: "workers", value: 0 }
        );
    }

    #[test]
    fn display() {
        assert_eq!(ConfigError::Missing("port").to_string(), "missing key: port");
    }
}
