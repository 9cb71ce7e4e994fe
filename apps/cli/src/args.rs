use std::env;
use std::path::PathBuf;

const DEFAULT_CONFIG_PATH: &str = "worked-hours.toml";

#[derive(Debug)]
pub struct CliArgs {
    pub port: Option<u16>,
    pub config: PathBuf,
    pub sum_recorded: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            port: None,
            config: PathBuf::from(DEFAULT_CONFIG_PATH),
            sum_recorded: false,
        }
    }
}

pub fn parse_args() -> Result<CliArgs, String> {
    parse_from(env::args().skip(1))
}

pub fn parse_from<I>(args: I) -> Result<CliArgs, String>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let mut parsed = CliArgs::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--port" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --port".to_string())?;
                let port = value
                    .parse::<u16>()
                    .map_err(|_| format!("invalid port value: {value}"))?;
                parsed.port = Some(port);
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_string())?;
                parsed.config = PathBuf::from(value);
            }
            "--sum-recorded" => {
                parsed.sum_recorded = true;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            _ => {
                return Err(format!("unknown argument: {arg}"));
            }
        }
    }

    Ok(parsed)
}

pub fn print_help() {
    println!(
        "Worked Hours\n\n\
Usage:\n  worked-hours [--config <path>] [--port <port>] [--sum-recorded]\n\n\
Options:\n  --config <path>  Config file to load or create (default {DEFAULT_CONFIG_PATH})\n  --port <port>    Override the configured port for this run only\n  --sum-recorded   Print the sum of recorded worked hours and exit\n  -h, --help       Show this help message\n\n\
Environment:\n  NOTION_TOKEN        Notion integration secret\n  NOTION_DATABASE_ID  Attendance database id\n  RUST_LOG            Log filter (default info)\n"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let parsed = parse_from(Vec::new()).expect("parse");
        assert_eq!(parsed.port, None);
        assert_eq!(parsed.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(!parsed.sum_recorded);
    }

    #[test]
    fn parses_all_flags() {
        let parsed = parse_from(args(&[
            "--port",
            "9000",
            "--config",
            "/tmp/hours.toml",
            "--sum-recorded",
        ]))
        .expect("parse");
        assert_eq!(parsed.port, Some(9000));
        assert_eq!(parsed.config, PathBuf::from("/tmp/hours.toml"));
        assert!(parsed.sum_recorded);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(parse_from(args(&["--port", "http"])).is_err());
        assert!(parse_from(args(&["--port"])).is_err());
        assert!(parse_from(args(&["--verbose"])).is_err());
    }
}
