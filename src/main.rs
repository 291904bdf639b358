//! Utilkit - command-line access to the utility helpers

use anyhow::Result;
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use utilkit::config::{config_path, Config};
use utilkit::url::QueryValue;
use utilkit::{checks, format, similarity, string, url, UtilError, UtilResult};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file to read defaults from
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Similarity score of two strings (0.0 - 1.0)
    Similarity { a: String, b: String },

    /// Levenshtein edit distance of two strings
    Distance { a: String, b: String },

    /// Closest candidate to a search term
    BestMatch {
        search: String,
        #[arg(required = true)]
        candidates: Vec<String>,
        #[arg(long)]
        cutoff: Option<f64>,
    },

    /// Date as YYYY-MM-DD
    CalendarDate {
        /// RFC 3339 date, defaults to now
        #[arg(long)]
        date: Option<String>,
    },

    /// Date in a human readable pattern
    HumanDate {
        /// RFC 3339 date, defaults to now
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        format: Option<String>,
    },

    /// Minutes as HH:MM
    FormatMin { minutes: f64 },

    /// Seconds as HH:MM:SS
    FormatSec { seconds: f64 },

    /// H:MM time stamp as minutes
    Timestamp { stamp: String },

    /// Amount with two decimals and currency code
    Money {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        currency: Option<String>,
        #[arg(long)]
        no_code: bool,
    },

    /// Amount in en-ZA currency format
    Currency {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        #[arg(long)]
        currency: Option<String>,
    },

    /// Uppercase the first letter
    Capitalize { text: String },

    /// Trim and shorten text, appending "..."
    Limit {
        text: String,
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Remove all whitespace
    StripSpaces { text: String },

    /// Keep only URL safe characters
    Safe { text: String },

    /// Wrap links in anchor tags
    Link { text: String },

    /// Append KEY=VALUE pairs to a URL
    Query {
        url: String,
        pairs: Vec<String>,
        /// Percent-encode keys and values
        #[arg(long)]
        encode: bool,
    },

    /// Check whether a value is a valid number
    ValidNumber {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Check whether a value looks like an email address
    ValidEmail { value: String },
}

fn parse_date(date: Option<&str>) -> UtilResult<Option<DateTime<FixedOffset>>> {
    date.map(|raw| {
        DateTime::parse_from_rfc3339(raw).map_err(|e| UtilError::InvalidDate(format!("{raw}: {e}")))
    })
    .transpose()
}

fn parse_query_pair(pair: &str) -> UtilResult<(String, QueryValue)> {
    let (key, raw) = pair
        .split_once('=')
        .ok_or_else(|| UtilError::InvalidQueryPair(pair.to_string()))?;

    // Values are passed through as typed on the command line
    Ok((key.to_string(), QueryValue::Text(raw.to_string())))
}

fn run(command: Command, config: &Config) -> UtilResult<String> {
    let output = match command {
        Command::Similarity { a, b } => format!("{:.4}", similarity::similarity(&a, &b)),
        Command::Distance { a, b } => similarity::edit_distance(&a, &b).to_string(),
        Command::BestMatch {
            search,
            candidates,
            cutoff,
        } => {
            let cutoff = cutoff.unwrap_or(config.similarity_cutoff);
            let best = similarity::find_best_match(&search, &candidates, cutoff)
                .ok_or_else(|| UtilError::NoMatch(format!("'{search}' (cutoff {cutoff})")))?;
            format!("{} ({:.4})", best.value, best.score)
        }
        Command::CalendarDate { date } => {
            format::format_to_calendar_date(parse_date(date.as_deref())?)
        }
        Command::HumanDate {
            date,
            format: pattern,
        } => format::format_to_human_date(
            parse_date(date.as_deref())?,
            Some(pattern.as_deref().unwrap_or(&config.human_date_format)),
        ),
        Command::FormatMin { minutes } => format::format_min(minutes),
        Command::FormatSec { seconds } => format::format_sec(seconds),
        Command::Timestamp { stamp } => format::format_timestamp(&stamp)
            .ok_or_else(|| UtilError::InvalidTimestamp(stamp.clone()))?
            .to_string(),
        Command::Money {
            amount,
            currency,
            no_code,
        } => format::format_money_str(
            amount,
            Some(currency.as_deref().unwrap_or(&config.currency_code)),
            !no_code,
        ),
        Command::Currency { amount, currency } => format::currency_formatter(
            Some(amount),
            Some(currency.as_deref().unwrap_or(&config.currency_code)),
        ),
        Command::Capitalize { text } => string::capitalize_first_letter(&text),
        Command::Limit { text, limit } => {
            string::limit_text(&text, Some(limit.unwrap_or(config.text_limit)))
        }
        Command::StripSpaces { text } => string::remove_spaces(&text),
        Command::Safe { text } => string::remove_unsafe_chars(&text),
        Command::Link { text } => string::add_anchor_tags(&text),
        Command::Query {
            url: base,
            pairs,
            encode,
        } => {
            let params = pairs
                .iter()
                .map(|pair| parse_query_pair(pair))
                .collect::<UtilResult<Vec<_>>>()?;
            if encode {
                url::url_query_builder_encoded(&base, params)
            } else {
                url::url_query_builder(&base, params)
            }
        }
        Command::ValidNumber { value } => checks::is_valid_number(value.as_str()).to_string(),
        Command::ValidEmail { value } => checks::is_valid_email(Some(value.as_str())).to_string(),
    };

    Ok(output)
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Setup logging on stderr so stdout only carries results
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config_file = args.config.unwrap_or_else(config_path);
    let config = Config::load_from(&config_file)?;
    debug!("Loaded config from {}: {:?}", config_file.display(), config);

    println!("{}", run(args.command, &config)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_pair() {
        assert_eq!(
            parse_query_pair("cool=true").unwrap(),
            ("cool".to_string(), QueryValue::Text("true".to_string()))
        );
        assert_eq!(
            parse_query_pair("name=jack=black").unwrap(),
            ("name".to_string(), QueryValue::Text("jack=black".to_string()))
        );
        assert_eq!(
            parse_query_pair("empty=").unwrap(),
            ("empty".to_string(), QueryValue::Text(String::new()))
        );
        assert!(matches!(
            parse_query_pair("novalue"),
            Err(UtilError::InvalidQueryPair(_))
        ));
    }

    #[test]
    fn test_query_values_kept_verbatim() {
        let params = ["zip=00123", "price=1.50", "n=1e3", "cool=true"]
            .iter()
            .map(|pair| parse_query_pair(pair))
            .collect::<UtilResult<Vec<_>>>()
            .unwrap();
        assert_eq!(
            url::url_query_builder("http://test", params),
            "http://test?zip=00123&price=1.50&n=1e3&cool=true"
        );
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date(None).unwrap().is_none());
        let date = parse_date(Some("2023-02-14T14:10:00+02:00")).unwrap();
        assert!(date.is_some());
        assert!(matches!(
            parse_date(Some("yesterday")),
            Err(UtilError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_run_uses_config_defaults() {
        let config = Config {
            currency_code: "USD".to_string(),
            text_limit: 3,
            ..Config::default()
        };

        let money = run(
            Command::Money {
                amount: 5.0,
                currency: None,
                no_code: false,
            },
            &config,
        )
        .unwrap();
        assert_eq!(money, "5.00 USD");

        let limited = run(
            Command::Limit {
                text: "abcdef".to_string(),
                limit: None,
            },
            &config,
        )
        .unwrap();
        assert_eq!(limited, "abc...");
    }

    #[test]
    fn test_run_best_match_without_match_fails() {
        let result = run(
            Command::BestMatch {
                search: "zzz".to_string(),
                candidates: vec!["apple".to_string()],
                cutoff: None,
            },
            &Config::default(),
        );
        assert!(matches!(result, Err(UtilError::NoMatch(_))));
    }
}
