use std::env;
use std::error::Error;

use namematch::{MatchOptions, NamematchConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PAIRS: &[(&str, &str)] = &[
    ("John Smith", "Jon Smith"),
    ("Robert A. Smith", "Bob Smith"),
    ("Александр Петров", "Саша Петров"),
    ("Wáng Wěi", "Wei Wang"),
    ("Mohammed bin Hamad Al Thani", "Mohammed ibn Hamad Al Thani"),
    ("Jane Doe", "John Smith"),
];

/// Matches the name pair given on the command line, or a few sample pairs.
/// `NAMEMATCH_CONFIG` points at a YAML config; `NAMEMATCH_LOG_JSON` switches
/// log output to JSON.
fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();

    let config = match env::var("NAMEMATCH_CONFIG") {
        Ok(path) => {
            info!(path = %path, "config_file");
            NamematchConfig::from_file(path)?
        }
        Err(_) => NamematchConfig::default(),
    };
    let matcher = config.build_matcher()?;
    info!(
        name = config.name.as_deref().unwrap_or("default"),
        overlay = config.dictionaries.is_some(),
        "matcher_ready"
    );

    let args: Vec<String> = env::args().skip(1).collect();
    let pairs: Vec<(&str, &str)> = match args.as_slice() {
        [a, b] => vec![(a.as_str(), b.as_str())],
        _ => PAIRS.to_vec(),
    };

    for (a, b) in pairs {
        let result = matcher.match_names(a, b, &MatchOptions::default());
        println!(
            "{a:<32} {b:<32} confidence={:.4} match={}",
            result.confidence,
            result.is_match()
        );
        if args.len() == 2 {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);
    if env::var_os("NAMEMATCH_LOG_JSON").is_some() {
        builder.json().init();
    } else {
        builder.init();
    }
}
