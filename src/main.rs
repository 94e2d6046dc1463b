use std::io::Read;

use anyhow::{Context, Result, bail};
use log::info;

use headerstore::{HeaderStore, StoreConfig, Validator};

const USAGE: &str = "usage: headerstore [--config <file>] [--wire] [<file>]";

struct Args {
    config: Option<String>,
    wire: bool,
    input: Option<String>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        config: None,
        wire: false,
        input: None,
    };

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--config" => args.config = Some(it.next().context(USAGE)?),
            "--wire" => args.wire = true,
            "-h" | "--help" => bail!(USAGE),
            _ if args.input.is_none() => args.input = Some(arg),
            _ => bail!(USAGE),
        }
    }

    Ok(args)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("failed to read {path}"))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> Result<()> {
    pretty_env_logger::init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => StoreConfig::try_from_file(path)
            .with_context(|| format!("failed to load config {path}"))?,
        None => StoreConfig::default(),
    };

    let input = read_input(args.input.as_deref())?;
    let mut headers = HeaderStore::with_config(config);
    let applied = headers.parse_block(&input)?;
    info!("parsed {} header lines into {} headers", applied, headers.len());

    if args.wire {
        print!("{}", headers.stringify());
    } else {
        print!("{}", headers.debug_dump());
    }

    println!();
    println!("bad lines:    {:?}", headers.config().malformed_lines);
    println!("content-type: {}", headers.content_type().unwrap_or("<none>"));
    println!("json request: {}", headers.is_json_request());
    println!("bearer token: {}", headers.bearer_token().unwrap_or("<none>"));
    match Validator::validate(&headers) {
        Ok(()) => println!("valid:        yes"),
        Err(err) => println!("valid:        no ({err})"),
    }

    Ok(())
}
