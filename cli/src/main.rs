use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use rawhttp_core::{HttpClient, HttpMethod};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Send one HTTP/1.1 request over a raw TCP socket and print the status
/// code and body.
#[derive(Parser, Debug)]
#[command(name = "httpclient", version)]
struct Args {
    /// `[METHOD] URL`. METHOD is GET or POST and defaults to GET.
    #[arg(value_name = "[METHOD] URL", num_args = 1..=2)]
    positionals: Vec<String>,

    /// Form field sent with POST, repeatable
    #[arg(short, long = "data", value_name = "KEY=VALUE", value_parser = parse_pair)]
    data: Vec<(String, String)>,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Log the request and raw response
    #[arg(short, long)]
    verbose: bool,
}

fn parse_pair(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))
}

/// Split the positionals into the command word and the URL. A lone argument
/// is the URL.
fn command_and_url(positionals: &[String]) -> Option<(&str, &str)> {
    match positionals {
        [url] => Some(("GET", url.as_str())),
        [command, url] => Some((command.as_str(), url.as_str())),
        _ => None,
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Carry out one invocation, writing the result to `out`, and return the
/// process exit status. Usage errors and every `ClientError` exit with 1.
fn run(args: &Args, out: &mut impl Write) -> u8 {
    let Some((command, url)) = command_and_url(&args.positionals) else {
        let _ = write!(out, "{}", Args::command().render_help());
        return 1;
    };

    let method = HttpMethod::from_command(command);
    if command != method.as_str() {
        warn!(command, "unrecognized method, sending GET");
    }
    if method == HttpMethod::Get && !args.data.is_empty() {
        warn!("--data is only sent with POST");
    }

    let form = (!args.data.is_empty()).then_some(args.data.as_slice());
    let result = match HttpClient::new().request(url, method, form) {
        Ok(result) => result,
        Err(e) => {
            error!("{e}");
            return 1;
        }
    };

    let rendered = if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => json,
            Err(e) => {
                error!("failed to render result as JSON: {e}");
                return 1;
            }
        }
    } else {
        result.to_string()
    };
    if let Err(e) = writeln!(out, "{rendered}") {
        error!("failed to write result: {e}");
        return 1;
    }
    0
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);
    ExitCode::from(run(&args, &mut io::stdout().lock()))
}
