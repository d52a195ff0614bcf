use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use xfyun_auth::{
    XfyunAuth, API_KEY_ENV, API_SECRET_ENV, DEFAULT_ALGORITHM, DEFAULT_METHOD, ENDPOINT_ENV,
    METHOD_ENV,
};

/// Print a signed request URL for an XFYun endpoint.
///
/// Values missing from the command line are read from the environment,
/// after loading a `.env` file from the working directory if one exists.
#[derive(Debug, Parser)]
#[clap(name = "xfyun-auth", version)]
struct Args {
    /// Endpoint to sign, e.g. wss://iat-api.xfyun.cn/v2/iat
    #[clap(env = ENDPOINT_ENV)]
    url: String,
    #[clap(long, env = METHOD_ENV, default_value = DEFAULT_METHOD)]
    method: String,
    #[clap(long, default_value = DEFAULT_ALGORITHM)]
    algorithm: String,
    #[clap(long, env = API_KEY_ENV, hide_env_values = true)]
    api_key: String,
    #[clap(long, env = API_SECRET_ENV, hide_env_values = true)]
    api_secret: String,
    /// Print url, authorization, date and host as JSON
    #[clap(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    dotenvy::dotenv().ok();
    let args = Args::parse();

    match run(args) {
        Ok(out) => println!("{}", out),
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    }
}

fn run(args: Args) -> xfyun_auth::Result<String> {
    let auth = XfyunAuth::builder(args.url, args.api_key, args.api_secret)
        .method(args.method)
        .algorithm(args.algorithm)
        .build()?;

    if args.json {
        Ok(serde_json::to_string_pretty(&auth.info())?)
    } else {
        Ok(auth.auth_url().to_string())
    }
}
