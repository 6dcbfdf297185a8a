use clap::{ArgAction, Args, Parser, Subcommand};
use std::time::Duration;
use tikhub_ox::{HttpClientOptions, Platform, TikHub};

/// Query the TikHub social media data API
#[derive(Parser, Debug)]
#[command(name = "tikhub", version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalOptions {
    #[arg(long, global = true, env = "TIKHUB_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long, global = true, env = "TIKHUB_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout: Option<f64>,

    /// Fail on statuses other than 200 and 422
    #[arg(long, global = true)]
    pub raise_on_unexpected_status: bool,

    /// Skip TLS certificate verification
    #[arg(long, global = true)]
    pub insecure: bool,

    #[arg(long, global = true)]
    pub no_follow_redirects: bool,

    /// -v for debug, -vv for trace logging
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

impl GlobalOptions {
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn http_options(&self) -> HttpClientOptions {
        HttpClientOptions {
            follow_redirects: !self.no_follow_redirects,
            verify_ssl: !self.insecure,
            ..HttpClientOptions::default()
        }
    }

    /// Async client configured from the flags.
    pub fn client(&self) -> anyhow::Result<TikHub> {
        let mut client = TikHub::builder()
            .maybe_api_key(self.api_key.clone())
            .raise_on_unexpected_status(self.raise_on_unexpected_status)
            .build();
        if let Some(base_url) = &self.base_url {
            client = client.with_base_url(base_url.clone());
        }
        if let Some(secs) = self.timeout {
            client = client.with_timeout(Duration::try_from_secs_f64(secs)?);
        }
        Ok(client.with_http_options(self.http_options())?)
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List known endpoints
    #[command(visible_alias = "ls")]
    List {
        #[arg(long, short)]
        platform: Option<Platform>,
    },

    /// Show the method, path and parameters of an endpoint
    Describe {
        /// Dotted endpoint name or path
        endpoint: String,
    },

    /// Call an endpoint and print the response as JSON
    Call(CallArgs),
}

#[derive(Args, Debug)]
pub struct CallArgs {
    /// Dotted endpoint name or path
    pub endpoint: String,

    /// Parameter as key=value, repeatable
    #[arg(short = 'p', long = "param", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub params: Vec<String>,

    /// Print status, headers and body instead of the body only
    #[arg(long)]
    pub detailed: bool,

    /// Use the blocking client
    #[arg(long)]
    pub blocking: bool,

    /// Do not fill documented default values
    #[arg(long)]
    pub no_defaults: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_call_with_params() {
        let cli = Cli::try_parse_from([
            "tikhub",
            "call",
            "weibo.web.fetch_hot_search",
            "-p",
            "_time=1700000000000",
            "--param",
            "extra=1",
            "--detailed",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert_eq!(cli.global.log_level(), log::LevelFilter::Trace);
        let Commands::Call(args) = cli.command else {
            panic!("expected call");
        };
        assert_eq!(args.params, ["_time=1700000000000", "extra=1"]);
        assert!(args.detailed);
        assert!(!args.blocking);
    }

    #[test]
    fn test_parses_platform_filter() {
        let cli = Cli::try_parse_from(["tikhub", "ls", "--platform", "xiaohongshu"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                platform: Some(Platform::Xiaohongshu)
            }
        ));
        assert!(Cli::try_parse_from(["tikhub", "list", "-p", "myspace"]).is_err());
    }

    #[test]
    fn test_global_flags_shape_the_client() {
        let cli = Cli::try_parse_from([
            "tikhub",
            "--api-key",
            "k",
            "--base-url",
            "http://localhost:8080",
            "--timeout",
            "2.5",
            "--insecure",
            "--no-follow-redirects",
            "list",
        ])
        .unwrap();
        let options = cli.global.http_options();
        assert!(!options.verify_ssl);
        assert!(!options.follow_redirects);

        let client = cli.global.client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
        assert_eq!(client.timeout(), Some(Duration::from_millis(2500)));
        assert_eq!(client.api_key(), Some("k"));
    }
}
