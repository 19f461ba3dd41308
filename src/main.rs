//! twstock CLI: fetch, report and export daily prices for one Taiwan-listed equity.
//!
//! Every flag can also be set through a `TWSTOCK_*` environment variable.
//! Fetch failures are reported on the console and never change the exit code.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Utc;
use chrono_tz::Asia::Taipei;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use twstock::range::{COMBINED_LOOKBACK_DAYS, DEFAULT_LOOKBACK_DAYS};
use twstock::{ClientSource, Locale, Market, ReportStyle, RunConfig, TwClient};

#[derive(Parser, Debug)]
#[command(
    name = "twstock",
    version,
    about = "Daily prices for a Taiwan-listed equity, with summary and CSV export"
)]
struct Cli {
    /// Exchange code, e.g. 2330.
    #[arg(long, env = "TWSTOCK_SYMBOL", default_value = "2330")]
    symbol: String,

    /// Market the symbol is listed on.
    #[arg(long, env = "TWSTOCK_MARKET", value_enum, default_value_t = MarketArg::Twse)]
    market: MarketArg,

    /// Start date (YYYY-MM-DD). Defaults to `lookback-days` before today.
    #[arg(long, env = "TWSTOCK_START")]
    start: Option<String>,

    /// End date (YYYY-MM-DD), inclusive. Defaults to today.
    #[arg(long, env = "TWSTOCK_END")]
    end: Option<String>,

    /// Days before today used when no start date is given.
    /// Defaults to 30, or 60 with --realtime.
    #[arg(long, env = "TWSTOCK_LOOKBACK_DAYS")]
    lookback_days: Option<u32>,

    /// Print only the last N rows; 0 prints the full table.
    #[arg(long, env = "TWSTOCK_TAIL", default_value_t = 10)]
    tail: usize,

    /// Column header language for the table and the CSV file.
    #[arg(long, env = "TWSTOCK_LOCALE", value_enum, default_value_t = LocaleArg::En)]
    locale: LocaleArg,

    /// Directory receiving stock_<symbol>.csv.
    #[arg(long, env = "TWSTOCK_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Also fetch the TWSE realtime snapshot.
    #[arg(long, env = "TWSTOCK_REALTIME", default_value_t = false)]
    realtime: bool,

    /// Timeout in seconds for the history request.
    #[arg(long, env = "TWSTOCK_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Report raw prices instead of dividend/split adjusted ones.
    #[arg(long, env = "TWSTOCK_NO_ADJUST", default_value_t = false)]
    no_adjust: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MarketArg {
    Twse,
    Tpex,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LocaleArg {
    En,
    ZhTw,
}

impl From<MarketArg> for Market {
    fn from(m: MarketArg) -> Self {
        match m {
            MarketArg::Twse => Market::Twse,
            MarketArg::Tpex => Market::Tpex,
        }
    }
}

impl From<LocaleArg> for Locale {
    fn from(l: LocaleArg) -> Self {
        match l {
            LocaleArg::En => Locale::En,
            LocaleArg::ZhTw => Locale::ZhTw,
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let client = TwClient::builder()
        .timeout(Duration::from_secs(cli.timeout_secs))
        .build()
        .context("failed to build HTTP client")?;
    let source = ClientSource::new(client)
        .market(cli.market.into())
        .auto_adjust(!cli.no_adjust);

    let mut cfg = RunConfig::new(cli.symbol);
    cfg.start = cli.start;
    cfg.end = cli.end;
    cfg.lookback_days = cli.lookback_days.unwrap_or(if cli.realtime {
        COMBINED_LOOKBACK_DAYS
    } else {
        DEFAULT_LOOKBACK_DAYS
    });
    cfg.style = match cli.tail {
        0 => ReportStyle::Full,
        n => ReportStyle::Tail(n),
    };
    cfg.locale = cli.locale.into();
    cfg.output_dir = cli.output_dir;
    cfg.realtime = cli.realtime;

    let now = Utc::now().with_timezone(&Taipei).naive_local();
    let report = twstock::pipeline::run(&source, &cfg, now)
        .await
        .context("run failed")?;

    print!("{}", report.text);
    Ok(())
}
