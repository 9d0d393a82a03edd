use std::fmt;
use std::sync::Arc;

use academy_core::model::PassThreshold;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::config::parse_threshold;
use services::{
    AcademyConfig, AccountService, AppServices, CatalogService, CertificateService, Clock,
    ConfigError, QuizService, ResultsService,
};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    Config(ConfigError),
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::Config(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for ArgsError {}

impl From<ConfigError> for ArgsError {
    fn from(err: ConfigError) -> Self {
        ArgsError::Config(err)
    }
}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn pass_threshold(&self) -> PassThreshold {
        self.services.config().pass_threshold
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }

    fn certificates(&self) -> Arc<CertificateService> {
        self.services.certificates()
    }

    fn accounts(&self) -> Arc<AccountService> {
        self.services.accounts()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--pass-threshold <0-100>] [--no-sample-history] [--verbose]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --pass-threshold 70");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  ACADEMY_PASS_THRESHOLD, ACADEMY_CERT_PREFIX, ACADEMY_SAMPLE_HISTORY, RUST_LOG");
}

/// Apply command-line flags on top of the environment settings.
///
/// Returns `None` when usage was requested.
fn parse_args(
    mut config: AcademyConfig,
    args: &mut impl Iterator<Item = String>,
) -> Result<Option<AcademyConfig>, ArgsError> {
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pass-threshold" => {
                let value = require_value(args, "--pass-threshold")?;
                config.pass_threshold = parse_threshold(&value)?;
            }
            "--no-sample-history" => config.sample_history = false,
            "--verbose" | "-v" => config.verbose = true,
            "--help" | "-h" => return Ok(None),
            _ => return Err(ArgsError::UnknownArg(arg)),
        }
    }
    Ok(Some(config))
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    // A second init (tests, embedding) keeps the existing subscriber.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AcademyConfig::from_env()?;
    let mut argv = std::env::args().skip(1);
    let Some(config) = parse_args(config, &mut argv).inspect_err(|_| print_usage())? else {
        print_usage();
        return Ok(());
    };

    init_tracing(config.verbose);
    info!(
        pass_threshold = %config.pass_threshold,
        certificate_prefix = %config.certificate_prefix,
        sample_history = config.sample_history,
        "starting academy"
    );

    let services = AppServices::demo(config, Clock::system()).await?;
    let app: Arc<dyn UiApp> = Arc::new(DesktopApp { services });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Staff Academy")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
