use anyhow::Result;
use asgen::{command, GenerationRequest};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Name of the application to generate
    name: Option<String>,
    /// Directory the project folder is created in
    #[clap(short, long, default_value = ".")]
    path: PathBuf,
    /// Reverse dns prefix of the application package
    #[clap(short, long, default_value = "com.example")]
    domain: String,
    /// Don't generate a c++ source file for the application
    #[clap(long)]
    no_source: bool,
}

fn main() -> Result<()> {
    use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};
    tracing_log::LogTracer::init().ok();
    let env = std::env::var("ASGEN_LOG").unwrap_or_else(|_| "error".into());
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_span_events(FmtSpan::ACTIVE | FmtSpan::CLOSE)
        .with_env_filter(EnvFilter::new(env))
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
    log_panics::init();
    let args = Args::parse();
    let Some(name) = args.name else {
        Args::command().print_help()?;
        return Ok(());
    };
    let request = GenerationRequest::new(&name, &args.path, &args.domain, !args.no_source)?;
    command::new(&asgen::library_root()?, &request)
}
