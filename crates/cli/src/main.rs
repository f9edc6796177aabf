use clap::Parser;
use dns_observer_domain::{CliOverrides, DecodeStats, InputFormat};
use dns_observer_infrastructure::capture::WriterSink;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use tracing::info;

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dns-observer")]
#[command(version)]
#[command(about = "Passive DNS message decoder: one JSON-shaped record per captured message")]
struct Cli {
    /// Input files (stdin when omitted)
    #[arg(value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Input encoding (hex, base64, raw)
    #[arg(short = 'f', long)]
    format: Option<InputFormat>,

    /// Require name RDATA to account for exactly RDLENGTH bytes
    #[arg(long)]
    strict: bool,

    /// Strip the 2-byte DNS-over-TCP length prefix when present
    #[arg(long)]
    tcp_framing: bool,

    /// Largest message decoded; bigger ones are reported as malformed
    #[arg(long, value_name = "BYTES")]
    max_message_size: Option<usize>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print decode statistics as JSON to stderr when done
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input_format: cli.format,
        tcp_framing: cli.tcp_framing,
        strict_rdlength: cli.strict,
        max_message_size: cli.max_message_size,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!(
        version = env!("CARGO_PKG_VERSION"),
        format = %config.input.format,
        rdlength_policy = config.decoder.rdlength_policy.as_str(),
        max_message_size = config.decoder.max_message_size,
        "Starting dns-observer"
    );

    let use_case = di::decode_use_case(&config);
    let sources = di::message_sources(&config.input, &cli.inputs)?;
    let mut sink = WriterSink::new(BufWriter::new(io::stdout()));

    let mut stats = DecodeStats::default();
    for mut source in sources {
        let run = use_case.execute(source.as_mut(), &mut sink)?;
        stats.merge(&run);
    }

    if cli.stats {
        eprintln!("{}", serde_json::to_string(&stats)?);
    }

    Ok(())
}
