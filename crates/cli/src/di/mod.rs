use anyhow::Context;
use dns_observer_application::ports::MessageSource;
use dns_observer_application::use_cases::DecodeMessagesUseCase;
use dns_observer_domain::{Config, InputConfig, InputFormat};
use dns_observer_infrastructure::capture::{Base64LineSource, HexLineSource, RawFileSource};
use dns_observer_infrastructure::dns::WireMessageDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

const STDIN_LABEL: &str = "<stdin>";

pub fn decode_use_case(config: &Config) -> DecodeMessagesUseCase {
    let decoder = Arc::new(WireMessageDecoder::from_config(&config.decoder));
    DecodeMessagesUseCase::new(decoder, config.decoder.max_message_size)
}

/// One source per input file for line formats, a single source for raw
/// files, and stdin when no paths are given.
pub fn message_sources(
    input: &InputConfig,
    paths: &[PathBuf],
) -> anyhow::Result<Vec<Box<dyn MessageSource>>> {
    if input.format == InputFormat::Raw {
        if paths.is_empty() {
            anyhow::bail!("raw input needs at least one file: each file holds one message");
        }
        let source = RawFileSource::new(paths.iter().cloned()).with_tcp_framing(input.tcp_framing);
        return Ok(vec![Box::new(source)]);
    }

    if paths.is_empty() {
        debug!(format = %input.format, "Reading messages from stdin");
        let reader = BufReader::new(io::stdin());
        return Ok(vec![line_source(input, reader, STDIN_LABEL)]);
    }

    paths
        .iter()
        .map(|path| -> anyhow::Result<Box<dyn MessageSource>> {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input {}", path.display()))?;
            debug!(path = %path.display(), format = %input.format, "Opened input");
            Ok(line_source(
                input,
                BufReader::new(file),
                &path.display().to_string(),
            ))
        })
        .collect()
}

fn line_source<R>(input: &InputConfig, reader: R, label: &str) -> Box<dyn MessageSource>
where
    R: BufRead + Send + 'static,
{
    match input.format {
        InputFormat::Base64 => Box::new(
            Base64LineSource::new(reader, label).with_tcp_framing(input.tcp_framing),
        ),
        _ => Box::new(HexLineSource::new(reader, label).with_tcp_framing(input.tcp_framing)),
    }
}
