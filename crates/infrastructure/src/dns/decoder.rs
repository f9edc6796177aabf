use super::render::Renderer;
use super::wire::{
    decode_header, decode_question, decode_rdata, decode_record_header, Cursor, NameBuffer,
};
use dns_observer_application::ports::MessageDecoder;
use dns_observer_domain::{
    DecodeError, DecodeSummary, DecoderConfig, DnsRecord, MessageHeader, RdlengthPolicy,
};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Header,
    Question,
    Answer,
    Authority,
    Additional,
}

impl Section {
    fn as_str(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Question => "question",
            Section::Answer => "answer",
            Section::Authority => "authority",
            Section::Additional => "additional",
        }
    }
}

/// Where a decode stopped and what the terminal marker has to look like.
struct Failure {
    error: DecodeError,
    section: Section,
    remaining: usize,
    in_rdata: bool,
}

/// Decodes captured DNS messages into the single-line record format.
///
/// Holds only immutable options, so one instance can be shared across
/// threads and reused for any number of messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct WireMessageDecoder {
    policy: RdlengthPolicy,
}

impl WireMessageDecoder {
    pub fn new(policy: RdlengthPolicy) -> Self {
        Self { policy }
    }

    pub fn from_config(config: &DecoderConfig) -> Self {
        Self::new(config.rdlength_policy)
    }

    pub fn policy(&self) -> RdlengthPolicy {
        self.policy
    }

    fn decode_into(
        &self,
        message: &[u8],
        renderer: &mut Renderer<'_>,
    ) -> Result<DecodeSummary, Failure> {
        let mut cursor = Cursor::new(message);

        let header = decode_header(&mut cursor).map_err(|error| Failure {
            error,
            section: Section::Header,
            remaining: message.len(),
            in_rdata: false,
        })?;

        trace!(
            id = header.id,
            opcode = header.opcode(),
            aa = header.authoritative(),
            tc = header.truncated(),
            rd = header.recursion_desired(),
            ra = header.recursion_available(),
            qdcount = header.qdcount,
            ancount = header.ancount,
            nscount = header.nscount,
            arcount = header.arcount,
            "Decoded header"
        );

        if header.qdcount > 1 {
            return Err(Failure {
                error: DecodeError::TooManyQuestions,
                section: Section::Question,
                remaining: cursor.remaining(),
                in_rdata: false,
            });
        }

        let mut name = NameBuffer::new();
        let mut question = None;
        if header.qdcount == 1 {
            decode_question(&mut cursor, &mut name).map_err(|error| Failure {
                error,
                section: Section::Question,
                remaining: cursor.remaining(),
                in_rdata: false,
            })?;
            renderer.question(header.direction(), name.as_str());
            question = Some(name.as_str().to_string());
        }

        renderer.begin_records(header.rcode());

        let sections = [
            (Section::Answer, header.ancount),
            (Section::Authority, header.nscount),
            (Section::Additional, header.arcount),
        ];
        for (section, count) in sections {
            for _ in 0..count {
                renderer.begin_record();
                let record = self.decode_record(&mut cursor, &mut name, section)?;
                renderer.record(&record);
            }
        }

        renderer.close();

        Ok(summary(&header, question, renderer.records_written()))
    }

    fn decode_record(
        &self,
        cursor: &mut Cursor<'_>,
        name: &mut NameBuffer,
        section: Section,
    ) -> Result<DnsRecord, Failure> {
        let header = decode_record_header(cursor, name).map_err(|error| Failure {
            error,
            section,
            remaining: cursor.remaining(),
            in_rdata: false,
        })?;

        // RDATA failures report what was left when the fixed block ended
        let rdata_remaining = cursor.remaining();
        let data = decode_rdata(&header, cursor, name, self.policy).map_err(|error| Failure {
            error,
            section,
            remaining: rdata_remaining,
            in_rdata: true,
        })?;

        Ok(DnsRecord {
            rtype: header.rtype,
            rclass: header.rclass,
            ttl: header.ttl,
            rdlength: header.rdlength,
            data,
        })
    }
}

fn summary(header: &MessageHeader, question: Option<String>, records: usize) -> DecodeSummary {
    DecodeSummary {
        direction: header.direction(),
        rcode: header.rcode(),
        question,
        records: records as u32,
    }
}

impl MessageDecoder for WireMessageDecoder {
    fn decode(&self, message: &[u8], out: &mut String) -> Result<DecodeSummary, DecodeError> {
        let mut renderer = Renderer::new(out);
        renderer.open();

        match self.decode_into(message, &mut renderer) {
            Ok(summary) => Ok(summary),
            Err(failure) => {
                trace!(
                    section = failure.section.as_str(),
                    kind = failure.error.label(),
                    remaining = failure.remaining,
                    "message decode stopped"
                );
                if failure.in_rdata {
                    renderer.malformed_in_record(failure.remaining);
                } else {
                    renderer.malformed(failure.remaining);
                }
                Err(failure.error)
            }
        }
    }

    fn render_rejection(&self, message_len: usize, out: &mut String) {
        let mut renderer = Renderer::new(out);
        renderer.open();
        renderer.malformed(message_len);
    }
}
