use crate::dns_header::Direction;
use crate::errors::DecodeError;
use serde::Serialize;
use std::collections::BTreeMap;

/// What a successful decode saw, returned alongside the rendered text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeSummary {
    pub direction: Direction,
    pub rcode: u8,
    /// `None` when the message carried no question.
    pub question: Option<String>,
    pub records: u32,
}

/// Running totals over a stream of decoded messages.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DecodeStats {
    pub messages_total: u64,
    pub decoded: u64,
    pub malformed: u64,
    pub oversized: u64,
    pub invalid_inputs: u64,
    pub queries: u64,
    pub responses: u64,
    pub records: u64,
    pub errors: BTreeMap<&'static str, u64>,
}

impl DecodeStats {
    pub fn record_success(&mut self, summary: &DecodeSummary) {
        self.messages_total += 1;
        self.decoded += 1;
        self.records += summary.records as u64;
        match summary.direction {
            Direction::Query => self.queries += 1,
            Direction::Response => self.responses += 1,
        }
    }

    pub fn record_failure(&mut self, error: DecodeError) {
        self.messages_total += 1;
        self.malformed += 1;
        *self.errors.entry(error.label()).or_insert(0) += 1;
    }

    pub fn record_oversized(&mut self) {
        self.messages_total += 1;
        self.oversized += 1;
    }

    /// Input that could not be turned into a message at all (bad encoding).
    pub fn record_invalid_input(&mut self) {
        self.invalid_inputs += 1;
    }

    pub fn error_count(&self, error: DecodeError) -> u64 {
        self.errors.get(error.label()).copied().unwrap_or(0)
    }

    /// Adds the totals of another run, e.g. one per input file.
    pub fn merge(&mut self, other: &DecodeStats) {
        self.messages_total += other.messages_total;
        self.decoded += other.decoded;
        self.malformed += other.malformed;
        self.oversized += other.oversized;
        self.invalid_inputs += other.invalid_inputs;
        self.queries += other.queries;
        self.responses += other.responses;
        self.records += other.records;
        for (label, count) in &other.errors {
            *self.errors.entry(*label).or_insert(0) += count;
        }
    }
}
