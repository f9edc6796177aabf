use dns_observer_application::ports::RecordSink;
use dns_observer_domain::DomainError;
use std::io::Write;

/// Writes each record followed by a newline.
pub struct WriterSink<W: Write> {
    writer: W,
    written: u64,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RecordSink for WriterSink<W> {
    fn write_record(&mut self, record: &str) -> Result<(), DomainError> {
        self.writer.write_all(record.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DomainError> {
        self.writer.flush()?;
        Ok(())
    }
}
