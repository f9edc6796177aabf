use dns_observer_domain::DomainError;

pub trait RecordSink: Send {
    fn write_record(&mut self, record: &str) -> Result<(), DomainError>;

    fn flush(&mut self) -> Result<(), DomainError> {
        Ok(())
    }
}
