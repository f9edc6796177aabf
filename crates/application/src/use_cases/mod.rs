pub mod decode_messages;

// Re-export use cases
pub use decode_messages::DecodeMessagesUseCase;
