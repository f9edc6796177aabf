//! Field-by-field decoding of the DNS wire format (RFC 1035 §4).
pub mod cursor;
pub mod header;
pub mod name;
pub mod question;
pub mod record;

pub use cursor::Cursor;
pub use header::decode_header;
pub use name::{decode_mx_name, decode_name, NameBuffer, MAX_NAME_LEN, MAX_POINTER_DEPTH};
pub use question::{decode_question, QuestionFields};
pub use record::{decode_rdata, decode_record_header, RecordHeader, RR_FIXED_LEN};
