/// Record identifiers as issued by the content backend.
pub type DbId = i64;
