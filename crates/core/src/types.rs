/// Record keys are opaque strings (UUIDs for generated records, anything
/// non-empty for records created through upsert).
pub type TodoId = String;
