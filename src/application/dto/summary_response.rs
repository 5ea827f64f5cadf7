use crate::summary::domain::ViolationSummary;

/// SummaryResponse - Result of the summarization use case
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryResponse {
    pub summary: ViolationSummary,
    /// Byte offset of the payload in the log
    pub payload_offset: usize,
    /// Payload length in bytes
    pub payload_len: usize,
}
