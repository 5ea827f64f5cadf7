mod payload_extractor;
mod payload_parser;
mod violation_aggregator;

pub use payload_extractor::{
    ExtractedPayload, PayloadExtractor, DEFAULT_END_MARKER, DEFAULT_START_MARKER,
};
pub use payload_parser::PayloadParser;
pub use violation_aggregator::{ViolationAggregator, DEFAULT_SAMPLE_LENGTH};
