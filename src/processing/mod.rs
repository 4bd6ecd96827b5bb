pub mod classifier;
pub mod decoders;
pub mod extractor;
pub mod normalizer;
pub mod segmenter;

pub use classifier::DocumentClassifier;
pub use decoders::{DateRole, FieldDecoder};
pub use extractor::FieldExtractor;
pub use normalizer::{MrzNormalizer, FILL_CHAR};
pub use segmenter::LineSegmenter;
