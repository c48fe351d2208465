// Label generation: frequency-based labels for Latin and CJK article text.

pub mod engine;
pub mod language;
pub mod normalize;
pub mod preprocess;
pub mod ranking;
pub mod scoring;
pub mod tokenize;
pub mod traits;
pub mod types;

pub use engine::{generate_labels, Labeler};
pub use traits::LabelGenerator;
pub use types::{
    LabelResult, MAX_INPUT_CHARS_FOR_AI, MAX_LABELS, MAX_LABEL_LENGTH, MIN_CONTENT_LENGTH,
    MIN_LABEL_LENGTH,
};
