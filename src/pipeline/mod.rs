// Pipelines that drive the label engine over many documents.

pub mod batch;
