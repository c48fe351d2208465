// feedlabel: local label generation for feed articles.
//
// This is the library root. `label` is the engine; everything else is the
// ambient plumbing the CLI needs around it.

pub mod config;
pub mod label;
pub mod output;
pub mod pipeline;
