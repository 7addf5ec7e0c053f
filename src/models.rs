pub mod error;
pub use error::Error;

pub mod cost_matrix;
pub use cost_matrix::CostMatrix;

pub mod edit_operation;
pub use edit_operation::EditOperation;

pub mod edit_counts;
pub use edit_counts::EditCounts;

pub mod alignment_script;
pub use alignment_script::AlignmentScript;

pub mod alignment_blocks;
pub use alignment_blocks::{AlignmentBlock, AlignmentBlocks};

pub mod correspondence;
pub use correspondence::{AlignmentDirection, Correspondence};

pub mod markers;
pub use markers::{MarkerToken, Markers};

pub mod annotated_alignment;
pub use annotated_alignment::AnnotatedAlignment;

pub mod wer_report;
pub use wer_report::WerReport;

pub mod tokenizer;
pub use tokenizer::Tokenizer;
