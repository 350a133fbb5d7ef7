//! Output-kind dispatch of source files to the highlighting engine

pub mod output_kind;
pub mod pipeline;

pub use output_kind::{DEFAULT_OUTPUT, Isolation, OutputKind};
pub use pipeline::{
    DEFAULT_HTML_FONT, DEFAULT_RTF_FONT, DispatchError, KindReport, KindStatus, Pipeline, Plan,
    RunReport,
};
