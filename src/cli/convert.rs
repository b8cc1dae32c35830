//! # convert 子命令 CLI 定义
//!
//! 把一个 SDF 文件流式投影为指定格式
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/convert.rs`

use clap::Args;
use std::path::PathBuf;

use crate::parsers::ErrorPolicy;
use crate::projectors::subject::{SubjectMode, DEFAULT_SUBJECT_BASE};
use crate::projectors::OutputFormat;

/// convert 子命令参数
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input SDF/molfile
    #[arg(short, long)]
    pub input: PathBuf,

    /// Target output format
    #[arg(short, long, value_enum)]
    pub format: OutputFormat,

    /// Subject identifiers for RDF, JSON-LD, RDFa and Microdata output
    #[arg(short, long, value_enum, default_value_t = SubjectMode::Iri)]
    pub subject: SubjectMode,

    /// Base IRI for `iri` subjects; a sequential number is appended
    #[arg(long, env = "SDFEATER_SUBJECT_BASE", default_value = DEFAULT_SUBJECT_BASE)]
    pub subject_base: String,

    /// Turn database identifiers into full URLs (cypher only, always on for cvme)
    #[arg(short, long, default_value_t = false)]
    pub urls: bool,

    /// Add periodic table data to atoms (cypher only)
    #[arg(short, long, default_value_t = false)]
    pub periodic: bool,

    /// Periodic table JSON replacing the bundled one
    #[arg(long)]
    pub periodic_table: Option<PathBuf>,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// What to do when an atom or bond line has a malformed number
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
    pub on_error: ErrorPolicy,

    /// Copy molfile header text lines to the output (per-record formats only)
    #[arg(long, default_value_t = false)]
    pub echo_header: bool,
}
