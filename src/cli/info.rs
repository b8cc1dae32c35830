//! # info 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/info.rs`

use clap::Args;
use std::path::PathBuf;

use crate::parsers::ErrorPolicy;

/// info 子命令参数
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Input SDF/molfile
    #[arg(short, long)]
    pub input: PathBuf,

    /// What to do when an atom or bond line has a malformed number
    #[arg(long, value_enum, default_value_t = ErrorPolicy::Abort)]
    pub on_error: ErrorPolicy,
}
