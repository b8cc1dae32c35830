//! # SDFEater - SDF/molfile 流式转换工具
//!
//! 单遍读取 SDF 文件，把每条分子记录投影为 Cypher、CVME、SMILES、InChI、
//! RDF（Turtle / N-Triples / N-Quads / RDF/XML）、JSON-LD、RDFa 或 Microdata。
//!
//! ## 子命令
//! - `convert` - 转换为目标格式
//! - `info`    - 逐记录汇总
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/         (命令行参数定义)
//!   ├── commands/    (命令执行逻辑)
//!   │     ├── parsers/     (行分类、链接改写、记录分派)
//!   │     ├── projectors/  (各输出格式)
//!   │     ├── graph/       (RDF 图接收端)
//!   │     ├── data/        (周期表)
//!   │     └── models/      (数据模型)
//!   ├── utils/       (工具函数)
//!   └── error.rs     (错误处理)
//! ```

mod cli;
mod commands;
mod data;
mod error;
mod graph;
mod models;
mod parsers;
mod projectors;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(e.exit_code());
    }
}
