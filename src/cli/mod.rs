//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `convert`: 把 SDF 文件投影为目标格式
//! - `info`: 逐记录汇总 SDF 文件内容
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: convert, info

pub mod convert;
pub mod info;

use clap::{Parser, Subcommand};

/// SDFEater - SDF/molfile 流式转换工具
#[derive(Parser)]
#[command(name = "sdfeater")]
#[command(version)]
#[command(
    about = "Stream SDF/molfile records into Cypher, RDF, JSON-LD, HTML markup and more",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Convert an SDF file into the selected output format
    Convert(convert::ConvertArgs),

    /// Summarize the records of an SDF file
    Info(info::InfoArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projectors::subject::SubjectMode;
    use crate::projectors::OutputFormat;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from([
            "sdfeater", "convert", "-i", "in.sdf", "-f", "ntriples", "-s", "bnode", "-u",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.format, OutputFormat::Ntriples);
                assert_eq!(args.subject, SubjectMode::Bnode);
                assert!(args.urls);
                assert!(!args.periodic);
                assert!(args.output.is_none());
            }
            Commands::Info(_) => panic!("expected convert"),
        }
    }

    #[test]
    fn test_unknown_format_rejected() {
        let err = Cli::try_parse_from(["sdfeater", "convert", "-i", "in.sdf", "-f", "rdfthrift"])
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_parse_info() {
        let cli =
            Cli::try_parse_from(["sdfeater", "info", "-i", "in.sdf", "--on-error", "skip-record"])
                .unwrap();
        assert!(matches!(cli.command, Commands::Info(_)));
    }
}
