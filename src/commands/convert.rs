//! # convert 命令实现
//!
//! 把一个 SDF 文件单遍流式投影为目标格式。
//!
//! ## 功能
//! - 读取输入文件，逐行交给 `SdfDispatcher`
//! - 投影结果写到标准输出或 `-o` 指定的文件（写文件时显示 spinner）
//! - `--periodic` 时加载内置或自定义周期表
//! - 对当前格式不起作用的参数给出警告
//!
//! ## 依赖关系
//! - 使用 `cli/convert.rs` 定义的参数
//! - 使用 `parsers/`, `projectors/`, `data/`
//! - 使用 `utils/output.rs`, `utils/progress.rs`

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Datelike;

use crate::cli::convert::ConvertArgs;
use crate::data::PeriodicTable;
use crate::error::{Result, SdfError};
use crate::parsers::{ParseOptions, ParseStats, SdfDispatcher};
use crate::projectors::subject::SubjectMode;
use crate::projectors::{OutputFormat, Projection, ProjectionOptions};
use crate::utils::{output, progress};

/// 执行 convert 命令
pub fn execute(args: ConvertArgs) -> Result<()> {
    let reader = open_input(&args.input)?;
    warn_ignored_flags(&args);

    let periodic = if args.format == OutputFormat::Cypher && args.periodic {
        Some(load_periodic_table(args.periodic_table.as_deref())?)
    } else {
        None
    };

    let projection = ProjectionOptions {
        format: args.format,
        periodic,
        subject: args.subject,
        subject_base: args.subject_base.clone(),
        echo_header: args.echo_header,
        year: chrono::Local::now().year(),
    };
    let parse = ParseOptions {
        link_enrichment: args.format.links_enabled(args.urls),
        on_error: args.on_error,
    };

    let stats = match &args.output {
        Some(path) => {
            output::print_conversion(
                &args.input.display().to_string(),
                &path.display().to_string(),
            );
            let file = File::create(path).map_err(|e| SdfError::FileWriteError {
                path: path.display().to_string(),
                source: e,
            })?;

            let pb = progress::create_spinner(&format!("Converting to {}", args.format));
            let result = convert(reader, BufWriter::new(file), projection, parse);
            pb.finish_and_clear();
            let (_, stats) = result?;

            output::print_done(&format!(
                "Projected {} record(s) as {} into '{}'",
                stats.records,
                args.format,
                path.display()
            ));
            stats
        }
        None => {
            let stdout = io::stdout();
            let (_, stats) = convert(reader, BufWriter::new(stdout.lock()), projection, parse)?;
            stats
        }
    };

    if stats.skipped > 0 {
        output::print_warning(&format!(
            "{} record(s) skipped because of malformed numbers",
            stats.skipped
        ));
    }
    Ok(())
}

/// 单遍转换：解析输入、投影每条记录、写出会话结尾
pub fn convert<R: BufRead, W: Write>(
    reader: R,
    writer: W,
    projection: ProjectionOptions,
    parse: ParseOptions,
) -> Result<(W, ParseStats)> {
    let mut session = Projection::new(projection, writer)?;
    session.begin()?;
    let stats = SdfDispatcher::new(parse).run(reader, &mut session)?;
    let writer = session.finish()?;
    Ok((writer, stats))
}

/// 打开输入文件
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    if !path.exists() {
        return Err(SdfError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    if path.is_dir() {
        return Err(SdfError::InvalidArgument(format!(
            "'{}' is a directory, expected an SDF file",
            path.display()
        )));
    }
    let file = File::open(path).map_err(|e| SdfError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(BufReader::new(file))
}

fn load_periodic_table(path: Option<&Path>) -> Result<PeriodicTable> {
    let table = match path {
        Some(path) => PeriodicTable::from_file(path)?,
        None => PeriodicTable::bundled()?,
    };
    output::print_info(&format!("Loaded periodic table data for {} elements", table.len()));
    Ok(table)
}

fn warn_ignored_flags(args: &ConvertArgs) {
    let cypher = args.format == OutputFormat::Cypher;
    if args.urls && !cypher {
        if args.format == OutputFormat::Cvme {
            output::print_warning("--urls is always enabled for cvme");
        } else {
            output::print_warning(&format!("--urls has no effect on {} output", args.format));
        }
    }
    if args.periodic && !cypher {
        output::print_warning(&format!("--periodic has no effect on {} output", args.format));
    }
    if args.periodic_table.is_some() && !(cypher && args.periodic) {
        output::print_warning("--periodic-table is only used together with cypher --periodic");
    }
    if args.subject != SubjectMode::Iri && !args.format.uses_subjects() {
        output::print_warning(&format!(
            "--subject has no effect on {} output",
            args.format
        ));
    }
    if args.echo_header && !args.format.is_streaming() {
        output::print_warning(&format!(
            "--echo-header has no effect on {} output",
            args.format
        ));
    }
}
