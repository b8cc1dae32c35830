//! # info 命令实现
//!
//! 流式读取 SDF 文件，逐记录汇总标题、原子数、键数、属性数和
//! 悬空键数量，以表格输出，最后给出合计。
//!
//! ## 依赖关系
//! - 使用 `cli/info.rs` 定义的参数
//! - 使用 `parsers/sdf.rs` 的 `RecordHandler`
//! - 使用 `utils/output.rs`

use std::io::BufRead;

use tabled::{Table, Tabled};

use crate::cli::info::InfoArgs;
use crate::error::Result;
use crate::models::Molecule;
use crate::parsers::{ErrorPolicy, ParseOptions, ParseStats, RecordHandler, SdfDispatcher};
use crate::utils::output;

use super::convert::open_input;

/// 记录汇总行
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct RecordRow {
    #[tabled(rename = "#")]
    pub record: usize,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Atoms")]
    pub atoms: usize,
    #[tabled(rename = "Bonds")]
    pub bonds: usize,
    #[tabled(rename = "Properties")]
    pub properties: usize,
    #[tabled(rename = "Dangling bonds")]
    pub dangling: usize,
}

/// 收集每条记录的汇总行
#[derive(Debug, Default)]
struct SummaryCollector {
    rows: Vec<RecordRow>,
}

impl RecordHandler for SummaryCollector {
    fn record(&mut self, molecule: &Molecule) -> Result<()> {
        self.rows.push(RecordRow {
            record: self.rows.len() + 1,
            title: molecule.title().unwrap_or("-").to_string(),
            atoms: molecule.atoms().len(),
            bonds: molecule.bonds().len(),
            properties: molecule.property_count(),
            dangling: molecule.dangling_bonds(),
        });
        Ok(())
    }
}

/// 执行 info 命令
pub fn execute(args: InfoArgs) -> Result<()> {
    output::print_header(&format!("Summary of {}", args.input.display()));

    let reader = open_input(&args.input)?;
    let (rows, stats) = summarize(reader, args.on_error)?;

    if rows.is_empty() {
        output::print_warning("No complete records found");
    } else {
        println!("{}", Table::new(&rows));
    }

    let atoms: usize = rows.iter().map(|r| r.atoms).sum();
    let bonds: usize = rows.iter().map(|r| r.bonds).sum();
    let dangling: usize = rows.iter().map(|r| r.dangling).sum();
    output::print_info(&format!(
        "{} line(s), {} atom(s), {} bond(s)",
        stats.lines, atoms, bonds
    ));
    if dangling > 0 {
        output::print_warning(&format!("{dangling} bond(s) reference missing atoms"));
    }
    if stats.skipped > 0 {
        output::print_warning(&format!("{} record(s) skipped", stats.skipped));
    }
    if stats.discarded_partial {
        output::print_warning("Input ends inside an unterminated record");
    }
    output::print_done(&format!("{} record(s)", stats.records));
    Ok(())
}

/// 汇总输入流中的全部记录
pub fn summarize<R: BufRead>(
    reader: R,
    on_error: ErrorPolicy,
) -> Result<(Vec<RecordRow>, ParseStats)> {
    let mut collector = SummaryCollector::default();
    let options = ParseOptions {
        link_enrichment: false,
        on_error,
    };
    let stats = SdfDispatcher::new(options).run(reader, &mut collector)?;
    Ok((collector.rows, stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const INPUT: &str = "\
Formaldehyde
  Marvin  01211310252D

  2  2  0  0  0  0            999 V2000
    0.0000    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
    1.2000    0.0000    0.0000 O   0  0  0  0  0  0  0  0  0  0  0  0
  1  2  2  0  0  0  0
  1  7  1  0  0  0  0
M  END
> <SMILES>
C=O

> <Name>
formaldehyde

$$$$

  broken

  1  0  0  0  0  0            999 V2000
    0.0x00    0.0000    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0
M  END
$$$$
";

    #[test]
    fn test_summary_rows() {
        let (rows, stats) = summarize(INPUT.as_bytes(), ErrorPolicy::SkipRecord).unwrap();
        assert_eq!(stats.records, 1);
        assert_eq!(stats.skipped, 1);
        assert_eq!(
            rows,
            vec![RecordRow {
                record: 1,
                title: "Formaldehyde".to_string(),
                atoms: 2,
                bonds: 2,
                properties: 2,
                dangling: 1,
            }]
        );
    }

    #[test]
    fn test_abort_on_malformed_number() {
        assert!(summarize(INPUT.as_bytes(), ErrorPolicy::Abort).is_err());
    }

    #[test]
    fn test_execute_on_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.sdf");
        fs::write(&input, INPUT).unwrap();
        execute(InfoArgs {
            input,
            on_error: ErrorPolicy::SkipRecord,
        })
        .unwrap();
    }
}
