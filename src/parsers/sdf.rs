//! # SDF 流式解析与投影分派
//!
//! 单遍读取 SDF 文本，逐行分类并累加到一个 `Molecule`，
//! 遇到 `$$$$` 时把完成的记录交给 `RecordHandler`，然后重置。
//!
//! ## 状态机
//! ```text
//! InHeader --(M  END)--> InProperties --($$$$: 投影, reset)--> InHeader
//! 任意状态 --(数值解析失败且策略为 skip-record)--> Skipping --($$$$)--> InHeader
//! ```
//!
//! 输入结束时尚未完成的记录直接丢弃，不投影。
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `parsers/classify.rs`、`parsers/links.rs`、`models/`

use std::io::BufRead;

use clap::ValueEnum;

use crate::error::{Result, SdfError};
use crate::models::Molecule;
use crate::utils::output;

use super::classify::{classify, decode_atom, decode_bond, LineKind, Section};
use super::links::{enrich, Enriched};

/// 接收完成记录的一方
pub trait RecordHandler {
    /// 头部中既不是原子行也不是键行的文本（标题、程序行、计数行等）
    fn header_line(&mut self, _line: &str) -> Result<()> {
        Ok(())
    }

    /// 一条完整记录
    fn record(&mut self, molecule: &Molecule) -> Result<()>;

    /// 记录因解析错误被跳过
    fn skipped(&mut self, error: &SdfError) {
        output::print_warning(&format!("{error}; record skipped"));
    }
}

/// 数值字段解析失败时的处理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ErrorPolicy {
    /// Stop with an error (exit code 1)
    #[default]
    Abort,
    /// Warn, drop the current record and continue at the next `$$$$`
    SkipRecord,
}

impl std::fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorPolicy::Abort => write!(f, "abort"),
            ErrorPolicy::SkipRecord => write!(f, "skip-record"),
        }
    }
}

/// 解析选项
#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    /// 是否通过链接表把数据库标识符改写为 URL
    pub link_enrichment: bool,
    pub on_error: ErrorPolicy,
}

/// 解析统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub lines: usize,
    pub records: usize,
    pub skipped: usize,
    /// 输入结束时丢弃了未完成的记录
    pub discarded_partial: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    InHeader,
    InProperties,
    Skipping,
}

/// 分派器：持有累加中的记录和当前属性名
pub struct SdfDispatcher {
    options: ParseOptions,
    state: State,
    molecule: Molecule,
    property: String,
    header_lines: usize,
    stats: ParseStats,
}

impl SdfDispatcher {
    pub fn new(options: ParseOptions) -> Self {
        SdfDispatcher {
            options,
            state: State::InHeader,
            molecule: Molecule::new(),
            property: String::new(),
            header_lines: 0,
            stats: ParseStats::default(),
        }
    }

    /// 读取整个输入流
    pub fn run<R: BufRead, H: RecordHandler>(
        mut self,
        mut reader: R,
        handler: &mut H,
    ) -> Result<ParseStats> {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            line_no += 1;
            let read = reader
                .read_until(b'\n', &mut buf)
                .map_err(|source| SdfError::InputError {
                    line: line_no,
                    source,
                })?;
            if read == 0 {
                break;
            }
            // 非 UTF-8 字节替换为 U+FFFD，不中断解析
            let line = String::from_utf8_lossy(&buf);
            let line = line.trim_end_matches(['\n', '\r']);
            self.feed(line, line_no, handler)?;
        }
        Ok(self.finish())
    }

    /// 处理一行
    pub fn feed<H: RecordHandler>(
        &mut self,
        raw: &str,
        line_no: usize,
        handler: &mut H,
    ) -> Result<()> {
        self.stats.lines += 1;
        let line = raw.trim();

        let section = match self.state {
            State::InHeader => Section::Header,
            State::InProperties => Section::Properties,
            State::Skipping => {
                if line.starts_with("$$$$") {
                    self.start_record();
                }
                return Ok(());
            }
        };

        match classify(line, section) {
            LineKind::HeaderEnd => self.state = State::InProperties,
            LineKind::Control | LineKind::Blank => {}
            LineKind::AtomLine(tokens) => match decode_atom(&tokens, line_no) {
                Ok(atom) => self.molecule.add_atom(atom),
                Err(e) => return self.recover(e, handler),
            },
            LineKind::BondLine(tokens) => match decode_bond(&tokens, line_no) {
                Ok(bond) => self.molecule.add_bond(bond),
                Err(e) => return self.recover(e, handler),
            },
            LineKind::HeaderText => {
                if self.header_lines == 0 && !line.is_empty() {
                    self.molecule.set_title(line);
                }
                self.header_lines += 1;
                handler.header_line(line)?;
            }
            LineKind::PropertyTag(name) => self.property = name.to_string(),
            LineKind::PropertyValue => self.append_value(line),
            LineKind::RecordTerminator => {
                handler.record(&self.molecule)?;
                self.stats.records += 1;
                self.start_record();
            }
        }
        Ok(())
    }

    /// 结束输入；未完成的记录被丢弃
    pub fn finish(mut self) -> ParseStats {
        self.stats.discarded_partial = self.state == State::InProperties
            || !self.molecule.atoms().is_empty()
            || !self.molecule.bonds().is_empty();
        self.stats
    }

    fn start_record(&mut self) {
        self.molecule.reset();
        self.property.clear();
        self.header_lines = 0;
        self.state = State::InHeader;
    }

    fn recover<H: RecordHandler>(&mut self, error: SdfError, handler: &mut H) -> Result<()> {
        match self.options.on_error {
            ErrorPolicy::Abort => Err(error),
            ErrorPolicy::SkipRecord => {
                handler.skipped(&error);
                self.stats.skipped += 1;
                self.molecule.reset();
                self.state = State::Skipping;
                Ok(())
            }
        }
    }

    /// 属性标签之前出现的值没有归属，忽略
    fn append_value(&mut self, value: &str) {
        if self.property.is_empty() {
            return;
        }
        if !self.options.link_enrichment {
            self.molecule.append_property_value(&self.property, value);
            return;
        }
        match enrich(&self.property, value) {
            Enriched::Unchanged => self.molecule.append_property_value(&self.property, value),
            Enriched::Link(link) => self.molecule.append_property_value(&self.property, link),
            Enriched::Redirect { property, link } => {
                self.molecule.append_property_value(property, link)
            }
            Enriched::Discard => {}
        }
    }
}
