//! # 投影模块
//!
//! 把完成的记录投影为目标格式。逐记录格式（Cypher、CVME、SMILES、
//! InChI、RDFa、Microdata、debug）在 `$$$$` 处立即写出；需要整体文档的
//! 格式（RDF 各语法、JSON-LD）在会话中累积，`finish` 时一次写出。
//!
//! ## 依赖关系
//! - 被 `commands/convert.rs` 使用
//! - 实现 `parsers::sdf::RecordHandler`
//! - 子模块: cypher, cvme, debug, jsonld, markup, notation, rdf, render, schema, subject

pub mod cvme;
pub mod cypher;
pub mod debug;
pub mod jsonld;
pub mod markup;
pub mod notation;
pub mod rdf;
pub mod render;
pub mod schema;
pub mod subject;

use std::io::Write;

use clap::ValueEnum;

use crate::data::PeriodicTable;
use crate::error::{Result, SdfError};
use crate::graph::{RdfGraph, RdfSyntax};
use crate::models::Molecule;
use crate::parsers::sdf::RecordHandler;
use crate::utils::output;

use self::markup::Markup;
use self::notation::Notation;
use self::subject::{SubjectMinter, SubjectMode};

// ─────────────────────────────────────────────────────────────
// 输出格式
// ─────────────────────────────────────────────────────────────

/// 支持的输出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Cypher CREATE statements for graph databases
    Cypher,
    /// CVME / chemSKOS triples with an embedded molblock
    Cvme,
    /// One SMILES string per record
    Smiles,
    /// One InChI string per record
    Inchi,
    /// schema.org RDF as Turtle
    Turtle,
    /// schema.org RDF as N-Triples
    Ntriples,
    /// schema.org RDF as N-Quads
    Nquads,
    /// schema.org RDF as RDF/XML
    Rdfxml,
    /// schema.org JSON-LD document
    Jsonld,
    /// JSON-LD document embedded in an HTML page
    Jsonldhtml,
    /// HTML page with RDFa markup
    Rdfa,
    /// HTML page with Microdata markup
    Microdata,
    /// Human readable dump of every record
    Debug,
}

impl OutputFormat {
    /// 是否按链接表改写数据库标识符（Cypher 由 `--urls` 决定，CVME 始终开启）
    pub fn links_enabled(self, urls: bool) -> bool {
        match self {
            OutputFormat::Cypher => urls,
            OutputFormat::Cvme => true,
            _ => false,
        }
    }

    /// 逐记录写出（其余格式在流结束时整体写出）
    pub fn is_streaming(self) -> bool {
        !matches!(
            self,
            OutputFormat::Turtle
                | OutputFormat::Ntriples
                | OutputFormat::Nquads
                | OutputFormat::Rdfxml
                | OutputFormat::Jsonld
                | OutputFormat::Jsonldhtml
        )
    }

    /// 是否需要主体标识
    pub fn uses_subjects(self) -> bool {
        !matches!(
            self,
            OutputFormat::Cypher
                | OutputFormat::Cvme
                | OutputFormat::Smiles
                | OutputFormat::Inchi
                | OutputFormat::Debug
        )
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Cypher => write!(f, "cypher"),
            OutputFormat::Cvme => write!(f, "cvme"),
            OutputFormat::Smiles => write!(f, "smiles"),
            OutputFormat::Inchi => write!(f, "inchi"),
            OutputFormat::Turtle => write!(f, "turtle"),
            OutputFormat::Ntriples => write!(f, "ntriples"),
            OutputFormat::Nquads => write!(f, "nquads"),
            OutputFormat::Rdfxml => write!(f, "rdfxml"),
            OutputFormat::Jsonld => write!(f, "jsonld"),
            OutputFormat::Jsonldhtml => write!(f, "jsonldhtml"),
            OutputFormat::Rdfa => write!(f, "rdfa"),
            OutputFormat::Microdata => write!(f, "microdata"),
            OutputFormat::Debug => write!(f, "debug"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 投影会话
// ─────────────────────────────────────────────────────────────

/// 会话选项
pub struct ProjectionOptions {
    pub format: OutputFormat,
    /// Cypher 原子附加的周期表属性
    pub periodic: Option<PeriodicTable>,
    pub subject: SubjectMode,
    pub subject_base: String,
    /// 逐记录格式下原样写出头部文本行
    pub echo_header: bool,
    /// 数据集描述中的年份
    pub year: i32,
}

/// 跨记录状态
enum Session {
    Stream,
    JsonLd { nodes: Vec<String>, html: bool },
    Graph { graph: RdfGraph, syntax: RdfSyntax },
}

/// 一次转换的投影会话，持有输出流和全部跨记录状态
pub struct Projection<W: Write> {
    writer: W,
    format: OutputFormat,
    periodic: Option<PeriodicTable>,
    echo_header: bool,
    year: i32,
    minter: SubjectMinter,
    session: Session,
    records: usize,
}

impl<W: Write> Projection<W> {
    pub fn new(options: ProjectionOptions, writer: W) -> Result<Self> {
        let minter = SubjectMinter::new(options.subject, options.subject_base)?;
        let session = match options.format {
            OutputFormat::Jsonld => Session::JsonLd {
                nodes: Vec::new(),
                html: false,
            },
            OutputFormat::Jsonldhtml => Session::JsonLd {
                nodes: Vec::new(),
                html: true,
            },
            OutputFormat::Turtle => Session::graph(RdfSyntax::Turtle),
            OutputFormat::Ntriples => Session::graph(RdfSyntax::NTriples),
            OutputFormat::Nquads => Session::graph(RdfSyntax::NQuads),
            OutputFormat::Rdfxml => Session::graph(RdfSyntax::RdfXml),
            _ => Session::Stream,
        };

        Ok(Projection {
            writer,
            format: options.format,
            periodic: options.periodic,
            echo_header: options.echo_header,
            year: options.year,
            minter,
            session,
            records: 0,
        })
    }

    /// 写出页首（仅 RDFa / Microdata）
    pub fn begin(&mut self) -> Result<()> {
        if let Some(markup) = self.markup() {
            let prelude = markup::render_prelude(markup, self.year);
            self.emit(&prelude)?;
        }
        Ok(())
    }

    /// 已投影的记录数
    pub fn records(&self) -> usize {
        self.records
    }

    /// 写出累积的文档或页尾，返回输出流
    pub fn finish(mut self) -> Result<W> {
        let session = std::mem::replace(&mut self.session, Session::Stream);
        match session {
            Session::Stream => {
                if self.markup().is_some() {
                    self.emit(markup::render_epilogue())?;
                }
            }
            Session::JsonLd { nodes, html } => {
                let document = jsonld::render_document(&nodes, self.year, html);
                self.emit(&document)?;
            }
            Session::Graph { graph, syntax } => {
                if graph.is_empty() {
                    output::print_warning(
                        "No record carried a schema.org property; the graph is empty",
                    );
                }
                self.writer = graph.serialize(syntax, self.writer)?;
            }
        }
        self.writer.flush().map_err(SdfError::OutputError)?;
        Ok(self.writer)
    }

    fn markup(&self) -> Option<Markup> {
        match self.format {
            OutputFormat::Rdfa => Some(Markup::Rdfa),
            OutputFormat::Microdata => Some(Markup::Microdata),
            _ => None,
        }
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.writer
            .write_all(text.as_bytes())
            .map_err(SdfError::OutputError)
    }

    fn render(&mut self, molecule: &Molecule) -> Option<String> {
        match self.format {
            OutputFormat::Cypher => Some(cypher::render(molecule, self.periodic.as_ref())),
            OutputFormat::Cvme => Some(cvme::render(molecule)),
            OutputFormat::Smiles => Some(notation::render(molecule, Notation::Smiles)),
            OutputFormat::Inchi => Some(notation::render(molecule, Notation::Inchi)),
            OutputFormat::Debug => Some(debug::render(molecule)),
            OutputFormat::Rdfa => markup::render_entity(Markup::Rdfa, molecule, &mut self.minter),
            OutputFormat::Microdata => {
                markup::render_entity(Markup::Microdata, molecule, &mut self.minter)
            }
            _ => None,
        }
    }
}

impl Session {
    fn graph(syntax: RdfSyntax) -> Self {
        Session::Graph {
            graph: RdfGraph::new(),
            syntax,
        }
    }
}

impl<W: Write> RecordHandler for Projection<W> {
    fn header_line(&mut self, line: &str) -> Result<()> {
        if self.echo_header && self.format.is_streaming() {
            self.emit(line)?;
            self.emit("\n")?;
        }
        Ok(())
    }

    fn record(&mut self, molecule: &Molecule) -> Result<()> {
        self.records += 1;
        match &mut self.session {
            Session::JsonLd { nodes, .. } => {
                if let Some(node) = jsonld::render_node(molecule, &mut self.minter) {
                    nodes.push(node);
                }
                Ok(())
            }
            Session::Graph { graph, .. } => {
                rdf::project(molecule, &mut self.minter, graph);
                Ok(())
            }
            Session::Stream => match self.render(molecule) {
                Some(text) => self.emit(&text),
                None => Ok(()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Atom, Bond};
    use crate::projectors::subject::DEFAULT_SUBJECT_BASE;

    fn options(format: OutputFormat) -> ProjectionOptions {
        ProjectionOptions {
            format,
            periodic: None,
            subject: SubjectMode::Iri,
            subject_base: DEFAULT_SUBJECT_BASE.to_string(),
            echo_header: false,
            year: 2026,
        }
    }

    fn ethanol() -> Molecule {
        let mut mol = Molecule::new();
        mol.add_atom(Atom::new("C", -0.866, 0.25, 0.0));
        mol.add_atom(Atom::new("O", 0.866, 0.25, 0.0));
        mol.add_bond(Bond::new(1, 2, 1, 0));
        mol.append_property_value("SMILES", "CCO");
        mol.append_property_value("Formulae", "C2H6O");
        mol
    }

    fn run(format: OutputFormat, molecules: &[Molecule]) -> String {
        let mut projection = Projection::new(options(format), Vec::new()).unwrap();
        projection.begin().unwrap();
        for mol in molecules {
            projection.record(mol).unwrap();
        }
        String::from_utf8(projection.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_links_enabled() {
        assert!(OutputFormat::Cypher.links_enabled(true));
        assert!(!OutputFormat::Cypher.links_enabled(false));
        assert!(OutputFormat::Cvme.links_enabled(false));
        assert!(!OutputFormat::Turtle.links_enabled(true));
    }

    #[test]
    fn test_smiles_one_line_per_record() {
        let mut empty = Molecule::new();
        empty.append_property_value("Star", "3");
        let out = run(OutputFormat::Smiles, &[ethanol(), empty, ethanol()]);
        assert_eq!(out, "CCO\n\nCCO\n");
    }

    #[test]
    fn test_turtle_serialized_at_finish() {
        let out = run(OutputFormat::Turtle, &[ethanol(), ethanol()]);
        assert!(out.contains("@prefix schema: <http://schema.org/>"));
        assert!(out.contains("molecule#entity0"));
        assert!(out.contains("molecule#entity1"));
        assert!(out.contains("\"C2H6O\""));
    }

    #[test]
    fn test_nquads_without_prefixes() {
        let out = run(OutputFormat::Nquads, &[ethanol()]);
        assert!(out.contains(
            "<https://example.com/molecule#entity0> <http://schema.org/smiles> \"CCO\" ."
        ));
        assert!(!out.contains("@prefix"));
    }

    #[test]
    fn test_jsonld_document_written_once() {
        let out = run(OutputFormat::Jsonld, &[ethanol(), ethanol()]);
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["@graph"].as_array().unwrap().len(), 4);
        assert_eq!(
            parsed["@graph"][3]["@id"],
            "https://example.com/molecule#entity1"
        );
    }

    #[test]
    fn test_microdata_page_wraps_records() {
        let out = run(OutputFormat::Microdata, &[ethanol()]);
        assert!(out.starts_with("<!DOCTYPE html>\n"));
        assert!(out.contains("itemid='https://example.com/molecule#entity0' id='entity0'>"));
        assert!(out.ends_with("  </body>\n</html>\n"));
    }

    #[test]
    fn test_header_echo_only_for_streaming_formats() {
        let mut opts = options(OutputFormat::Smiles);
        opts.echo_header = true;
        let mut projection = Projection::new(opts, Vec::new()).unwrap();
        projection.header_line("Ethanol").unwrap();
        projection.record(&ethanol()).unwrap();
        assert_eq!(projection.records(), 1);
        let out = String::from_utf8(projection.finish().unwrap()).unwrap();
        assert_eq!(out, "Ethanol\nCCO\n");

        let mut opts = options(OutputFormat::Ntriples);
        opts.echo_header = true;
        let mut projection = Projection::new(opts, Vec::new()).unwrap();
        projection.header_line("Ethanol").unwrap();
        let out = String::from_utf8(projection.finish().unwrap()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_empty_graph_still_serialized() {
        let mut star = Molecule::new();
        star.append_property_value("Star", "3");
        let out = run(OutputFormat::Ntriples, &[star]);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_subject_base_rejected() {
        let mut opts = options(OutputFormat::Turtle);
        opts.subject_base = "not an iri".to_string();
        let err = Projection::new(opts, Vec::new()).err().unwrap();
        assert_eq!(err.exit_code(), 2);
    }
}
