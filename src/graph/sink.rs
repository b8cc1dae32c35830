//! # RDF 图接收端
//!
//! 投影器只调用 `add(subject, predicate, object)`，全部记录处理完后
//! 一次性 `serialize` 为目标语法。内存图用 `oxrdf::Graph`，
//! 序列化交给 `oxrdfio`。
//!
//! ## 依赖关系
//! - 被 `projectors/rdf.rs` 和 `projectors/mod.rs` 使用
//! - 使用 `oxrdf` / `oxrdfio` crate

use std::io::Write;

use oxrdf::{Graph, GraphNameRef, NamedNode, Subject, Term, Triple};
use oxrdfio::{RdfFormat, RdfSerializer};

use crate::error::{Result, SdfError};

pub const SCHEMA_NS: &str = "http://schema.org/";
pub const RDF_NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// 支持的 RDF 输出语法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RdfSyntax {
    Turtle,
    NTriples,
    NQuads,
    RdfXml,
}

impl RdfSyntax {
    fn format(self) -> RdfFormat {
        match self {
            RdfSyntax::Turtle => RdfFormat::Turtle,
            RdfSyntax::NTriples => RdfFormat::NTriples,
            RdfSyntax::NQuads => RdfFormat::NQuads,
            RdfSyntax::RdfXml => RdfFormat::RdfXml,
        }
    }

    fn supports_prefixes(self) -> bool {
        matches!(self, RdfSyntax::Turtle | RdfSyntax::RdfXml)
    }
}

impl std::fmt::Display for RdfSyntax {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RdfSyntax::Turtle => write!(f, "Turtle"),
            RdfSyntax::NTriples => write!(f, "N-Triples"),
            RdfSyntax::NQuads => write!(f, "N-Quads"),
            RdfSyntax::RdfXml => write!(f, "RDF/XML"),
        }
    }
}

/// 三元组接收端
pub trait GraphSink {
    fn add(&mut self, subject: Subject, predicate: NamedNode, object: Term);
}

/// 基于 `oxrdf::Graph` 的内存图
#[derive(Debug, Default)]
pub struct RdfGraph {
    graph: Graph,
}

impl RdfGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.graph.len()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.is_empty()
    }

    /// 按给定语法写出整张图
    pub fn serialize<W: Write>(&self, syntax: RdfSyntax, writer: W) -> Result<W> {
        let io_err = |source: std::io::Error| SdfError::GraphSerialize {
            format: syntax.to_string(),
            source,
        };

        let mut serializer = RdfSerializer::from_format(syntax.format());
        if syntax.supports_prefixes() {
            serializer = serializer
                .with_prefix("schema", SCHEMA_NS)
                .and_then(|s| s.with_prefix("rdf", RDF_NS))
                .map_err(|e| SdfError::InvalidIri {
                    iri: SCHEMA_NS.to_string(),
                    reason: e.to_string(),
                })?;
        }

        let mut writer = serializer.for_writer(writer);
        for triple in self.graph.iter() {
            writer
                .serialize_quad(triple.in_graph(GraphNameRef::DefaultGraph))
                .map_err(io_err)?;
        }
        writer.finish().map_err(io_err)
    }
}

impl GraphSink for RdfGraph {
    fn add(&mut self, subject: Subject, predicate: NamedNode, object: Term) {
        self.graph.insert(&Triple::new(subject, predicate, object));
    }
}
