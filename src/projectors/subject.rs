//! # 记录主体标识
//!
//! 为每条输出记录生成 RDF/HTML 主体：
//! - `iri`：基础 IRI + 从 0 开始的顺序编号
//! - `uuid`：`urn:uuid:<记录 UUID>`
//! - `bnode`：`_:b<顺序编号>`
//!
//! 编号计数器属于一次转换会话，不是全局状态。
//!
//! ## 依赖关系
//! - 被 `projectors/` 下的 schema.org 投影器使用
//! - 使用 `oxrdf` 构造图节点

use clap::ValueEnum;
use oxrdf::{BlankNode, NamedNode, Subject};

use crate::error::{Result, SdfError};
use crate::models::Molecule;

pub const DEFAULT_SUBJECT_BASE: &str = "https://example.com/molecule#entity";

/// 主体类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SubjectMode {
    /// Base IRI followed by a sequential number
    #[default]
    Iri,
    /// urn:uuid: identifier of the record
    Uuid,
    /// Blank node
    Bnode,
}

impl std::fmt::Display for SubjectMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubjectMode::Iri => write!(f, "iri"),
            SubjectMode::Uuid => write!(f, "uuid"),
            SubjectMode::Bnode => write!(f, "bnode"),
        }
    }
}

/// 已分配的主体
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectId {
    /// `anchor` 为 HTML `id` 属性值（基础 IRI 含 `#` 时才有）
    Iri { iri: String, anchor: Option<String> },
    Urn(String),
    Blank(String),
}

impl SubjectId {
    /// 文本形式：IRI、`urn:uuid:…` 或 `_:b…`
    pub fn as_text(&self) -> String {
        match self {
            SubjectId::Iri { iri, .. } => iri.clone(),
            SubjectId::Urn(urn) => urn.clone(),
            SubjectId::Blank(label) => format!("_:{label}"),
        }
    }

    pub fn anchor(&self) -> Option<&str> {
        match self {
            SubjectId::Iri { anchor, .. } => anchor.as_deref(),
            _ => None,
        }
    }

    pub fn to_rdf(&self) -> Subject {
        match self {
            SubjectId::Iri { iri, .. } => NamedNode::new_unchecked(iri.clone()).into(),
            SubjectId::Urn(urn) => NamedNode::new_unchecked(urn.clone()).into(),
            SubjectId::Blank(label) => BlankNode::new_unchecked(label.clone()).into(),
        }
    }
}

/// 主体分配器
#[derive(Debug, Clone)]
pub struct SubjectMinter {
    mode: SubjectMode,
    base: String,
    next_id: u64,
}

impl SubjectMinter {
    /// 校验基础 IRI（拼上编号后必须仍是合法 IRI）
    pub fn new(mode: SubjectMode, base: impl Into<String>) -> Result<Self> {
        let base = base.into();
        if mode == SubjectMode::Iri {
            let probe = format!("{base}0");
            NamedNode::new(probe.as_str()).map_err(|e| SdfError::InvalidIri {
                iri: base.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(SubjectMinter {
            mode,
            base,
            next_id: 0,
        })
    }

    /// 为一条记录分配主体，每条记录只调用一次
    pub fn mint(&mut self, molecule: &Molecule) -> SubjectId {
        match self.mode {
            SubjectMode::Iri => {
                let id = self.take_id();
                let anchor = self
                    .base
                    .rfind('#')
                    .map(|pos| format!("{}{id}", &self.base[pos + 1..]));
                SubjectId::Iri {
                    iri: format!("{}{id}", self.base),
                    anchor,
                }
            }
            SubjectMode::Uuid => SubjectId::Urn(format!("urn:uuid:{}", molecule.uuid())),
            SubjectMode::Bnode => SubjectId::Blank(format!("b{}", self.take_id())),
        }
    }

    fn take_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
