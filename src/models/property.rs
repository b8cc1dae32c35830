//! # 可识别属性名
//!
//! 把 SDF 属性名（含旧版拼写）归并为一个封闭的枚举，
//! 所有结构化投影器（CVME、RDF、JSON-LD、RDFa、Microdata）共用同一张表。
//! 未登记的属性名只出现在原样输出（Cypher、debug）中。
//!
//! ## 依赖关系
//! - 被 `models/molecule.rs` 和 `projectors/` 使用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 可识别的属性种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    ChebiId,
    DrugbankId,
    Smiles,
    Formula,
    Definition,
    InchiKey,
    Inchi,
    Mass,
    IupacName,
    CasNumber,
    Synonyms,
    Name,
    // 数据库交叉链接
    PubMedLinks,
    KnapsackLinks,
    LipidMapsLinks,
    UniProtLinks,
    RheaLinks,
    KeggCompoundLinks,
    PubChemMoleculeLinks,
    PubChemSubstanceLinks,
    PatentLinks,
}

/// 属性名 -> 种类
static PROPERTY_NAMES: LazyLock<HashMap<&'static str, PropertyKind>> = LazyLock::new(|| {
    use PropertyKind::*;
    HashMap::from([
        ("ChEBI ID", ChebiId),
        ("DATABASE_ID", DrugbankId),
        ("DRUGBANK_ID", DrugbankId),
        ("SMILES", Smiles),
        ("Formulae", Formula),
        ("FORMULA", Formula),
        ("Definition", Definition),
        ("InChIKey", InchiKey),
        ("INCHI_KEY", InchiKey),
        ("InChI", Inchi),
        ("INCHI_IDENTIFIER", Inchi),
        ("Mass", Mass),
        ("MOLECULAR_WEIGHT", Mass),
        ("IUPAC Names", IupacName),
        ("JCHEM_IUPAC", IupacName),
        ("CAS Registry Numbers", CasNumber),
        ("CAS_NUMBER", CasNumber),
        ("Synonyms", Synonyms),
        ("SYNONYMS", Synonyms),
        ("COMMON_NAME", Name),
        ("GENERIC_NAME", Name),
        ("PubMed Citation Links", PubMedLinks),
        ("KNApSAcK Database Links", KnapsackLinks),
        ("LIPID MAPS instance Database Links", LipidMapsLinks),
        ("UniProt Database Links", UniProtLinks),
        ("Rhea Database Links", RheaLinks),
        ("KEGG COMPOUND Database Links", KeggCompoundLinks),
        ("PubChem Database Molecule Links", PubChemMoleculeLinks),
        ("PubChem Database Substance Links", PubChemSubstanceLinks),
        ("Patent Database Links", PatentLinks),
    ])
});

impl PropertyKind {
    /// 精确匹配属性名（区分大小写）
    pub fn from_name(name: &str) -> Option<Self> {
        PROPERTY_NAMES.get(name).copied()
    }

    /// schema.org 词汇中的对应术语；CVME 专用的链接类属性返回 `None`
    pub fn schema_term(self) -> Option<&'static str> {
        use PropertyKind::*;
        match self {
            ChebiId | DrugbankId => Some("url"),
            Smiles => Some("smiles"),
            Formula => Some("molecularFormula"),
            Definition => Some("description"),
            InchiKey => Some("inChIKey"),
            Inchi => Some("inChI"),
            Mass => Some("molecularWeight"),
            IupacName => Some("iupacName"),
            CasNumber => Some("identifier"),
            Synonyms => Some("alternateName"),
            Name => Some("name"),
            _ => None,
        }
    }

    /// schema.org 输出中使用的值：标识符类属性拼成 URL
    pub fn schema_value(self, value: &str) -> String {
        match self {
            PropertyKind::ChebiId => {
                format!("https://www.ebi.ac.uk/chebi/searchId.do?chebiId={value}")
            }
            PropertyKind::DrugbankId => format!("https://go.drugbank.com/drugs/{value}"),
            _ => value.to_string(),
        }
    }
}
