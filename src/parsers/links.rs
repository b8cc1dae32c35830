//! # 数据库链接补全表
//!
//! 把 ChEBI 风格 SDF 中的交叉引用标识符改写为可解析的 URL。
//! 只有 CVME 输出和带 `--urls` 的 Cypher 输出启用。
//!
//! ## 规则
//! - 普通规则：`prefix + value[skip..] + suffix`，IntEnz 的空格替换为 `+`
//! - `PubChem Database Links`：按值的前 3 个字符分派，
//!   `CID` 写入 `PubChem Database Molecule Links`，
//!   `SID` 写入 `PubChem Database Substance Links`，其余丢弃
//!
//! ## 依赖关系
//! - 被 `parsers/sdf.rs` 调用
//! - 纯静态数据，无外部依赖

use std::collections::HashMap;
use std::sync::LazyLock;

/// 单条改写规则
#[derive(Debug, Clone, Copy)]
pub struct LinkRule {
    pub prefix: &'static str,
    pub suffix: &'static str,
    /// 从值开头跳过的字符数（如 `CHEBI:` 前缀）
    pub skip_chars: usize,
    pub spaces_to_plus: bool,
}

impl LinkRule {
    const fn prefix(prefix: &'static str) -> Self {
        LinkRule {
            prefix,
            suffix: "",
            skip_chars: 0,
            spaces_to_plus: false,
        }
    }

    pub fn apply(&self, value: &str) -> String {
        let value: String = value.chars().skip(self.skip_chars).collect();
        let value = if self.spaces_to_plus {
            value.replace(' ', "+")
        } else {
            value
        };
        format!("{}{}{}", self.prefix, value, self.suffix)
    }
}

/// 查表结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Enriched {
    /// 未登记的属性，保留原值
    Unchanged,
    /// 同名属性下写入改写后的 URL
    Link(String),
    /// 写入另一个属性名
    Redirect { property: &'static str, link: String },
    /// 丢弃该值
    Discard,
}

const PUBCHEM: &str = "PubChem Database Links";
pub const PUBCHEM_MOLECULE: &str = "PubChem Database Molecule Links";
pub const PUBCHEM_SUBSTANCE: &str = "PubChem Database Substance Links";

static LINK_RULES: LazyLock<HashMap<&'static str, LinkRule>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    m.insert(
        "Agricola Citation Links",
        LinkRule {
            suffix: "&DB=local&CNT=25&Search_Code=GKEY%5E&STARTDB=AGRIDB",
            ..LinkRule::prefix("https://agricola.nal.usda.gov/cgi-bin/Pwebrecon.cgi?Search_Arg=")
        },
    );
    m.insert(
        "ArrayExpress Database Links",
        LinkRule::prefix("https://www.ebi.ac.uk/arrayexpress/experiments/"),
    );
    m.insert(
        "BioModels Database Links",
        LinkRule::prefix("https://www.ebi.ac.uk/biomodels-main/"),
    );
    m.insert(
        "ChEBI ID",
        LinkRule {
            skip_chars: 6,
            ..LinkRule::prefix("https://www.ebi.ac.uk/chebi/searchId.do?chebiId=")
        },
    );
    m.insert(
        "DrugBank Database Links",
        LinkRule::prefix("https://www.drugbank.ca/drugs/"),
    );
    m.insert(
        "ECMDB Database Links",
        LinkRule::prefix("http://ecmdb.ca/compounds/"),
    );
    m.insert(
        "HMDB Database Links",
        LinkRule::prefix("http://www.hmdb.ca/metabolites/"),
    );
    m.insert(
        "IntAct Database Links",
        LinkRule::prefix("https://www.ebi.ac.uk/intact/interaction/"),
    );
    m.insert(
        "IntEnz Database Links",
        LinkRule {
            spaces_to_plus: true,
            ..LinkRule::prefix("http://www.ebi.ac.uk/intenz/query?q=")
        },
    );
    m.insert(
        "KEGG COMPOUND Database Links",
        LinkRule::prefix("http://www.genome.jp/dbget-bin/www_bget?cpd:"),
    );
    m.insert(
        "KEGG DRUG Database Links",
        LinkRule::prefix("http://www.genome.jp/dbget-bin/www_bget?dr:"),
    );
    m.insert(
        "KEGG GLYCAN Database Links",
        LinkRule::prefix("http://www.genome.jp/dbget-bin/www_bget?gl:"),
    );
    m.insert(
        "KNApSAcK Database Links",
        LinkRule::prefix("http://kanaya.naist.jp/knapsack_jsp/information.jsp?word="),
    );
    m.insert(
        "LIPID MAPS instance Database Links",
        LinkRule::prefix("http://www.lipidmaps.org/data/LMSDRecord.php?LMID="),
    );
    m.insert(
        "MetaCyc Database Links",
        LinkRule::prefix("https://metacyc.org/compound?orgid=META&id="),
    );
    m.insert(
        "Patent Database Links",
        LinkRule::prefix("https://worldwide.espacenet.com/searchResults?query="),
    );
    m.insert(
        "PDBeChem Database Links",
        LinkRule::prefix("http://www.ebi.ac.uk/pdbe-srv/pdbechem/chemicalCompound/show/"),
    );
    m.insert(
        "PubMed Central Citation Links",
        LinkRule {
            suffix: "/",
            ..LinkRule::prefix("https://www.ncbi.nlm.nih.gov/pmc/articles/")
        },
    );
    m.insert(
        "PubMed Citation Links",
        LinkRule::prefix("https://www.ncbi.nlm.nih.gov/pubmed/?term="),
    );
    m.insert(
        "Reactome Database Links",
        LinkRule::prefix("https://reactome.org/content/detail/"),
    );
    m.insert(
        "RESID Database Links",
        LinkRule::prefix("http://pir.georgetown.edu/cgi-bin/resid?id="),
    );
    m.insert(
        "Rhea Database Links",
        LinkRule::prefix("https://www.rhea-db.org/reaction?id="),
    );
    m.insert(
        "SABIO-RK Database Links",
        LinkRule::prefix("http://sabio.h-its.org/reacdetails.jsp?reactid="),
    );
    m.insert(
        "UM-BBD compID Database Links",
        LinkRule::prefix("http://eawag-bbd.ethz.ch/servlets/pageservlet?ptype=c&compID="),
    );
    m.insert(
        "UniProt Database Links",
        LinkRule::prefix("https://www.uniprot.org/uniprot/"),
    );
    m.insert(
        "Wikipedia Database Links",
        LinkRule::prefix("https://en.wikipedia.org/wiki/"),
    );
    m.insert(
        "YMDB Database Links",
        LinkRule::prefix("http://www.ymdb.ca/compounds/"),
    );

    m
});

/// PubChem 值形如 `CID: 5280343` / `SID: 87561345`，编号从第 6 个字符开始
const PUBCHEM_MOLECULE_RULE: LinkRule = LinkRule {
    skip_chars: 5,
    ..LinkRule::prefix("https://pubchem.ncbi.nlm.nih.gov/compound/")
};
const PUBCHEM_SUBSTANCE_RULE: LinkRule = LinkRule {
    skip_chars: 5,
    ..LinkRule::prefix("https://pubchem.ncbi.nlm.nih.gov/substance/")
};

/// 查表改写一个属性值
pub fn enrich(property: &str, value: &str) -> Enriched {
    if property == PUBCHEM {
        let kind: String = value.chars().take(3).collect();
        return match kind.as_str() {
            "CID" => Enriched::Redirect {
                property: PUBCHEM_MOLECULE,
                link: PUBCHEM_MOLECULE_RULE.apply(value),
            },
            "SID" => Enriched::Redirect {
                property: PUBCHEM_SUBSTANCE,
                link: PUBCHEM_SUBSTANCE_RULE.apply(value),
            },
            _ => Enriched::Discard,
        };
    }

    match LINK_RULES.get(property) {
        Some(rule) => Enriched::Link(rule.apply(value)),
        None => Enriched::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chebi_prefix_stripped() {
        assert_eq!(
            enrich("ChEBI ID", "CHEBI:12345"),
            Enriched::Link("https://www.ebi.ac.uk/chebi/searchId.do?chebiId=12345".into())
        );
    }

    #[test]
    fn test_suffix_and_space_rules() {
        assert_eq!(
            enrich("PubMed Central Citation Links", "PMC1234"),
            Enriched::Link("https://www.ncbi.nlm.nih.gov/pmc/articles/PMC1234/".into())
        );
        assert_eq!(
            enrich("IntEnz Database Links", "EC 1.1.1.1"),
            Enriched::Link("http://www.ebi.ac.uk/intenz/query?q=EC+1.1.1.1".into())
        );
        let agricola = enrich("Agricola Citation Links", "IND123");
        assert_eq!(
            agricola,
            Enriched::Link(
                "https://agricola.nal.usda.gov/cgi-bin/Pwebrecon.cgi?Search_Arg=IND123\
                 &DB=local&CNT=25&Search_Code=GKEY%5E&STARTDB=AGRIDB"
                    .into()
            )
        );
    }

    #[test]
    fn test_pubchem_dispatch() {
        assert_eq!(
            enrich("PubChem Database Links", "CID: 5280343"),
            Enriched::Redirect {
                property: PUBCHEM_MOLECULE,
                link: "https://pubchem.ncbi.nlm.nih.gov/compound/5280343".into()
            }
        );
        assert_eq!(
            enrich("PubChem Database Links", "SID: 87561345"),
            Enriched::Redirect {
                property: PUBCHEM_SUBSTANCE,
                link: "https://pubchem.ncbi.nlm.nih.gov/substance/87561345".into()
            }
        );
        assert_eq!(enrich("PubChem Database Links", "AID: 1"), Enriched::Discard);
    }

    #[test]
    fn test_unknown_property_unchanged() {
        assert_eq!(enrich("Star", "3"), Enriched::Unchanged);
        assert_eq!(enrich("ChEBI ID", "CH"), Enriched::Link(
            "https://www.ebi.ac.uk/chebi/searchId.do?chebiId=".into()
        ));
    }
}
