//! # HTML 嵌入式标注投影（RDFa / Microdata）
//!
//! 输出一个 HTML 页面：页首是数据集描述，每条记录一个
//! `MolecularEntity` 的 `<div>`，`url` 属性渲染为 `<a>` 链接，
//! 其余属性渲染为带属性名的 `<div>`。
//!
//! ## 依赖关系
//! - 被 `projectors/mod.rs` 调用
//! - 使用 `projectors/{render,schema,subject}.rs`

use crate::models::Molecule;

use super::jsonld::{CREATOR, DATASET_DESCRIPTION, LICENSE};
use super::render::html_escape;
use super::schema::{schema_entries, MOLECULAR_ENTITY};
use super::subject::{SubjectId, SubjectMinter};

/// 标注语法
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Markup {
    Rdfa,
    Microdata,
}

impl Markup {
    fn property_attr(self, term: &str) -> String {
        match self {
            Markup::Rdfa => format!("property='schema:{term}'"),
            Markup::Microdata => format!("itemprop='{term}'"),
        }
    }

    fn link_attr(self) -> &'static str {
        match self {
            Markup::Rdfa => "rel='schema:url'",
            Markup::Microdata => "itemprop='url'",
        }
    }

    fn open_entity(self, subject: &SubjectId) -> String {
        let id = html_escape(&subject.as_text(), true);
        let mut tag = match self {
            Markup::Rdfa => format!("    <div typeof='schema:MolecularEntity' about='{id}'"),
            Markup::Microdata => {
                format!("    <div itemscope itemtype='{MOLECULAR_ENTITY}' itemid='{id}'")
            }
        };
        if let Some(anchor) = subject.anchor() {
            tag.push_str(&format!(" id='{}'", html_escape(anchor, true)));
        }
        tag.push('>');
        tag
    }
}

/// 页首（含数据集描述）
pub fn render_prelude(markup: Markup, year: i32) -> String {
    let head = [
        "<!DOCTYPE html>",
        "<html lang='en'>",
        "  <head>",
        "    <title>Example Document</title>",
        "  </head>",
    ]
    .join("\n");

    let body = match markup {
        Markup::Rdfa => vec![
            "  <body vocab='http://schema.org/'>".to_string(),
            "    <div typeof='schema:Dataset'>".to_string(),
            "      <div rel='schema:creator'>".to_string(),
            format!("        <div typeof='schema:Organization' about='{CREATOR}'>"),
            "          <div property='schema:name' content='SDFEater'></div>".to_string(),
            "        </div>".to_string(),
            "      </div>".to_string(),
            "      <div property='schema:keywords' content='cheminformatics'></div>".to_string(),
            "      <div property='schema:keywords' content='molecules'></div>".to_string(),
            "      <div property='schema:keywords' content='chemical compounds'></div>".to_string(),
            format!("      <div property='schema:temporal' content='{year}'></div>"),
            "      <div property='schema:name' content='Molecules'></div>".to_string(),
            format!("      <div rel='schema:license' resource='{LICENSE}'></div>"),
            format!("      <div property='schema:description' content='{DATASET_DESCRIPTION}'></div>"),
            format!("      <div rel='schema:about' resource='{CREATOR}'></div>"),
            format!("      <div property='schema:url' content='{CREATOR}'></div>"),
            "    </div>".to_string(),
        ],
        Markup::Microdata => vec![
            "  <body>".to_string(),
            "    <div itemscope itemtype='http://schema.org/Dataset'>".to_string(),
            "      <div itemprop='name' content='Molecules'></div>".to_string(),
            "      <div itemprop='keywords' content='cheminformatics'></div>".to_string(),
            "      <div itemprop='keywords' content='molecules'></div>".to_string(),
            "      <div itemprop='keywords' content='chemical compounds'></div>".to_string(),
            format!("      <div itemprop='temporal' content='{year}'></div>"),
            format!("      <div itemprop='url' content='{CREATOR}'></div>"),
            format!("      <div itemprop='description' content='{DATASET_DESCRIPTION}'></div>"),
            "      <div itemprop='creator' itemscope itemtype='http://schema.org/Organization'>"
                .to_string(),
            "        <div itemprop='name' content='SDFEater'></div>".to_string(),
            "      </div>".to_string(),
            format!("      <div itemprop='license' content='{LICENSE}'></div>"),
            "    </div>".to_string(),
        ],
    };

    format!("{head}\n{}\n", body.join("\n"))
}

/// 一条记录；没有可识别属性时返回 `None`
pub fn render_entity(
    markup: Markup,
    molecule: &Molecule,
    minter: &mut SubjectMinter,
) -> Option<String> {
    let entries = schema_entries(molecule);
    if entries.is_empty() {
        return None;
    }

    let subject = minter.mint(molecule);
    let mut lines = vec![markup.open_entity(&subject)];
    for entry in &entries {
        if entry.is_link() {
            lines.push(format!(
                "      <a href='{}' {}>{}</a>",
                html_escape(&entry.value, true),
                markup.link_attr(),
                html_escape(&entry.value, false)
            ));
        } else {
            lines.push(format!(
                "      <div {}>{}</div>",
                markup.property_attr(entry.term),
                html_escape(&entry.value, false)
            ));
        }
    }
    lines.push("    </div>".to_string());

    let mut out = lines.join("\n");
    out.push('\n');
    Some(out)
}

pub fn render_epilogue() -> &'static str {
    "  </body>\n</html>\n"
}
