//! # 行分类器
//!
//! 按当前所处的段（molfile 头部 / 属性块）把一行文本归类，
//! 只依据位置与 token 数量的启发式规则，不看上下文。
//!
//! ## 规则（对去除首尾空白后的行）
//! 1. 第 3 个字符起为 `END` → `HeaderEnd`（两个段都检查）
//! 2. 匹配 `M\s+\w+.*`（`M  CHG` 等控制行）→ `Control`
//! 3. 头部：16 个 token → 原子行；6 个 token，或 7 个且第 7 个不以 `V` 开头，
//!    并且第 1 个 token 是整数 → 键行；其余 → `HeaderText`
//! 4. 属性块：去掉全部空白后以 `><` 开头 → 属性标签；
//!    以 `$$$$` 开头 → 记录结束；非空 → 属性值；否则空行
//!
//! ## 依赖关系
//! - 被 `parsers/sdf.rs` 调用
//! - 使用 `regex`

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Result, SdfError};
use crate::models::{Atom, Bond};

static CONTROL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^M\s+\w+").expect("valid control line regex"));

/// 当前所处的段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// molfile 头部（标题、计数行、原子块、键块）
    Header,
    /// `M  END` 之后的属性块
    Properties,
}

/// 行类别
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    HeaderEnd,
    Control,
    AtomLine(Vec<&'a str>),
    BondLine(Vec<&'a str>),
    HeaderText,
    PropertyTag(&'a str),
    RecordTerminator,
    PropertyValue,
    Blank,
}

/// 对已去除首尾空白的行分类
pub fn classify(line: &str, section: Section) -> LineKind<'_> {
    if is_header_end(line) {
        return LineKind::HeaderEnd;
    }
    if CONTROL_RE.is_match(line) {
        return LineKind::Control;
    }

    match section {
        Section::Header => {
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() == 16 {
                LineKind::AtomLine(tokens)
            } else if is_bond_shape(&tokens) {
                LineKind::BondLine(tokens)
            } else {
                LineKind::HeaderText
            }
        }
        Section::Properties => {
            let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
            if compact.starts_with("><") {
                LineKind::PropertyTag(tag_name(line))
            } else if line.starts_with("$$$$") {
                LineKind::RecordTerminator
            } else if !line.is_empty() {
                LineKind::PropertyValue
            } else {
                LineKind::Blank
            }
        }
    }
}

/// 按字符位置检查，`M  END` 之外的行只要第 3 个字符起是 `END` 也会命中
fn is_header_end(line: &str) -> bool {
    line.char_indices()
        .nth(3)
        .is_some_and(|(offset, _)| line[offset..].starts_with("END"))
}

fn is_bond_shape(tokens: &[&str]) -> bool {
    let leading_int = tokens.first().is_some_and(|t| t.parse::<i32>().is_ok());
    match tokens.len() {
        6 => leading_int,
        7 => !tokens[6].starts_with('V') && leading_int,
        _ => false,
    }
}

/// `> <ChEBI ID>` → `ChEBI ID`；缺少 `>` 时取到行尾
fn tag_name(line: &str) -> &str {
    let Some((_, rest)) = line.split_once('<') else {
        return "";
    };
    match rest.find('>') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

// ─────────────────────────────────────────────────────────────
// 原子行 / 键行解码
// ─────────────────────────────────────────────────────────────

/// 原子行：x y z symbol ...
pub fn decode_atom(tokens: &[&str], line_no: usize) -> Result<Atom> {
    let coord = |i: usize, axis: &str| -> Result<f32> {
        tokens[i].parse::<f32>().map_err(|_| SdfError::ParseError {
            line: line_no,
            reason: format!("invalid {axis} coordinate '{}'", tokens[i]),
        })
    };
    Ok(Atom::new(
        tokens[3],
        coord(0, "x")?,
        coord(1, "y")?,
        coord(2, "z")?,
    ))
}

/// 键行：atom1 atom2 type stereo ...
pub fn decode_bond(tokens: &[&str], line_no: usize) -> Result<Bond> {
    let invalid = |field: &str, token: &str| SdfError::ParseError {
        line: line_no,
        reason: format!("invalid bond {field} '{token}'"),
    };
    let atom1 = tokens[0]
        .parse::<i32>()
        .map_err(|_| invalid("atom index", tokens[0]))?;
    let atom2 = tokens[1]
        .parse::<i32>()
        .map_err(|_| invalid("atom index", tokens[1]))?;
    let bond_type = tokens[2]
        .parse::<i8>()
        .map_err(|_| invalid("type", tokens[2]))?;
    let stereo = tokens[3]
        .parse::<i8>()
        .map_err(|_| invalid("stereo", tokens[3]))?;
    Ok(Bond::new(atom1, atom2, bond_type, stereo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BondType;

    const ATOM: &str = "-0.8660    0.2500    0.0000 C   0  0  0  0  0  0  0  0  0  0  0  0";

    #[test]
    fn test_classify_header_lines() {
        assert!(matches!(classify(ATOM, Section::Header), LineKind::AtomLine(t) if t.len() == 16));
        assert!(matches!(
            classify("1  2  1  0  0  0  0", Section::Header),
            LineKind::BondLine(_)
        ));
        assert!(matches!(
            classify("1  2  2  0  0  0", Section::Header),
            LineKind::BondLine(_)
        ));
        // 计数行不是键行
        assert_eq!(
            classify("3  2  0  0  0  0            999 V2000", Section::Header),
            LineKind::HeaderText
        );
        assert_eq!(
            classify("3  2  0  0  0  0 V2000", Section::Header),
            LineKind::HeaderText
        );
        assert_eq!(
            classify("-OEChem-01012100002D", Section::Header),
            LineKind::HeaderText
        );
        assert_eq!(classify("M  END", Section::Header), LineKind::HeaderEnd);
        assert_eq!(classify("M  CHG  1   3  -1", Section::Header), LineKind::Control);
    }

    #[test]
    fn test_classify_property_lines() {
        assert_eq!(
            classify("> <ChEBI ID>", Section::Properties),
            LineKind::PropertyTag("ChEBI ID")
        );
        assert_eq!(
            classify("><SMILES>", Section::Properties),
            LineKind::PropertyTag("SMILES")
        );
        assert_eq!(
            classify(">  <Name> (1)", Section::Properties),
            LineKind::PropertyTag("Name")
        );
        assert_eq!(classify("$$$$", Section::Properties), LineKind::RecordTerminator);
        assert_eq!(classify("CCO", Section::Properties), LineKind::PropertyValue);
        assert_eq!(classify("", Section::Properties), LineKind::Blank);
        // 属性块中的 16 token 行仍然是属性值
        assert_eq!(classify(ATOM, Section::Properties), LineKind::PropertyValue);
    }

    #[test]
    fn test_header_end_is_positional() {
        assert_eq!(classify("ABCEND", Section::Properties), LineKind::HeaderEnd);
        assert_eq!(classify("END", Section::Header), LineKind::HeaderText);
        assert_eq!(classify("AB", Section::Header), LineKind::HeaderText);
    }

    #[test]
    fn test_decode_atom_and_bond() {
        let LineKind::AtomLine(tokens) = classify(ATOM, Section::Header) else {
            panic!("expected atom line");
        };
        let atom = decode_atom(&tokens, 5).unwrap();
        assert_eq!(atom.symbol, "C");
        assert!((atom.x + 0.866).abs() < 1e-6);
        assert!((atom.y - 0.25).abs() < 1e-6);

        let bond = decode_bond(&["1", "12", "2", "3", "0", "0"], 9).unwrap();
        assert_eq!((bond.atom1, bond.atom2), (1, 12));
        assert_eq!(bond.bond_type, BondType::Double);
        assert_eq!(bond.stereo, 3);
    }

    #[test]
    fn test_decode_reports_line_number() {
        let tokens: Vec<&str> = "x 0 0 C 0 0 0 0 0 0 0 0 0 0 0 0".split(' ').collect();
        match decode_atom(&tokens, 42) {
            Err(SdfError::ParseError { line, reason }) => {
                assert_eq!(line, 42);
                assert!(reason.contains("x coordinate"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(decode_bond(&["1", "2", "300", "0", "0", "0"], 1).is_err());
    }
}
