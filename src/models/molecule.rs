//! # 分子记录数据模型
//!
//! 一条 SDF 记录在内存中的累加形态：原子表、键表、有序多值属性表，
//! 以及每次 `reset()` 重新生成的 UUID 标识。
//!
//! ## 依赖关系
//! - 被 `parsers/sdf.rs`（写入）和 `projectors/`（只读）使用
//! - 使用 `models/property.rs` 的 `PropertyKind` 做属性识别
//! - 使用 `uuid` crate

use uuid::Uuid;

use super::property::PropertyKind;

/// 原子（molfile 原子行）
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// 元素符号
    pub symbol: String,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Atom {
    pub fn new(symbol: impl Into<String>, x: f32, y: f32, z: f32) -> Self {
        Atom {
            symbol: symbol.into(),
            x,
            y,
            z,
        }
    }
}

// ─────────────────────────────────────────────────────────────
// 键类型与立体化学
// ─────────────────────────────────────────────────────────────

/// 键类型（molfile 键行第 3 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondType {
    Single,
    Double,
    Triple,
    Aromatic,
    SingleOrDouble,
    SingleOrAromatic,
    DoubleOrAromatic,
    Any,
    /// 不在 1..=8 范围内的代码，原样保留
    Other(i8),
}

impl BondType {
    pub fn from_code(code: i8) -> Self {
        match code {
            1 => BondType::Single,
            2 => BondType::Double,
            3 => BondType::Triple,
            4 => BondType::Aromatic,
            5 => BondType::SingleOrDouble,
            6 => BondType::SingleOrAromatic,
            7 => BondType::DoubleOrAromatic,
            8 => BondType::Any,
            other => BondType::Other(other),
        }
    }

    pub fn code(self) -> i8 {
        match self {
            BondType::Single => 1,
            BondType::Double => 2,
            BondType::Triple => 3,
            BondType::Aromatic => 4,
            BondType::SingleOrDouble => 5,
            BondType::SingleOrAromatic => 6,
            BondType::DoubleOrAromatic => 7,
            BondType::Any => 8,
            BondType::Other(code) => code,
        }
    }

    /// 可读名称；未知代码返回 `None`（输出时省略）
    pub fn label(self) -> Option<&'static str> {
        match self {
            BondType::Single => Some("single"),
            BondType::Double => Some("double"),
            BondType::Triple => Some("triple"),
            BondType::Aromatic => Some("aromatic"),
            BondType::SingleOrDouble => Some("single or double"),
            BondType::SingleOrAromatic => Some("single or aromatic"),
            BondType::DoubleOrAromatic => Some("double or aromatic"),
            BondType::Any => Some("any"),
            BondType::Other(_) => None,
        }
    }
}

/// 立体化学标记，含义取决于键类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BondStereo {
    /// 单键 0
    NotStereo,
    /// 单键 1
    Up,
    /// 单键 4
    Either,
    /// 单键 6
    Down,
    /// 双键 0
    NotDetermined,
    /// 双键 3
    CisOrTrans,
    /// 其余组合
    Unsupported,
}

impl BondStereo {
    pub fn interpret(bond_type: BondType, code: i8) -> Self {
        match (bond_type, code) {
            (BondType::Single, 0) => BondStereo::NotStereo,
            (BondType::Single, 1) => BondStereo::Up,
            (BondType::Single, 4) => BondStereo::Either,
            (BondType::Single, 6) => BondStereo::Down,
            (BondType::Double, 0) => BondStereo::NotDetermined,
            (BondType::Double, 3) => BondStereo::CisOrTrans,
            _ => BondStereo::Unsupported,
        }
    }
}

/// 键（molfile 键行）
///
/// 原子序号从 1 开始，按输入原样保存；越界序号是"悬空引用"，
/// 由投影器自行决定如何呈现。
#[derive(Debug, Clone, PartialEq)]
pub struct Bond {
    pub atom1: i32,
    pub atom2: i32,
    pub bond_type: BondType,
    /// 原始立体化学代码
    pub stereo: i8,
}

impl Bond {
    pub fn new(atom1: i32, atom2: i32, bond_type: i8, stereo: i8) -> Self {
        Bond {
            atom1,
            atom2,
            bond_type: BondType::from_code(bond_type),
            stereo,
        }
    }

    pub fn stereo(&self) -> BondStereo {
        BondStereo::interpret(self.bond_type, self.stereo)
    }
}

// ─────────────────────────────────────────────────────────────
// 分子记录
// ─────────────────────────────────────────────────────────────

/// 正在累加或已完成的一条记录
#[derive(Debug, Clone)]
pub struct Molecule {
    title: Option<String>,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    /// 按首次出现顺序排列的 (属性名, 值列表)
    properties: Vec<(String, Vec<String>)>,
    uuid: Uuid,
}

impl Default for Molecule {
    fn default() -> Self {
        Self::new()
    }
}

impl Molecule {
    pub fn new() -> Self {
        Molecule {
            title: None,
            atoms: Vec::new(),
            bonds: Vec::new(),
            properties: Vec::new(),
            uuid: Uuid::new_v4(),
        }
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom);
    }

    pub fn add_bond(&mut self, bond: Bond) {
        self.bonds.push(bond);
    }

    /// 记录首个头部文本行作为标题，之后的调用被忽略
    pub fn set_title(&mut self, title: &str) {
        if self.title.is_none() {
            self.title = Some(title.to_string());
        }
    }

    /// 显式（重新）创建空值列表；已有的值会被清空
    pub fn set_property(&mut self, name: &str) {
        match self.position(name) {
            Some(i) => self.properties[i].1.clear(),
            None => self.properties.push((name.to_string(), Vec::new())),
        }
    }

    /// 整体替换某属性的值列表，属性不存在时创建
    pub fn set_property_values(&mut self, name: &str, values: Vec<String>) {
        match self.position(name) {
            Some(i) => self.properties[i].1 = values,
            None => self.properties.push((name.to_string(), values)),
        }
    }

    /// 追加一个值，属性不存在时自动创建
    pub fn append_property_value(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.position(name) {
            Some(i) => self.properties[i].1.push(value),
            None => self.properties.push((name.to_string(), vec![value])),
        }
    }

    /// 清空全部内容并生成新的 UUID
    pub fn reset(&mut self) {
        self.title = None;
        self.atoms.clear();
        self.bonds.clear();
        self.properties.clear();
        self.uuid = Uuid::new_v4();
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.properties.iter().position(|(key, _)| key == name)
    }

    // ─────────────────────────────────────────────────────────
    // 只读访问
    // ─────────────────────────────────────────────────────────

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// 按 1 起始的序号取原子；越界（悬空引用）返回 `None`
    pub fn atom(&self, index: i32) -> Option<&Atom> {
        let index = usize::try_from(index).ok()?.checked_sub(1)?;
        self.atoms.get(index)
    }

    /// 引用了不存在原子的键数量
    pub fn dangling_bonds(&self) -> usize {
        self.bonds
            .iter()
            .filter(|b| self.atom(b.atom1).is_none() || self.atom(b.atom2).is_none())
            .count()
    }

    /// 按插入顺序遍历非空属性
    pub fn properties(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.properties
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// 非空属性数量
    pub fn property_count(&self) -> usize {
        self.properties().count()
    }

    pub fn values(&self, name: &str) -> Option<&[String]> {
        self.position(name)
            .map(|i| self.properties[i].1.as_slice())
            .filter(|values| !values.is_empty())
    }

    /// 第一个属于 `kind` 的属性的首个值
    pub fn first_of(&self, kind: PropertyKind) -> Option<&str> {
        self.properties()
            .find(|(name, _)| PropertyKind::from_name(name) == Some(kind))
            .and_then(|(_, values)| values.first())
            .map(String::as_str)
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    /// 用于 Cypher 节点名的 UUID（`-` 替换为 `_`）
    pub fn node_suffix(&self) -> String {
        self.uuid.to_string().replace('-', "_")
    }
}
