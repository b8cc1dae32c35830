//! # 值渲染工具
//!
//! 各投影器共用的字面量渲染：数字/字符串/URL 判别、单引号转义、
//! HTML 与 JSON 转义，以及兼容 `%.Ng` 的浮点格式化。
//!
//! ## 依赖关系
//! - 被 `projectors/` 下各投影器使用
//! - 使用 `regex`、`serde_json`、`oxrdf`（IRI 校验）

use std::sync::LazyLock;

use oxrdf::NamedNode;
use regex::Regex;

/// 整数或十进制小数，整串匹配
static NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d+(\.\d+)?$").expect("valid number regex"));

/// 可识别为链接的 URL scheme
static URL_SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?i)(https?|ftp|file|jar):").expect("valid scheme regex"));

pub fn is_number(value: &str) -> bool {
    NUMBER_RE.is_match(value)
}

/// 已知 scheme 且是合法 IRI；`CHEBI:12345` 之类的 CURIE 不算
pub fn is_url(value: &str) -> bool {
    URL_SCHEME_RE.is_match(value) && NamedNode::new(value).is_ok()
}

/// 单引号字符串内的转义：`\` 与 `'`
pub fn escape_single_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// 数字原样，其余加单引号（Cypher）
pub fn cypher_value(value: &str) -> String {
    if is_number(value) {
        value.to_string()
    } else {
        format!("'{}'", escape_single_quoted(value))
    }
}

/// 数字原样，URL 用尖括号，其余加单引号（CVME）
pub fn cvme_value(value: &str) -> String {
    if is_number(value) {
        value.to_string()
    } else if is_url(value) {
        format!("<{value}>")
    } else {
        format!("'{}'", escape_single_quoted(value))
    }
}

/// 数字原样，其余输出为 JSON 字符串（不做 HTML 转义）
pub fn json_value(value: &str) -> String {
    if is_number(value) {
        value.to_string()
    } else {
        json_string(value)
    }
}

pub fn json_string(value: &str) -> String {
    // String 的序列化不会失败
    serde_json::to_string(value).unwrap_or_default()
}

/// 转义 `&` `<` `>`；`quote` 为真时再转义 `"` 和 `'`
pub fn html_escape(value: &str, quote: bool) -> String {
    let escaped = value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    if quote {
        escaped.replace('"', "&quot;").replace('\'', "&#x27;")
    } else {
        escaped
    }
}

// ─────────────────────────────────────────────────────────────
// %.Ng 格式化
// ─────────────────────────────────────────────────────────────

/// 按 `%.{precision}g` 的规则格式化浮点数
///
/// 在最短十进制表示上做四舍五入（half-up），保留尾随零；
/// 指数 < -4 或 >= precision 时使用 `d.ddde+XX` 形式。
pub fn format_general(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "NaN".to_string();
    }
    let sign = if value.is_sign_negative() { "-" } else { "" };
    if value.is_infinite() {
        return format!("{sign}Infinity");
    }
    if value == 0.0 {
        return format!("{sign}{}", with_fraction("0", &"0".repeat(precision - 1)));
    }

    // 最短表示，例如 "8.659999966621399e-1"
    let shortest = format!("{:e}", value.abs());
    let (mantissa, exponent) = shortest.split_once('e').unwrap_or((shortest.as_str(), "0"));
    let mut exponent: i32 = exponent.parse().unwrap_or(0);
    let mut digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();

    if digits.len() > precision {
        let round_up = digits[precision] >= 5;
        digits.truncate(precision);
        if round_up && carry(&mut digits) {
            digits.insert(0, 1);
            digits.truncate(precision);
            exponent += 1;
        }
    }
    digits.resize(precision, 0);
    let text: String = digits.iter().map(|d| char::from(b'0' + d)).collect();

    if exponent < -4 || exponent >= precision as i32 {
        let exp_sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{sign}{}e{exp_sign}{:02}",
            with_fraction(&text[..1], &text[1..]),
            exponent.abs()
        )
    } else if exponent >= 0 {
        let split = exponent as usize + 1;
        format!("{sign}{}", with_fraction(&text[..split], &text[split..]))
    } else {
        let zeros = "0".repeat((-exponent - 1) as usize);
        format!("{sign}0.{zeros}{text}")
    }
}

/// 从最低位加一，返回是否溢出到最高位之外
fn carry(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

fn with_fraction(int_part: &str, fraction: &str) -> String {
    if fraction.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{fraction}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_detection() {
        assert!(is_number("152.23340"));
        assert!(is_number("-3"));
        assert!(!is_number("4695-62-9"));
        assert!(!is_number("1."));
        assert!(!is_number("1e5"));
        assert!(!is_number(""));
    }

    #[test]
    fn test_cypher_quoting() {
        assert_eq!(cypher_value("4695-62-9"), "'4695-62-9'");
        assert_eq!(cypher_value("152.23340"), "152.23340");
        assert_eq!(cypher_value("it's"), "'it\\'s'");
        assert_eq!(cypher_value(r"C\C=C"), r"'C\\C=C'");
    }

    #[test]
    fn test_url_detection() {
        assert!(is_url("https://www.ebi.ac.uk/chebi/searchId.do?chebiId=12345"));
        assert!(is_url("ftp://example.org/x"));
        assert!(!is_url("CHEBI:12345"));
        assert!(!is_url("https://exa mple.org"));
        assert_eq!(cvme_value("http://www.hmdb.ca/x"), "<http://www.hmdb.ca/x>");
        assert_eq!(cvme_value("CHEBI:1"), "'CHEBI:1'");
    }

    #[test]
    fn test_json_and_html_escaping() {
        assert_eq!(json_value("12"), "12");
        assert_eq!(json_value("say \"hi\""), r#""say \"hi\"""#);
        assert_eq!(json_value("<b>"), "\"<b>\"");
        assert_eq!(html_escape("a<b>&'\"", false), "a&lt;b&gt;&amp;'\"");
        assert_eq!(html_escape("'\"", true), "&#x27;&quot;");
    }

    #[test]
    fn test_format_general_fixed() {
        assert_eq!(format_general(0.0, 4), "0.000");
        assert_eq!(format_general(-0.0, 4), "-0.000");
        assert_eq!(format_general(1.5, 4), "1.500");
        assert_eq!(format_general(12.5, 4), "12.50");
        assert_eq!(format_general(0.25, 4), "0.2500");
        assert_eq!(format_general(f64::from(-0.866f32), 4), "-0.8660");
        assert_eq!(format_general(1234.0, 4), "1234");
        assert_eq!(format_general(0.00012345, 4), "0.0001235");
    }

    #[test]
    fn test_format_general_rounds_half_up() {
        assert_eq!(format_general(1.0625, 4), "1.063");
        assert_eq!(format_general(9.9995, 4), "10.00");
    }

    #[test]
    fn test_format_general_scientific() {
        assert_eq!(format_general(12345.0, 4), "1.235e+04");
        assert_eq!(format_general(0.00001, 4), "1.000e-05");
        assert_eq!(format_general(-99999.0, 4), "-1.000e+05");
    }
}
