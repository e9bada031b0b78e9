//! 浏览器前缀补全
//!
//! 规则是一张有序表，按顺序逐条作用于整个样式表文本。每条规则在匹配到的声明前面
//! 插入带前缀的副本，原声明保持不变。后面的规则会看到前面规则插入的文本，
//! 所以表的顺序决定输出。

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// 一条前缀规则
///
/// `pattern` 只匹配声明本身，命名分组 `decl` 是完整声明（含分号）。
/// `replacement` 使用 regex 的 `${decl}` 语法引用它。
#[derive(Debug, Clone, Copy)]
pub struct PrefixRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

macro_rules! decl {
    ($body:literal) => {
        concat!(r"(?P<decl>", $body, ")")
    };
}

pub const PREFIX_RULES: &[PrefixRule] = &[
    PrefixRule {
        name: "display: flex",
        pattern: decl!(r"display:\s*flex\s*;"),
        replacement: "display: -webkit-box; display: -ms-flexbox; ${decl}",
    },
    PrefixRule {
        name: "display: inline-flex",
        pattern: decl!(r"display:\s*inline-flex\s*;"),
        replacement: "display: -webkit-inline-box; display: -ms-inline-flexbox; ${decl}",
    },
    PrefixRule {
        name: "user-select",
        pattern: decl!(r"user-select:[^;{}]*;"),
        replacement: "-webkit-${decl} -moz-${decl} -ms-${decl} ${decl}",
    },
    PrefixRule {
        name: "appearance: none",
        pattern: decl!(r"appearance:\s*none\s*;"),
        replacement: "-webkit-appearance: none; -moz-appearance: none; ${decl}",
    },
    PrefixRule {
        name: "backdrop-filter",
        pattern: decl!(r"backdrop-filter:[^;{}]*;"),
        replacement: "-webkit-${decl} ${decl}",
    },
    PrefixRule {
        name: "object-fit",
        pattern: decl!(r"object-fit:[^;{}]*;"),
        replacement: "-o-${decl} ${decl}",
    },
    PrefixRule {
        name: "transition",
        pattern: decl!(r"transition:[^;{}]*;"),
        replacement: "-webkit-${decl} ${decl}",
    },
    PrefixRule {
        name: "box-shadow",
        pattern: decl!(r"box-shadow:[^;{}]*;"),
        replacement: "-webkit-${decl} ${decl}",
    },
    PrefixRule {
        name: "transform",
        pattern: decl!(r"transform:[^;{}]*;"),
        replacement: "-webkit-${decl} -ms-${decl} ${decl}",
    },
];

static COMPILED_RULES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    PREFIX_RULES
        .iter()
        .map(|rule| {
            let regex = Regex::new(rule.pattern).expect("valid prefix pattern");
            (regex, rule.replacement)
        })
        .collect()
});

/// 依次应用所有前缀规则
pub fn autoprefix(css: &str) -> String {
    COMPILED_RULES
        .iter()
        .fold(css.to_string(), |text, (regex, replacement)| {
            let rewritten = regex.replace_all(&text, |caps: &Captures| {
                let start = caps.get(0).map_or(0, |m| m.start());
                if at_declaration_start(&text, start) {
                    let mut out = String::new();
                    caps.expand(replacement, &mut out);
                    out
                } else {
                    caps[0].to_string()
                }
            });
            rewritten.into_owned()
        })
}

/// 声明前允许出现的分隔符：文本开头、空白、`{` 或 `;`
///
/// 分隔符不参与匹配，紧挨着的两条声明（`a:x;a:y;`）都能被补全。
fn at_declaration_start(text: &str, start: usize) -> bool {
    text[..start]
        .chars()
        .next_back()
        .map_or(true, |c| c.is_whitespace() || c == '{' || c == ';')
}
