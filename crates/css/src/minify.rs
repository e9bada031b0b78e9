use regex::Regex;
use std::sync::LazyLock;

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("valid comment pattern"));

static PUNCT_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*([{}:;,])\s*").expect("valid punctuation pattern"));

static TRAILING_SEMI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";+\}").expect("valid semicolon pattern"));

static SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// 压缩 CSS 文本
///
/// 1. 反复去掉块注释，直到不再出现新的注释
/// 2. 去掉 `{ } : ; ,` 两侧的空白
/// 3. 去掉 `}` 前多余的分号
/// 4. 剩余的连续空白合并为一个空格，并去掉首尾空白
///
/// 对已压缩的文本再次调用不会产生任何变化。
pub fn minify(css: &str) -> String {
    let text = strip_comments(css);
    let text = PUNCT_SPACE_RE.replace_all(&text, "$1");
    let text = TRAILING_SEMI_RE.replace_all(&text, "}");
    let text = SPACE_RE.replace_all(&text, " ");
    text.trim().to_string()
}

/// 去掉一个注释可能拼出新的 `/* ... */`（例如 `//**/* x */`），所以循环到文本稳定
fn strip_comments(css: &str) -> String {
    let mut text = css.to_string();
    while COMMENT_RE.is_match(&text) {
        text = COMMENT_RE.replace_all(&text, "").into_owned();
    }
    text
}
