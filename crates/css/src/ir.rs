use crate::selector::{class_selector, CLASS_NAME_RE};
use breeze_core::{Breakpoint, Declaration};
use indexmap::IndexSet;

/// 规则的排版方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStyle {
    /// 每条声明独占一行
    Expanded,
    /// 整条规则写在一行（工具类）
    Compact,
}

/// 一条 CSS 规则：选择器 + 声明块
#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
    pub style: RuleStyle,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
            style: RuleStyle::Expanded,
        }
    }

    pub fn compact(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
            style: RuleStyle::Compact,
        }
    }
}

/// 工具类：类名（未转义）+ 声明
///
/// 同一个工具类会在每个断点下以 `{prefix}:{name}` 的形式重复输出，
/// 声明文本保持完全一致。
#[derive(Debug, Clone, PartialEq)]
pub struct UtilityClass {
    pub name: String,
    pub declarations: Vec<Declaration>,
}

impl UtilityClass {
    pub fn new(name: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            name: name.into(),
            declarations,
        }
    }

    /// 生成规则，`prefix` 为断点前缀（如 "sm"）
    pub fn to_rule(&self, prefix: Option<&str>) -> StyleRule {
        let name = match prefix {
            Some(prefix) => format!("{}:{}", prefix, self.name),
            None => self.name.clone(),
        };
        StyleRule::compact(class_selector(&name), self.declarations.clone())
    }
}

/// 样式表中的顶层块
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Comment(String),
    Rule(StyleRule),
    Media { query: String, rules: Vec<StyleRule> },
}

impl Block {
    /// `@media (min-width: ...)` 块
    pub fn min_width(breakpoint: &Breakpoint, rules: Vec<StyleRule>) -> Self {
        Block::Media {
            query: format!("(min-width: {})", breakpoint.min_width),
            rules,
        }
    }
}

/// 有序的样式表，块的顺序即输出顺序
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Stylesheet {
    pub blocks: Vec<Block>,
}

impl Stylesheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 带标题注释的分区
    pub fn section(title: &str) -> Self {
        let mut sheet = Self::new();
        sheet.comment(title);
        sheet
    }

    pub fn comment(&mut self, text: impl Into<String>) {
        self.blocks.push(Block::Comment(text.into()));
    }

    pub fn rule(&mut self, rule: StyleRule) {
        self.blocks.push(Block::Rule(rule));
    }

    pub fn media(&mut self, query: impl Into<String>, rules: Vec<StyleRule>) {
        self.blocks.push(Block::Media {
            query: query.into(),
            rules,
        });
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// 追加另一个样式表的所有块
    pub fn append(&mut self, other: Stylesheet) {
        self.blocks.extend(other.blocks);
    }

    pub fn rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.blocks.iter().flat_map(|block| {
            let rules: &[StyleRule] = match block {
                Block::Rule(rule) => std::slice::from_ref(rule),
                Block::Media { rules, .. } => rules,
                Block::Comment(_) => &[],
            };
            rules
        })
    }

    /// 所有选择器中出现的类名（去重，保持首次出现的顺序）
    ///
    /// 转义后的响应式类名（如 `sm\:col-6`）与基础类名分别计数。
    pub fn class_names(&self) -> IndexSet<String> {
        self.rules()
            .flat_map(|rule| {
                CLASS_NAME_RE
                    .captures_iter(&rule.selector)
                    .map(|caps| caps[1].to_string())
                    .collect::<Vec<_>>()
            })
            .collect()
    }
}

/// 合并多个样式表
pub fn merge_stylesheets(stylesheets: Vec<Stylesheet>) -> Stylesheet {
    let mut merged = Stylesheet::new();

    for stylesheet in stylesheets {
        merged.append(stylesheet);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utility_to_rule() {
        let class = UtilityClass::new("col-6", vec![Declaration::new("max-width", "50.0000%")]);

        assert_eq!(class.to_rule(None).selector, ".col-6");
        assert_eq!(class.to_rule(Some("sm")).selector, ".sm\\:col-6");
        assert_eq!(class.to_rule(Some("sm")).style, RuleStyle::Compact);
    }

    #[test]
    fn test_class_names() {
        let mut sheet = Stylesheet::section("Components");
        sheet.rule(StyleRule::new(":root", vec![]));
        sheet.rule(StyleRule::new(".card", vec![]));
        sheet.rule(StyleRule::new(".card:hover", vec![]));
        sheet.rule(StyleRule::new(".card + .card", vec![]));
        sheet.media(
            "(min-width: 640px)",
            vec![UtilityClass::new("m-0", vec![]).to_rule(Some("sm"))],
        );

        let names: Vec<String> = sheet.class_names().into_iter().collect();
        assert_eq!(names, vec!["card", "sm\\:m-0"]);
    }

    #[test]
    fn test_merge_stylesheets() {
        let mut first = Stylesheet::new();
        first.rule(StyleRule::new(".a", vec![]));
        let mut second = Stylesheet::new();
        second.rule(StyleRule::new(".b", vec![]));

        let merged = merge_stylesheets(vec![first, second]);
        assert_eq!(merged.blocks.len(), 2);
    }
}
