//! Placeholder syntax normalization

use crate::transform::{Transform, TransformOptions, TransformResult};
use once_cell::sync::Lazy;
use promptx_parser::prompt::{PlaceholderStyle, PromptAst};
use regex::Regex;
use serde_json::json;
use std::collections::BTreeMap;

static DOUBLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());
static TEMPLATE_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").unwrap());
static BRACKET_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([A-Z][A-Z0-9_]*)\]").unwrap());
/// Plain or qualified: `{name}`, `{name:default}`, `{name|default}`. The
/// default is dropped on conversion; only the name survives.
static SINGLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)(?:\s*[:|]\s*[^}\n]+)?\}").unwrap());

/// Fixed pass order. Converting the brace-heavy syntaxes before the plain
/// single brace is what keeps freshly converted tokens from being
/// re-matched by the looser patterns.
const SOURCE_ORDER: &[PlaceholderStyle] = &[
    PlaceholderStyle::DoubleBrace,
    PlaceholderStyle::TemplateLiteral,
    PlaceholderStyle::BracketUpper,
    PlaceholderStyle::SingleBrace,
];

/// Rewrite every placeholder into the target syntax.
///
/// Source styles are converted one pass each in [`SOURCE_ORDER`], skipping
/// the target itself, so a second run to the same target reports zero
/// changes. Converting to `bracket_upper` uppercases the name; no other
/// target touches it.
pub struct NormalizeVariables;

impl Transform for NormalizeVariables {
    fn name(&self) -> &str {
        "normalize_variables"
    }

    fn description(&self) -> &str {
        "Rewrite every placeholder into one target syntax"
    }

    fn apply(&self, source: &str, _ast: &PromptAst, options: &TransformOptions) -> TransformResult {
        let target = options.target_style;
        let mut text = source.to_string();
        let mut converted: Vec<(PlaceholderStyle, usize)> = Vec::new();

        for style in SOURCE_ORDER {
            if *style == target {
                continue;
            }
            let (rewritten, count) = convert_style(&text, *style, target);
            text = rewritten;
            if count > 0 {
                converted.push((*style, count));
            }
        }

        let changes: Vec<String> = converted
            .iter()
            .map(|(style, count)| {
                format!(
                    "converted {} {} placeholder(s) to {}",
                    count,
                    style.name(),
                    target.name()
                )
            })
            .collect();
        let counts: BTreeMap<&str, usize> = converted
            .iter()
            .map(|(style, count)| (style.name(), *count))
            .collect();

        TransformResult {
            original: source.to_string(),
            transformed: text,
            format: "text".to_string(),
            changes,
            metadata: json!({
                "target_style": target,
                "converted": counts,
            }),
        }
    }
}

fn convert_style(
    text: &str,
    style: PlaceholderStyle,
    target: PlaceholderStyle,
) -> (String, usize) {
    match style {
        PlaceholderStyle::DoubleBrace => rewrite_matches(text, &DOUBLE_BRACE, target, false),
        PlaceholderStyle::TemplateLiteral => {
            rewrite_matches(text, &TEMPLATE_LITERAL, target, false)
        }
        PlaceholderStyle::BracketUpper => rewrite_matches(text, &BRACKET_UPPER, target, false),
        PlaceholderStyle::SingleBrace => rewrite_matches(text, &SINGLE_BRACE, target, true),
    }
}

fn rewrite_matches(
    text: &str,
    pattern: &Regex,
    target: PlaceholderStyle,
    exclude_adjacent: bool,
) -> (String, usize) {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    let mut count = 0;
    for caps in pattern.captures_iter(text) {
        let full = caps.get(0).unwrap();
        if exclude_adjacent && part_of_other_syntax(text, full.start(), full.end()) {
            out.push_str(&text[last..full.end()]);
            last = full.end();
            continue;
        }
        out.push_str(&text[last..full.start()]);
        out.push_str(&render(&caps[1], target));
        last = full.end();
        count += 1;
    }
    out.push_str(&text[last..]);
    (out, count)
}

/// A single-brace match preceded by `{` or `$`, or followed by `}`, is the
/// inside of a double-brace or template-literal placeholder, not its own
/// token. Same adjacency rule as the variable extractor.
fn part_of_other_syntax(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).and_then(|i| bytes.get(i));
    if matches!(before, Some(b'{') | Some(b'$')) {
        return true;
    }
    bytes.get(end) == Some(&b'}')
}

fn render(name: &str, target: PlaceholderStyle) -> String {
    match target {
        PlaceholderStyle::DoubleBrace => format!("{{{{{}}}}}", name),
        PlaceholderStyle::SingleBrace => format!("{{{}}}", name),
        PlaceholderStyle::TemplateLiteral => format!("${{{}}}", name),
        PlaceholderStyle::BracketUpper => format!("[{}]", name.to_uppercase()),
    }
}
