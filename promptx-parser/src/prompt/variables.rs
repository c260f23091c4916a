//! Template variable extraction
//!
//! Recognizes the four placeholder syntaxes prompts actually use:
//! `{{name}}`, `{name}`, `${name}`, and `[NAME]`. Occurrences of the same
//! name in the same syntax fold into one variable with an occurrence count;
//! the same name in two syntaxes stays two variables, since the prompt
//! author is then mixing conventions and that is worth surfacing.
//!
//! Type and requiredness are inferred from the variable name and a small
//! character window around each occurrence, in English and Turkish. Both
//! inferences are heuristic and default to `string` and required.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

static DOUBLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").unwrap());
static TEMPLATE_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}").unwrap());
static BRACKET_UPPER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([A-Z][A-Z0-9_]*)\]").unwrap());
static SINGLE_BRACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap());
static SINGLE_BRACE_QUALIFIED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{([A-Za-z_][A-Za-z0-9_]*)\s*[:|]\s*([^}\n]+)\}").unwrap());

/// Marks an occurrence as optional when found within [`REQUIRED_RADIUS`]
/// characters of it.
static OPTIONAL_MARKERS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)optional|if (?:provided|available|given)|opsiyonel|isteğe bağlı|zorunlu değil|varsa")
        .unwrap()
});

static NUMBER_CONTEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)number of|count of|how many|kaç|sayısı|adet").unwrap());
static LIST_CONTEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)list of|comma[- ]separated|listesi|virgülle").unwrap());
static BOOLEAN_CONTEXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)true or false|yes or no|evet (?:ya da|veya) hayır|doğru (?:ya da|veya) yanlış")
        .unwrap()
});
static OBJECT_CONTEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)json object|key[- ]value|nesnesi").unwrap());

const NUMBER_NAMES: &[&str] = &[
    "count", "number", "num", "age", "total", "amount", "limit", "quantity", "qty", "max", "min",
    "size", "year",
];
const LIST_NAMES: &[&str] = &["list", "items", "tags", "options", "values", "array", "ids"];
const BOOLEAN_NAMES: &[&str] = &["flag", "enabled", "active", "verbose"];
const BOOLEAN_PREFIXES: &[&str] = &["is_", "has_", "can_", "should_", "will_"];
const OBJECT_NAMES: &[&str] = &[
    "data", "config", "settings", "payload", "json", "metadata", "profile", "params",
];

/// Character radius searched for type clues around an occurrence.
const TYPE_RADIUS: usize = 60;
/// Character radius searched for optionality markers.
const REQUIRED_RADIUS: usize = 80;
/// Character radius kept as the context snippet.
const CONTEXT_RADIUS: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaceholderStyle {
    DoubleBrace,
    SingleBrace,
    TemplateLiteral,
    BracketUpper,
}

impl PlaceholderStyle {
    pub fn name(&self) -> &'static str {
        match self {
            PlaceholderStyle::DoubleBrace => "double_brace",
            PlaceholderStyle::SingleBrace => "single_brace",
            PlaceholderStyle::TemplateLiteral => "template_literal",
            PlaceholderStyle::BracketUpper => "bracket_upper",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "double_brace" => Some(PlaceholderStyle::DoubleBrace),
            "single_brace" => Some(PlaceholderStyle::SingleBrace),
            "template_literal" => Some(PlaceholderStyle::TemplateLiteral),
            "bracket_upper" => Some(PlaceholderStyle::BracketUpper),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VarType {
    String,
    Number,
    Boolean,
    List,
    Object,
}

impl VarType {
    pub fn name(&self) -> &'static str {
        match self {
            VarType::String => "string",
            VarType::Number => "number",
            VarType::Boolean => "boolean",
            VarType::List => "list",
            VarType::Object => "object",
        }
    }
}

/// One template variable after folding its occurrences.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractedVariable {
    pub name: String,
    pub style: PlaceholderStyle,
    /// The first occurrence as written, braces and all.
    pub raw: String,
    pub var_type: VarType,
    pub required: bool,
    pub default_value: Option<String>,
    pub occurrences: usize,
    /// Byte offset of each occurrence start, ascending.
    pub positions: Vec<usize>,
    /// Snippet around the first occurrence.
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableSummary {
    pub total_occurrences: usize,
    pub unique_count: usize,
    /// Unique variables per placeholder style name.
    pub by_style: BTreeMap<String, usize>,
    /// Unique variables per inferred type name.
    pub by_type: BTreeMap<String, usize>,
    /// More than one placeholder syntax in the same document.
    pub mixed_styles: bool,
    pub required_count: usize,
    pub optional_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableExtraction {
    /// First-seen textual order.
    pub variables: Vec<ExtractedVariable>,
    pub summary: VariableSummary,
}

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Restrict extraction to one placeholder syntax.
    pub style: Option<PlaceholderStyle>,
    pub infer_types: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            style: None,
            infer_types: true,
        }
    }
}

struct Occurrence {
    name: String,
    style: PlaceholderStyle,
    start: usize,
    end: usize,
    default_value: Option<String>,
}

/// Extract every template variable from `text`.
///
/// Pure and deterministic: output order is first occurrence order, and the
/// summary is derived entirely from the variable list.
pub fn extract_variables(text: &str, options: &ExtractOptions) -> VariableExtraction {
    let occurrences = collect_occurrences(text, options.style);

    let mut variables: Vec<ExtractedVariable> = Vec::new();
    let mut index: HashMap<(String, PlaceholderStyle), usize> = HashMap::new();
    for occ in occurrences {
        let optional_nearby =
            OPTIONAL_MARKERS.is_match(window(text, occ.start, occ.end, REQUIRED_RADIUS));
        match index.get(&(occ.name.clone(), occ.style)) {
            Some(&slot) => {
                let var = &mut variables[slot];
                var.occurrences += 1;
                var.positions.push(occ.start);
                if optional_nearby {
                    var.required = false;
                }
                if var.default_value.is_none() && occ.default_value.is_some() {
                    var.default_value = occ.default_value;
                    var.required = false;
                }
            }
            None => {
                let var_type = if options.infer_types {
                    infer_type(&occ.name, window(text, occ.start, occ.end, TYPE_RADIUS))
                } else {
                    VarType::String
                };
                let has_default = occ.default_value.is_some();
                let variable = ExtractedVariable {
                    context: window(text, occ.start, occ.end, CONTEXT_RADIUS)
                        .trim()
                        .to_string(),
                    raw: text[occ.start..occ.end].to_string(),
                    var_type,
                    required: !has_default && !optional_nearby,
                    occurrences: 1,
                    positions: vec![occ.start],
                    default_value: occ.default_value,
                    name: occ.name.clone(),
                    style: occ.style,
                };
                index.insert((occ.name, occ.style), variables.len());
                variables.push(variable);
            }
        }
    }

    let summary = summarize(&variables);
    VariableExtraction { variables, summary }
}

fn collect_occurrences(text: &str, filter: Option<PlaceholderStyle>) -> Vec<Occurrence> {
    let wanted = |style: PlaceholderStyle| filter.is_none() || filter == Some(style);
    let mut occurrences = Vec::new();

    if wanted(PlaceholderStyle::DoubleBrace) {
        for caps in DOUBLE_BRACE.captures_iter(text) {
            let full = caps.get(0).unwrap();
            occurrences.push(Occurrence {
                name: caps[1].to_string(),
                style: PlaceholderStyle::DoubleBrace,
                start: full.start(),
                end: full.end(),
                default_value: None,
            });
        }
    }
    if wanted(PlaceholderStyle::TemplateLiteral) {
        for caps in TEMPLATE_LITERAL.captures_iter(text) {
            let full = caps.get(0).unwrap();
            occurrences.push(Occurrence {
                name: caps[1].to_string(),
                style: PlaceholderStyle::TemplateLiteral,
                start: full.start(),
                end: full.end(),
                default_value: None,
            });
        }
    }
    if wanted(PlaceholderStyle::BracketUpper) {
        for caps in BRACKET_UPPER.captures_iter(text) {
            let full = caps.get(0).unwrap();
            occurrences.push(Occurrence {
                name: caps[1].to_string(),
                style: PlaceholderStyle::BracketUpper,
                start: full.start(),
                end: full.end(),
                default_value: None,
            });
        }
    }
    if wanted(PlaceholderStyle::SingleBrace) {
        for caps in SINGLE_BRACE.captures_iter(text) {
            let full = caps.get(0).unwrap();
            if part_of_other_syntax(text, full.start(), full.end()) {
                continue;
            }
            occurrences.push(Occurrence {
                name: caps[1].to_string(),
                style: PlaceholderStyle::SingleBrace,
                start: full.start(),
                end: full.end(),
                default_value: None,
            });
        }
        for caps in SINGLE_BRACE_QUALIFIED.captures_iter(text) {
            let full = caps.get(0).unwrap();
            if part_of_other_syntax(text, full.start(), full.end()) {
                continue;
            }
            occurrences.push(Occurrence {
                name: caps[1].to_string(),
                style: PlaceholderStyle::SingleBrace,
                start: full.start(),
                end: full.end(),
                default_value: Some(caps[2].trim().to_string()),
            });
        }
    }

    occurrences.sort_by_key(|occ| occ.start);
    occurrences
}

/// A single-brace match preceded by `{` or `$`, or followed by `}`, is the
/// inside of a double-brace or template-literal placeholder, not its own
/// variable.
fn part_of_other_syntax(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).and_then(|i| bytes.get(i));
    if matches!(before, Some(b'{') | Some(b'$')) {
        return true;
    }
    bytes.get(end) == Some(&b'}')
}

/// Slice `radius` characters of context on both sides of a span. Walks char
/// boundaries, so multibyte neighbors cannot split.
fn window(text: &str, span_start: usize, span_end: usize, radius: usize) -> &str {
    let mut begin = span_start;
    for _ in 0..radius {
        match text[..begin].chars().next_back() {
            Some(ch) => begin -= ch.len_utf8(),
            None => break,
        }
    }
    let mut finish = span_end;
    for _ in 0..radius {
        match text[finish..].chars().next() {
            Some(ch) => finish += ch.len_utf8(),
            None => break,
        }
    }
    &text[begin..finish]
}

fn name_matches(lower: &str, keys: &[&str]) -> bool {
    keys.iter().any(|key| {
        lower == *key
            || lower.ends_with(&format!("_{key}"))
            || lower.starts_with(&format!("{key}_"))
    })
}

fn infer_type(name: &str, context: &str) -> VarType {
    let lower = name.to_ascii_lowercase();
    if name_matches(&lower, NUMBER_NAMES) || NUMBER_CONTEXT.is_match(context) {
        return VarType::Number;
    }
    if name_matches(&lower, LIST_NAMES) || LIST_CONTEXT.is_match(context) {
        return VarType::List;
    }
    if BOOLEAN_PREFIXES.iter().any(|p| lower.starts_with(p))
        || name_matches(&lower, BOOLEAN_NAMES)
        || BOOLEAN_CONTEXT.is_match(context)
    {
        return VarType::Boolean;
    }
    if name_matches(&lower, OBJECT_NAMES) || OBJECT_CONTEXT.is_match(context) {
        return VarType::Object;
    }
    VarType::String
}

fn summarize(variables: &[ExtractedVariable]) -> VariableSummary {
    let mut by_style: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_type: BTreeMap<String, usize> = BTreeMap::new();
    let mut required_count = 0;
    let mut optional_count = 0;
    let mut total_occurrences = 0;
    for var in variables {
        *by_style.entry(var.style.name().to_string()).or_insert(0) += 1;
        *by_type.entry(var.var_type.name().to_string()).or_insert(0) += 1;
        if var.required {
            required_count += 1;
        } else {
            optional_count += 1;
        }
        total_occurrences += var.occurrences;
    }
    VariableSummary {
        total_occurrences,
        unique_count: variables.len(),
        mixed_styles: by_style.len() > 1,
        by_style,
        by_type,
        required_count,
        optional_count,
    }
}
