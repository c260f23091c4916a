//! Declarative pattern tables for the eight node categories
//!
//! Grammar is data, not code: each category is a constant, ordered list of
//! surface patterns. Every pattern carries the style tag that names the
//! convention it recognizes and a hand-tuned confidence.
//!
//! Order matters: patterns are tried in declaration order and the first
//! match wins, so more specific or more reliable patterns must precede more
//! general ones within each table.
//!
//! Patterns are anchored at the scan position by the combinator layer, so
//! none of them carries `^`. Sentence-shaped patterns terminate on
//! `[.!?;\n]` or end of input; line-shaped patterns (`line_start: true`)
//! only apply at a line boundary, the replacement for the multiline `^`
//! these conventions would otherwise need.

/// One concrete surface pattern inside a category grammar.
#[derive(Debug)]
pub struct PatternSpec {
    /// Names the surface convention this pattern recognizes.
    pub style: &'static str,
    /// Hand-assigned constant, fixed per pattern.
    pub confidence: f64,
    /// Pattern only applies at the start of a line.
    pub line_start: bool,
    pub pattern: &'static str,
}

const fn spec(
    style: &'static str,
    confidence: f64,
    line_start: bool,
    pattern: &'static str,
) -> PatternSpec {
    PatternSpec {
        style,
        confidence,
        line_start,
        pattern,
    }
}

/// Role definitions: "you are a/an X", "act as X", "Role: X", and the
/// Turkish "sen bir X'sin" / "görevin ..." forms.
pub const ROLE_PATTERNS: &[PatternSpec] = &[
    spec(
        "you_are_en",
        0.9,
        false,
        r"(?i)you are (?:an? |the )([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "sen_bir_tr",
        0.85,
        false,
        r"(?i)sen bir ([^.!?;\n]+?)(?:'?s[ıiuü]n)?[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "act_as_en",
        0.85,
        false,
        r"(?i)act as (?:an? |the )?([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "role_label",
        0.85,
        true,
        r"(?i)(?:role|persona|rolün|rol|görevin|görev)[ \t]*:[ \t]*([^\r\n]+)",
    ),
    spec(
        "gorev_tr",
        0.7,
        false,
        r"(?i)(?:rolün|görevin)[ \t]*[:,]?[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    // Capital start keeps this from firing on "you are going to ..." prose.
    spec(
        "you_are_plain",
        0.6,
        false,
        r"(?i:you are )([A-ZÇĞİÖŞÜ][^.!?;,\n]*?)[ \t]*(?:[.!?;,\n]|$)",
    ),
];

/// Section headers: Markdown `#` headings (level-carrying), whole-line bold
/// labels, and short ALL-CAPS label lines.
pub const SECTION_PATTERNS: &[PatternSpec] = &[
    spec("markdown", 0.95, true, r"(#{1,6})[ \t]*([^\r\n]+)"),
    spec(
        "bold_label",
        0.8,
        true,
        r"\*\*([^*\r\n]{2,60})\*\*[ \t]*:?[ \t]*\r?(?:\n|$)",
    ),
    // At most four words, so all-caps guardrail sentences stay out.
    spec(
        "caps_label",
        0.7,
        true,
        r"([A-ZÇĞİÖŞÜ][A-ZÇĞİÖŞÜ0-9_/&-]+(?:[ ][A-ZÇĞİÖŞÜ0-9_/&-]+){0,3}):?[ \t]*\r?(?:\n|$)",
    ),
];

/// Constraints: negative imperatives first (English then Turkish), positive
/// obligation phrasing last.
pub const CONSTRAINT_PATTERNS: &[PatternSpec] = &[
    spec(
        "negative_en",
        0.85,
        false,
        r"(?i)(?:do not|don'?t|never|must not|shall not|should not|avoid|refrain from)[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "asla_tr",
        0.85,
        false,
        r"(?i)asla[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "yasak_tr",
        0.8,
        false,
        r"(?i)([^.!?;\n]{3,}?)[ \t]+yasak(?:tır)?[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "sakin_tr",
        0.75,
        false,
        r"(?i)(?:sakın|kesinlikle)[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    // Turkish prohibitive verb-final sentences: "... paylaşma." etc.
    spec(
        "negative_tr",
        0.7,
        false,
        r"(?i)([^.!?;\n]{3,}?)(?:yapma|kullanma|paylaşma|verme|söyleme)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "positive_en",
        0.7,
        false,
        r"(?i)(?:you must|must|always|ensure that|ensure|make sure)[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "positive_tr",
        0.65,
        false,
        r"(?i)(?:her zaman|mutlaka|yalnızca|sadece)[ \t]+([^.!?;\n]+?)[ \t]*(?:[.!?;\n]|$)",
    ),
];

/// Output-format directives: explicit labels, "respond in X" phrasing in
/// both languages, and a generic `Format:` line as a weak fallback.
pub const OUTPUT_FORMAT_PATTERNS: &[PatternSpec] = &[
    spec(
        "format_label_en",
        0.9,
        false,
        r"(?i)(?:output|response|answer)[ \t]+format[ \t]*:?[ \t]*([^\n]*?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "format_label_tr",
        0.9,
        false,
        r"(?i)çıktı[ \t]+(?:formatı|biçimi)[ \t]*:?[ \t]*([^\n]*?)[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "respond_in_en",
        0.9,
        false,
        r"(?i)(?:you (?:must|should|will|shall)[ \t]+)?(?:respond|answer|reply|return|output|write)[ \t]+(?:only[ \t]+|strictly[ \t]+|exclusively[ \t]+)?(?:in|as|with|using)[ \t]+(?:an?[ \t]+)?((?:valid[ \t]+|strict[ \t]+)?(?:json|xml|yaml|markdown|csv|html|plain[ \t]?text|bullet(?:ed)?[ \t]+list|numbered[ \t]+list|table|list))\b[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "respond_in_tr",
        0.85,
        false,
        r"(?i)(json|xml|yaml|markdown|csv|html|tablo|liste)[ \t]+(?:formatında|biçiminde|olarak)[ \t]+(?:yanıtla|cevapla|cevap[ \t]+ver|yaz|döndür|oluştur)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "use_format_en",
        0.85,
        false,
        r"(?i)use[ \t]+(?:the[ \t]+)?(json|xml|yaml|markdown|csv)[ \t]+format\b[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "format_infix_tr",
        0.75,
        false,
        r"(?i)(?:şu|bu|aşağıdaki)[ \t]+formatta[ \t]+(?:yanıtla|cevapla|yaz|döndür)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "format_label_generic",
        0.6,
        true,
        r"(?i)format[ \t]*:[ \t]*([^\r\n]+)",
    ),
];

/// Input half of an input/output example pair. Composed with
/// [`EXAMPLE_OUTPUT_LINE`] in the grammar layer; kept here so the whole
/// surface vocabulary lives in one file.
pub const EXAMPLE_INPUT_LINE: &str = r"(?i)(?:input|girdi)[ \t]*:[ \t]*([^\n]*)";

/// Optional output half of an input/output example pair.
pub const EXAMPLE_OUTPUT_LINE: &str = r"(?i)\n[ \t]*(?:output|çıktı)[ \t]*:[ \t]*([^\n]*)";

/// Example blocks: fenced code blocks and labeled example lines. The
/// input/output pair form is composed separately from the two line patterns
/// above and tried before these.
pub const EXAMPLE_PATTERNS: &[PatternSpec] = &[
    spec(
        "fenced",
        0.75,
        false,
        r"```[A-Za-z0-9_+-]*\n(?s:.*?)\n?```",
    ),
    spec(
        "label_en",
        0.8,
        false,
        r"(?i)(?:for[ \t]+example|for[ \t]+instance|examples?|e\.g\.)[ \t]*[:,][ \t]*([^\r\n]+)",
    ),
    spec(
        "label_tr",
        0.8,
        false,
        r"(?i)örnek(?:ler)?[ \t]*[:,][ \t]*([^\r\n]+)",
    ),
    spec("ornegin_tr", 0.7, false, r"(?i)örneğin[ \t]*[:,]?[ \t]+([^\r\n]+)"),
];

/// Chain-of-thought markers: step-by-step cues in both languages.
pub const CHAIN_OF_THOUGHT_PATTERNS: &[PatternSpec] = &[
    spec(
        "step_by_step_en",
        0.9,
        false,
        r"(?i)(?:always[ \t]+|please[ \t]+|now[ \t]+)?(?:let'?s[ \t]+)?think(?:ing)?[ \t]+(?:about[ \t]+(?:it|this)[ \t]+)?step[ \t-]by[ \t-]step[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "adim_adim_tr",
        0.9,
        false,
        r"(?i)adım[ \t]+adım[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "cot_label",
        0.85,
        false,
        r"(?i)chain[ \t-]of[ \t-]thought[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "dusunce_tr",
        0.8,
        false,
        r"(?i)düşünce[ \t]+zinciri[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "reasoning_en",
        0.75,
        false,
        r"(?i)(?:show|explain)[ \t]+your[ \t]+(?:work|reasoning|thought[ \t]+process)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "step_by_step_solo",
        0.7,
        false,
        r"(?i)step[ \t-]by[ \t-]step[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
];

/// Guardrails: prompt-secrecy directives, refusal rules, and
/// injection-rejection phrasing. Tried before constraints in the master
/// grammar so safety verbs win over the generic negative imperative.
pub const GUARDRAIL_PATTERNS: &[PatternSpec] = &[
    spec(
        "no_reveal_en",
        0.95,
        false,
        r"(?i)(?:do[ \t]+not|don'?t|never)[ \t]+(?:reveal|share|disclose|expose|leak|repeat|discuss)[^.!?;\n]*(?:system[ \t]+prompt|instructions?|prompt|rules|configuration|internal|confidential|credentials?|secrets?|password|api[ \t]+key)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "no_reveal_tr",
        0.9,
        false,
        r"(?i)(?:asla[ \t]+)?(?:sistem[ \t]+istemini?|talimatları(?:nı)?|gizli[ \t]+bilgi(?:leri)?)[^.!?;\n]*(?:paylaşma|açıklama|ifşa[ \t]+etme|söyleme|verme)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "refusal_en",
        0.85,
        false,
        r"(?i)(?:refuse|decline|do[ \t]+not[ \t]+(?:answer|respond[ \t]+to)|must[ \t]+not[ \t]+(?:answer|respond[ \t]+to))[^.!?;\n]*(?:harmful|illegal|unsafe|dangerous|unethical|malicious|inappropriate)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "refusal_tr",
        0.85,
        false,
        r"(?i)zararlı[^.!?;\n]*(?:içerik|istek|talep)[^.!?;\n]*(?:reddet|üretme|yanıtlama)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "safety_label",
        0.85,
        true,
        r"(?i)(?:guardrails?|safety|security|güvenlik)[ \t]*:[ \t]*([^\r\n]+)",
    ),
    spec(
        "anti_injection",
        0.8,
        false,
        r"(?i)(?:ignore|reject|disregard)[^.!?;\n]*(?:attempts?|requests?|instructions?)[^.!?;\n]*(?:override|ignore|bypass|jailbreak|change[ \t]+your)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
    spec(
        "refusal_conditional",
        0.8,
        false,
        r"(?i)(?:if|when)[^.!?;\n]*(?:harmful|illegal|unsafe|dangerous|zararlı|yasa[ \t]?dışı)[^.!?;\n]*(?:refuse|decline|reddet|yanıtlama)[^.!?;\n]*[ \t]*(?:[.!?;\n]|$)",
    ),
];

/// Template variables, the four placeholder syntaxes. Double-brace and
/// template-literal must precede single-brace: the scanner jumps past a
/// match, which is what keeps `{{x}}` from also being counted as `{x}`.
pub const VARIABLE_PATTERNS: &[PatternSpec] = &[
    spec(
        "double_brace",
        0.95,
        false,
        r"\{\{[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*\}\}",
    ),
    spec(
        "template_literal",
        0.95,
        false,
        r"\$\{[ \t]*([A-Za-z_][A-Za-z0-9_]*)[ \t]*\}",
    ),
    spec("bracket_upper", 0.7, false, r"\[([A-Z][A-Z0-9_]*)\]"),
    spec(
        "single_brace",
        0.6,
        false,
        r"\{([A-Za-z_][A-Za-z0-9_]*)(?:[ \t]*[:|][^}\n]*)?\}",
    ),
];

/// Every table paired with its category name, for exhaustive checks.
pub const ALL_TABLES: &[(&str, &[PatternSpec])] = &[
    ("role", ROLE_PATTERNS),
    ("section", SECTION_PATTERNS),
    ("constraint", CONSTRAINT_PATTERNS),
    ("output_format", OUTPUT_FORMAT_PATTERNS),
    ("example", EXAMPLE_PATTERNS),
    ("chain_of_thought", CHAIN_OF_THOUGHT_PATTERNS),
    ("guardrail", GUARDRAIL_PATTERNS),
    ("variable", VARIABLE_PATTERNS),
];
