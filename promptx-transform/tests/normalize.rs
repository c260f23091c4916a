//! normalize_variables: placeholder syntax normalization

use promptx_transform::{
    transform_prompt, PlaceholderStyle, TransformOptions, TransformResult, Transformation,
};
use rstest::rstest;

fn normalize(source: &str, target: PlaceholderStyle) -> TransformResult {
    transform_prompt(
        source,
        Transformation::NormalizeVariables,
        &TransformOptions {
            target_style: target,
        },
    )
}

#[test]
fn test_all_styles_converge_on_double_brace() {
    let result = normalize(
        "Ship ${order_id} to [ADDRESS] for {user}.",
        PlaceholderStyle::DoubleBrace,
    );

    assert_eq!(
        result.transformed,
        "Ship {{order_id}} to {{ADDRESS}} for {{user}}."
    );
    assert_eq!(result.changes.len(), 3);
    assert_eq!(result.format, "text");
}

#[rstest]
#[case(
    PlaceholderStyle::DoubleBrace,
    "v1={{alpha}} v2={{beta}} v3={{GAMMA}} v4={{delta}}"
)]
#[case(
    PlaceholderStyle::TemplateLiteral,
    "v1=${alpha} v2=${beta} v3=${GAMMA} v4=${delta}"
)]
#[case(
    PlaceholderStyle::BracketUpper,
    "v1=[ALPHA] v2=[BETA] v3=[GAMMA] v4=[DELTA]"
)]
#[case(
    PlaceholderStyle::SingleBrace,
    "v1={alpha} v2={beta} v3={GAMMA} v4={delta}"
)]
fn test_every_target_style(#[case] target: PlaceholderStyle, #[case] expected: &str) {
    let source = "v1={{alpha}} v2=${beta} v3=[GAMMA] v4={delta}";
    let result = normalize(source, target);
    assert_eq!(result.transformed, expected);
}

#[test]
fn test_second_run_reports_zero_changes() {
    let source = "Plan a trip to {city} with ${budget} for [TRAVELERS].";
    let first = normalize(source, PlaceholderStyle::DoubleBrace);
    assert!(!first.changes.is_empty());

    let second = normalize(&first.transformed, PlaceholderStyle::DoubleBrace);
    assert!(second.changes.is_empty());
    assert_eq!(second.transformed, first.transformed);
}

#[test]
fn test_tokens_already_in_target_style_untouched() {
    let source = "Hello {{name}}, welcome to {{place}}.";
    let result = normalize(source, PlaceholderStyle::DoubleBrace);

    assert_eq!(result.transformed, source);
    assert!(result.changes.is_empty());
}

#[test]
fn test_double_brace_interior_not_rematched_as_single() {
    let result = normalize("{{keep}} and {convert}", PlaceholderStyle::DoubleBrace);

    assert_eq!(result.transformed, "{{keep}} and {{convert}}");
    assert_eq!(result.changes.len(), 1);
    assert!(result.changes[0].contains("single_brace"));
}

#[test]
fn test_qualified_default_is_dropped() {
    let result = normalize(
        "Use {carrier|UPS} and {city:Istanbul}.",
        PlaceholderStyle::DoubleBrace,
    );

    assert_eq!(result.transformed, "Use {{carrier}} and {{city}}.");
}

#[test]
fn test_bracket_target_uppercases_names() {
    let result = normalize(
        "Contact {user_name} at ${email}.",
        PlaceholderStyle::BracketUpper,
    );

    assert_eq!(result.transformed, "Contact [USER_NAME] at [EMAIL].");
}

#[test]
fn test_per_style_counts_in_changes_and_metadata() {
    let result = normalize(
        "{{a}} {{b}} ${c} [D] {e}",
        PlaceholderStyle::SingleBrace,
    );

    assert_eq!(result.transformed, "{a} {b} {c} {D} {e}");
    assert_eq!(result.changes.len(), 3);
    assert!(result.changes[0].contains("2 double_brace"));
    assert_eq!(result.metadata["converted"]["double_brace"], 2);
    assert_eq!(result.metadata["converted"]["template_literal"], 1);
    assert_eq!(result.metadata["converted"]["bracket_upper"], 1);
    assert_eq!(result.metadata["target_style"], "single_brace");
}

#[test]
fn test_prose_without_placeholders_unchanged() {
    let source = "No placeholders anywhere in this sentence.";
    let result = normalize(source, PlaceholderStyle::TemplateLiteral);

    assert_eq!(result.transformed, source);
    assert!(result.changes.is_empty());
    assert_eq!(result.original, source);
}

#[test]
fn test_surrounding_text_is_preserved() {
    let result = normalize(
        "Dear [NAME],\nyour {item} ships ${when}.\nRegards.",
        PlaceholderStyle::DoubleBrace,
    );

    assert_eq!(
        result.transformed,
        "Dear {{NAME}},\nyour {{item}} ships {{when}}.\nRegards."
    );
}
