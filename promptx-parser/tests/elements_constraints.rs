//! Unit tests for isolated constraints

use promptx_parser::prompt::testing::assert_prompt;
use promptx_parser::prompt::NodeKind;
use rstest::rstest;

#[rstest]
#[case("Do not use deprecated APIs.", "negative_en", "use deprecated APIs")]
#[case("Don't mention pricing.", "negative_en", "mention pricing")]
#[case("Never guess numbers.", "negative_en", "guess numbers")]
#[case("Avoid passive voice.", "negative_en", "passive voice")]
#[case("Refrain from editorializing.", "negative_en", "editorializing")]
fn test_english_negative_forms(#[case] source: &str, #[case] style: &str, #[case] what: &str) {
    assert_prompt(source)
        .count_of(NodeKind::Constraint, 1)
        .nth_of(NodeKind::Constraint, 0, |node| {
            node.style(style).capture(0, what);
        });
}

#[rstest]
#[case("Asla kişisel veri paylaşma.", "asla_tr")]
#[case("Küfürlü dil kullanmak yasaktır.", "yasak_tr")]
#[case("Sakın fiyat bilgisi verme.", "sakin_tr")]
#[case("Kişisel verileri paylaşma.", "negative_tr")]
fn test_turkish_negative_forms(#[case] source: &str, #[case] style: &str) {
    assert_prompt(source)
        .count_of(NodeKind::Constraint, 1)
        .nth_of(NodeKind::Constraint, 0, |node| {
            node.style(style);
        });
}

#[rstest]
#[case("Always cite sources.", "positive_en")]
#[case("Make sure every answer is sourced.", "positive_en")]
#[case("You must validate inputs first.", "positive_en")]
#[case("Ensure that totals add up.", "positive_en")]
#[case("Her zaman kibar ol.", "positive_tr")]
#[case("Mutlaka kaynak göster.", "positive_tr")]
fn test_positive_obligations(#[case] source: &str, #[case] style: &str) {
    assert_prompt(source)
        .count_of(NodeKind::Constraint, 1)
        .nth_of(NodeKind::Constraint, 0, |node| {
            node.style(style);
        });
}

#[test]
fn test_semicolon_chain_splits_into_two_constraints() {
    assert_prompt("Do not lie; do not guess.")
        .count_of(NodeKind::Constraint, 2)
        .nth_of(NodeKind::Constraint, 0, |node| {
            node.content("Do not lie;");
        })
        .nth_of(NodeKind::Constraint, 1, |node| {
            node.content("do not guess.");
        });
}

#[test]
fn test_constraint_stops_at_sentence_boundary() {
    assert_prompt("Never improvise. The data is authoritative.").nth_of(
        NodeKind::Constraint,
        0,
        |node| {
            node.content("Never improvise.");
        },
    );
}

#[test]
fn test_leading_subject_stays_outside_node() {
    // The pattern starts at the modal, so "You " is residual text.
    assert_prompt("You should not speculate.").nth_of(NodeKind::Constraint, 0, |node| {
        node.content("should not speculate.").column(5);
    });
}

#[test]
fn test_constraint_list_counts() {
    let source = "Do not use jargon.\nDo not exceed 100 words.\nAlways answer in full sentences.";
    assert_prompt(source).count_of(NodeKind::Constraint, 3);
}

#[test]
fn test_negative_confidence_above_positive() {
    let ast = assert_prompt("Never stall. Always deliver.").into_ast();
    let negative = &ast.nodes[0];
    let positive = &ast.nodes[1];
    assert!(negative.meta.confidence > positive.meta.confidence);
}

#[test]
fn test_plain_prose_has_no_constraints() {
    assert_prompt("The report covers the third quarter in detail.")
        .lacks_kind(NodeKind::Constraint);
}
