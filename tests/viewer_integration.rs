use std::path::PathBuf;

use mdview::app::{Message, Model, update};
use mdview::document::{Document, LineType, load_document};
use mdview::ui::document_content_width;

const SAMPLE: &str = include_str!("fixtures/sample.md");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample.md")
}

fn find_line(doc: &Document, text: &str) -> usize {
    doc.lines()
        .iter()
        .position(|l| l.content() == text)
        .unwrap_or_else(|| panic!("missing line {text:?}"))
}

#[test]
fn test_load_fixture_from_disk() {
    let doc = load_document(&fixture_path(), document_content_width(80)).unwrap();
    assert_eq!(doc, Document::parse(SAMPLE));
    assert_eq!(doc.line_at(0).unwrap().content(), "RELEASE NOTES");
    assert_eq!(doc.line_at(1).unwrap().content(), "─".repeat(13));
}

#[test]
fn test_fixture_block_kinds() {
    let doc = Document::parse(SAMPLE);

    let keys = find_line(&doc, "Keys");
    assert_eq!(doc.line_at(keys).unwrap().line_type(), LineType::Heading(3));

    let nested = find_line(&doc, "• nested items are shown flat");
    assert_eq!(doc.line_at(nested).unwrap().line_type(), LineType::ListItem);
    find_line(&doc, "• g and G jump to either end");
    find_line(&doc, "• / opens the search prompt");
    find_line(&doc, "10. Run the binary with a markdown file as its only argument.");

    let code = find_line(&doc, "        println!(\"tabs expand to eight columns\");");
    assert_eq!(doc.line_at(code).unwrap().line_type(), LineType::CodeBlock);
    assert_eq!(doc.line_at(code + 1).unwrap().content(), "}");

    let minor = find_line(&doc, "Minor heading");
    assert_eq!(doc.line_at(minor).unwrap().line_type(), LineType::Heading(5));
    assert_eq!(doc.line_at(minor + 1).unwrap().line_type(), LineType::Heading(6));

    assert!(
        doc.lines()
            .iter()
            .any(|l| l.line_type() == LineType::BlockQuote && l.content().starts_with("│ "))
    );
    assert!(doc.lines().iter().any(|l| l.content().contains("link <https://example.com/docs>")));
    assert!(!doc.lines().iter().any(|l| l.content().contains("**")));
}

#[test]
fn test_fixture_lines_fit_layout_at_any_width() {
    for width in [30, 40, 78, 120] {
        let doc = Document::parse_with_layout(SAMPLE, width);
        for line in doc.lines() {
            assert!(
                line.content().chars().count() <= width - 2,
                "{:?} wider than {} at layout width {width}",
                line.content(),
                width - 2
            );
        }
    }
}

#[test]
fn test_reflow_round_trip_matches_fresh_parse() {
    let doc = Document::parse_with_layout(SAMPLE, 78);
    let narrow = doc.reflow(30);
    assert!(narrow.line_count() > doc.line_count());
    assert_eq!(narrow.reflow(78), doc);
}

#[test]
fn test_search_and_scroll_through_fixture() {
    let doc = Document::parse(SAMPLE);
    let model = Model::new(fixture_path(), doc, (80, 12));

    let model = [
        Message::StartSearch,
        Message::SearchInput("EIGHT COLUMNS".into()),
        Message::SubmitSearch,
    ]
    .into_iter()
    .fold(model, update);

    let hit = model.search.last_found().unwrap();
    assert!(model.document.line_at(hit).unwrap().content().contains("eight columns"));
    assert_eq!(model.viewport.offset(), (hit - 1).min(model.viewport.max_offset()));

    let model = update(model, Message::GoToBottom);
    assert_eq!(model.viewport.visible_range().end, model.document.line_count());
}
