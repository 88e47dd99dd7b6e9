//! Integration tests for heading level assignment.

use docoutline::analysis::{
    deduplicate, sort_for_assignment, Candidate, FontSizeLevelMap, HierarchyAssigner,
};
use docoutline::{extract_outline, Document, HeadingLevel, PageContent, TextRun};

fn assigner() -> HierarchyAssigner {
    HierarchyAssigner::new().unwrap()
}

#[test]
fn test_later_larger_size_demotes_map() {
    // 14pt comes first on confidence, 18pt arrives later
    let candidates = vec![
        Candidate::font("Bold Fourteen", 1.9, 14.0, 1),
        Candidate::font("Plain Eighteen", 1.6, 18.0, 1),
    ];
    let mut map = FontSizeLevelMap::new();
    let headings = assigner().assign(candidates, &mut map);

    assert_eq!(map.get(18.0), Some(HeadingLevel::H1));
    assert_eq!(map.get(14.0), Some(HeadingLevel::H2));

    // Levels already handed out stay as they were
    assert_eq!(headings[0].text, "Bold Fourteen");
    assert_eq!(headings[0].level, HeadingLevel::H1);
    assert_eq!(headings[1].level, HeadingLevel::H1);
}

#[test]
fn test_later_larger_size_through_extractor() {
    let mut page = PageContent::new(1);
    page.add_line(vec![TextRun::bold("Bold Fourteen", 14.0)]);
    page.add_line(vec![TextRun::new("Plain Eighteen", 18.0)]);
    for _ in 0..8 {
        page.add_line(vec![TextRun::new("ordinary body text", 10.0)]);
    }
    let mut doc = Document::new();
    doc.add_page(page);

    let outline = extract_outline(&doc).unwrap();
    let texts: Vec<&str> = outline.outline.iter().map(|h| h.text.as_str()).collect();
    assert_eq!(texts, vec!["Bold Fourteen", "Plain Eighteen"]);
    assert_eq!(outline.count_level(HeadingLevel::H1), 2);
}

#[test]
fn test_assignment_is_idempotent() {
    let mut candidates = vec![
        Candidate::font("Part One", 2.5, 24.0, 1),
        Candidate::font("Background", 1.8, 16.0, 1),
        Candidate::pattern("SCOPE", 1.0, 2),
        Candidate::font("Larger Late", 1.2, 30.0, 3),
        Candidate::pattern("Details", 1.5, 3),
    ];
    sort_for_assignment(&mut candidates);

    let mut first_map = FontSizeLevelMap::new();
    let first = assigner().assign(candidates.clone(), &mut first_map);
    let mut second_map = FontSizeLevelMap::new();
    let second = assigner().assign(candidates, &mut second_map);

    assert_eq!(first, second);
    assert_eq!(first_map, second_map);
}

#[test]
fn test_new_largest_size_is_always_h1() {
    let sizes = [11.0, 13.0, 9.0, 15.0, 15.0, 12.0, 20.0, 8.0, 25.0];
    let mut map = FontSizeLevelMap::new();
    let mut largest = f32::MIN;

    for size in sizes {
        let level = map.level_for(size);
        if size >= largest {
            assert_eq!(level, HeadingLevel::H1, "size {}", size);
            largest = size;
        }
    }

    let top = map.largest().unwrap();
    assert_eq!(map.get(top), Some(HeadingLevel::H1));
    assert_eq!(map.iter().filter(|(_, l)| *l == HeadingLevel::H1).count(), 1);
}

#[test]
fn test_numbering_overrides_font_and_confidence() {
    let candidates = vec![
        Candidate::font("1.2.3 Tiny Detail", 3.5, 40.0, 1),
        Candidate::pattern("4.5 Middle", 1.0, 1),
        Candidate::font("7. Chapter", 1.2, 9.0, 1),
    ];
    let mut map = FontSizeLevelMap::new();
    let headings = assigner().assign(candidates, &mut map);

    assert_eq!(headings[0].level, HeadingLevel::H3);
    assert_eq!(headings[1].level, HeadingLevel::H1);
    assert_eq!(headings[2].level, HeadingLevel::H2);
    assert!(map.is_empty());
}

#[test]
fn test_dedup_output_is_stable_under_rededup() {
    let pool = vec![
        Candidate::font("Methods", 2.0, 16.0, 1),
        Candidate::pattern("METHODS", 1.0, 1),
        Candidate::pattern("Results", 1.5, 2),
        Candidate::pattern("ab", 1.0, 2),
    ];
    let once = deduplicate(pool);
    assert_eq!(once.len(), 2);
    assert_eq!(deduplicate(once.clone()), once);
}
