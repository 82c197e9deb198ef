use super::*;

static DIR_COUNTER: std::sync::atomic::AtomicUsize = std::sync::atomic::AtomicUsize::new(0);

fn make_temp_dir() -> std::path::PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    dir.push(format!("hsp_answers_test_{}_{}", std::process::id(), id));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_text_one_per_line() {
    let content = (0..20)
        .map(|i| (i % 5).to_string())
        .collect::<Vec<_>>()
        .join("\n");
    let set = parse_answer_sheet(&content).unwrap();
    assert!(set.is_complete());
    assert_eq!(set.get(0), Some(0));
    assert_eq!(set.get(4), Some(4));
    assert_eq!(set.get(19), Some(4));
}

#[test]
fn test_parse_text_mixed_separators_labels_and_gaps() {
    let content = "# mine svar\n\
        2, 2, 2, 2, 2\n\
        2 2 2 2 2\n\
        Ofte; Altid; Nogle gange; nogle_gange; -\n\
        ?\n1\n1\nSjældent\n\n1\n";
    let set = parse_answer_sheet(content).unwrap();
    assert_eq!(set.answered_count(), 18);
    assert_eq!(set.get(10), Some(3));
    assert_eq!(set.get(11), Some(4));
    assert_eq!(set.get(12), Some(2));
    assert_eq!(set.get(13), Some(2));
    assert_eq!(set.get(14), None);
    assert_eq!(set.get(15), None);
    assert_eq!(set.get(18), Some(1));
}

#[test]
fn test_parse_text_spaced_label_inside_line() {
    let content = "Ofte Nogle gange Altid 0 0\n0 0 0 0 0\n0 0 0 0 0\n0 0 0 0 0\n";
    let set = parse_answer_sheet(content).unwrap();
    assert!(set.is_complete());
    assert_eq!(set.get(0), Some(3));
    assert_eq!(set.get(1), Some(2));
    assert_eq!(set.get(2), Some(4));
    assert_eq!(set.get(3), Some(0));
}

#[test]
fn test_parse_text_spaced_label_mixed_case_at_line_end() {
    let mut content = vec!["1"; 19].join(" ");
    content.push_str(" NOGLE Gange");
    let set = parse_answer_sheet(&content).unwrap();
    assert_eq!(set.get(19), Some(2));
}

#[test]
fn test_parse_entry_digits_only() {
    assert_eq!(parse_entry("3"), Some(Some(3)));
    assert_eq!(parse_entry("+3"), None);
    assert_eq!(parse_entry("03"), None);
    assert_eq!(parse_entry("5"), None);
    assert_eq!(parse_entry("-"), Some(None));
}

#[test]
fn test_parse_json_with_nulls() {
    let content = "[4,4,4,4,4,4,4,4,4,4,null,null,0,0,0,0,0,0,0,1]";
    let set = parse_answer_sheet(content).unwrap();
    assert_eq!(set.answered_count(), 18);
    assert_eq!(set.get(10), None);
    assert_eq!(set.get(19), Some(1));
}

#[test]
fn test_wrong_count_rejected() {
    let err = parse_answer_sheet("1 2 3").unwrap_err();
    assert!(matches!(err, AnswerSheetError::WrongCount { found: 3 }));

    let err = parse_answer_sheet("[1, 2]").unwrap_err();
    assert!(matches!(err, AnswerSheetError::WrongCount { found: 2 }));
}

#[test]
fn test_out_of_range_rejected_with_entry_number() {
    let mut entries = vec!["0"; 20];
    entries[6] = "5";
    let err = parse_answer_sheet(&entries.join(",")).unwrap_err();
    assert!(matches!(err, AnswerSheetError::InvalidEntry { entry: 7, .. }));

    let err = parse_answer_sheet("[0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,0,-1]").unwrap_err();
    assert!(matches!(err, AnswerSheetError::InvalidEntry { entry: 20, .. }));
}

#[test]
fn test_unknown_label_rejected() {
    let mut entries = vec!["Aldrig"; 20];
    entries[0] = "måske";
    let err = parse_answer_sheet(&entries.join("\n")).unwrap_err();
    assert_eq!(
        err.to_string(),
        "entry 1: invalid answer 'måske' (use 0-4, a label, or '-' for unanswered)"
    );
}

#[test]
fn test_load_answer_sheet_from_file() {
    let dir = make_temp_dir();
    let path = dir.join("answers.txt");
    std::fs::write(&path, vec!["4"; 20].join("\n")).unwrap();
    let set = load_answer_sheet(&path).unwrap();
    assert!(set.is_complete());
}

#[test]
fn test_load_answer_sheet_missing_file() {
    let dir = make_temp_dir();
    let err = load_answer_sheet(&dir.join("missing.txt")).unwrap_err();
    assert!(matches!(err, AnswerSheetError::Io { .. }));
}
