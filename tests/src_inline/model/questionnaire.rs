use super::*;

#[test]
fn test_questionnaire_shape() {
    assert_eq!(statements().len(), QUESTION_COUNT);
    assert_eq!(labels().len(), 5);
    assert_eq!(MAX_SCORE, 80);
    assert!(statements().iter().all(|s| s.ends_with('.')));
}

#[test]
fn test_intro_mentions_scale_and_disclaimer() {
    assert_eq!(TITLE, "DIN PERSONLIGE PROFIL");
    assert_eq!(intro().len(), 3);
    assert!(intro()[0].contains("følelsesmæssige og sansemæssige indtryk"));
    assert!(intro()[1].contains("20 udsagn"));
    assert!(intro()[1].contains("Aldrig til Altid"));
    assert!(intro()[2].contains("ikke en diagnose"));
}

#[test]
fn test_label_for_value() {
    assert_eq!(label_for(0), Some("Aldrig"));
    assert_eq!(label_for(2), Some("Nogle gange"));
    assert_eq!(label_for(4), Some("Altid"));
    assert_eq!(label_for(5), None);
}

#[test]
fn test_value_for_label_variants() {
    assert_eq!(value_for_label("ofte"), Some(3));
    assert_eq!(value_for_label("  ALTID "), Some(4));
    assert_eq!(value_for_label("nogle_gange"), Some(2));
    assert_eq!(value_for_label("Nogle-Gange"), Some(2));
    assert_eq!(value_for_label("sjældent"), Some(1));
    assert_eq!(value_for_label("måske"), None);
}
