use passforge::prompt::{parse_positive, parse_yes_no};

#[test]
fn test_yes_no_defaults_on_empty_input() {
    assert!(parse_yes_no("", true));
    assert!(!parse_yes_no("", false));
}

#[test]
fn test_yes_no_recognized_answers() {
    assert!(parse_yes_no("y", false));
    assert!(parse_yes_no("Yes", false));
    assert!(!parse_yes_no("n", true));
    assert!(!parse_yes_no("NO", true));
}

#[test]
fn test_yes_no_unrecognized_falls_back() {
    assert!(parse_yes_no("maybe", true));
    assert!(!parse_yes_no("maybe", false));
}

#[test]
fn test_positive_parses_numbers() {
    assert_eq!(parse_positive("12", 16), 12);
    assert_eq!(parse_positive(" 8 ", 16), 8);
}

#[test]
fn test_positive_falls_back_on_bad_input() {
    assert_eq!(parse_positive("", 16), 16);
    assert_eq!(parse_positive("twelve", 16), 16);
    assert_eq!(parse_positive("-3", 1), 1);
    // Zero is below the documented minimum length of 1.
    assert_eq!(parse_positive("0", 16), 16);
}
