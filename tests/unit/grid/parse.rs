use super::*;
use crate::grid::model::GRID_SIDE;

fn joined(n: usize, token: &str) -> String {
    vec![token; n].join(",")
}

#[test]
fn strip_brackets_handles_each_end_independently() {
    assert_eq!(strip_brackets("[1,2]"), "1,2");
    assert_eq!(strip_brackets("1,2"), "1,2");
    assert_eq!(strip_brackets("[1,2"), "1,2");
    assert_eq!(strip_brackets("1,2]"), "1,2");
    assert_eq!(strip_brackets("]1,2["), "1,2");
    assert_eq!(strip_brackets("  [1,2]\n"), "1,2");
}

#[test]
fn strip_brackets_removes_only_one_per_end() {
    assert_eq!(strip_brackets("[[1]]"), "[1]");
}

#[test]
fn parses_bracketed_and_bare_input() {
    let bare = joined(GRID_LEN, "3");
    let bracketed = format!("[{bare}]");

    let a = parse_grid(&bare).unwrap();
    let b = parse_grid(&bracketed).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.get(0, 0), 3.0);
    assert_eq!(a.get(GRID_SIDE - 1, GRID_SIDE - 1), 3.0);
}

#[test]
fn tolerates_whitespace_and_float_forms() {
    let mut tokens = vec!["0"; GRID_LEN];
    tokens[0] = " 1.5";
    tokens[1] = "-2e1 ";
    tokens[2] = "\t.25";
    let grid = parse_grid(&tokens.join(",")).unwrap();
    assert_eq!(grid.get(0, 0), 1.5);
    assert_eq!(grid.get(0, 1), -20.0);
    assert_eq!(grid.get(0, 2), 0.25);
}

#[test]
fn row_major_layout() {
    let text = (0..GRID_LEN)
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(",");
    let grid = parse_grid(&text).unwrap();
    assert_eq!(grid.get(0, 199), 199.0);
    assert_eq!(grid.get(1, 0), 200.0);
    assert_eq!(grid.get(3, 7), 607.0);
}

#[test]
fn non_numeric_token_is_parse_error() {
    let mut tokens = vec!["1"; GRID_LEN];
    tokens[2] = "abc";
    let err = parse_grid(&tokens.join(",")).unwrap_err();
    match err {
        CanvasError::Parse { index, token } => {
            assert_eq!(index, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn parse_error_wins_over_shape_error() {
    let err = parse_grid("1,2,abc,4").unwrap_err();
    assert!(matches!(err, CanvasError::Parse { index: 2, .. }));
}

#[test]
fn non_finite_tokens_are_rejected() {
    for bad in ["nan", "inf", "-infinity", "1e400"] {
        let mut tokens = vec!["0"; GRID_LEN];
        tokens[10] = bad;
        let err = parse_grid(&tokens.join(",")).unwrap_err();
        assert!(
            matches!(err, CanvasError::Parse { index: 10, .. }),
            "{bad}: {err}"
        );
    }
}

#[test]
fn large_finite_tokens_are_accepted() {
    let mut tokens = vec!["0"; GRID_LEN];
    tokens[0] = "1e39";
    tokens[1] = "3.5e38";
    tokens[2] = "-1e99";
    tokens[3] = "1.7e308";
    let grid = parse_grid(&tokens.join(",")).unwrap();
    assert_eq!(grid.get(0, 0), 1e39);
    assert_eq!(grid.get(0, 1), 3.5e38);
    assert_eq!(grid.get(0, 2), -1e99);
    assert_eq!(grid.get(0, 3), 1.7e308);
}

#[test]
fn parse_tokens_leaves_brackets_alone() {
    let bare = joined(GRID_LEN, "0");
    assert!(parse_tokens(&bare).is_ok());
    assert!(parse_tokens(&format!("{bare}\n")).is_ok());
    assert!(matches!(
        parse_tokens(&format!("[{bare}]")).unwrap_err(),
        CanvasError::Parse { index: 0, .. }
    ));
}

#[test]
fn empty_input_and_empty_tokens_are_parse_errors() {
    assert!(matches!(
        parse_grid("").unwrap_err(),
        CanvasError::Parse { index: 0, .. }
    ));
    assert!(matches!(
        parse_grid("[]").unwrap_err(),
        CanvasError::Parse { index: 0, .. }
    ));
    let trailing = format!("{},", joined(GRID_LEN, "1"));
    assert!(matches!(
        parse_grid(&trailing).unwrap_err(),
        CanvasError::Parse { index: GRID_LEN, .. }
    ));
}

#[test]
fn wrong_count_is_shape_error() {
    for n in [GRID_LEN - 1, GRID_LEN + 1] {
        let err = parse_grid(&joined(n, "0")).unwrap_err();
        match err {
            CanvasError::Shape { expected, actual } => {
                assert_eq!(expected, GRID_LEN);
                assert_eq!(actual, n);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

#[test]
fn serialized_grid_parses_back() {
    let grid = PixelGrid::from_fn(|r, c| ((r * 7 + c * 3) % 256) as f64 + 0.5);
    let text = grid.to_serialized();
    assert!(!text.starts_with('['));
    assert_eq!(parse_grid(&text).unwrap(), grid);
}

#[test]
fn from_values_rejects_wrong_length() {
    assert!(matches!(
        PixelGrid::from_values(vec![0.0; 10]).unwrap_err(),
        CanvasError::Shape {
            expected: GRID_LEN,
            actual: 10
        }
    ));
}

#[test]
fn min_max_and_rows() {
    let grid = PixelGrid::from_fn(|r, c| (r + c) as f64);
    assert_eq!(grid.min_max(), (0.0, 398.0));
    assert_eq!(grid.rows().count(), GRID_SIDE);
    assert!(grid.rows().all(|row| row.len() == GRID_SIDE));
}
