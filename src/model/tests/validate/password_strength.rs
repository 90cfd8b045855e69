//! Tests for the display-only password strength score.

use crate::model::validate::{password_strength, strength_label};

/// Tests that the empty password scores zero.
#[test]
fn empty_password_scores_zero() {
    assert_eq!(password_strength(""), 0);
}

/// Tests that a short all-lowercase password earns no points.
#[test]
fn short_lowercase_scores_zero() {
    assert_eq!(password_strength("abc"), 0);
}

/// Tests the length point on its own.
#[test]
fn length_alone_scores_one() {
    assert_eq!(password_strength("abcdefgh"), 1);
}

/// Tests accumulation of the four heuristics.
///
/// Expected: length + uppercase + digit = 3; adding a symbol = 4
#[test]
fn points_accumulate_per_heuristic() {
    assert_eq!(password_strength("Abcdefg1"), 3);
    assert_eq!(password_strength("Abcdef1!"), 4);
}

/// Tests that a short password can still earn character-class points.
#[test]
fn short_passwords_earn_class_points() {
    assert_eq!(password_strength("A1!"), 3);
}

/// Tests the label mapping at both ends of the scale.
#[test]
fn labels_cover_the_scale() {
    assert_eq!(strength_label(0), "Very weak");
    assert_eq!(strength_label(2), "Fair");
    assert_eq!(strength_label(4), "Strong");
}
