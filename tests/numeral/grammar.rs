//! Integration tests for numeral validation
//!
//! Tests acceptance and rejection across every magnitude tier.

use vinculum_numeral::{decode, validate};

// =============================================================================
// Acceptance
// =============================================================================

#[test]
fn accepts_each_tier_alone() {
    for text in ["_M", "_C", "_X", "_I", "M", "C", "X", "I"] {
        assert!(validate(text), "{text}");
    }
}

#[test]
fn accepts_every_subtractive_pair() {
    for text in ["_C_M", "_C_D", "_X_C", "_X_L", "_I_X", "_I_V", "CM", "CD", "XC", "XL", "IX", "IV"] {
        assert!(validate(text), "{text}");
    }
}

#[test]
fn accepts_five_with_three_units() {
    for text in ["_D_C_C_C", "_L_X_X_X", "_V_I_I_I", "_VMMM", "DCCC", "LXXX", "VIII"] {
        assert!(validate(text), "{text}");
    }
}

#[test]
fn thousands_x_extends_ten_thousands_run() {
    for (text, value) in [("_X_X_X_X", 40_000), ("_X_X_X_XMMM", 43_000), ("_L_X_X_X_X", 90_000)] {
        assert!(validate(text), "{text}");
        assert_eq!(decode(text).unwrap(), value, "{text}");
    }
}

#[test]
fn rejects_fifth_ten_thousand() {
    for text in ["_X_X_X_X_X", "_L_X_X_X_X_X", "_X_X_X_X_I"] {
        assert!(!validate(text), "{text}");
        assert!(decode(text).unwrap_err().is_format(), "{text}");
    }
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn rejects_empty_string() {
    assert!(!validate(""));
    assert!(decode("").unwrap_err().is_format());
}

#[test]
fn rejects_four_repetitions() {
    for text in ["IIII", "XXXX", "CCCC", "MMMM", "_C_C_C_C", "_M_M_M_M"] {
        assert!(!validate(text), "{text}");
        assert!(decode(text).unwrap_err().is_format(), "{text}");
    }
}

#[test]
fn rejects_two_subtractive_pairs_in_one_tier() {
    for text in ["IXIX", "IVIV", "XCXL", "CMCM", "_I_X_I_V", "_X_C_X_L"] {
        assert!(!validate(text), "{text}");
        assert!(decode(text).unwrap_err().is_format(), "{text}");
    }
}

#[test]
fn rejects_repeated_five_symbols() {
    for text in ["VV", "LL", "DD", "_V_V", "_L_L", "_D_D"] {
        assert!(!validate(text), "{text}");
    }
}

#[test]
fn rejects_extended_after_standard() {
    assert!(!validate("_M_D_C_L_X_V_IM"));
    assert!(!validate("M_V"));
    assert!(!validate("I_I"));
}

#[test]
fn rejects_non_numeral_text() {
    for text in ["hello", "3724", "X-IV", "MMM DCC", "\u{2165}", "_"] {
        assert!(!validate(text), "{text:?}");
        assert!(decode(text).unwrap_err().is_format(), "{text:?}");
    }
}

// =============================================================================
// Agreement
// =============================================================================

#[test]
fn validate_matches_decode_on_samples() {
    for text in ["XIV", "IIII", "_XMMM", "_M_M_M_C_M_X_C_XMMM", "abc", "_I_V", "VX"] {
        let valid = validate(text);
        match decode(text) {
            Ok(_) => assert!(valid, "{text}"),
            Err(err) if err.is_value_range() => assert!(valid, "{text}"),
            Err(err) => {
                assert!(err.is_format());
                assert!(!valid, "{text}");
            }
        }
    }
}
