//! Shape-based classification of canonical identifier values.
//!
//! The rules are length-disjoint or alphabet-disjoint, so at most one can
//! match a given value; the table order only makes evaluation deterministic.
//! No check digits are verified.

use crate::{Error, Result, identifier::IdentifierType};

type Rule = (IdentifierType, fn(&str) -> bool);

/// Evaluated top to bottom; the first matching predicate wins.
const RULES: &[Rule] = &[
  (IdentifierType::PersonalCode, is_personal_code),
  (IdentifierType::ContractNumber, is_contract_number),
  (IdentifierType::ObjectNumber, is_object_number),
];

fn all_digits(s: &str) -> bool { s.bytes().all(|b| b.is_ascii_digit()) }

/// Exactly 11 digits.
fn is_personal_code(value: &str) -> bool {
  value.len() == 11 && all_digits(value)
}

/// Two upper-case letters followed by exactly 6 digits.
fn is_contract_number(value: &str) -> bool {
  let bytes = value.as_bytes();
  bytes.len() == 8
    && bytes[..2].iter().all(u8::is_ascii_uppercase)
    && bytes[2..].iter().all(u8::is_ascii_digit)
}

/// 7 to 9 digits inclusive.
fn is_object_number(value: &str) -> bool {
  (7..=9).contains(&value.len()) && all_digits(value)
}

/// Classify an already-normalised value.
///
/// Fails with [`Error::Unclassifiable`] carrying the value when no rule
/// matches; callers report that rather than guessing.
pub fn classify(value: &str) -> Result<IdentifierType> {
  RULES
    .iter()
    .find(|(_, matches)| matches(value))
    .map(|(identifier_type, _)| *identifier_type)
    .ok_or_else(|| Error::Unclassifiable(value.to_owned()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::normalize;

  #[test]
  fn personal_code() {
    assert_eq!(classify("11111111111"), Ok(IdentifierType::PersonalCode));
    assert_eq!(classify("38501010000"), Ok(IdentifierType::PersonalCode));
  }

  #[test]
  fn contract_number() {
    assert_eq!(classify("AB123456"), Ok(IdentifierType::ContractNumber));
  }

  #[test]
  fn object_number_bounds() {
    assert_eq!(classify("1234567"), Ok(IdentifierType::ObjectNumber));
    assert_eq!(classify("12345678"), Ok(IdentifierType::ObjectNumber));
    assert_eq!(classify("123456789"), Ok(IdentifierType::ObjectNumber));
  }

  #[test]
  fn digit_runs_outside_every_shape_fail() {
    for value in ["123456", "1234567890", "123456789012", "1234567890123"] {
      assert_eq!(
        classify(value),
        Err(Error::Unclassifiable(value.to_owned())),
        "{value}"
      );
    }
  }

  #[test]
  fn contract_number_requires_exact_shape() {
    for value in [
      "ab123456",  // not normalised
      "A1234567",  // one letter
      "ABC12345",  // three letters
      "AB12345",   // five digits
      "AB1234567", // seven digits
      "12AB3456",  // letters not leading
      "ĄB123456",  // non-ASCII letter
    ] {
      assert!(classify(value).is_err(), "{value}");
    }
  }

  #[test]
  fn non_ascii_digits_are_not_digits() {
    // Arabic-Indic digits.
    assert!(classify("١٢٣٤٥٦٧").is_err());
  }

  #[test]
  fn empty_fails() {
    assert_eq!(classify(""), Err(Error::Unclassifiable(String::new())));
  }

  #[test]
  fn at_most_one_rule_matches() {
    for value in [
      "11111111111",
      "AB123456",
      "1234567",
      "123456789",
      "12345678",
      "ZZ000000",
    ] {
      let hits = RULES.iter().filter(|(_, m)| m(value)).count();
      assert_eq!(hits, 1, "{value}");
    }
  }

  #[test]
  fn formatting_noise_does_not_change_classification() {
    assert_eq!(
      classify(&normalize("ab 123-456")),
      classify(&normalize("AB123456"))
    );
    assert_eq!(
      classify(&normalize("385-0101 0000")),
      Ok(IdentifierType::PersonalCode)
    );
  }

  mod properties {
    use proptest::prelude::*;

    use crate::{
      Error,
      classify::{RULES, classify},
    };

    proptest! {
      #[test]
      fn any_value_matches_at_most_one_rule(value in "[A-Z0-9]{0,14}") {
        let hits = RULES.iter().filter(|(_, m)| m(&value)).count();
        prop_assert!(hits <= 1, "{} matched {} rules", value, hits);
      }

      #[test]
      fn classification_agrees_with_the_matching_rule(value in "[A-Z0-9]{0,14}") {
        let expected = RULES
          .iter()
          .find(|(_, m)| m(&value))
          .map(|(t, _)| *t);
        match classify(&value) {
          Ok(t) => prop_assert_eq!(Some(t), expected),
          Err(Error::Unclassifiable(v)) => {
            prop_assert_eq!(expected, None);
            prop_assert_eq!(v, value);
          }
          Err(e) => prop_assert!(false, "unexpected error {}", e),
        }
      }
    }
  }
}
