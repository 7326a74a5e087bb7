//! Canonical form for identifier strings.

/// Strip whitespace and hyphens, then upper-case the remainder.
///
/// Uses Rust's Unicode case mapping, which does not depend on the host
/// locale. Idempotent: `normalize(&normalize(s)) == normalize(s)`.
pub fn normalize(raw: &str) -> String {
  raw
    .chars()
    .filter(|c| !c.is_whitespace() && *c != '-')
    .collect::<String>()
    .to_uppercase()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_spaces_and_hyphens() {
    assert_eq!(normalize("385-0101 0000"), "38501010000");
    assert_eq!(normalize("  12 34-567 "), "1234567");
  }

  #[test]
  fn strips_other_whitespace() {
    assert_eq!(normalize("ab\t123\n456"), "AB123456");
  }

  #[test]
  fn upper_cases_letters() {
    assert_eq!(normalize("ab 123-456"), "AB123456");
    assert_eq!(normalize("Ab123456"), normalize("aB-123 456"));
  }

  #[test]
  fn folds_non_ascii_letters() {
    assert_eq!(normalize("ąž-12"), "ĄŽ12");
    assert_eq!(normalize("straße"), "STRASSE");
  }

  #[test]
  fn empty_and_noise_only_inputs() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize(" - -  "), "");
  }

  #[test]
  fn idempotent() {
    for s in [
      "",
      "ab 123-456",
      "385-0101 0000",
      "straße",
      "ǆ-x",
      "  mixed Case - 42 ",
      "ﬁ",
    ] {
      let once = normalize(s);
      assert_eq!(normalize(&once), once, "input {s:?}");
    }
  }

  mod properties {
    use proptest::{prelude::*, sample::Index};

    use crate::normalize::normalize;

    /// `base` with case flipped where `flips` says so and each `(at, c)` of
    /// `noise` inserted.
    fn disguise(base: &str, flips: &[bool], noise: &[(Index, char)]) -> String {
      let mut chars: Vec<char> = base
        .chars()
        .zip(flips.iter().chain(std::iter::repeat(&false)))
        .map(|(c, &flip)| match (flip, c.is_ascii_uppercase()) {
          (false, _) => c,
          (true, true) => c.to_ascii_lowercase(),
          (true, false) => c.to_ascii_uppercase(),
        })
        .collect();
      for (at, c) in noise {
        chars.insert(at.index(chars.len() + 1), *c);
      }
      chars.into_iter().collect()
    }

    proptest! {
      #[test]
      fn idempotent_for_any_string(s in any::<String>()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
      }

      #[test]
      fn spacing_hyphens_and_case_do_not_matter(
        base in "[a-zA-Z0-9]{0,14}",
        flips in prop::collection::vec(any::<bool>(), 14),
        noise in prop::collection::vec(
          (any::<Index>(), prop::sample::select(vec![' ', '-', '\t'])),
          0..8,
        ),
      ) {
        let noisy = disguise(&base, &flips, &noise);
        prop_assert_eq!(normalize(&noisy), normalize(&base));
      }

      #[test]
      fn output_has_no_separators(s in any::<String>()) {
        let out = normalize(&s);
        prop_assert!(!out.chars().any(|c| c.is_whitespace() || c == '-'));
      }
    }
  }
}
