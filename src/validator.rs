use crate::error::{Error, Result};
use crate::page::{tokenize, PageId};
use crate::table::MAX_FRAMES;
use std::collections::HashSet;
use std::num::IntErrorKind;
use tracing::debug;

/// Validated inputs ready to be handed to the step generator.
#[derive(Debug, PartialEq)]
pub struct SimulationInput {
    pub references: Vec<PageId>,
    pub frame_count: usize,
}

/// Check that every token in `references` belongs to `available`. On success the references are
/// returned unchanged. Otherwise every offending occurrence is reported, in reference order and
/// including repeats. Duplicate entries in `available` are harmless; the list behaves as a set.
///
/// # Arguments
///
/// * `available` - the declared set of valid pages.
/// * `references` - the page accesses to simulate.
///
/// # Errors
///
/// Returns `Error::InvalidReference` listing the unknown tokens.
pub fn validate(available: &[PageId], references: Vec<PageId>) -> Result<Vec<PageId>> {
    let known: HashSet<&PageId> = available.iter().collect();
    let tokens: Vec<PageId> = references
        .iter()
        .filter(|page| !known.contains(page))
        .cloned()
        .collect();

    match tokens.is_empty() {
        true => Ok(references),
        false => Err(Error::InvalidReference { tokens }),
    }
}

/// Parse the three raw text fields a user fills in and run them through validation. Empty fields
/// and frame counts that are not strictly positive integers are rejected before any tokenization
/// happens.
///
/// # Errors
///
/// * `Error::MissingInput` - a field is blank or the frame count does not parse.
/// * `Error::InvalidConfig` - the frame count is above `MAX_FRAMES`.
/// * `Error::InvalidReference` - see [`validate`].
pub fn parse_input(
    available_raw: &str,
    references_raw: &str,
    frame_count_raw: &str,
) -> Result<SimulationInput> {
    let available_raw = available_raw.trim();
    let references_raw = references_raw.trim();
    if available_raw.is_empty() {
        return Err(Error::MissingInput(String::from("available pages are empty")));
    }
    if references_raw.is_empty() {
        return Err(Error::MissingInput(String::from("reference string is empty")));
    }
    let frame_count = parse_frame_count(frame_count_raw)?;

    let available = tokenize(available_raw);
    let references = validate(&available, tokenize(references_raw))?;
    debug!(
        available = available.len(),
        references = references.len(),
        frame_count,
        "input accepted"
    );

    Ok(SimulationInput {
        references,
        frame_count,
    })
}

fn parse_frame_count(raw: &str) -> Result<usize> {
    let raw = raw.trim();
    match raw.parse::<usize>() {
        Ok(count) if count > MAX_FRAMES => Err(Error::InvalidConfig(count)),
        Ok(count) if count > 0 => Ok(count),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
            Err(Error::InvalidConfig(usize::MAX))
        }
        _ if raw.is_empty() => Err(Error::MissingInput(String::from("frame count is empty"))),
        _ => Err(Error::MissingInput(format!(
            "frame count '{}' is not a positive integer",
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn pages(raw: &str) -> Vec<PageId> {
        tokenize(raw)
    }

    #[cfg(test)]
    mod validate_tests {

        use super::*;

        #[test]
        fn accepts_subset_with_repeats() {
            let available = pages("1 2 3 4");
            let references = pages("1 1 4 2 4 1");
            assert_eq!(
                validate(&available, references.clone()).unwrap(),
                references
            );
        }

        #[test]
        fn reports_every_invalid_occurrence() {
            let available = pages("1 2 3");
            match validate(&available, pages("1 9 2 x 9")) {
                Err(Error::InvalidReference { tokens }) => {
                    assert_eq!(tokens, pages("9 x 9"));
                }
                other => panic!("unexpected: {:?}", other),
            }
        }

        #[test]
        fn duplicate_available_pages() {
            let available = pages("1 1 2 2");
            assert!(validate(&available, pages("2 1")).is_ok());
        }
    }

    #[cfg(test)]
    mod parse_input_tests {

        use super::*;

        #[test]
        fn tokenizes_then_validates() {
            let input = parse_input(" 1 2 3 4 ", "1 2\t3\n4 1 2 5", "3");
            assert!(matches!(input, Err(Error::InvalidReference { .. })));

            let input = parse_input("1 2 3 4 5", "1 2 3 4 1 2 5", " 3 ").unwrap();
            assert_eq!(input.frame_count, 3);
            assert_eq!(input.references, pages("1 2 3 4 1 2 5"));
        }

        #[test]
        fn missing_fields() {
            assert!(matches!(
                parse_input("", "1", "1"),
                Err(Error::MissingInput(_))
            ));
            assert!(matches!(
                parse_input("1", "   ", "1"),
                Err(Error::MissingInput(_))
            ));
            assert!(matches!(
                parse_input("1", "1", ""),
                Err(Error::MissingInput(_))
            ));
        }

        #[test]
        fn bad_frame_counts() {
            for raw in ["0", "-2", "abc", "3abc", "2.5"] {
                assert!(
                    matches!(parse_input("1", "1", raw), Err(Error::MissingInput(_))),
                    "frame count {:?} should be rejected",
                    raw
                );
            }
        }

        #[test]
        fn oversized_frame_counts() {
            let max = MAX_FRAMES.to_string();
            assert_eq!(parse_input("1", "1", &max).unwrap().frame_count, MAX_FRAMES);

            let huge = (usize::MAX / 8).to_string();
            let overflow = String::from("99999999999999999999999");
            for raw in [(MAX_FRAMES + 1).to_string(), huge, overflow] {
                assert!(
                    matches!(parse_input("1", "1", &raw), Err(Error::InvalidConfig(_))),
                    "frame count {:?} should be rejected",
                    raw
                );
            }
        }

        #[test]
        fn missing_input_wins_over_invalid_reference() {
            assert!(matches!(
                parse_input("1", "9", "0"),
                Err(Error::MissingInput(_))
            ));
        }
    }
}
