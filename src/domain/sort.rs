//! Codec for the composite sort value transported by the sort selector.
//!
//! The selector submits a single string of the form `<field>.<direction>`
//! (`name.asc`, `mark.desc`), or an empty string for "no sort". The two
//! halves travel separately inside [`super::list_params::ListParams`], so
//! the split and the re-join live here as a pure pair.

/// Sort fields the list page offers.
pub const SORT_FIELDS: [&str; 2] = ["name", "mark"];

/// Sort directions the list page offers.
pub const SORT_DIRECTIONS: [&str; 2] = ["asc", "desc"];

/// Splits a composite sort value on the first `.`.
///
/// Either half degrades to `None` when empty; nothing is validated, so an
/// unknown field or direction passes through uninterpreted.
pub fn parse(value: &str) -> (Option<String>, Option<String>) {
    let (field, direction) = match value.split_once('.') {
        Some((field, direction)) => (field, Some(direction)),
        None => (value, None),
    };

    (
        Some(field).filter(|s| !s.is_empty()).map(str::to_string),
        direction.filter(|s| !s.is_empty()).map(str::to_string),
    )
}

/// Re-joins sort halves into the composite selector value.
///
/// Inverse of [`parse`] for every valid composite; a missing field renders
/// the "no sort" empty string.
pub fn format(field: Option<&str>, direction: Option<&str>) -> String {
    match (field, direction) {
        (Some(field), Some(direction)) => format!("{field}.{direction}"),
        (Some(field), None) => field.to_string(),
        (None, _) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_the_first_dot() {
        assert_eq!(
            parse("name.asc"),
            (Some("name".to_string()), Some("asc".to_string()))
        );
        assert_eq!(
            parse("mark.desc"),
            (Some("mark".to_string()), Some("desc".to_string()))
        );
        assert_eq!(
            parse("a.b.c"),
            (Some("a".to_string()), Some("b.c".to_string()))
        );
    }

    #[test]
    fn empty_halves_degrade_to_none() {
        assert_eq!(parse(""), (None, None));
        assert_eq!(parse("name"), (Some("name".to_string()), None));
        assert_eq!(parse("name."), (Some("name".to_string()), None));
        assert_eq!(parse(".asc"), (None, Some("asc".to_string())));
        assert_eq!(parse("."), (None, None));
    }

    #[test]
    fn format_inverts_parse_for_valid_composites() {
        let mut composites = vec![String::new()];
        for field in SORT_FIELDS {
            for direction in SORT_DIRECTIONS {
                composites.push(format!("{field}.{direction}"));
            }
        }

        for composite in composites {
            let (field, direction) = parse(&composite);
            assert_eq!(
                format(field.as_deref(), direction.as_deref()),
                composite
            );
        }
    }
}
