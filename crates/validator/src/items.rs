//! Recursive array-item validation.
//!
//! Applies the item type's primary check to every element of an array
//! value, producing one [`Outcome`] per element with paths indexed by
//! the element's original position.

use crate::descriptor::Descriptor;
use crate::outcome::Outcome;

/// Validates every element of an array descriptor's value.
///
/// Non-array input yields an empty result, vacuously valid at this
/// layer, because the sequence-kind check of the owning descriptor
/// already reports non-arrays. Elements are visited left to right and
/// the result preserves that order, so the outcome at position `i`
/// belongs to the element at index `i`.
#[must_use]
pub fn check_items(descriptor: &Descriptor<'_>) -> Vec<Outcome> {
    let Some(elements) = descriptor.to_validate().as_array() else {
        return Vec::new();
    };
    // Descriptor::build rejects array rules without an item type.
    let Some(item) = descriptor.items() else {
        return Vec::new();
    };

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            Descriptor::for_item(
                descriptor.location(),
                descriptor.name(),
                index,
                item.ty,
                element,
            )
            .primary()
        })
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use turnstile_schema::{ItemRule, ParamLocation, ParamType};

    use super::*;
    use crate::foundation::{ErrorKind, ValidationError};

    fn array_descriptor<'r>(items: &'r ItemRule, raw: &serde_json::Value) -> Descriptor<'r> {
        Descriptor::build(
            ParamLocation::Query,
            "another_field",
            ParamType::Array,
            Some(items),
            raw,
        )
        .unwrap()
    }

    #[test]
    fn outcomes_keep_original_element_indices() {
        let items = ItemRule::new(ParamType::Integer);
        let raw = json!(["a string", 2, "another string"]);
        let descriptor = array_descriptor(&items, &raw);

        let outcomes = check_items(&descriptor);
        assert_eq!(
            outcomes,
            vec![
                Outcome::Failed(ValidationError::new(
                    ErrorKind::NotANumber,
                    "query.another_field[0]",
                )),
                Outcome::Passed,
                Outcome::Failed(ValidationError::new(
                    ErrorKind::NotANumber,
                    "query.another_field[2]",
                )),
            ]
        );
    }

    #[test]
    fn elements_are_coerced_against_the_item_type() {
        let items = ItemRule::new(ParamType::Integer);
        let raw = json!(["1", "2"]);
        let descriptor = array_descriptor(&items, &raw);

        assert_eq!(
            check_items(&descriptor),
            vec![Outcome::Passed, Outcome::Passed]
        );
    }

    #[test]
    fn non_array_input_is_vacuously_valid_here() {
        let items = ItemRule::new(ParamType::Integer);
        let raw = json!("not an array");
        let descriptor = array_descriptor(&items, &raw);

        assert_eq!(check_items(&descriptor), Vec::new());
    }
}
