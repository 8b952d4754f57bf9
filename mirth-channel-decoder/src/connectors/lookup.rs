//! Property scans over a connector's ordered property list
//!
//! Exports are not guaranteed to have unique keys, so every helper here has a
//! precise document-order rule. Descriptors depend on those rules when a key
//! is duplicated.

use crate::types::Property;

/// Value of the first property called `name`, even if it is empty.
pub fn first<'a>(properties: &'a [Property], name: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|p| p.name == name)
        .map(|p| p.value.as_str())
}

/// Value of the first property called `name` whose value is not empty.
pub fn first_non_empty<'a>(properties: &'a [Property], name: &str) -> Option<&'a str> {
    properties
        .iter()
        .find(|p| p.name == name && !p.value.is_empty())
        .map(|p| p.value.as_str())
}

/// Fill `N` slots from the property list.
///
/// `routes` maps a property name to the slot it writes. A later match
/// overwrites an earlier one. The scan stops right after the first property
/// that leaves every slot listed in `until` non-empty, so duplicates past that
/// point are never seen. Unmatched slots stay empty.
pub fn scan<'a, const N: usize>(
    properties: &'a [Property],
    routes: &[(&str, usize)],
    until: &[usize],
) -> [&'a str; N] {
    let mut slots = [""; N];
    for property in properties {
        if let Some(&(_, slot)) = routes.iter().find(|(name, _)| *name == property.name) {
            slots[slot] = property.value.as_str();
        }
        if until.iter().all(|&slot| !slots[slot].is_empty()) {
            break;
        }
    }
    slots
}

/// [`scan`] where slot `i` is fed by `names[i]` and the scan stops once every
/// slot is filled.
pub fn scan_all<'a, const N: usize>(properties: &'a [Property], names: [&str; N]) -> [&'a str; N] {
    let routes: Vec<(&str, usize)> = names.iter().copied().zip(0..N).collect();
    let until: Vec<usize> = (0..N).collect();
    scan(properties, &routes, &until)
}
