use crate::domain::contact::Contact;

/// Derive the display view of the collection: contacts whose name
/// contains the term (case-insensitive) or whose phone number contains
/// it verbatim, sorted ascending by name. An empty term matches every
/// contact. Pure; the canonical order of the input is never touched.
pub fn filter_and_sort<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let needle = term.to_lowercase();

    let mut matches: Vec<&Contact> = contacts
        .iter()
        .filter(|cont| {
            cont.name.to_lowercase().contains(&needle) || cont.phone_num.contains(term)
        })
        .collect();

    // Stable sort, so equal names keep insertion order.
    matches.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));

    matches
}
