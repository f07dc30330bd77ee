//! Label formatting for facet fields, filter chips and related-label groups.

use shared_types::LabelSettings;

/// Human-readable name for a field. Unknown fields come back unchanged.
pub fn display_label<'a>(field: &'a str, labels: &'a LabelSettings) -> &'a str {
    labels
        .overrides
        .get(field)
        .map(String::as_str)
        .unwrap_or(field)
}

/// Heading for a related-label group, e.g.
/// `efo_uri_has_disease_location_rel_labels_t` -> `Has disease location`.
///
/// Strips the configured prefix, drops the configured number of trailing
/// `_` segments, joins the rest with spaces and capitalises the first
/// character. Returns an empty string when nothing is left.
pub fn related_type_label(raw: &str, labels: &LabelSettings) -> String {
    let rest = raw.strip_prefix(labels.related_prefix.as_str()).unwrap_or(raw);
    let segments: Vec<&str> = rest.split('_').collect();
    let keep = segments.len().saturating_sub(labels.related_suffix_segments);
    capitalise(&segments[..keep].join(" "))
}

fn capitalise(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
