//! Recovers path components from flattened field names and renders them as
//! Go accessor expressions.
//!
//! Flattening joins nesting levels with [`SEPARATOR`], which also occurs
//! inside legitimate names such as `primary_address`. A plain split would
//! over-segment those, so [`segment_flat_name()`] consults the
//! [`ExceptionSet`] of multi-word names gathered while parsing: a separator is
//! kept inside the current component for as long as the component is an
//! incomplete piece of some known multi-word name.

use crate::AccessorPath;
use crate::ExceptionSet;
use crate::Field;
use crate::ParsedQuery;
use crate::SEPARATOR;
use smallvec::SmallVec;

/// Path components of a single flat name. Most queries nest only a handful of
/// levels deep.
pub type PathSegments = SmallVec<[String; 8]>;

/// Name of the connection wrapper component that gets an index applied.
const EDGES_COMPONENT: &str = "Edges";

/// Splits `flat_name` into its path components.
///
/// Scans one character at a time. On a separator, the accumulated word ends
/// a component unless some exception strictly extends it, in which case the
/// separator belongs to the name and is kept. The final word is always
/// emitted.
pub fn segment_flat_name(
    flat_name: &str,
    exceptions: &ExceptionSet,
) -> PathSegments {
    let mut segments = PathSegments::new();
    let mut current_word = String::new();

    for c in flat_name.chars() {
        if c == SEPARATOR && !exceptions.has_strict_extension(&current_word) {
            segments.push(std::mem::take(&mut current_word));
        } else {
            current_word.push(c);
        }
    }
    segments.push(current_word);

    log::trace!("Segmented `{flat_name}` into {segments:?}.");
    segments
}

/// Upper-cases the first character of `component`, leaving the rest as is.
pub fn capitalize_first(component: &str) -> String {
    let mut chars = component.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Builds the accessor expression for one field of `query`.
///
/// Each component is capitalized to match the generated response types, and
/// `Edges` gets the index appropriate to the query's
/// [`LookupShape`](crate::LookupShape).
pub fn resolve_accessor_path(query: &ParsedQuery, field: &Field) -> AccessorPath {
    let edges_accessor = query.shape().edges_accessor();
    let components: Vec<String> =
        segment_flat_name(&field.flat_name, query.exceptions())
            .iter()
            .map(|segment| {
                let component = capitalize_first(segment);
                if component == EDGES_COMPONENT {
                    edges_accessor.to_string()
                } else {
                    component
                }
            })
            .collect();

    AccessorPath {
        flat_name: field.flat_name.clone(),
        query: format!(
            "{}.{}",
            query.root_object_name(),
            components.join("."),
        ),
    }
}

/// Resolves every field of `query`, in field order.
pub fn resolve_accessor_paths(query: &ParsedQuery) -> Vec<AccessorPath> {
    query.fields()
        .iter()
        .map(|field| resolve_accessor_path(query, field))
        .collect()
}
