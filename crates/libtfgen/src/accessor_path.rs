use serde::Serialize;

/// A flattened field name paired with the dotted/indexed Go expression that
/// reads the field's value out of the decoded query response.
///
/// For example, `edges_node_name_value` in a single-entity lookup of
/// `InfraDevice` pairs with `InfraDevice.Edges[0].Node.Name.Value`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AccessorPath {
    pub flat_name: String,
    pub query: String,
}
