//! Query documents shared across tests.

/// A single-entity lookup with multi-word block and leaf names, and a leaf
/// that follows a closed nested block.
pub const DEVICE_QUERY: &str = "\
query device($device_name: String!) {
  InfraDevice(name__value: $device_name) {
    edges {
      node {
        id
        name {
          value
        }
        role {
          value
        }
        primary_address {
          node {
            id
          }
        }
        status_id
      }
    }
  }
}
";

/// A collection lookup: no arguments on the root object line.
pub const DEVICE_LIST_QUERY: &str = "\
query DeviceList {
  InfraDevice {
    edges {
      node {
        id
        name {
          value
        }
      }
    }
  }
}
";

/// A collection lookup that selects no leaf fields at all.
pub const EMPTY_COLLECTION_QUERY: &str = "\
query tags {
  InfraTag {
  }
}
";

pub fn flat_names(query: &crate::ParsedQuery) -> Vec<&str> {
    query.fields()
        .iter()
        .map(|field| field.flat_name.as_str())
        .collect()
}
