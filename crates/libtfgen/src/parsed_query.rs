use crate::ExceptionSet;
use crate::ScalarType;
use serde::Serialize;

/// The result of parsing one query document.
///
/// Constructed once by [`QueryParser::parse()`](crate::QueryParser::parse)
/// and read-only afterwards.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct ParsedQuery {
    pub(crate) operation_name: String,
    pub(crate) root_object_name: String,
    pub(crate) shape: LookupShape,
    pub(crate) fields: Vec<Field>,
    pub(crate) exceptions: ExceptionSet,
}

impl ParsedQuery {
    /// The query's operation name with its first character lower-cased.
    pub fn operation_name(&self) -> &str {
        &self.operation_name
    }

    /// The top-level response field under which all entity data nests.
    pub fn root_object_name(&self) -> &str {
        &self.root_object_name
    }

    pub fn shape(&self) -> &LookupShape {
        &self.shape
    }

    /// Name of the scalar argument that selects a single entity, if any.
    pub fn required_param(&self) -> Option<&str> {
        self.shape.required_param()
    }

    /// Every leaf field in document order.
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn exceptions(&self) -> &ExceptionSet {
        &self.exceptions
    }

    /// Name of the generated Go data source type.
    pub fn struct_name(&self) -> String {
        format!("{}DataSource", self.operation_name)
    }
}

/// Whether a query looks up exactly one entity or lists a collection.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LookupShape {
    /// The query is filtered by a required variable and is expected to return
    /// exactly one edge.
    SingleEntity {
        required_param: String,
    },

    /// The query returns zero or more edges that are iterated over.
    Collection,
}

impl LookupShape {
    pub fn required_param(&self) -> Option<&str> {
        match self {
            Self::SingleEntity { required_param } => Some(required_param),
            Self::Collection => None,
        }
    }

    /// The replacement for an `Edges` path component: a fixed `[0]` index for
    /// single-entity lookups, or the loop variable `i` for collections.
    pub fn edges_accessor(&self) -> &'static str {
        match self {
            Self::SingleEntity { .. } => "Edges[0]",
            Self::Collection => "Edges[i]",
        }
    }
}

/// One flattened scalar leaf of the query.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    /// Every enclosing block prefix and the leaf name, joined with
    /// [`SEPARATOR`](crate::SEPARATOR).
    pub flat_name: String,
    pub scalar: ScalarType,
}

impl Field {
    pub fn new(flat_name: impl Into<String>) -> Self {
        Self {
            flat_name: flat_name.into(),
            scalar: ScalarType::String,
        }
    }
}
