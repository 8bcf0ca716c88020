use serde::Serialize;

/// The scalar type of a flattened leaf field.
///
/// The query parser performs no type inference, so every field it produces
/// is a [`ScalarType::String`]. The other variants exist so that the emitted
/// Terraform types follow from the field rather than from the template.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize)]
pub enum ScalarType {
    Boolean,
    Float,
    Int,
    #[default]
    String,
}

impl ScalarType {
    pub fn graphql_name(&self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Float => "Float",
            Self::Int => "Int",
            Self::String => "String",
        }
    }

    /// The `terraform-plugin-framework` attribute value type.
    pub fn terraform_type(&self) -> &'static str {
        match self {
            Self::Boolean => "types.Bool",
            Self::Float => "types.Float64",
            Self::Int => "types.Int64",
            Self::String => "types.String",
        }
    }

    /// The function that wraps a raw Go value into [`Self::terraform_type`].
    pub fn value_constructor(&self) -> &'static str {
        match self {
            Self::Boolean => "types.BoolValue",
            Self::Float => "types.Float64Value",
            Self::Int => "types.Int64Value",
            Self::String => "types.StringValue",
        }
    }

    /// The schema attribute kind declared for fields of this type.
    pub fn schema_attribute(&self) -> &'static str {
        match self {
            Self::Boolean => "schema.BoolAttribute",
            Self::Float => "schema.Float64Attribute",
            Self::Int => "schema.Int64Attribute",
            Self::String => "schema.StringAttribute",
        }
    }
}
