//! Renders a Terraform plugin-framework data source from a [`ParsedQuery`]
//! and its resolved [`AccessorPath`]s.

use crate::AccessorPath;
use crate::ParsedQuery;
use crate::path_resolver::capitalize_first;
use handlebars::Handlebars;
use handlebars::handlebars_helper;
use serde::Serialize;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, EmitError>;

const TEMPLATE_NAME: &str = "data_source.go";
const TEMPLATE: &str = include_str!("../templates/data_source.go.hbs");

handlebars_helper!(title: |value: str| capitalize_first(value));

/// Holds the compiled data source template. Build one and reuse it for every
/// document in a batch.
#[derive(Debug)]
pub struct DataSourceEmitter {
    registry: Handlebars<'static>,
}

impl DataSourceEmitter {
    pub fn new() -> Result<Self> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_escape_fn(handlebars::no_escape);
        registry.register_helper("title", Box::new(title));
        registry
            .register_template_string(TEMPLATE_NAME, TEMPLATE)
            .map_err(|err| EmitError::InvalidTemplate(Box::new(err)))?;
        Ok(Self { registry })
    }

    /// Renders the Go source of the data source for `query`.
    ///
    /// The template branches on the query's lookup shape: single-entity
    /// lookups declare one attribute per field plus the required parameter,
    /// collection lookups declare a list of nested records. Every field must
    /// have a matching entry in `paths`.
    pub fn emit(
        &self,
        query: &ParsedQuery,
        paths: &[AccessorPath],
    ) -> Result<String> {
        let data = DataSourceTemplateData::new(query, paths)?;
        log::debug!(
            "Rendering `{}` with {} fields.",
            data.struct_name,
            data.fields.len(),
        );
        self.registry
            .render(TEMPLATE_NAME, &data)
            .map_err(|err| EmitError::Render {
                operation_name: query.operation_name().to_string(),
                err: Box::new(err),
            })
    }
}

#[derive(Debug, Serialize)]
struct DataSourceTemplateData<'a> {
    query_name: &'a str,
    object_name: &'a str,
    required: Option<&'a str>,
    struct_name: String,
    fields: Vec<TemplateField<'a>>,
}

impl<'a> DataSourceTemplateData<'a> {
    fn new(query: &'a ParsedQuery, paths: &'a [AccessorPath]) -> Result<Self> {
        let queries_by_name: HashMap<&str, &str> =
            paths.iter()
                .map(|path| (path.flat_name.as_str(), path.query.as_str()))
                .collect();

        let fields = query.fields()
            .iter()
            .map(|field| {
                let name = field.flat_name.as_str();
                let query = queries_by_name.get(name).copied().ok_or_else(|| {
                    EmitError::MissingAccessorPath {
                        flat_name: name.to_string(),
                    }
                })?;
                Ok(TemplateField {
                    name,
                    query,
                    terraform_type: field.scalar.terraform_type(),
                    value_constructor: field.scalar.value_constructor(),
                    schema_attribute: field.scalar.schema_attribute(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            query_name: query.operation_name(),
            object_name: query.root_object_name(),
            required: query.required_param(),
            struct_name: query.struct_name(),
            fields,
        })
    }
}

#[derive(Debug, Serialize)]
struct TemplateField<'a> {
    name: &'a str,
    query: &'a str,
    terraform_type: &'static str,
    value_constructor: &'static str,
    schema_attribute: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("the data source template is invalid: {0}")]
    InvalidTemplate(Box<handlebars::TemplateError>),

    #[error("no accessor path was resolved for field `{flat_name}`")]
    MissingAccessorPath {
        flat_name: String,
    },

    #[error("failed to render the `{operation_name}` data source: {err}")]
    Render {
        operation_name: String,
        err: Box<handlebars::RenderError>,
    },
}
