//! Line-oriented parser for the restricted query-text convention used by the
//! generator.
//!
//! This is not a GraphQL grammar. Each line is trimmed and classified on its
//! own, in priority order:
//!
//! 1. `query <name>(...)` on the first line yields the operation name.
//! 2. The second line of the document names the root object. If it carries an
//!    argument bound to a `$variable`, the query is a single-entity lookup.
//! 3. A line ending in ` {` opens a block whose prefix is the text before it.
//! 4. A line equal to `}` closes the innermost block. Once fewer than
//!    [`QueryParserConfig::wrapper_depth`] separators remain in the cumulative
//!    prefix, the outer wrapper levels are being closed and parsing stops.
//! 5. Any other line inside an open block is a scalar leaf.

use crate::ExceptionSet;
use crate::Field;
use crate::LookupShape;
use crate::ParsedQuery;
use crate::SEPARATOR;
use std::collections::HashSet;

type Result<T> = std::result::Result<T, QueryParseError>;

const QUERY_KEYWORD: &str = "query";
const BLOCK_OPEN_SUFFIX: &str = " {";
const BLOCK_CLOSE: &str = "}";
const VARIABLE_SIGIL: char = '$';

/// The (0-based) line that names the root object and its lookup arguments.
const ROOT_OBJECT_LINE: usize = 1;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueryParserConfig {
    /// Number of separator characters that the outermost wrapper blocks (the
    /// `edges`/`node` pair for connection-style queries) contribute to the
    /// cumulative prefix. Closing a block while fewer than this many
    /// separators remain ends the parse. Separators are counted, not blocks:
    /// a wrapper block whose own name contains a separator counts more than
    /// once.
    pub wrapper_depth: usize,
}

impl QueryParserConfig {
    pub const DEFAULT_WRAPPER_DEPTH: usize = 2;
}

impl Default for QueryParserConfig {
    fn default() -> Self {
        Self {
            wrapper_depth: Self::DEFAULT_WRAPPER_DEPTH,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct QueryParser {
    config: QueryParserConfig,
}

impl QueryParser {
    pub fn new(config: QueryParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &QueryParserConfig {
        &self.config
    }

    /// Parses one query document in a single forward pass over its lines.
    ///
    /// The only fatal condition is a missing operation name. Lines that don't
    /// match any recognized shape are skipped.
    pub fn parse(&self, document: &str) -> Result<ParsedQuery> {
        let mut state = ParseState::default();
        for (line_index, line) in document.lines().enumerate() {
            let outcome = self.step(&mut state, line_index, line.trim());
            if outcome == LineOutcome::Stop {
                log::debug!(
                    "Wrapper levels closed at line {}; ignoring the rest of \
                    the document.",
                    line_index + 1,
                );
                break;
            }
        }
        state.finish()
    }

    fn step(
        &self,
        state: &mut ParseState,
        line_index: usize,
        line: &str,
    ) -> LineOutcome {
        let operation_line = strip_query_keyword(line)
            .filter(|_| line_index < ROOT_OBJECT_LINE);
        if let Some(rest) = operation_line {
            if let Some(name) = parse_operation_name(rest) {
                log::debug!("Found operation `{name}`.");
                state.operation_name = Some(name);
            }
        } else if line_index == ROOT_OBJECT_LINE {
            let (root_object_name, required_param) =
                parse_root_object_line(line);
            log::debug!(
                "Root object `{root_object_name}` (required parameter: \
                {required_param:?}).",
            );
            state.root_object_name = root_object_name;
            state.required_param = required_param;
        } else if let Some(prefix) = line.strip_suffix(BLOCK_OPEN_SUFFIX) {
            state.open_block(prefix);
        } else if line == BLOCK_CLOSE {
            return state.close_block(self.config.wrapper_depth);
        } else if !state.prefix_stack.is_empty() {
            state.record_leaf(line);
        }
        LineOutcome::Continue
    }
}

/// Parses `document` with the default [`QueryParserConfig`].
pub fn parse_query(document: &str) -> Result<ParsedQuery> {
    QueryParser::default().parse(document)
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum LineOutcome {
    Continue,
    Stop,
}

/// Everything accumulated during a single call to [`QueryParser::parse()`].
#[derive(Debug, Default)]
struct ParseState {
    operation_name: Option<String>,
    root_object_name: String,
    required_param: Option<String>,
    prefix_stack: Vec<String>,
    cumulative_prefix: String,
    fields: Vec<Field>,
    flat_names: HashSet<String>,
    exceptions: ExceptionSet,
}

impl ParseState {
    fn open_block(&mut self, prefix: &str) {
        log::trace!("Opening block `{prefix}`.");
        if prefix.contains(SEPARATOR) {
            self.exceptions.insert(prefix);
        }
        self.cumulative_prefix.push_str(prefix);
        self.cumulative_prefix.push(SEPARATOR);
        self.prefix_stack.push(prefix.to_string());
    }

    fn close_block(&mut self, wrapper_depth: usize) -> LineOutcome {
        let separator_count =
            self.cumulative_prefix.matches(SEPARATOR).count();
        if separator_count < wrapper_depth {
            self.cumulative_prefix.clear();
            return LineOutcome::Stop;
        }

        match self.prefix_stack.pop() {
            Some(prefix) => {
                log::trace!("Closing block `{prefix}`.");
                let remaining_len = self.cumulative_prefix.len()
                    .saturating_sub(prefix.len() + SEPARATOR.len_utf8());
                self.cumulative_prefix.truncate(remaining_len);
                LineOutcome::Continue
            },

            // More closing braces than opened blocks: the bottom of the
            // document.
            None => LineOutcome::Stop,
        }
    }

    fn record_leaf(&mut self, line: &str) {
        let Some(token) = line.split_whitespace().next() else {
            return;
        };
        let name = token.split_once('(').map_or(token, |(name, _)| name);
        if !is_graphql_name(name) {
            log::debug!("Skipping unrecognized line `{line}`.");
            return;
        }

        let flat_name = format!("{}{name}", self.cumulative_prefix);
        if !self.flat_names.insert(flat_name.clone()) {
            log::warn!(
                "Field `{flat_name}` is selected more than once; keeping the \
                first selection only.",
            );
            return;
        }

        if name.contains(SEPARATOR) {
            self.exceptions.insert(name);
        }
        log::trace!("Recorded field `{flat_name}`.");
        self.fields.push(Field::new(flat_name));
    }

    fn finish(self) -> Result<ParsedQuery> {
        let operation_name =
            self.operation_name.ok_or(QueryParseError::MissingQueryName)?;

        let shape = match self.required_param {
            Some(required_param) => LookupShape::SingleEntity { required_param },
            None => LookupShape::Collection,
        };

        Ok(ParsedQuery {
            operation_name,
            root_object_name: self.root_object_name,
            shape,
            fields: self.fields,
            exceptions: self.exceptions,
        })
    }
}

/// Returns the remainder of `line` if it starts with the `query` keyword
/// followed by whitespace.
fn strip_query_keyword(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(QUERY_KEYWORD)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

/// `device($device_name: String!) {` -> `device`
fn parse_operation_name(rest: &str) -> Option<String> {
    let token = rest.split_whitespace().next()?;
    let name = token.split_once('(').map_or(token, |(name, _)| name);
    if !is_graphql_name(name) {
        log::debug!("`{name}` is not an operation name.");
        return None;
    }
    Some(lowercase_first(name))
}

/// Splits the root object line into the root object name and, for
/// single-entity lookups, the name of the variable bound to its argument.
///
/// `InfraDevice(name__value: $device_name) {` -> (`InfraDevice`,
/// `Some("device_name")`)
fn parse_root_object_line(line: &str) -> (String, Option<String>) {
    let Some((head, tail)) = line.split_once(':') else {
        let root_object_name = line.split(' ').next().unwrap_or_default();
        return (root_object_name.to_string(), None);
    };

    let root_object_name =
        head.split_once('(').map_or(head, |(name, _)| name).trim();
    let argument = tail.split_once(':').map_or(tail, |(argument, _)| argument);
    let required_param = match argument.split_once(VARIABLE_SIGIL) {
        Some((_, variable)) => {
            let variable = variable.split(' ').next().unwrap_or_default();
            Some(variable.trim_end_matches(')').to_string())
                .filter(|name| !name.is_empty())
        },
        None => None,
    };
    if required_param.is_none() {
        log::warn!(
            "Root object line `{line}` has an argument but no `$variable`; \
            treating the query as a collection lookup.",
        );
    }

    (root_object_name.to_string(), required_param)
}

fn lowercase_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_graphql_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        },
        _ => false,
    }
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum QueryParseError {
    #[error("failed to parse GraphQL query: missing query name")]
    MissingQueryName,
}
