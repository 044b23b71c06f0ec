use crate::AstConversionError;
use crate::loc::SourceLocation;
use indexmap::IndexMap;
use libgql_parser::ast;
use serde_json::Value as JsonValue;

type Result<T> = std::result::Result<T, AstConversionError>;

/// A GraphQL input literal as written in a document or schema (argument
/// values, default values, directive arguments).
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Enum(String),
    Float(f64),
    Int(i64),
    List(Vec<Value>),
    Null,
    Object(IndexMap<String, Value>),
    String(String),
    Variable(String),
}
impl Value {
    pub(crate) fn from_ast(ast_value: &ast::Value<'_>) -> Result<Self> {
        Ok(match ast_value {
            ast::Value::Boolean(b) => Self::Boolean(b.value),
            ast::Value::Enum(e) => Self::Enum(e.value.to_string()),
            ast::Value::Float(f) => Self::Float(f.raw.parse().map_err(|_| {
                AstConversionError::InvalidFloat {
                    raw: f.raw.to_string(),
                    location: SourceLocation::from_span(&f.span),
                }
            })?),
            ast::Value::Int(i) => Self::Int(i.raw.parse().map_err(|_| {
                AstConversionError::IntOverflow {
                    raw: i.raw.to_string(),
                    location: SourceLocation::from_span(&i.span),
                }
            })?),
            ast::Value::List(list) => Self::List(
                list.values
                    .iter()
                    .map(Self::from_ast)
                    .collect::<Result<Vec<_>>>()?,
            ),
            ast::Value::Null(_) => Self::Null,
            ast::Value::Object(obj) => {
                let mut fields = IndexMap::with_capacity(obj.fields.len());
                for field in &obj.fields {
                    let name = field.name.as_str();
                    if fields.contains_key(name) {
                        return Err(AstConversionError::DuplicateObjectField {
                            field_name: name.to_string(),
                            location: SourceLocation::from_span(&field.span),
                        });
                    }
                    fields.insert(name.to_string(), Self::from_ast(&field.value)?);
                }
                Self::Object(fields)
            },
            ast::Value::String(s) => Self::String(s.value.clone()),
            ast::Value::Variable(var) => Self::Variable(var.name.as_str().to_string()),
        })
    }

    pub fn as_variable_name(&self) -> Option<&str> {
        if let Self::Variable(name) = self {
            Some(name.as_str())
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Every variable name referenced anywhere within this value.
    pub fn variable_names(&self) -> Vec<&str> {
        let mut names = vec![];
        self.collect_variable_names(&mut names);
        names
    }

    fn collect_variable_names<'a>(&'a self, names: &mut Vec<&'a str>) {
        match self {
            Self::Variable(name) => names.push(name.as_str()),
            Self::List(items) => items
                .iter()
                .for_each(|item| item.collect_variable_names(names)),
            Self::Object(fields) => fields
                .values()
                .for_each(|value| value.collect_variable_names(names)),
            _ => (),
        }
    }

    /// Converts a constant value to JSON, substituting variable references
    /// from `variables` (missing variables become `null`).
    pub fn to_json(&self, variables: &serde_json::Map<String, JsonValue>) -> JsonValue {
        match self {
            Self::Boolean(b) => JsonValue::Bool(*b),
            Self::Enum(name) | Self::String(name) => JsonValue::String(name.clone()),
            Self::Float(f) => serde_json::Number::from_f64(*f)
                .map(JsonValue::Number)
                .unwrap_or(JsonValue::Null),
            Self::Int(i) => JsonValue::from(*i),
            Self::List(items) => JsonValue::Array(
                items.iter().map(|item| item.to_json(variables)).collect(),
            ),
            Self::Null => JsonValue::Null,
            Self::Object(fields) => JsonValue::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), value.to_json(variables)))
                    .collect(),
            ),
            Self::Variable(name) => variables.get(name).cloned().unwrap_or(JsonValue::Null),
        }
    }
}
impl std::fmt::Display for Value {
    /// Renders GraphQL literal syntax, e.g. `{limit: 10, tags: ["a"]}`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Enum(name) => write!(f, "{name}"),
            Self::Float(value) => write!(f, "{value:?}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            },
            Self::Null => write!(f, "null"),
            Self::Object(fields) => {
                write!(f, "{{")?;
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{name}: {value}")?;
                }
                write!(f, "}}")
            },
            Self::String(s) => write!(f, "{}", JsonValue::String(s.clone())),
            Self::Variable(name) => write!(f, "${name}"),
        }
    }
}
