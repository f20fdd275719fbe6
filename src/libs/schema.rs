use crate::libs::error::{Error, Result};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Column type tag. Only `Text`, `Bool` and `Int` map to SQL; any other
/// value read from configuration is kept as `Unknown` so the offending
/// value can be reported when a statement is generated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Datatype {
    Text,
    Bool,
    Int,
    Unknown(String),
}

impl Datatype {
    /// SQL column type for this datatype. `width` only matters for `Text`.
    pub fn sql_type(&self, width: i64) -> Result<String> {
        match self {
            Datatype::Text => Ok(format!("VARCHAR({})", width)),
            // booleans are stored as integers
            Datatype::Bool | Datatype::Int => Ok("INTEGER".to_string()),
            Datatype::Unknown(raw) => Err(Error::UnknownDatatype(raw.clone())),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Datatype::Unknown(_))
    }
}

impl From<String> for Datatype {
    fn from(raw: String) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "text" => Datatype::Text,
            "bool" => Datatype::Bool,
            "int" => Datatype::Int,
            _ => Datatype::Unknown(raw),
        }
    }
}

impl From<&str> for Datatype {
    fn from(raw: &str) -> Self {
        Datatype::from(raw.to_string())
    }
}

impl From<Datatype> for String {
    fn from(datatype: Datatype) -> Self {
        datatype.to_string()
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Datatype::Text => f.write_str("text"),
            Datatype::Bool => f.write_str("bool"),
            Datatype::Int => f.write_str("int"),
            Datatype::Unknown(raw) => f.write_str(raw),
        }
    }
}

/// One entry of a [`Spec`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub datatype: Datatype,
    /// VARCHAR length, ignored unless `datatype` is `Text`.
    #[serde(default)]
    pub width: i64,
}

impl Column {
    pub fn new(name: impl Into<String>, datatype: Datatype, width: i64) -> Self {
        Self {
            name: name.into(),
            datatype,
            width,
        }
    }

    pub fn text(name: impl Into<String>, width: i64) -> Self {
        Self::new(name, Datatype::Text, width)
    }

    pub fn int(name: impl Into<String>) -> Self {
        Self::new(name, Datatype::Int, 0)
    }

    pub fn bool(name: impl Into<String>) -> Self {
        Self::new(name, Datatype::Bool, 0)
    }
}

/// Ordered list of columns. Order carries into both generated statements.
///
/// Names are not checked for duplicates and widths are not range checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Spec {
    pub columns: Vec<Column>,
}

// A spec may be written as a bare array or as `{"columns": [...]}`.
impl<'de> Deserialize<'de> for Spec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let columns = match Value::deserialize(deserializer)? {
            Value::Object(mut map) => map
                .remove("columns")
                .ok_or_else(|| de::Error::missing_field("columns"))?,
            other => other,
        };
        Vec::<Column>::deserialize(columns)
            .map(Spec::new)
            .map_err(de::Error::custom)
    }
}

impl Spec {
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl FromIterator<Column> for Spec {
    fn from_iter<I: IntoIterator<Item = Column>>(iter: I) -> Self {
        Spec::new(iter.into_iter().collect())
    }
}

/// A spec together with the table it describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "TableDefRepr", into = "TableDefRepr")]
pub struct TableDef {
    pub table: String,
    pub spec: Spec,
}

#[derive(Serialize, Deserialize)]
struct TableDefRepr {
    table: String,
    columns: Vec<Column>,
}

impl From<TableDefRepr> for TableDef {
    fn from(repr: TableDefRepr) -> Self {
        TableDef {
            table: repr.table,
            spec: Spec::new(repr.columns),
        }
    }
}

impl From<TableDef> for TableDefRepr {
    fn from(def: TableDef) -> Self {
        TableDefRepr {
            table: def.table,
            columns: def.spec.columns,
        }
    }
}

impl TableDef {
    pub fn new(table: impl Into<String>, spec: Spec) -> Self {
        Self {
            table: table.into(),
            spec,
        }
    }

    pub fn create_table_sql(&self) -> Result<String> {
        crate::libs::create_table::create_table_sql(&self.table, &self.spec)
    }

    pub fn prepared_insert_sql(&self) -> String {
        crate::libs::insert::prepared_insert_sql(&self.table, &self.spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn datatype_parses_known_names_case_insensitively() {
        assert_eq!(Datatype::from("text"), Datatype::Text);
        assert_eq!(Datatype::from("BOOL"), Datatype::Bool);
        assert_eq!(Datatype::from("Int"), Datatype::Int);
        assert_eq!(
            Datatype::from("float"),
            Datatype::Unknown("float".to_string())
        );
    }

    #[test]
    fn sql_type_mapping() {
        assert_eq!(Datatype::Text.sql_type(255).unwrap(), "VARCHAR(255)");
        assert_eq!(Datatype::Bool.sql_type(255).unwrap(), "INTEGER");
        assert_eq!(Datatype::Int.sql_type(0).unwrap(), "INTEGER");

        let err = Datatype::from("blob").sql_type(0).unwrap_err();
        assert!(matches!(err, Error::UnknownDatatype(ref raw) if raw == "blob"));
        assert_eq!(err.to_string(), "unknown Datatype: \"blob\"");
    }

    #[test]
    fn column_names_keep_order_and_duplicates() {
        let spec: Spec = vec![Column::int("b"), Column::text("a", 10), Column::int("b")]
            .into_iter()
            .collect();
        assert_eq!(spec.column_names(), vec!["b", "a", "b"]);
        assert_eq!(spec.len(), 3);
        assert!(Spec::default().is_empty());
    }

    #[test]
    fn column_width_defaults_to_zero() {
        let col: Column = serde_json::from_str(r#"{"name":"flag","datatype":"bool"}"#).unwrap();
        assert_eq!(col, Column::bool("flag"));
    }

    #[test]
    fn negative_width_is_accepted() {
        let spec: Spec =
            serde_json::from_str(r#"[{"name":"n","datatype":"text","width":-5}]"#).unwrap();
        assert_eq!(spec.columns, vec![Column::text("n", -5)]);
        assert_eq!(Datatype::Text.sql_type(-5).unwrap(), "VARCHAR(-5)");
    }

    #[test]
    fn column_error_names_the_missing_field() {
        let err = serde_json::from_str::<Spec>(r#"[{"datatype":"int"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field `name`"), "{err}");

        let err = serde_json::from_str::<Spec>(r#"{"columns":[{"name":"a"}]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `datatype`"), "{err}");
    }

    #[test]
    fn object_without_columns_is_rejected() {
        let err = serde_json::from_str::<Spec>(r#"{"cols":[]}"#).unwrap_err();
        assert!(err.to_string().contains("missing field `columns`"), "{err}");
    }

    #[test]
    fn unknown_datatype_survives_serialization() {
        let col = Column::new("x", Datatype::from("uuid"), 0);
        let json = serde_json::to_string(&col).unwrap();
        assert_eq!(json, r#"{"name":"x","datatype":"uuid","width":0}"#);
    }
}
