use crate::libs::error::Result;
use crate::libs::schema::{Spec, TableDef};
use log::{info, warn};
use serde_json::Value;
use std::fs;
use std::path::Path;

impl Spec {
    /// Parses a spec from JSON: either a bare array of columns or an object
    /// with a `columns` array.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let spec: Spec = serde_json::from_str(json)?;
        warn_unknown(&spec);
        Ok(spec)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let spec: Spec = serde_json::from_value(value)?;
        warn_unknown(&spec);
        Ok(spec)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let spec = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!("loaded spec with {} columns from {}", spec.len(), path.display());
        Ok(spec)
    }
}

impl TableDef {
    /// Parses `{"table": "...", "columns": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let def: TableDef = serde_json::from_str(json)?;
        warn_unknown(&def.spec);
        Ok(def)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let def = Self::from_json_str(&fs::read_to_string(path)?)?;
        info!(
            "loaded table `{}` with {} columns from {}",
            def.table,
            def.spec.len(),
            path.display()
        );
        Ok(def)
    }
}

// Unknown datatypes load fine; they only fail once a CREATE TABLE is built.
fn warn_unknown(spec: &Spec) {
    for col in spec.columns.iter().filter(|c| !c.datatype.is_known()) {
        warn!("column `{}` has unknown datatype {:?}", col.name, col.datatype.to_string());
    }
}
