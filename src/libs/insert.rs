use crate::libs::schema::Spec;
use crate::libs::trim::strip_last_comma;
use log::debug;

/// Builds a parameterized `INSERT INTO` statement with one `?` per column,
/// in spec order. Datatypes are never inspected, so this cannot fail.
///
/// ```
/// use specsql::{Column, Spec, prepared_insert_sql};
///
/// let spec = Spec::new(vec![Column::int("id"), Column::text("name", 100)]);
/// assert_eq!(
///     prepared_insert_sql("users", &spec),
///     "INSERT INTO users( id, name ) values ( ?, ? )"
/// );
/// ```
pub fn prepared_insert_sql(table_name: &str, spec: &Spec) -> String {
    let names = spec.column_names();

    let mut name_parts: Vec<String> = names.iter().map(|name| format!("{},", name)).collect();
    strip_last_comma(&mut name_parts);

    let mut placeholders: Vec<String> = names.iter().map(|_| "?,".to_string()).collect();
    strip_last_comma(&mut placeholders);

    let mut cmd = Vec::with_capacity(name_parts.len() + placeholders.len() + 3);
    cmd.push(format!("INSERT INTO {}(", table_name));
    cmd.extend(name_parts);
    cmd.push(") values (".to_string());
    cmd.extend(placeholders);
    cmd.push(")".to_string());

    let sql = cmd.join(" ");
    debug!("prepared insert `{}` ({} columns): {}", table_name, names.len(), sql);
    sql
}
