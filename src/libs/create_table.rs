use crate::libs::error::Result;
use crate::libs::schema::Spec;
use crate::libs::trim::strip_last_comma;
use log::{debug, error};

/// Builds the `CREATE TABLE IF NOT EXISTS` statement for `spec`.
///
/// Columns appear one per line in spec order. Fails with
/// [`Error::UnknownDatatype`](crate::Error::UnknownDatatype) on the first
/// column whose datatype has no SQL mapping; nothing is emitted in that case.
///
/// ```
/// use specsql::{Column, Spec, create_table_sql};
///
/// let spec = Spec::new(vec![Column::int("id"), Column::text("name", 100)]);
/// let sql = create_table_sql("users", &spec).unwrap();
/// assert_eq!(
///     sql,
///     "CREATE TABLE IF NOT EXISTS `users` (\n`id` INTEGER NOT NULL,\n`name` VARCHAR(100) NOT NULL\n);"
/// );
/// ```
pub fn create_table_sql(table_name: &str, spec: &Spec) -> Result<String> {
    let mut column_lines = Vec::with_capacity(spec.len());
    for col in &spec.columns {
        let sql_type = col.datatype.sql_type(col.width).inspect_err(|e| {
            error!("column `{}` of table `{}`: {}", col.name, table_name, e);
        })?;
        column_lines.push(format!("`{}` {} NOT NULL,", col.name, sql_type));
    }
    strip_last_comma(&mut column_lines);

    let mut rows = Vec::with_capacity(column_lines.len() + 2);
    rows.push(format!("CREATE TABLE IF NOT EXISTS `{}` (", table_name));
    rows.extend(column_lines);
    rows.push(");".to_string());

    let sql = rows.join("\n");
    debug!("create table `{}` ({} columns): {}", table_name, spec.len(), sql);
    Ok(sql)
}

/// Same as [`create_table_sql`] but panics on an unknown datatype, for
/// callers that treat a bad spec as a fatal configuration defect.
pub fn create_table_sql_or_panic(table_name: &str, spec: &Spec) -> String {
    match create_table_sql(table_name, spec) {
        Ok(sql) => sql,
        Err(e) => panic!("{}", e),
    }
}
