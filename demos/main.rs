use specsql::{TableDef, table_spec};
use sqlx::{Connection, SqliteConnection};

#[table_spec(table_name = "userx_table")]
#[derive(Debug)]
pub struct User {
    pub id: i64,
    #[column(width = 100)]
    pub name: String,
    #[column(width = 255)]
    pub email: String,
    pub admin: bool,
}

// Usage: cargo run --example main [demos/users.json]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let def = match std::env::args().nth(1) {
        Some(path) => TableDef::from_json_file(path)?,
        None => User::table_def(),
    };

    let create = def.create_table_sql()?;
    let insert = def.prepared_insert_sql();
    println!("{}\n", create);
    println!("{}\n", insert);

    let mut conn = SqliteConnection::connect("sqlite::memory:").await?;
    sqlx::query(&create).execute(&mut conn).await?;

    if def.table == User::table_name() {
        let ada = User {
            id: 1,
            name: "Ada".into(),
            email: "ada@mail.com".into(),
            admin: true,
        };
        sqlx::query(&insert)
            .bind(ada.id)
            .bind(&ada.name)
            .bind(&ada.email)
            .bind(ada.admin)
            .execute(&mut conn)
            .await?;
        println!("inserted {:?}", ada);
    }

    Ok(())
}
