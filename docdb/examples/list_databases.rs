//! List every database and collection of an account.
//!
//! Reads `DOCDB_CONNECTION_STRING`, or `DOCDB_ENDPOINT` with `DOCDB_MASTER_KEY`.
//!
//! ```shell
//! DOCDB_CONNECTION_STRING="AccountEndpoint=...;AccountKey=...;" \
//!     RUST_LOG=debug cargo run --example list_databases
//! ```

use anyhow::Result;
use docdb::Session;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let session = Session::from_env()?;
    println!("account: {}", session.endpoint());

    for db in session.list_databases().await? {
        println!("database: {}", db.id());
        for coll in db.list_collections().await? {
            println!("  collection: {}", coll.id());
        }
    }
    Ok(())
}
