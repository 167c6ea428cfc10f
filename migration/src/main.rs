use std::{fs, path::Path};
use util::config;

mod runner;

#[tokio::main]
async fn main() {
    let db_path = config::database_path();
    let url = config::database_url();
    let is_file = !config::is_database_dsn(&db_path);

    match std::env::args().nth(1).as_deref() {
        Some("clean") => remove_db_file(&db_path, is_file),
        Some("fresh") => {
            remove_db_file(&db_path, is_file);
            create_db_dir(&db_path, is_file);
            runner::run_all_migrations(&url).await;
        }
        _ => {
            create_db_dir(&db_path, is_file);
            runner::run_all_migrations(&url).await;
        }
    }
}

fn remove_db_file(path: &str, is_file: bool) {
    if !is_file {
        println!("DATABASE_PATH is a DSN, drop the database on the server instead");
        return;
    }

    let db_path = Path::new(path);
    if db_path.exists() {
        fs::remove_file(db_path).expect("Failed to delete DB file");
        println!("Deleted DB: {}", db_path.display());
    } else {
        println!("DB file does not exist: {}", db_path.display());
    }
}

fn create_db_dir(path: &str, is_file: bool) {
    if !is_file {
        return;
    }
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent).expect("Failed to create DB directory");
    }
}
