//! Demonstration harness for `userstore_core`.
//!
//! # Responsibility
//! - Run the sample lifecycle (schema, insert, list, update, delete) against
//!   the configured database file and print each result.

use log::info;
use serde::Serialize;
use userstore_core::{
    core_version, init_logging, SchemaStatus, SqliteUserRepository, StoreConfig, UserFields,
    UserService,
};

fn main() {
    let config = StoreConfig::from_env();
    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("file logging disabled: {err}");
    }
    info!(
        "event=demo_start module=cli status=start version={} db_path={}",
        core_version(),
        config.db_path.display()
    );

    let service = UserService::new(SqliteUserRepository::new(config.db_path));

    match service.initialize_schema() {
        SchemaStatus::Created => println!("User table created successfully"),
        SchemaStatus::NotCreated => println!("User table creation failed - maybe table exists"),
    }

    let sample = UserFields::new(
        "John Doe",
        "johndoe@gmail.com",
        "067765434567",
        "John Doe Street, Innsbruck",
        "Austria",
    );
    let Some(inserted) = service.create_user(&sample) else {
        println!("Inserted User: {}", render(&None::<()>));
        info!("event=demo_finish module=cli status=error reason=insert_failed");
        return;
    };
    println!("Inserted User: {}", render(&inserted));

    println!("All Users: {}", render(&service.list_users()));

    let replacement = UserFields::new(
        "Jane Doe",
        "janedoe@gmail.com",
        "0987654321",
        "456 Elm St",
        "Canada",
    );
    let updated = service.replace_fields(inserted.user_id, replacement);
    println!("Updated User: {}", render(&updated));

    let status = service.delete_user(inserted.user_id);
    println!("{}", serde_json::json!({ "status": status.message() }));

    info!(
        "event=demo_finish module=cli status=ok delete_ok={}",
        status.is_success()
    );
}

fn render<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| format!("<unprintable: {err}>"))
}
