//! Survey Example
//!
//! A headless demo of the checkbox-group model:
//! - Group registration and document-order aggregation
//! - Coalesced settlement via `update_complete()`
//! - Snapshot-based reset
//! - Fluent validation
//!
//! Run with `cargo run --example form`; debug logs go to form.log.

use std::fs::File;

use log::LevelFilter;
use simplelog::{Config, WriteLogger};

use formkit::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), NamingError> {
    // Initialize file logging
    if let Ok(log_file) = File::create("form.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let scientists = CheckboxGroup::new("scientists[]").with_label("Favorite scientists");
    let archimedes = Checkbox::new("Archimedes").with_label("Archimedes");
    let bacon = Checkbox::with_checked("Francis Bacon", true).with_label("Francis Bacon");
    let curie = Checkbox::new("Marie Curie").with_label("Marie Curie");

    scientists.register(&archimedes);
    scientists.register(&bacon);
    scientists.register(&curie);
    scientists.update_complete().await?;
    println!("initial:      {}", scientists.serialized_value());

    archimedes.set_checked(true);
    curie.toggle();
    scientists.update_complete().await?;
    println!("after checks: {}", scientists.serialized_value());

    let result = Validator::new()
        .field(&scientists, "scientists")
        .min_checked(1, "Pick at least one scientist")
        .max_checked(2, "Pick at most two")
        .validate();
    if let Some(error) = result.first_error() {
        println!("validation:   {} - {}", error.field_name, error.message);
    } else {
        println!("validation:   ok");
    }

    scientists.reset_group();
    println!("after reset:  {}", scientists.serialized_value());

    for event in scientists.take_events() {
        println!("event:        {:?} from {}", event.kind, event.widget_id);
    }

    Ok(())
}
