//! Show the projection for the current state

use anyhow::Result;
use chrono::Utc;
use farmgate::projection::calculate_projection;
use farmgate::report::render_report;
use farmgate::storage::Storage;
use farmgate::validation::has_validation_errors;

use super::{print_validation_warnings, Session};

pub fn cmd_show(storage: Storage, json: bool) -> Result<()> {
    let session = Session::open(storage);
    let inputs = session.state().inputs();
    let projection = calculate_projection(&inputs);

    if json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    let errors = session.validation_errors();
    if has_validation_errors(&errors) {
        print_validation_warnings(&errors);
        eprintln!("(fields with warnings count as 0 below)");
    }

    print!("{}", render_report(&projection, &inputs, Utc::now()));
    Ok(())
}
