//! CSV export command

use std::fs;
use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use farmgate::export::{csv_file_name, projection_csv};
use farmgate::projection::calculate_projection;
use farmgate::storage::Storage;

use super::Session;

pub fn cmd_export(storage: Storage, out: Option<PathBuf>, json: bool) -> Result<()> {
    let session = Session::open(storage);
    let inputs = session.state().inputs();
    let projection = calculate_projection(&inputs);
    let now = Utc::now();
    let csv = projection_csv(&projection, &inputs, now)?;

    match out {
        Some(path) => {
            fs::write(&path, &csv)?;
            if json {
                println!("{}", serde_json::json!({ "written": path }));
            } else {
                eprintln!("Wrote {}", path.display());
            }
        }
        None => {
            if !json {
                eprintln!("(suggested file name: {})", csv_file_name(now));
            }
            print!("{csv}");
        }
    }
    Ok(())
}
