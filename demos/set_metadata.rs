//! Set a PDF's title and keywords and write the result to a new file.
//!
//! Usage:
//!   cargo run --example set_metadata -- input.pdf output.pdf "My Title"

use addpdfmetadata::{EditorConfig, MetadataUpdate, PdfMetadataEditor};
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 4 {
        eprintln!("Usage: {} <input_pdf> <output_pdf> <title>", args[0]);
        process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];
    let title = &args[3];

    // Overwrite the output if a previous run left one behind.
    let config = EditorConfig {
        overwrite: true,
        ..Default::default()
    };

    let mut editor = PdfMetadataEditor::with_config(input, config).unwrap_or_else(|e| {
        eprintln!("Cannot load PDF: {e}");
        process::exit(1);
    });

    match editor.info().title {
        Some(old) => println!("Replacing title {old:?}"),
        None => println!("No title set yet"),
    }

    let update = MetadataUpdate {
        title: Some(title.clone()),
        keywords: Some("edited, demo".into()),
        ..Default::default()
    };

    editor.apply(&update).unwrap_or_else(|e| {
        eprintln!("Update failed: {e}");
        process::exit(1);
    });

    editor.save(output).unwrap_or_else(|e| {
        eprintln!("Save failed: {e}");
        process::exit(1);
    });

    println!("✓ Wrote {output} with title {title:?}");
}
