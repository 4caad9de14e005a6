//! Print every /Info entry of a PDF, plus its page count.
//!
//! Usage:
//!   cargo run --example show_metadata -- thesis.pdf

use addpdfmetadata::PdfMetadataEditor;
use std::{env, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <pdf_file>", args[0]);
        process::exit(1);
    }

    let pdf_path = &args[1];

    let editor = PdfMetadataEditor::from_path(pdf_path).unwrap_or_else(|e| {
        eprintln!("Cannot load PDF: {e}");
        process::exit(1);
    });

    println!("{pdf_path}: {} page(s)", editor.page_count());

    let entries = editor.info_entries();
    if entries.is_empty() {
        println!("  No document information dictionary.");
        return;
    }

    for (key, value) in entries {
        println!("  {key:<10}: {value}");
    }
}
