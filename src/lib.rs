//! # addpdfmetadata
//!
//! A Rust library (and CLI) for adding or updating the descriptive metadata
//! of a PDF document: Title, Author, Subject and Keywords.
//!
//! ## What this crate does
//!
//! 1. **Read metadata** — decodes the four managed fields (and any other
//!    entry) from the document's info dictionary, handling UTF-16BE, UTF-8
//!    and Latin-1 text strings.
//! 2. **Merge updates** — overwrites exactly the fields a new value was
//!    supplied for; everything else in the info dictionary, including
//!    unmanaged entries such as Creator or Producer, is left untouched.
//! 3. **Normalize keywords** — accepts a literal keyword string or a plain
//!    text file with comma/newline separated tokens and folds the latter
//!    into a single `"a, b, c"` string.
//! 4. **Write the result** — saves the document to a new path, refusing to
//!    replace an existing file unless overwriting was requested.
//!
//! Page objects are carried through unmodified and in order; only the info
//! dictionary differs between input and output.
//!
//! ## Quick example
//!
//! ```no_run
//! use addpdfmetadata::{MetadataUpdate, PdfMetadataEditor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut editor = PdfMetadataEditor::from_path("resume.pdf")?;
//!
//! let update = MetadataUpdate {
//!     title: Some("My Resume".into()),
//!     keywords: Some("rust, pdf, metadata".into()),
//!     ..Default::default()
//! };
//! editor.apply(&update)?;
//! editor.save("resume-tagged.pdf")?;
//!
//! println!("Title is now {:?}", editor.info().title);
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod editor;
mod info;
mod keywords;

pub use editor::PdfMetadataEditor;
pub use info::{decode_info_string, DocumentInfo, MetadataUpdate};
pub use keywords::{normalize_keywords, KeywordSource};

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`PdfMetadataEditor`].
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// When `true`, [`PdfMetadataEditor::save`] replaces an existing file at
    /// the output path instead of returning
    /// [`MetadataError::OutputExists`].
    pub overwrite: bool,

    /// When `true` (the default), info-dictionary entries outside the four
    /// managed fields — Creator, Producer, CreationDate and so on — survive
    /// [`PdfMetadataEditor::apply`] verbatim. When `false`, the merge
    /// restricts the output dictionary to the managed fields.
    pub preserve_extra_keys: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            overwrite: false,
            preserve_extra_keys: true,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum MetadataError {
    /// A filesystem I/O error occurred (e.g. when saving the document).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The underlying lopdf parser or writer returned an error.
    #[error("PDF error: {0}")]
    Pdf(#[from] lopdf::Error),

    /// The output path already exists and overwriting was not requested.
    /// The CLI maps exactly this variant to exit code 2.
    #[error("output file '{}' already exists and overwrite is disabled", .0.display())]
    OutputExists(PathBuf),

    /// The document is encrypted; this tool does not decrypt.
    #[error("the PDF is encrypted; decrypt it before editing its metadata")]
    EncryptedPdf,

    /// The keywords file could not be read.
    #[error("cannot read keywords file '{}': {source}", .path.display())]
    KeywordFileRead {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, MetadataError>;
