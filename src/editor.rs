use crate::info::MANAGED_KEYS;
use crate::{decode_info_string, DocumentInfo, EditorConfig, MetadataError, MetadataUpdate, Result};
use log::debug;
use lopdf::{Dictionary, Document, Object};
use std::io::Write;
use std::path::Path;

// ── PdfMetadataEditor ────────────────────────────────────────────────────────

/// Entry point for reading and updating a PDF document's info dictionary.
///
/// The editor owns a fully parsed [`lopdf::Document`]. Page objects are
/// never touched: a merge rewrites at most the info dictionary, and
/// [`save`](PdfMetadataEditor::save) re-serializes the document with its
/// pages unmodified and in their original order.
///
/// # Creating an editor
///
/// ```no_run
/// use addpdfmetadata::{EditorConfig, PdfMetadataEditor};
///
/// // From a file path
/// let editor = PdfMetadataEditor::from_path("report.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("report.pdf").unwrap();
/// let editor = PdfMetadataEditor::from_bytes(&bytes).unwrap();
///
/// // With custom configuration
/// let config = EditorConfig {
///     overwrite: true,
///     ..Default::default()
/// };
/// let editor = PdfMetadataEditor::with_config("report.pdf", config).unwrap();
/// ```
#[derive(Debug)]
pub struct PdfMetadataEditor {
    document: Document,
    config: EditorConfig,
}

impl PdfMetadataEditor {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, EditorConfig::default())
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_document(Document::load_mem(data)?, EditorConfig::default())
    }

    /// Load a PDF from the file system with a custom [`EditorConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: EditorConfig) -> Result<Self> {
        Self::from_document(Document::load(path)?, config)
    }

    fn from_document(document: Document, config: EditorConfig) -> Result<Self> {
        if document.is_encrypted() {
            return Err(MetadataError::EncryptedPdf);
        }
        debug!("loaded PDF with {} page(s)", document.get_pages().len());
        Ok(Self { document, config })
    }

    // ── Reading ───────────────────────────────────────────────────────────────

    /// The current values of the four managed fields.
    ///
    /// Fields the document does not carry are `None`. Values are decoded
    /// with [`decode_info_string`]; indirect references are resolved.
    pub fn info(&self) -> DocumentInfo {
        DocumentInfo {
            title: self.entry(b"Title"),
            author: self.entry(b"Author"),
            subject: self.entry(b"Subject"),
            keywords: self.entry(b"Keywords"),
        }
    }

    /// Every decodable info-dictionary entry as `(key, value)` pairs, in
    /// dictionary order — managed and unmanaged keys alike.
    ///
    /// Entries whose value is neither a string nor a name (nor a reference
    /// to one) are skipped. An absent info dictionary yields an empty list.
    pub fn info_entries(&self) -> Vec<(String, String)> {
        let mut entries = Vec::new();
        if let Some(dict) = self.info_dict() {
            for (key, value) in dict.iter() {
                if let Some(text) = self.decode_entry(value) {
                    entries.push((String::from_utf8_lossy(key).into_owned(), text));
                }
            }
        }
        entries
    }

    /// Number of pages in the document.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    // ── Merging ───────────────────────────────────────────────────────────────

    /// Merge `update` into the info dictionary.
    ///
    /// For each managed field: a `Some` value overwrites the entry, a
    /// `None` leaves it alone. The merge never deletes an entry, and
    /// entries outside the managed four are preserved verbatim unless
    /// [`EditorConfig::preserve_extra_keys`] is `false`.
    ///
    /// A document without an info dictionary gets one the first time a
    /// value is actually written; an all-`None` update leaves such a
    /// document entirely unchanged.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use addpdfmetadata::{MetadataUpdate, PdfMetadataEditor};
    ///
    /// let mut editor = PdfMetadataEditor::from_path("report.pdf").unwrap();
    /// editor.apply(&MetadataUpdate {
    ///     author: Some("Data Team".into()),
    ///     ..Default::default()
    /// }).unwrap();
    /// assert_eq!(editor.info().author.as_deref(), Some("Data Team"));
    /// ```
    pub fn apply(&mut self, update: &MetadataUpdate) -> Result<()> {
        // An all-None update only matters in restrict mode, and even then
        // only when a dictionary exists to restrict.
        if update.is_empty() && (self.config.preserve_extra_keys || self.info_dict().is_none()) {
            return Ok(());
        }

        let preserve = self.config.preserve_extra_keys;
        let info = self.ensure_info_dict()?;

        for (key, value) in update.fields() {
            if let Some(value) = value {
                info.set(key, Object::string_literal(value));
            }
        }

        if !preserve {
            let mut restricted = Dictionary::new();
            for key in MANAGED_KEYS {
                if let Ok(value) = info.get(key) {
                    restricted.set(key, value.clone());
                }
            }
            *info = restricted;
        }

        Ok(())
    }

    // ── Writing ───────────────────────────────────────────────────────────────

    /// Save the document to `path`.
    ///
    /// Fails with [`MetadataError::OutputExists`] when the path already
    /// exists and [`EditorConfig::overwrite`] is `false`; the check happens
    /// before anything is written, so the existing file stays intact.
    pub fn save<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !self.config.overwrite {
            return Err(MetadataError::OutputExists(path.to_path_buf()));
        }
        // save() hands back the open file handle; dropping it here closes it.
        self.document.save(path)?;
        debug!("wrote updated document to {}", path.display());
        Ok(())
    }

    /// Serialize the document into `target` (no overwrite check applies).
    pub fn write_to<W: Write>(&mut self, target: &mut W) -> Result<()> {
        self.document.save_to(target)?;
        Ok(())
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`EditorConfig`].
    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    // ── Private: info-dictionary plumbing ────────────────────────────────────

    /// The info dictionary, wherever it lives: behind a trailer `/Info`
    /// reference (the usual layout) or inlined in the trailer itself.
    fn info_dict(&self) -> Option<&Dictionary> {
        match self.document.trailer.get(b"Info").ok()? {
            Object::Reference(id) => self.document.get_object(*id).ok()?.as_dict().ok(),
            Object::Dictionary(dict) => Some(dict),
            _ => None,
        }
    }

    /// A single decoded entry of the info dictionary.
    fn entry(&self, key: &[u8]) -> Option<String> {
        self.decode_entry(self.info_dict()?.get(key).ok()?)
    }

    /// Decode one entry value; entry values may themselves be indirect
    /// references.
    fn decode_entry(&self, value: &Object) -> Option<String> {
        let value = match value {
            Object::Reference(id) => self.document.get_object(*id).ok()?,
            other => other,
        };
        match value {
            Object::String(bytes, _) => Some(decode_info_string(bytes)),
            Object::Name(name) => Some(String::from_utf8_lossy(name).into_owned()),
            _ => None,
        }
    }

    /// Mutable access to the info dictionary, creating an empty one as an
    /// indirect object when the document has none.
    fn ensure_info_dict(&mut self) -> Result<&mut Dictionary> {
        let existing_id = self
            .document
            .trailer
            .get(b"Info")
            .and_then(|info| info.as_reference())
            .ok();

        if let Some(id) = existing_id {
            let object = self.document.get_object_mut(id)?;
            return Ok(object.as_dict_mut()?);
        }

        // Some producers inline the dictionary directly in the trailer.
        if matches!(self.document.trailer.get(b"Info"), Ok(Object::Dictionary(_))) {
            let object = self.document.trailer.get_mut(b"Info")?;
            return Ok(object.as_dict_mut()?);
        }

        let id = self.document.add_object(Dictionary::new());
        self.document.trailer.set("Info", Object::Reference(id));
        debug!("document had no /Info dictionary; created object {id:?}");
        let object = self.document.get_object_mut(id)?;
        Ok(object.as_dict_mut()?)
    }
}
