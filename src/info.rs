// ── Managed fields ───────────────────────────────────────────────────────────

/// The four info-dictionary keys this crate manages.
pub(crate) const MANAGED_KEYS: [&[u8]; 4] = [b"Title", b"Author", b"Subject", b"Keywords"];

// ── DocumentInfo ─────────────────────────────────────────────────────────────

/// A decoded view of the four managed info-dictionary fields.
///
/// Returned by [`crate::PdfMetadataEditor::info`]. A `None` field means the
/// document's info dictionary has no such entry (or no info dictionary
/// exists at all).
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    /// The `/Title` entry.
    pub title: Option<String>,

    /// The `/Author` entry.
    pub author: Option<String>,

    /// The `/Subject` entry.
    pub subject: Option<String>,

    /// The `/Keywords` entry, conventionally a single comma-separated string.
    pub keywords: Option<String>,
}

impl DocumentInfo {
    /// Returns `true` when none of the four managed fields is present.
    ///
    /// ```
    /// # use addpdfmetadata::DocumentInfo;
    /// assert!(DocumentInfo::default().is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
    }
}

// ── MetadataUpdate ───────────────────────────────────────────────────────────

/// New values for the managed fields, applied by
/// [`crate::PdfMetadataEditor::apply`].
///
/// `Some` overwrites the corresponding entry; `None` leaves it exactly as it
/// was — including absent. Fields are independent of one another, so a
/// partial update touches nothing it does not name:
///
/// ```
/// use addpdfmetadata::MetadataUpdate;
///
/// let update = MetadataUpdate {
///     title: Some("Quarterly Report".into()),
///     ..Default::default()
/// };
/// assert!(!update.is_empty());
/// assert!(update.author.is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataUpdate {
    /// New `/Title`, or `None` to keep the existing one.
    pub title: Option<String>,

    /// New `/Author`, or `None` to keep the existing one.
    pub author: Option<String>,

    /// New `/Subject`, or `None` to keep the existing one.
    pub subject: Option<String>,

    /// New `/Keywords` string (already normalized), or `None` to keep the
    /// existing one.
    pub keywords: Option<String>,
}

impl MetadataUpdate {
    /// Returns `true` when the update carries no new value at all, in which
    /// case applying it is the identity.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.subject.is_none()
            && self.keywords.is_none()
    }

    /// The update as `(key, new value)` pairs, in managed-field order.
    pub(crate) fn fields(&self) -> [(&'static [u8], Option<&str>); 4] {
        [
            (b"Title", self.title.as_deref()),
            (b"Author", self.author.as_deref()),
            (b"Subject", self.subject.as_deref()),
            (b"Keywords", self.keywords.as_deref()),
        ]
    }
}

// ── Text-string decoding ─────────────────────────────────────────────────────

/// Decode the raw bytes of a PDF text string into Rust text.
///
/// PDF text strings come in two encodings: UTF-16BE with a leading byte
/// order mark (`FE FF`), or a single-byte encoding that in practice is
/// either UTF-8 or Latin-1/PDFDocEncoding. The decoder tries them in that
/// order; a trailing odd byte in UTF-16 input is silently ignored.
///
/// ```
/// # use addpdfmetadata::decode_info_string;
/// assert_eq!(decode_info_string(b"plain title"), "plain title");
/// // UTF-16BE with BOM
/// assert_eq!(decode_info_string(&[0xFE, 0xFF, 0x00, 0x41, 0x00, 0x42]), "AB");
/// ```
pub fn decode_info_string(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let code_units: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|chunk| {
                if chunk.len() == 2 {
                    Some(u16::from_be_bytes([chunk[0], chunk[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16_lossy(&code_units);
    }

    // Try UTF-8
    if let Ok(s) = std::str::from_utf8(bytes) {
        return s.to_string();
    }

    // Fallback: Latin-1 (covers PDFDocEncoding for the printable range)
    bytes.iter().map(|&b| b as char).collect()
}
