use crate::{MetadataError, Result};
use std::fs;
use std::path::PathBuf;

// ── KeywordSource ────────────────────────────────────────────────────────────

/// Where the new `/Keywords` value comes from.
///
/// The CLI guarantees at most one source is supplied; library callers get
/// the same exclusivity for free because this is an enum.
#[derive(Debug, Clone)]
pub enum KeywordSource {
    /// A literal keyword string, used verbatim (conventionally already
    /// comma-separated).
    Inline(String),

    /// A plain text file whose contents are normalized with
    /// [`normalize_keywords`]. Tokens may be comma- or newline-separated.
    File(PathBuf),
}

impl KeywordSource {
    /// Produce the final keyword string.
    ///
    /// An [`Inline`](KeywordSource::Inline) source passes through untouched;
    /// a [`File`](KeywordSource::File) source is read in full and
    /// normalized. A missing or unreadable file yields
    /// [`MetadataError::KeywordFileRead`] naming the path.
    pub fn resolve(&self) -> Result<String> {
        match self {
            KeywordSource::Inline(keywords) => Ok(keywords.clone()),
            KeywordSource::File(path) => {
                let text = fs::read_to_string(path).map_err(|source| {
                    MetadataError::KeywordFileRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                Ok(normalize_keywords(&text))
            }
        }
    }
}

// ── Normalization ────────────────────────────────────────────────────────────

/// Fold a comma- and/or newline-separated keyword list into a single
/// `"a, b, c"` string.
///
/// Both `,` and `\n` act as separators; each token is trimmed of
/// surrounding whitespace (which also strips the `\r` of Windows line
/// endings) and empty tokens are dropped. Already-normalized input is a
/// fixed point.
///
/// ```
/// # use addpdfmetadata::normalize_keywords;
/// assert_eq!(normalize_keywords("a\nb,  c \n\n d"), "a, b, c, d");
/// assert_eq!(normalize_keywords("a, b, c"), "a, b, c");
/// ```
pub fn normalize_keywords(text: &str) -> String {
    text.split([',', '\n'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
