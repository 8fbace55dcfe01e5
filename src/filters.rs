//! Filter-specification wire format.
//!
//! The format is the pipe-delimited label/pattern string used by the public
//! dialog API, e.g. `"Images (*.png)|*.png|Audio (*.wav)|*.wav"`. Tokens
//! containing `*.` are pattern-bearing and carry exactly one extension;
//! free-text tokens are labels for the pattern that follows them.

use crate::mime::{UNIVERSAL_WILDCARD, extension_to_mime};

/// One label/pattern entry of a filter specification.
#[derive(Clone, Debug)]
pub struct FileFilter {
    /// Display label (e.g. `"Images (*.png)"`)
    pub label: String,
    /// Lower-case extension without dot (e.g. `"png"`); empty for `*.*`
    pub extension: String,
}

/// Parsed, immutable filter specification.
///
/// The default spec has no entries and matches every file.
#[derive(Clone, Debug, Default)]
pub struct FilterSpec {
    entries: Vec<FileFilter>,
}

impl FilterSpec {
    /// Parse a pipe-delimited filter specification.
    ///
    /// Malformed tokens are skipped, never fatal. Input that yields no
    /// usable pattern produces a spec matching every file.
    pub fn parse(spec: &str) -> Self {
        let mut entries = Vec::new();
        let mut pending_label: Option<String> = None;

        for raw in spec.split('|') {
            let token = raw.trim();
            if token.is_empty() {
                continue;
            }
            if token.starts_with("*.") {
                // Pattern token: closes the entry its label opened.
                let extension = pattern_extension(token).unwrap_or_default();
                let label = pending_label.take().unwrap_or_else(|| token.to_string());
                entries.push(FileFilter { label, extension });
            } else {
                // A displaced label that embeds its own pattern still counts.
                if let Some(prev) = pending_label.replace(token.to_string())
                    && let Some(extension) = pattern_extension(&prev)
                {
                    entries.push(FileFilter {
                        label: prev,
                        extension,
                    });
                }
            }
        }

        // A trailing label that embeds its own pattern still counts.
        if let Some(label) = pending_label
            && let Some(extension) = pattern_extension(&label)
        {
            entries.push(FileFilter { label, extension });
        }

        Self { entries }
    }

    /// Parsed label/pattern entries, in specification order.
    pub fn entries(&self) -> &[FileFilter] {
        &self.entries
    }

    /// Normalize the spec into host MIME patterns, one per distinct
    /// extension, in first-seen order.
    ///
    /// Unknown extensions contribute the universal wildcard; a spec with no
    /// recognizable pattern yields exactly `["*/*"]`.
    pub fn mime_patterns(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for filter in &self.entries {
            for mime in [
                pattern_extension(&filter.label).as_deref().map(extension_to_mime),
                Some(extension_to_mime(&filter.extension)),
            ]
            .into_iter()
            .flatten()
            {
                if !out.iter().any(|m| m == mime) {
                    out.push(mime.to_string());
                }
            }
        }
        if out.is_empty() {
            out.push(UNIVERSAL_WILDCARD.to_string());
        }
        out
    }
}

/// Extract the extension carried by the first `*.` occurrence in `token`,
/// lower-cased, without the dot. `None` when the token has no `*.` at all.
fn pattern_extension(token: &str) -> Option<String> {
    let idx = token.find("*.")?;
    let ext: String = token[idx + 2..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect();
    Some(ext.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_and_audio_pairs_normalize_to_mime() {
        let spec = FilterSpec::parse("Images (*.png)|*.png|Audio (*.wav)|*.wav");
        assert_eq!(
            spec.mime_patterns(),
            vec!["image/png", "audio/wav, audio/x-wav"]
        );
    }

    #[test]
    fn empty_spec_is_universal() {
        assert_eq!(FilterSpec::parse("").mime_patterns(), vec!["*/*"]);
    }

    #[test]
    fn label_only_spec_is_universal() {
        assert_eq!(FilterSpec::parse("Foo|Bar").mime_patterns(), vec!["*/*"]);
    }

    #[test]
    fn unknown_extension_falls_back_to_wildcard() {
        assert_eq!(
            FilterSpec::parse("Data (*.xyzq)|*.xyzq").mime_patterns(),
            vec!["*/*"]
        );
    }

    #[test]
    fn wildcard_pair_maps_to_universal() {
        assert_eq!(
            FilterSpec::parse("All files (*.*)|*.*").mime_patterns(),
            vec!["*/*"]
        );
    }

    #[test]
    fn entries_pair_labels_with_extensions() {
        let spec = FilterSpec::parse("Images (*.png)|*.png|Audio (*.wav)|*.wav");
        let entries = spec.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Images (*.png)");
        assert_eq!(entries[0].extension, "png");
        assert_eq!(entries[1].label, "Audio (*.wav)");
        assert_eq!(entries[1].extension, "wav");
    }

    #[test]
    fn displaced_pattern_bearing_label_still_counts() {
        let spec = FilterSpec::parse("A (*.png)|B (*.wav)|*.wav");
        assert_eq!(
            spec.mime_patterns(),
            vec!["image/png", "audio/wav, audio/x-wav"]
        );
        let entries = spec.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "A (*.png)");
        assert_eq!(entries[0].extension, "png");
        assert_eq!(entries[1].label, "B (*.wav)");
        assert_eq!(entries[1].extension, "wav");
    }

    #[test]
    fn bare_pattern_is_its_own_label() {
        let spec = FilterSpec::parse("*.png");
        assert_eq!(spec.entries().len(), 1);
        assert_eq!(spec.entries()[0].label, "*.png");
        assert_eq!(spec.entries()[0].extension, "png");
    }

    #[test]
    fn extensions_are_lowercased() {
        let spec = FilterSpec::parse("Audio (*.MP3)|*.MP3");
        assert_eq!(spec.entries()[0].extension, "mp3");
        assert_eq!(spec.mime_patterns(), vec!["audio/mpeg"]);
    }

    #[test]
    fn pattern_count_never_exceeds_pair_count() {
        let specs = [
            "Images (*.png)|*.png",
            "Images (*.png)|*.png|Audio (*.wav)|*.wav|Text (*.txt)|*.txt",
            "A (*.aaa)|*.aaa|B (*.bbb)|*.bbb",
        ];
        for (spec, pairs) in specs.iter().zip([1usize, 3, 2]) {
            let patterns = FilterSpec::parse(spec).mime_patterns();
            assert!(patterns.len() <= pairs, "{spec}: {patterns:?}");
            assert!(patterns.iter().all(|p| !p.is_empty()));
        }
    }
}
