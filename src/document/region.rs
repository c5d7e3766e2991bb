use serde::{Deserialize, Serialize};

use crate::error::RegionError;

/// Start and end tokens that bound the board inside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            start: "<!-- CONNECT4:START -->".to_string(),
            end: "<!-- CONNECT4:END -->".to_string(),
        }
    }
}

/// Byte offsets of the board region.
///
/// `start..end` covers the markers themselves and is what gets replaced;
/// `inner_start..inner_end` is the text between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub start: usize,
    pub inner_start: usize,
    pub inner_end: usize,
    pub end: usize,
}

impl Region {
    /// Find the region bounded by the *last* start marker and the first end
    /// marker after it. Stale regions earlier in the document are ignored.
    pub fn locate(document: &str, markers: &Markers) -> Result<Region, RegionError> {
        let start = document
            .rfind(markers.start.as_str())
            .ok_or_else(|| RegionError::NotFound {
                marker: markers.start.clone(),
            })?;
        let inner_start = start + markers.start.len();

        let offset = document[inner_start..]
            .find(markers.end.as_str())
            .ok_or_else(|| RegionError::Unterminated {
                marker: markers.end.clone(),
            })?;
        let inner_end = inner_start + offset;

        Ok(Region {
            start,
            inner_start,
            inner_end,
            end: inner_end + markers.end.len(),
        })
    }

    /// Number of start markers in the document. More than one means stale
    /// regions are lying around.
    pub fn count(document: &str, markers: &Markers) -> usize {
        if markers.start.is_empty() {
            return 1;
        }
        document.matches(markers.start.as_str()).count()
    }

    /// Text between the markers.
    pub fn inner<'a>(&self, document: &'a str) -> &'a str {
        &document[self.inner_start..self.inner_end]
    }

    /// Replace the region, markers included, keeping everything else
    /// byte-for-byte.
    pub fn splice(&self, document: &str, replacement: &str) -> String {
        let mut out = String::with_capacity(
            document.len() - (self.end - self.start) + replacement.len(),
        );
        out.push_str(&document[..self.start]);
        out.push_str(replacement);
        out.push_str(&document[self.end..]);
        out
    }
}
