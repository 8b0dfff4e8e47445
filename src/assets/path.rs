use crate::foundation::{
    core::FrameIndex,
    error::{ScrollSeqError, ScrollSeqResult},
};

/// Naming convention for sequence frames: `<base><ordinal zero-padded>.<extension>`.
///
/// Ordinals are one-based, so frame 0 of the default scheme is `/sequence/ezgif-frame-001.webp`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FramePathScheme {
    pub base: String,
    pub extension: String,
    pub pad_width: usize,
}

impl Default for FramePathScheme {
    fn default() -> Self {
        Self {
            base: "/sequence/ezgif-frame-".to_string(),
            extension: "webp".to_string(),
            pad_width: 3,
        }
    }
}

impl FramePathScheme {
    pub fn validate(&self) -> ScrollSeqResult<()> {
        if self.extension.is_empty() || self.extension.contains('/') {
            return Err(ScrollSeqError::validation(
                "frame extension must be a non-empty file suffix",
            ));
        }
        if self.pad_width == 0 {
            return Err(ScrollSeqError::validation("frame pad width must be > 0"));
        }
        Ok(())
    }

    pub fn path(&self, index: FrameIndex) -> String {
        format!(
            "{}{:0width$}.{}",
            self.base,
            index.ordinal(),
            self.extension,
            width = self.pad_width
        )
    }
}

/// Turn a site path (`/sequence/a.webp` or `sequence/a.webp`) into a clean relative path.
pub fn normalize_site_path(source: &str) -> ScrollSeqResult<String> {
    let s = source.replace('\\', "/");
    let mut out = Vec::<&str>::new();
    for part in s.split('/') {
        if part.is_empty() || part == "." {
            continue;
        }
        if part == ".." {
            return Err(ScrollSeqError::validation(
                "frame paths must not contain '..'",
            ));
        }
        out.push(part);
    }

    if out.is_empty() {
        return Err(ScrollSeqError::validation(
            "frame path must contain a file name",
        ));
    }

    Ok(out.join("/"))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/path.rs"]
mod tests;
