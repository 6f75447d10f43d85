//! Avatar reference resolution
//!
//! The scoreboard treats avatar references as opaque strings. Renderers turn
//! them into something drawable here, falling back to a placeholder disc.

use std::path::{Path, PathBuf};

/// Fill colour of the placeholder disc (RGB)
pub const PLACEHOLDER_COLOR: [u8; 3] = [120, 120, 140];

/// Where an avatar image comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    /// Inline `data:` URI
    DataUri { mime: String },
    /// Remote image
    Url(String),
    /// Local image file
    File(PathBuf),
    /// Nothing usable; draw a neutral disc
    Placeholder,
}

impl AvatarSource {
    /// Resolve `avatar_ref`, with relative paths taken from `base_dir`
    pub fn resolve(avatar_ref: &str, base_dir: &Path) -> Self {
        let avatar_ref = avatar_ref.trim();
        if avatar_ref.is_empty() {
            return AvatarSource::Placeholder;
        }

        if let Some(rest) = avatar_ref.strip_prefix("data:") {
            let mime = rest
                .split([';', ','])
                .next()
                .filter(|m| !m.is_empty())
                .unwrap_or("text/plain");
            return AvatarSource::DataUri {
                mime: mime.to_string(),
            };
        }

        let lower = avatar_ref.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            return AvatarSource::Url(avatar_ref.to_string());
        }

        let path = Path::new(avatar_ref);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base_dir.join(path)
        };
        if path.is_file() {
            AvatarSource::File(path)
        } else {
            log::debug!("Avatar '{}' not found, using placeholder", avatar_ref);
            AvatarSource::Placeholder
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, AvatarSource::Placeholder)
    }

    /// Short tag for text output
    pub fn kind(&self) -> &'static str {
        match self {
            AvatarSource::DataUri { .. } => "data",
            AvatarSource::Url(_) => "url",
            AvatarSource::File(_) => "file",
            AvatarSource::Placeholder => "placeholder",
        }
    }

    /// Tag plus the disc colour for placeholders
    pub fn label(&self) -> String {
        match self {
            AvatarSource::Placeholder => {
                let [r, g, b] = PLACEHOLDER_COLOR;
                format!("placeholder #{:02x}{:02x}{:02x}", r, g, b)
            }
            other => other.kind().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kinds() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.png"), b"png").unwrap();

        assert_eq!(AvatarSource::resolve("", dir.path()), AvatarSource::Placeholder);
        assert_eq!(
            AvatarSource::resolve("data:image/png;base64,AAAA", dir.path()),
            AvatarSource::DataUri {
                mime: "image/png".to_string()
            }
        );
        assert_eq!(
            AvatarSource::resolve("HTTPS://example.com/x.png", dir.path()).kind(),
            "url"
        );
        assert_eq!(
            AvatarSource::resolve(" a.png ", dir.path()),
            AvatarSource::File(dir.path().join("a.png"))
        );
        assert!(AvatarSource::resolve("missing.png", dir.path()).is_placeholder());
    }

    #[test]
    fn test_label_names_placeholder_color() {
        assert_eq!(AvatarSource::Placeholder.label(), "placeholder #78788c");
        assert_eq!(AvatarSource::Url("https://x".into()).label(), "url");
    }
}
