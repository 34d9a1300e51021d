use std::fmt;

use crate::utils::format_bytes;

// Add more video formats here if needed
pub const ALLOWED_EXTENSIONS: [&str; 2] = [".mp4", ".avi"];

#[derive(Debug, Clone, PartialEq)]
pub enum SelectionError {
    UnsupportedType,
    TooLarge { limit_bytes: u64 },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::UnsupportedType => {
                write!(f, "Invalid file type. Only mp4 and avi files are allowed.")
            }
            SelectionError::TooLarge { limit_bytes } => {
                write!(
                    f,
                    "File size exceeds the maximum limit of {}.",
                    format_bytes(*limit_bytes)
                )
            }
        }
    }
}

impl std::error::Error for SelectionError {}

fn extension(file_name: &str) -> Option<String> {
    file_name.rfind('.').map(|dot| file_name[dot..].to_lowercase())
}

pub fn is_video_file_type(file_name: &str) -> bool {
    match extension(file_name) {
        Some(ext) => ALLOWED_EXTENSIONS.contains(&ext.as_str()),
        None => false,
    }
}

/// Acceptance rules for a picked file. Size is checked first, then the
/// extension; a rejected file never replaces the current selection.
pub fn check_file(file_name: &str, size_bytes: u64, limit_bytes: u64) -> Result<(), SelectionError> {
    if size_bytes > limit_bytes {
        return Err(SelectionError::TooLarge { limit_bytes });
    }
    if !is_video_file_type(file_name) {
        return Err(SelectionError::UnsupportedType);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMIT: u64 = 200 * 1024 * 1024;

    #[test]
    fn accepts_allowed_extensions_case_insensitively() {
        assert!(check_file("clip.mp4", 1024, LIMIT).is_ok());
        assert!(check_file("clip.avi", 1024, LIMIT).is_ok());
        assert!(check_file("CLIP.MP4", 1024, LIMIT).is_ok());
        assert!(check_file("holiday.Avi", 1024, LIMIT).is_ok());
    }

    #[test]
    fn rejects_other_extensions() {
        for name in ["clip.mov", "clip.mkv", "clip.mp3", "archive.mp4.gz", "noextension"] {
            assert_eq!(
                check_file(name, 1024, LIMIT),
                Err(SelectionError::UnsupportedType),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_oversized_files_with_a_size_specific_error() {
        assert_eq!(
            check_file("clip.mp4", LIMIT + 1, LIMIT),
            Err(SelectionError::TooLarge { limit_bytes: LIMIT })
        );
        // Exactly at the limit is still allowed
        assert!(check_file("clip.mp4", LIMIT, LIMIT).is_ok());
    }

    #[test]
    fn size_is_checked_before_type() {
        assert_eq!(
            check_file("clip.mov", LIMIT + 1, LIMIT),
            Err(SelectionError::TooLarge { limit_bytes: LIMIT })
        );
    }

    #[test]
    fn size_message_names_the_configured_limit() {
        let message = SelectionError::TooLarge { limit_bytes: LIMIT }.to_string();
        assert!(message.contains("200MB"), "{message}");

        let smaller = SelectionError::TooLarge {
            limit_bytes: 10 * 1024 * 1024,
        }
        .to_string();
        assert!(smaller.contains("10MB"), "{smaller}");
    }

    #[test]
    fn type_message_names_the_allowed_formats() {
        let message = SelectionError::UnsupportedType.to_string();
        assert!(message.contains("mp4"), "{message}");
        assert!(message.contains("avi"), "{message}");
    }
}
