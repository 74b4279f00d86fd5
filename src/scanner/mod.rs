//! Screenshot discovery and upload encoding.

use crate::error::{Result, SkelloError};
use crate::extractor::ImagePayload;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct ImageInfo {
    pub path: PathBuf,
    pub file_name: String,
    pub mime_type: String,
}

const IMAGE_EXTENSIONS: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("webp", "image/webp"),
];

fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let lower = ext.to_lowercase();
    IMAGE_EXTENSIONS
        .iter()
        .find(|(e, _)| *e == lower)
        .map(|(_, mime)| *mime)
}

pub fn scan_folder(folder: &Path) -> Result<Vec<ImageInfo>> {
    if !folder.exists() {
        return Err(SkelloError::FolderNotFound(folder.display().to_string()));
    }

    let mut images = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // direct children only
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        if let Some(ext) = path.extension() {
            if let Some(mime) = mime_for_extension(&ext.to_string_lossy()) {
                let file_name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_default();

                images.push(ImageInfo {
                    path: path.to_path_buf(),
                    file_name,
                    mime_type: mime.to_string(),
                });
            }
        }
    }

    // Sort by file name for a stable upload order
    images.sort_by(|a, b| a.file_name.cmp(&b.file_name));

    Ok(images)
}

/// Read and base64-encode every screenshot, in parallel with a join.
///
/// Any single failure aborts the whole batch before a network call is made.
pub fn encode_images(images: &[ImageInfo]) -> Result<Vec<ImagePayload>> {
    images
        .par_iter()
        .map(|img| {
            let bytes = std::fs::read(&img.path)
                .map_err(|e| SkelloError::ImageEncode(img.file_name.clone(), e.to_string()))?;
            Ok(ImagePayload {
                mime_type: img.mime_type.clone(),
                data: STANDARD.encode(bytes),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use std::io::Write;

    #[test]
    fn test_mime_for_extension() {
        assert_eq!(mime_for_extension("jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("JPG"), Some("image/jpeg"));
        assert_eq!(mime_for_extension("png"), Some("image/png"));
        assert_eq!(mime_for_extension("webp"), Some("image/webp"));
        assert_eq!(mime_for_extension("txt"), None);
        assert_eq!(mime_for_extension("pdf"), None);
    }

    #[test]
    fn test_scan_folder_not_found() {
        let result = scan_folder(Path::new("/nonexistent/folder"));
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_folder_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();

        File::create(dir.path().join("b.png")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("a.jpg")).unwrap().write_all(b"dummy").unwrap();
        File::create(dir.path().join("notes.txt")).unwrap().write_all(b"text").unwrap();

        let result = scan_folder(dir.path()).unwrap();
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].file_name, "a.jpg");
        assert_eq!(result[0].mime_type, "image/jpeg");
        assert_eq!(result[1].file_name, "b.png");
        assert_eq!(result[1].mime_type, "image/png");
    }

    #[test]
    fn test_scan_folder_empty() {
        let dir = tempfile::tempdir().unwrap();
        let result = scan_folder(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_encode_images() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shot.png");
        fs::write(&path, b"hello").unwrap();

        let images = vec![ImageInfo {
            path,
            file_name: "shot.png".into(),
            mime_type: "image/png".into(),
        }];

        let payloads = encode_images(&images).unwrap();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].mime_type, "image/png");
        assert_eq!(payloads[0].data, "aGVsbG8=");
    }

    #[test]
    fn test_encode_images_missing_file_aborts_batch() {
        let dir = tempfile::tempdir().unwrap();
        let good = dir.path().join("ok.png");
        fs::write(&good, b"data").unwrap();

        let images = vec![
            ImageInfo {
                path: good,
                file_name: "ok.png".into(),
                mime_type: "image/png".into(),
            },
            ImageInfo {
                path: dir.path().join("missing.png"),
                file_name: "missing.png".into(),
                mime_type: "image/png".into(),
            },
        ];

        let result = encode_images(&images);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("missing.png"));
    }
}
