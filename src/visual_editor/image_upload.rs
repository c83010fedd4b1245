use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use dioxus::html::FileEngine;
use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImageLoadError {
    #[error("no file selected")]
    NoFile,

    #[error("could not read {0}")]
    Unreadable(String),

    #[error("{0} is not a supported image")]
    NotAnImage(String),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum UploadStatus {
    #[default]
    Idle,
    Loading(String),
    Failed(ImageLoadError),
}

pub fn mime_for(file_name: &str) -> Option<&'static str> {
    let (_, extension) = file_name.rsplit_once('.')?;
    let mime = match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        "ico" => "image/x-icon",
        _ => return None,
    };
    Some(mime)
}

pub fn data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}

/// Picks the first selected file and its image type.
fn first_image(names: Vec<String>) -> Result<(String, &'static str), ImageLoadError> {
    let name = names.into_iter().next().ok_or(ImageLoadError::NoFile)?;
    match mime_for(&name) {
        Some(mime) => Ok((name, mime)),
        None => Err(ImageLoadError::NotAnImage(name)),
    }
}

fn encode_image(name: &str, mime: &str, bytes: Option<Vec<u8>>) -> Result<String, ImageLoadError> {
    let bytes = bytes.ok_or_else(|| ImageLoadError::Unreadable(name.to_string()))?;
    info!(file = %name, bytes = bytes.len(), "image loaded");
    Ok(data_url(mime, &bytes))
}

async fn read_first_image(files: Arc<dyn FileEngine>) -> Result<String, ImageLoadError> {
    let (name, mime) = first_image(files.files())?;
    let bytes = files.read_file(&name).await;
    encode_image(&name, mime, bytes)
}

/// One upload slot: at most one read in flight, cancelled when replaced or unmounted.
#[derive(Clone, Copy)]
pub struct ImageUpload {
    task: Signal<Option<Task>>,
    pub status: Signal<UploadStatus>,
}

impl ImageUpload {
    /// Starts reading the first selected file. `on_loaded` receives the `data:` URL.
    pub fn start(&mut self, files: Option<Arc<dyn FileEngine>>, on_loaded: impl FnOnce(String) + 'static) {
        self.cancel();
        let Some(files) = files else {
            self.status.set(UploadStatus::Failed(ImageLoadError::NoFile));
            return;
        };
        let label = files.files().into_iter().next().unwrap_or_default();
        self.status.set(UploadStatus::Loading(label));

        let mut status = self.status;
        let mut task_slot = self.task;
        let task = spawn(async move {
            match read_first_image(files).await {
                Ok(url) => {
                    status.set(UploadStatus::Idle);
                    on_loaded(url);
                }
                Err(err) => {
                    warn!(%err, "image upload failed");
                    status.set(UploadStatus::Failed(err));
                }
            }
            task_slot.set(None);
        });
        self.task.set(Some(task));
    }

    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
            self.status.set(UploadStatus::Idle);
        }
    }
}

pub fn use_image_upload() -> ImageUpload {
    let upload = ImageUpload {
        task: use_signal(|| None),
        status: use_signal(UploadStatus::default),
    };
    use_drop(move || {
        if let Some(task) = *upload.task.peek() {
            task.cancel();
        }
    });
    upload
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mime_from_extension() {
        assert_eq!(mime_for("photo.JPG"), Some("image/jpeg"));
        assert_eq!(mime_for("logo.final.svg"), Some("image/svg+xml"));
        assert_eq!(mime_for("notes.txt"), None);
        assert_eq!(mime_for("README"), None);
    }

    #[test]
    fn data_url_is_base64() {
        assert_eq!(data_url("image/png", b"hi"), "data:image/png;base64,aGk=");
    }

    #[test]
    fn empty_selection_is_no_file() {
        assert_eq!(first_image(Vec::new()), Err(ImageLoadError::NoFile));
    }

    #[test]
    fn only_the_first_file_counts() {
        let names = vec!["notes.txt".to_string(), "photo.png".to_string()];
        assert_eq!(first_image(names), Err(ImageLoadError::NotAnImage("notes.txt".into())));

        let names = vec!["photo.PNG".to_string(), "notes.txt".to_string()];
        assert_eq!(first_image(names), Ok(("photo.PNG".to_string(), "image/png")));
    }

    #[test]
    fn missing_bytes_are_unreadable() {
        assert_eq!(
            encode_image("photo.png", "image/png", None),
            Err(ImageLoadError::Unreadable("photo.png".into()))
        );
        assert_eq!(
            ImageLoadError::Unreadable("photo.png".into()).to_string(),
            "could not read photo.png"
        );
    }

    #[test]
    fn loaded_bytes_become_a_data_url() {
        let url = encode_image("dot.png", "image/png", Some(vec![0x89, b'P', b'N', b'G'])).unwrap();
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }

    #[test]
    fn errors_name_the_file() {
        assert_eq!(
            ImageLoadError::NotAnImage("a.txt".into()).to_string(),
            "a.txt is not a supported image"
        );
    }
}
