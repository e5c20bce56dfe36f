//! Saving the displayed image.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose;
use tracing::{debug, info, warn};

use crate::constants::EXPORT_FILENAME;
use crate::display::DisplaySurface;

/// A throwaway link pointing at something to download.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DownloadLink {
    /// What the link targets: a data URI, a URL or a path.
    pub href: String,
    /// Name to save the target under.
    pub filename: String,
}

/// Host-side handling of an activated [`DownloadLink`].
///
/// There is no error channel back to the exporter; implementations deal with
/// failures themselves.
pub trait Downloader {
    /// Starts the download the link describes.
    fn activate(&self, link: &DownloadLink);
}

/// Downloads whatever the image display currently shows.
#[derive(Debug)]
pub struct ImageExporter<S, D> {
    surface: Arc<S>,
    downloader: D,
}

impl<S: DisplaySurface, D: Downloader> ImageExporter<S, D> {
    /// Exporter reading from `surface` and handing links to `downloader`.
    pub fn new(surface: Arc<S>, downloader: D) -> Self {
        Self {
            surface,
            downloader,
        }
    }

    /// The downloader links are handed to.
    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Exports the current image source as `meme.png`.
    ///
    /// A placeholder or empty source is exported as-is.
    pub fn export(&self) {
        let link = DownloadLink {
            href: self.surface.image_source(),
            filename: EXPORT_FILENAME.to_string(),
        };
        self.downloader.activate(&link);
    }
}

/// Saves downloads into a directory on disk.
#[derive(Clone, Debug)]
pub struct FileDownloader {
    out_dir: PathBuf,
}

impl FileDownloader {
    /// Saves into `out_dir`, which must already exist.
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// Where a download with this filename ends up.
    pub fn target_path(&self, filename: &str) -> PathBuf {
        self.out_dir.join(filename)
    }

    fn fetch(href: &str) -> Result<Vec<u8>, String> {
        if let Some(data) = href.strip_prefix("data:") {
            return decode_data_uri(data);
        }
        if href.starts_with("http://") || href.starts_with("https://") {
            let mut resp = ureq::get(href)
                .call()
                .map_err(|err| format!("Failed to fetch {href}: {err}"))?;
            return resp
                .body_mut()
                .read_to_vec()
                .map_err(|err| format!("Failed to read {href}: {err}"));
        }
        if href.is_empty() {
            return Err("Nothing to download, the image has no source".to_string());
        }
        fs::read(Path::new(href)).map_err(|err| format!("Failed to read {href}: {err}"))
    }
}

impl Downloader for FileDownloader {
    fn activate(&self, link: &DownloadLink) {
        let bytes = match Self::fetch(&link.href) {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!("Download of {} failed: {err}", link.filename);
                return;
            }
        };

        match image::guess_format(&bytes) {
            Ok(format) => debug!("Downloaded image looks like {format:?}"),
            Err(_) => debug!("Downloaded data is not a recognised image format"),
        }

        let path = self.target_path(&link.filename);
        if let Err(err) = fs::write(&path, &bytes) {
            warn!("Failed to write {}: {err}", path.display());
            return;
        }
        info!("Saved: {}", path.display());
    }
}

/// Decodes the part of a data URI after `data:`.
fn decode_data_uri(data: &str) -> Result<Vec<u8>, String> {
    let (meta, payload) = data
        .split_once(',')
        .ok_or_else(|| "Malformed data URI, missing ','".to_string())?;
    if !meta.ends_with(";base64") {
        return Err(format!("Unsupported data URI encoding: {meta:?}"));
    }
    general_purpose::STANDARD
        .decode(payload)
        .map_err(|err| format!("Failed to base64-decode image: {err}"))
}
