use crate::i18n::{I18n, Language};
use anyhow::{Context as _, Result, anyhow};
use gpui::RenderImage as GpuiRenderImage;
use image::{Frame as RasterFrame, RgbaImage};
use pdfium_render::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock};
use std::time::{Instant, SystemTime};

static PDFIUM_INSTANCE: OnceLock<Result<Pdfium, String>> = OnceLock::new();
static PDFIUM_DOCUMENT_CACHE: OnceLock<Mutex<Option<CachedPdfDocument>>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
struct CachedPdfDocumentKey {
    canonical_path: PathBuf,
    file_len: Option<u64>,
    modified: Option<SystemTime>,
}

struct CachedPdfDocument {
    key: CachedPdfDocumentKey,
    document: PdfDocument<'static>,
}

fn shared_pdfium(language: Language) -> Result<&'static Pdfium> {
    match PDFIUM_INSTANCE.get_or_init(|| init_pdfium(language).map_err(|err| format!("{err:#}"))) {
        Ok(pdfium) => Ok(pdfium),
        Err(message) => Err(anyhow!("{message}")),
    }
}

fn init_pdfium(language: Language) -> Result<Pdfium> {
    let i18n = I18n::new(language);

    let bindings =
        Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./lib"))
            .or_else(|err| {
                crate::debug_log!("[pdfium] ./lib failed: {}", err);
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            })
            .or_else(|err| {
                crate::debug_log!("[pdfium] ./ failed: {}", err);
                Pdfium::bind_to_system_library()
            });

    let bindings = bindings.context(i18n.pdfium_not_found)?;
    crate::debug_log!("[pdfium] bindings initialized");
    Ok(Pdfium::new(bindings))
}

fn document_cache() -> &'static Mutex<Option<CachedPdfDocument>> {
    PDFIUM_DOCUMENT_CACHE.get_or_init(|| Mutex::new(None))
}

fn document_cache_key(path: &Path) -> CachedPdfDocumentKey {
    let canonical_path = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    let metadata = std::fs::metadata(&canonical_path).ok();

    CachedPdfDocumentKey {
        canonical_path,
        file_len: metadata.as_ref().map(|meta| meta.len()),
        modified: metadata.and_then(|meta| meta.modified().ok()),
    }
}

/// Parse the downloaded asset and report its page count. A document pdfium
/// cannot open surfaces as a parse failure upstream.
pub(super) fn load_document_summary(path: &Path, language: Language) -> Result<usize> {
    let i18n = I18n::new(language);

    let pdfium = shared_pdfium(language)?;
    let document = pdfium
        .load_pdf_from_file(path, None)
        .with_context(|| i18n.pdfium_cannot_open_file(path))?;

    let total_pages = document.pages().len() as usize;
    crate::debug_log!("[pdf] parsed {}: {} pages", path.display(), total_pages);
    Ok(total_pages)
}

/// Rasterize the requested pages at `target_width` device pixels. Pages that
/// fail individually are skipped; the caller marks them from the missing
/// indices in the result.
pub(super) fn render_page_images(
    path: &Path,
    page_indices: &[usize],
    target_width: u32,
    language: Language,
) -> Result<Vec<(usize, Arc<GpuiRenderImage>)>> {
    if page_indices.is_empty() {
        return Ok(Vec::new());
    }

    let render_config = PdfRenderConfig::new().set_target_width(target_width as i32);
    let mut rendered = Vec::new();
    let mut seen = std::collections::HashSet::new();
    let cache_key = document_cache_key(path);
    let i18n = I18n::new(language);
    let mut cached_document_guard = document_cache()
        .lock()
        .map_err(|_| anyhow!(i18n.pdfium_cache_lock_poisoned))?;

    let cache_hit = cached_document_guard
        .as_ref()
        .map(|cached| cached.key == cache_key)
        .unwrap_or(false);

    if !cache_hit {
        let pdfium = shared_pdfium(language)?;
        let document = pdfium
            .load_pdf_from_file(&cache_key.canonical_path, None)
            .with_context(|| i18n.pdfium_cannot_open_file(path))?;

        *cached_document_guard = Some(CachedPdfDocument {
            key: cache_key,
            document,
        });
    }

    let document = &cached_document_guard
        .as_ref()
        .expect("document cache was just populated")
        .document;
    let total_pages = document.pages().len() as usize;
    let requested: Vec<usize> = page_indices
        .iter()
        .copied()
        .filter(|ix| seen.insert(*ix))
        .collect();

    for ix in requested {
        let started_at = Instant::now();

        if ix >= total_pages || ix > u16::MAX as usize {
            crate::debug_log!(
                "[pdf][render] p{} out of range (total={})",
                ix + 1,
                total_pages
            );
            continue;
        }

        let page = match document.pages().get(ix as u16) {
            Ok(page) => page,
            Err(err) => {
                crate::debug_log!("[pdf][render] p{} get failed: {}", ix + 1, err);
                continue;
            }
        };

        let bitmap = match page.render_with_config(&render_config) {
            Ok(bitmap) => bitmap,
            Err(err) => {
                crate::debug_log!("[pdf][render] p{} render failed: {}", ix + 1, err);
                continue;
            }
        };

        match bitmap_to_render_image(&bitmap, language) {
            Ok(image) => {
                crate::debug_log!(
                    "[pdf][render] p{} ok | width={} | {}ms",
                    ix + 1,
                    target_width,
                    started_at.elapsed().as_millis()
                );
                rendered.push((ix, image));
            }
            Err(err) => {
                crate::debug_log!("[pdf][render] p{} upload failed: {}", ix + 1, err);
            }
        }
    }

    Ok(rendered)
}

#[allow(deprecated)]
fn bitmap_to_render_image(
    bitmap: &PdfBitmap,
    language: Language,
) -> Result<Arc<GpuiRenderImage>> {
    let i18n = I18n::new(language);
    let width = bitmap.width() as u32;
    let height = bitmap.height() as u32;
    if width == 0 || height == 0 {
        return Err(anyhow!(i18n.invalid_bitmap_size(width, height)));
    }

    let format = bitmap.format().unwrap_or(PdfBitmapFormat::BGRA);
    let mut bytes = match format {
        PdfBitmapFormat::BGRA | PdfBitmapFormat::BGRx | PdfBitmapFormat::BRGx => {
            bitmap.as_raw_bytes()
        }
        _ => rgba_to_bgra(bitmap.as_rgba_bytes()),
    };

    let expected_len = width as usize * height as usize * 4;
    if bytes.len() != expected_len {
        bytes = rgba_to_bgra(bitmap.as_rgba_bytes());
        if bytes.len() != expected_len {
            return Err(anyhow!(i18n.bitmap_len_mismatch(bytes.len(), expected_len)));
        }
    }

    if matches!(format, PdfBitmapFormat::BGRx | PdfBitmapFormat::BRGx) {
        for pixel in bytes.chunks_exact_mut(4) {
            pixel[3] = 255;
        }
    }

    let buffer = RgbaImage::from_raw(width, height, bytes)
        .ok_or_else(|| anyhow!(i18n.cannot_create_image_buffer(width, height)))?;
    let frame = RasterFrame::new(buffer);

    Ok(Arc::new(GpuiRenderImage::new([frame])))
}

fn rgba_to_bgra(mut rgba: Vec<u8>) -> Vec<u8> {
    for pixel in rgba.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    rgba
}
