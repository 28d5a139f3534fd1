use anyhow::anyhow;
use gpui::*;
use rust_embed::RustEmbed;
use std::borrow::Cow;

/// An asset source that loads assets from the `./assets` folder.
#[derive(RustEmbed)]
#[folder = "./assets"]
#[include = "icons/**/*.svg"]
pub struct Assets;

impl AssetSource for Assets {
    fn load(&self, path: &str) -> Result<Option<Cow<'static, [u8]>>> {
        if path.is_empty() {
            return Ok(None);
        }

        Self::get(path)
            .map(|f| Some(f.data))
            .ok_or_else(|| anyhow!("could not find asset at path \"{path}\""))
    }

    fn list(&self, path: &str) -> Result<Vec<SharedString>> {
        Ok(Self::iter()
            .filter_map(|p| p.starts_with(path).then(|| p.into()))
            .collect())
    }
}

use gpui_component::IconNamed;

pub enum IconName {
    ChevronLeft,
    ChevronRight,
    Close,
    ZoomIn,
    ZoomOut,
    RotateCcw,
    BookOpen,
    LoaderCircle,
    WindowMaximize,
    WindowClose,
    WindowMinimize,
    WindowRestore,
}

impl IconNamed for IconName {
    fn path(self) -> gpui::SharedString {
        match self {
            Self::ChevronLeft => "icons/chevron-left.svg",
            Self::ChevronRight => "icons/chevron-right.svg",
            Self::Close => "icons/x.svg",
            Self::ZoomIn => "icons/zoom-in.svg",
            Self::ZoomOut => "icons/zoom-out.svg",
            Self::RotateCcw => "icons/rotate-ccw.svg",
            Self::BookOpen => "icons/book-open.svg",
            Self::LoaderCircle => "icons/loader-circle.svg",
            Self::WindowMaximize => "icons/window-maximize.svg",
            Self::WindowClose => "icons/window-close.svg",
            Self::WindowMinimize => "icons/window-minimize.svg",
            Self::WindowRestore => "icons/window-restore.svg",
        }
        .into()
    }
}
