#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

pub mod i18n;
pub mod icons;
pub mod logger;
mod auth;
mod debounce;
mod library;
mod reader;

use gpui::*;
use gpui_component::*;
use reader::ReaderView;

const WINDOW_SIZE_TREE: &str = "window_size";
const WINDOW_SIZE_KEY_WIDTH: &str = "width";
const WINDOW_SIZE_KEY_HEIGHT: &str = "height";
const LOCAL_STATE_DB_DIR_NAME: &str = "folio_db";
#[cfg(target_os = "linux")]
const FOLIO_LINUX_BACKEND_ENV: &str = "FOLIO_LINUX_BACKEND";

gpui::actions!(
    folio,
    [
        SignOutMenu,
        EnableLoggingMenu,
        DisableLoggingMenu,
        OpenLogsMenu
    ]
);

pub(crate) fn configure_app_menus(cx: &mut App, i18n: i18n::I18n) {
    let mut items = vec![
        MenuItem::action(i18n.sign_out_button, SignOutMenu),
        MenuItem::separator(),
    ];

    if logger::file_logging_enabled() {
        items.extend([
            MenuItem::action(i18n.open_logs_button, OpenLogsMenu),
            MenuItem::separator(),
            MenuItem::action(i18n.disable_logging_button, DisableLoggingMenu),
        ]);
    } else {
        items.push(MenuItem::action(
            i18n.enable_logging_button,
            EnableLoggingMenu,
        ));
    }

    cx.set_menus(vec![Menu {
        name: "Folio".into(),
        items,
    }]);
}

fn window_size_db_path() -> std::path::PathBuf {
    if let Some(app_data) = std::env::var_os("APPDATA") {
        return std::path::PathBuf::from(app_data)
            .join("Folio")
            .join(LOCAL_STATE_DB_DIR_NAME);
    }
    if let Some(home) = std::env::var_os("HOME") {
        return std::path::PathBuf::from(home)
            .join(".folio")
            .join(LOCAL_STATE_DB_DIR_NAME);
    }
    std::path::PathBuf::from(".folio").join(LOCAL_STATE_DB_DIR_NAME)
}

// Read-then-drop: the reader view reopens the same database once the window
// is up, so the handle must not outlive this function.
fn load_saved_window_size() -> Option<(f32, f32)> {
    let db_path = window_size_db_path();
    let db = match sled::open(&db_path) {
        Ok(db) => db,
        Err(_) => return None,
    };
    let store = match db.open_tree(WINDOW_SIZE_TREE) {
        Ok(tree) => tree,
        Err(_) => return None,
    };
    let width_bytes = store.get(WINDOW_SIZE_KEY_WIDTH).ok().flatten()?;
    let height_bytes = store.get(WINDOW_SIZE_KEY_HEIGHT).ok().flatten()?;
    if width_bytes.len() != 4 || height_bytes.len() != 4 {
        return None;
    }
    let width = f32::from_be_bytes(width_bytes.as_ref().try_into().ok()?);
    let height = f32::from_be_bytes(height_bytes.as_ref().try_into().ok()?);
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    Some((width, height))
}

#[cfg(target_os = "linux")]
fn running_inside_wsl() -> bool {
    if std::env::var_os("WSL_DISTRO_NAME").is_some() || std::env::var_os("WSL_INTEROP").is_some() {
        return true;
    }

    std::fs::read_to_string("/proc/sys/kernel/osrelease")
        .map(|release| release.to_ascii_lowercase().contains("microsoft"))
        .unwrap_or(false)
}

#[cfg(target_os = "linux")]
fn has_non_empty_env(key: &str) -> bool {
    std::env::var_os(key).is_some_and(|value| !value.is_empty())
}

#[cfg(target_os = "linux")]
fn configure_linux_display_backend() {
    let requested_backend = std::env::var(FOLIO_LINUX_BACKEND_ENV)
        .ok()
        .map(|value| value.trim().to_ascii_lowercase());

    match requested_backend.as_deref() {
        Some("wayland") => {
            crate::debug_log!(
                "[linux] backend override: {}=wayland",
                FOLIO_LINUX_BACKEND_ENV
            );
            return;
        }
        Some("x11") => {
            if has_non_empty_env("WAYLAND_DISPLAY") {
                // Safe here: this runs before any threads are spawned.
                unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
            }
            crate::debug_log!("[linux] backend override: {}=x11", FOLIO_LINUX_BACKEND_ENV);
            return;
        }
        Some("auto") | None => {}
        Some(other) => {
            crate::debug_log!(
                "[linux] invalid {} value '{}', expected auto/x11/wayland; using auto",
                FOLIO_LINUX_BACKEND_ENV,
                other
            );
        }
    }

    if running_inside_wsl() && has_non_empty_env("WAYLAND_DISPLAY") && has_non_empty_env("DISPLAY")
    {
        // Safe here: this runs before any threads are spawned.
        unsafe { std::env::remove_var("WAYLAND_DISPLAY") };
        crate::debug_log!(
            "[linux] detected WSL with DISPLAY and WAYLAND_DISPLAY; forcing X11. set {}=wayland to override",
            FOLIO_LINUX_BACKEND_ENV
        );
    }
}

fn main() {
    logger::initialize();
    #[cfg(target_os = "linux")]
    configure_linux_display_backend();

    let app = Application::new().with_assets(icons::Assets);
    let language = i18n::Language::detect();
    let i18n = i18n::I18n::new(language);

    app.run(move |cx| {
        configure_app_menus(cx, i18n);

        gpui_component::init(cx);
        Theme::change(cx.window_appearance(), None, cx);

        #[cfg(target_os = "macos")]
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        cx.spawn(async move |cx| {
            let saved_size = load_saved_window_size();
            let saved_window_bounds = if let Some((w, h)) = saved_size {
                Some(cx.update(|app| WindowBounds::centered(size(px(w), px(h)), app))?)
            } else {
                None
            };

            let window_options = WindowOptions {
                titlebar: Some(TitleBar::title_bar_options()),
                window_decorations: Some(WindowDecorations::Client),
                window_bounds: saved_window_bounds,
                ..WindowOptions::default()
            };

            cx.open_window(window_options, |window, cx| {
                let view = cx.new(|cx| ReaderView::new(window, cx));
                cx.new(|cx| Root::new(view, window, cx))
            })?;
            Ok::<_, anyhow::Error>(())
        })
        .detach();

        cx.activate(true);
    });
}
