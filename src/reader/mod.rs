mod layout;
mod session;
mod spread;
mod utils;

use crate::auth::SessionStore;
use crate::debounce::Settler;
use crate::i18n::{I18n, Language};
use crate::library::LibraryError;
use crate::{
    DisableLoggingMenu, EnableLoggingMenu, OpenLogsMenu, SignOutMenu, configure_app_menus,
};
use gpui::prelude::FluentBuilder as _;
use gpui::*;
use gpui_component::input::{Input, InputEvent, InputState};
use gpui_component::{button::*, *};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

include!("types.rs");
include!("constants.rs");

use self::layout::{SpreadLayout, compute_spread_layout};
use self::session::ReadingSession;
use self::spread::FlipBook;
use self::utils::{load_document_summary, render_page_images};

pub struct ReaderView {
    focus_handle: FocusHandle,
    language: Language,
    session_store: SessionStore,
    session_expired: bool,
    window_size_store: Option<sled::Tree>,
    recent_store: Option<sled::Tree>,
    recent_books: Vec<RecentBook>,
    recent_list_scroll: ScrollHandle,
    screen: Screen,
    reading: Option<ReadingState>,
    // Bumped whenever a session ends; stale load and render stages check it
    // and drop their results.
    load_epoch: u64,
    flip_epoch: u64,
    flip_ticker_running: bool,
    page_settler: Settler<String>,
    page_input_state: Entity<InputState>,
    _page_input_subscription: Subscription,
    page_input_focused: bool,
    pending_page_input_sync: Option<String>,
    book_id_input_state: Entity<InputState>,
    _book_id_input_subscription: Subscription,
    needs_initial_focus: bool,
    needs_root_refocus: bool,
    last_window_size: Option<(f32, f32)>,
}

impl ReaderView {
    pub fn new(window: &mut Window, cx: &mut Context<Self>) -> Self {
        let language = Language::detect();
        let i18n = I18n::new(language);
        let (window_size_store, recent_store, session_tree) = Self::open_persistent_stores();
        let session_store = SessionStore::new(session_tree);
        let recent_books = recent_store
            .as_ref()
            .map(Self::load_recent_books_from_store)
            .unwrap_or_default();

        let page_input_state = cx.new(|cx| InputState::new(window, cx).placeholder("1"));
        let page_input_subscription = cx.subscribe(
            &page_input_state.clone(),
            |this, input, event: &InputEvent, cx| match event {
                InputEvent::Change => {
                    let value = input.read(cx).value().to_string();
                    this.on_page_input_changed(value, cx);
                }
                InputEvent::PressEnter { .. } => {
                    this.on_page_input_enter(cx);
                }
                InputEvent::Focus => {
                    this.page_input_focused = true;
                }
                InputEvent::Blur => {
                    this.page_input_focused = false;
                }
            },
        );

        let book_id_input_state =
            cx.new(|cx| InputState::new(window, cx).placeholder(i18n.home_book_id_placeholder));
        let book_id_input_subscription = cx.subscribe(
            &book_id_input_state.clone(),
            |this, _, event: &InputEvent, cx| {
                if matches!(event, InputEvent::PressEnter { .. }) {
                    this.open_book_from_input(cx);
                }
            },
        );

        let screen = if session_store.access_token().is_some() {
            Screen::Home
        } else {
            Screen::SignedOut
        };

        Self {
            focus_handle: cx.focus_handle(),
            language,
            session_store,
            session_expired: false,
            window_size_store,
            recent_store,
            recent_books,
            recent_list_scroll: ScrollHandle::new(),
            screen,
            reading: None,
            load_epoch: 0,
            flip_epoch: 0,
            flip_ticker_running: false,
            page_settler: Settler::new(Duration::from_millis(PAGE_INPUT_DEBOUNCE_MS)),
            page_input_state,
            _page_input_subscription: page_input_subscription,
            page_input_focused: false,
            pending_page_input_sync: None,
            book_id_input_state,
            _book_id_input_subscription: book_id_input_subscription,
            needs_initial_focus: true,
            needs_root_refocus: false,
            last_window_size: None,
        }
    }
}

include!("core.rs");
include!("loading.rs");
include!("rendering.rs");
include!("navigation.rs");
include!("interactions.rs");
include!("chrome.rs");
include!("surface.rs");
include!("home.rs");

impl Focusable for ReaderView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ReaderView {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        if self.needs_initial_focus {
            self.needs_initial_focus = false;
            cx.focus_self(window);
        }
        if self.needs_root_refocus {
            self.needs_root_refocus = false;
            window.focus(&self.focus_handle);
        }

        window.set_rem_size(cx.theme().font_size);

        let bounds = window.bounds();
        let current_size = (f32::from(bounds.size.width), f32::from(bounds.size.height));
        if self.last_window_size != Some(current_size) {
            self.last_window_size = Some(current_size);
            if !window.is_maximized() && !window.is_fullscreen() {
                self.save_window_size(current_size.0, current_size.1);
            }
        }

        // Programmatic page-field resets are deferred to the next frame so
        // async completions can request them without a window handle.
        if let Some(value) = self.pending_page_input_sync.take() {
            self.page_input_state
                .update(cx, |input, cx| input.set_value(value, window, cx));
        }

        // Layout is derived from the live viewport and chrome measurements
        // every frame, which covers both the resize and the footer-growth
        // recomputation triggers. Zoom plays no part here.
        let viewport = window.viewport_size();
        let spread_layout = compute_spread_layout(
            f32::from(viewport.width),
            f32::from(viewport.height),
            HEADER_HEIGHT,
            self.footer_height(),
        );

        if self
            .reading
            .as_ref()
            .map(|reading| reading.is_ready())
            .unwrap_or(false)
        {
            let target_width = (spread_layout.page_width * window.scale_factor())
                .round()
                .clamp(1.0, i32::MAX as f32) as u32;
            self.request_spread_renders(target_width, cx);
        }

        let window_maximized = window.is_maximized();
        let main_content: AnyElement = match self.screen {
            Screen::SignedOut => self.render_signed_out(cx),
            Screen::Home => self.render_home(cx),
            Screen::Reading => self.render_reading_surface(spread_layout, cx),
        };

        div()
            .size_full()
            .on_action(cx.listener(|this, _: &SignOutMenu, _, cx| {
                this.sign_out(cx);
            }))
            .on_action(cx.listener(|this, _: &EnableLoggingMenu, _, cx| {
                if crate::logger::enable_file_logging() {
                    configure_app_menus(cx, this.i18n());
                }
            }))
            .on_action(cx.listener(|this, _: &DisableLoggingMenu, _, cx| {
                crate::logger::disable_file_logging();
                configure_app_menus(cx, this.i18n());
            }))
            .on_action(cx.listener(|this, _: &OpenLogsMenu, _, _| {
                this.open_logs_directory();
            }))
            .child(
                div()
                    .v_flex()
                    .size_full()
                    .bg(cx.theme().background)
                    .relative()
                    .track_focus(&self.focus_handle)
                    .capture_key_down(cx.listener(
                        |this, event: &gpui::KeyDownEvent, window, cx| {
                            this.handle_key_down(event, window, cx);
                        },
                    ))
                    .child(self.render_header(window_maximized, cx))
                    .child(
                        div()
                            .flex_1()
                            .w_full()
                            .min_h(px(0.))
                            .overflow_hidden()
                            .child(main_content),
                    )
                    .child(self.render_footer(cx)),
            )
    }
}
