impl ReaderView {
    pub(super) fn render_header(
        &self,
        window_maximized: bool,
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let i18n = self.i18n();
        let is_reading = self.screen == Screen::Reading;
        let reading = self.reading.as_ref();
        let is_ready = reading.map(|r| r.is_ready()).unwrap_or(false);
        let page_total = reading.and_then(|r| r.session.total_pages()).unwrap_or(0);
        let zoom_label: SharedString = reading
            .map(|r| format!("{}%", r.session.zoom_percent()))
            .unwrap_or_else(|| "100%".to_string())
            .into();

        let title: SharedString = match reading.and_then(|r| r.book.as_ref()) {
            Some(book) if !book.title.is_empty() => book.title.clone().into(),
            Some(_) => i18n.unknown_title.into(),
            None if is_reading => i18n.loading_book.into(),
            None => i18n.app_title.into(),
        };
        let subtitle: SharedString = match reading.and_then(|r| r.book.as_ref()) {
            Some(book) if !book.author.is_empty() => i18n.by_author(&book.author).into(),
            Some(_) => i18n.by_author(i18n.unknown_author).into(),
            None => i18n.home_title.into(),
        };

        div()
            .id("header")
            .h(px(HEADER_HEIGHT))
            .w_full()
            .flex_shrink_0()
            .px_3()
            .flex()
            .items_center()
            .justify_between()
            .border_b_1()
            .border_color(cx.theme().title_bar_border)
            .bg(cx.theme().title_bar)
            .child(
                div()
                    .h_full()
                    .flex()
                    .items_center()
                    .gap_3()
                    .when(is_reading, |this| {
                        this.child(
                            Button::new("leave-reading")
                                .ghost()
                                .small()
                                .icon(
                                    Icon::new(crate::icons::IconName::Close)
                                        .text_color(cx.theme().foreground),
                                )
                                .on_click(cx.listener(|this, _, _, cx| {
                                    this.leave_reading(cx);
                                })),
                        )
                    })
                    .when(!is_reading, |this| {
                        this.child(
                            Icon::new(crate::icons::IconName::BookOpen)
                                .size_5()
                                .text_color(cx.theme().foreground),
                        )
                    })
                    .child(
                        div()
                            .v_flex()
                            .child(
                                div()
                                    .text_sm()
                                    .font_semibold()
                                    .text_color(cx.theme().foreground)
                                    .child(title),
                            )
                            .child(
                                div()
                                    .text_xs()
                                    .text_color(cx.theme().muted_foreground)
                                    .child(subtitle),
                            ),
                    ),
            )
            .child(
                div()
                    .id("header-drag-area")
                    .h_full()
                    .flex_1()
                    .window_control_area(WindowControlArea::Drag),
            )
            .child(
                div()
                    .h_full()
                    .flex()
                    .items_center()
                    .gap_2()
                    .when(is_ready, |this| {
                        this.child(self.render_zoom_group(zoom_label, cx))
                            .child(self.render_page_input_group(page_total, cx))
                    })
                    .when(!cfg!(target_os = "macos"), |this| {
                        this.child(self.render_window_controls(window_maximized, cx))
                    }),
            )
    }

    fn render_zoom_group(&self, zoom_label: SharedString, cx: &mut Context<Self>) -> Div {
        let i18n = self.i18n();

        div()
            .flex()
            .items_center()
            .gap_1()
            .rounded_md()
            .bg(cx.theme().secondary)
            .px_1()
            .child(
                Button::new("zoom-out")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::ZoomOut)
                            .text_color(cx.theme().foreground),
                    )
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.zoom_out(cx);
                    })),
            )
            .child(
                div()
                    .min_w(px(44.))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(zoom_label),
            )
            .child(
                Button::new("zoom-in")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::ZoomIn)
                            .text_color(cx.theme().foreground),
                    )
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.zoom_in(cx);
                    })),
            )
            .child(
                Button::new("zoom-reset")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::RotateCcw)
                            .text_color(cx.theme().foreground),
                    )
                    .label(i18n.zoom_reset_button)
                    .on_click(cx.listener(|this, _, _, cx| {
                        this.zoom_reset(cx);
                    })),
            )
    }

    fn render_page_input_group(&self, page_total: usize, cx: &mut Context<Self>) -> Div {
        let i18n = self.i18n();

        div()
            .flex()
            .items_center()
            .gap_2()
            .rounded_md()
            .bg(cx.theme().secondary)
            .px_2()
            .py_1()
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n.reading_page_label),
            )
            .child(
                div()
                    .w(px(56.))
                    .child(Input::new(&self.page_input_state).small()),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n.reading_page_total(page_total)),
            )
    }

    fn render_window_controls(&self, window_maximized: bool, cx: &mut Context<Self>) -> Div {
        div()
            .h_full()
            .flex()
            .items_center()
            .gap_1()
            .child(
                Button::new("window-minimize")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::WindowMinimize)
                            .text_color(cx.theme().foreground),
                    )
                    .on_click(|_, window, _| window.minimize_window()),
            )
            .child(
                Button::new("window-maximize")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(if window_maximized {
                            crate::icons::IconName::WindowRestore
                        } else {
                            crate::icons::IconName::WindowMaximize
                        })
                        .text_color(cx.theme().foreground),
                    )
                    .on_click(|_, window, _| window.zoom_window()),
            )
            .child(
                Button::new("window-close")
                    .ghost()
                    .small()
                    .icon(
                        Icon::new(crate::icons::IconName::WindowClose)
                            .text_color(cx.theme().foreground),
                    )
                    .on_click(|_, window, _| window.remove_window()),
            )
    }

    pub(super) fn render_footer(&self, cx: &mut Context<Self>) -> impl IntoElement {
        let i18n = self.i18n();
        let reading = self.reading.as_ref();

        let status: SharedString = match self.screen {
            Screen::SignedOut => i18n.signed_out_title.into(),
            Screen::Home => i18n.home_hint.into(),
            Screen::Reading => match reading.map(|r| &r.phase) {
                Some(ReadingPhase::FetchingMetadata) => i18n.loading_book.into(),
                Some(ReadingPhase::Downloading) => i18n.downloading_asset.into(),
                Some(ReadingPhase::Parsing) => i18n.parsing_document.into(),
                Some(ReadingPhase::Ready) => {
                    let current = reading.map(|r| r.session.current_page()).unwrap_or(1);
                    let total = reading.and_then(|r| r.session.total_pages()).unwrap_or(0);
                    format!("{} {} {}", i18n.reading_page_label, current, i18n.reading_page_total(total))
                        .into()
                }
                Some(ReadingPhase::Failed(_)) | None => "".into(),
            },
        };

        let book_id: SharedString = reading
            .map(|r| r.book_id.clone())
            .unwrap_or_default()
            .into();

        div()
            .id("footer")
            .h(px(self.footer_height()))
            .w_full()
            .flex_shrink_0()
            .px_4()
            .flex()
            .items_center()
            .justify_between()
            .border_t_1()
            .border_color(cx.theme().border)
            .bg(cx.theme().title_bar)
            .child(
                div()
                    .text_xs()
                    .text_color(cx.theme().muted_foreground)
                    .child(book_id),
            )
            .child(
                div()
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(status),
            )
    }
}
