impl ReaderView {
    pub(super) fn render_home(&self, cx: &mut Context<Self>) -> AnyElement {
        let i18n = self.i18n();
        let now = Self::now_unix_secs();
        let recent_books = self.recent_books.clone();

        div()
            .size_full()
            .v_flex()
            .items_center()
            .justify_center()
            .gap_6()
            .child(
                div()
                    .v_flex()
                    .items_center()
                    .gap_2()
                    .child(
                        Icon::new(crate::icons::IconName::BookOpen)
                            .size_8()
                            .text_color(cx.theme().muted_foreground),
                    )
                    .child(
                        div()
                            .text_lg()
                            .font_semibold()
                            .text_color(cx.theme().foreground)
                            .child(i18n.home_title),
                    )
                    .child(
                        div()
                            .text_sm()
                            .text_color(cx.theme().muted_foreground)
                            .child(i18n.home_hint),
                    ),
            )
            .child(
                div()
                    .flex()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .w(px(220.))
                            .child(Input::new(&self.book_id_input_state).small()),
                    )
                    .child(
                        Button::new("open-book")
                            .small()
                            .label(i18n.home_open_button)
                            .on_click(cx.listener(|this, _, _, cx| {
                                this.open_book_from_input(cx);
                            })),
                    ),
            )
            .child(
                div()
                    .w(px(420.))
                    .v_flex()
                    .gap_2()
                    .child(
                        div()
                            .text_sm()
                            .font_semibold()
                            .text_color(cx.theme().muted_foreground)
                            .child(i18n.home_recent_section),
                    )
                    .when(recent_books.is_empty(), |this| {
                        this.child(
                            div()
                                .text_sm()
                                .text_color(cx.theme().muted_foreground)
                                .child(i18n.home_no_recent_books),
                        )
                    })
                    .when(!recent_books.is_empty(), |this| {
                        this.child(
                            div()
                                .id("recent-books-scroll")
                                .max_h(px(280.))
                                .overflow_y_scroll()
                                .track_scroll(&self.recent_list_scroll)
                                .child(div().v_flex().gap_1().children(
                                    recent_books.into_iter().enumerate().map(|(ix, book)| {
                                        let seconds_ago =
                                            now.saturating_sub(book.opened_at_unix_secs);
                                        let opened_label = i18n.recent_opened_relative(seconds_ago);
                                        let book_id = book.book_id.clone();

                                        div()
                                            .id(("recent-book", ix))
                                            .w_full()
                                            .px_2()
                                            .py_1()
                                            .rounded_md()
                                            .hover(|style| style.bg(cx.theme().muted))
                                            .cursor_pointer()
                                            .on_click(cx.listener(move |this, _, _, cx| {
                                                this.open_recent_book(book_id.clone(), cx);
                                            }))
                                            .child(
                                                div()
                                                    .flex()
                                                    .items_center()
                                                    .justify_between()
                                                    .child(
                                                        div()
                                                            .v_flex()
                                                            .child(
                                                                div()
                                                                    .text_sm()
                                                                    .text_color(
                                                                        cx.theme().foreground,
                                                                    )
                                                                    .child(book.title.clone()),
                                                            )
                                                            .child(
                                                                div()
                                                                    .text_xs()
                                                                    .text_color(
                                                                        cx.theme()
                                                                            .muted_foreground,
                                                                    )
                                                                    .child(i18n.by_author(
                                                                        &book.author,
                                                                    )),
                                                            ),
                                                    )
                                                    .child(
                                                        div()
                                                            .text_xs()
                                                            .text_color(
                                                                cx.theme().muted_foreground,
                                                            )
                                                            .child(opened_label),
                                                    ),
                                            )
                                    }),
                                )),
                        )
                    }),
            )
            .into_any_element()
    }

    pub(super) fn render_signed_out(&self, cx: &mut Context<Self>) -> AnyElement {
        let i18n = self.i18n();

        div()
            .size_full()
            .v_flex()
            .items_center()
            .justify_center()
            .gap_3()
            .child(
                Icon::new(crate::icons::IconName::BookOpen)
                    .size_8()
                    .text_color(cx.theme().muted_foreground),
            )
            .child(
                div()
                    .text_lg()
                    .font_semibold()
                    .text_color(cx.theme().foreground)
                    .child(i18n.signed_out_title),
            )
            .when(self.session_expired, |this| {
                this.child(
                    div()
                        .text_sm()
                        .text_color(cx.theme().danger)
                        .child(i18n.error_unauthorized),
                )
            })
            .child(
                div()
                    .max_w(px(420.))
                    .text_sm()
                    .text_color(cx.theme().muted_foreground)
                    .child(i18n.signed_out_hint),
            )
            .into_any_element()
    }
}
