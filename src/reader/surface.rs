impl ReaderView {
    pub(super) fn render_reading_surface(
        &self,
        layout: SpreadLayout,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let i18n = self.i18n();
        let Some(reading) = self.reading.as_ref() else {
            return div().into_any_element();
        };

        match &reading.phase {
            ReadingPhase::FetchingMetadata => {
                self.render_surface_status(i18n.loading_book, false, cx)
            }
            ReadingPhase::Downloading => {
                self.render_surface_status(i18n.downloading_asset, false, cx)
            }
            ReadingPhase::Parsing => self.render_surface_status(i18n.parsing_document, false, cx),
            ReadingPhase::Failed(error) => {
                let message: SharedString = match error {
                    ReadError::NotFound(Some(backend_message)) => backend_message.clone().into(),
                    ReadError::NotFound(None) => i18n.error_not_found.into(),
                    ReadError::NoAttachment => i18n.error_no_attachment.into(),
                    ReadError::ParseFailure => i18n.error_parse_failed.into(),
                    ReadError::Transport(_) => i18n.error_transport.into(),
                };
                self.render_surface_status(message, true, cx)
            }
            ReadingPhase::Ready => self.render_spread(reading, layout, cx),
        }
    }

    fn render_surface_status(
        &self,
        message: impl Into<SharedString>,
        is_error: bool,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        div()
            .size_full()
            .v_flex()
            .items_center()
            .justify_center()
            .gap_3()
            .when(!is_error, |this| {
                this.child(
                    Icon::new(crate::icons::IconName::LoaderCircle)
                        .size_8()
                        .text_color(cx.theme().muted_foreground),
                )
            })
            .child(
                div()
                    .text_sm()
                    .text_color(if is_error {
                        cx.theme().danger
                    } else {
                        cx.theme().muted_foreground
                    })
                    .child(message.into()),
            )
            .into_any_element()
    }

    fn render_spread(
        &self,
        reading: &ReadingState,
        layout: SpreadLayout,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        // Zoom is a visual scale on the displayed spread only; rasterization
        // and layout stay at the unscaled page size.
        let scale = reading.session.zoom_scale();
        let page_width = layout.page_width * scale;
        let page_height = layout.page_height * scale;

        // A turn shows the outgoing spread folding to the spine for the
        // first half and the incoming spread unfolding for the second.
        let (display_spread, fold) = match reading.flipbook.animation() {
            None => (reading.flipbook.current_spread(), None),
            Some(animation) if animation.progress < 0.5 => (
                animation.from_spread,
                Some((animation.is_forward(), 1.0 - animation.progress * 2.0)),
            ),
            Some(animation) => (
                animation.to_spread,
                Some((!animation.is_forward(), animation.progress * 2.0 - 1.0)),
            ),
        };

        let (left_ix, right_ix) = reading.flipbook.pages_in_spread(display_spread);
        let (left_factor, right_factor) = match fold {
            Some((true, factor)) => (1.0, factor),
            Some((false, factor)) => (factor, 1.0),
            None => (1.0, 1.0),
        };

        let at_first_spread = reading.flipbook.current_spread() == 0;
        let at_last_spread =
            reading.flipbook.current_spread() + 1 >= reading.flipbook.spread_count();
        let arrow_top = (layout.main_area_height / 2.0 - 16.0).max(0.0);

        div()
            .size_full()
            .relative()
            .flex()
            .items_center()
            .justify_center()
            .child(
                div()
                    .w(px(page_width * 2.0))
                    .h(px(page_height))
                    .flex()
                    .child(
                        div()
                            .w(px(page_width))
                            .h_full()
                            .flex()
                            .justify_end()
                            .child(self.render_page_leaf(
                                reading,
                                left_ix,
                                page_width * left_factor,
                                page_height,
                                cx,
                            )),
                    )
                    .child(
                        div()
                            .w(px(page_width))
                            .h_full()
                            .flex()
                            .justify_start()
                            .child(self.render_page_leaf(
                                reading,
                                right_ix,
                                page_width * right_factor,
                                page_height,
                                cx,
                            )),
                    ),
            )
            .when(!at_first_spread, |this| {
                this.child(
                    div()
                        .absolute()
                        .left(px(16.))
                        .top(px(arrow_top))
                        .child(
                            Button::new("spread-prev")
                                .ghost()
                                .icon(
                                    Icon::new(crate::icons::IconName::ChevronLeft)
                                        .size_6()
                                        .text_color(cx.theme().foreground),
                                )
                                .on_click(cx.listener(|this, _, _, cx| {
                                    this.prev_page(cx);
                                })),
                        ),
                )
            })
            .when(!at_last_spread, |this| {
                this.child(
                    div()
                        .absolute()
                        .right(px(16.))
                        .top(px(arrow_top))
                        .child(
                            Button::new("spread-next")
                                .ghost()
                                .icon(
                                    Icon::new(crate::icons::IconName::ChevronRight)
                                        .size_6()
                                        .text_color(cx.theme().foreground),
                                )
                                .on_click(cx.listener(|this, _, _, cx| {
                                    this.next_page(cx);
                                })),
                        ),
                )
            })
            .into_any_element()
    }

    fn render_page_leaf(
        &self,
        reading: &ReadingState,
        page_index: Option<usize>,
        width: f32,
        height: f32,
        cx: &mut Context<Self>,
    ) -> AnyElement {
        let i18n = self.i18n();
        let Some(page_index) = page_index else {
            // The cover's empty facing side.
            return div().w(px(width)).h(px(height)).into_any_element();
        };

        let leaf = div()
            .w(px(width))
            .h(px(height))
            .overflow_hidden()
            .bg(gpui::white())
            .shadow_md();

        let Some(slot) = reading.pages.get(page_index) else {
            return leaf.into_any_element();
        };

        if let Some(image) = slot.image.clone() {
            return leaf
                .child(
                    img(image)
                        .size_full()
                        .object_fit(ObjectFit::Contain),
                )
                .into_any_element();
        }

        leaf.flex()
            .items_center()
            .justify_center()
            .child(if slot.failed {
                div()
                    .text_xs()
                    .text_color(cx.theme().danger)
                    .child(i18n.page_render_failed)
                    .into_any_element()
            } else {
                Icon::new(crate::icons::IconName::LoaderCircle)
                    .size_6()
                    .text_color(cx.theme().muted_foreground)
                    .into_any_element()
            })
            .into_any_element()
    }
}
