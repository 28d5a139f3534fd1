impl ReaderView {
    /// Queue rasterization for the pages the spread view needs: the visible
    /// spread, the flip target if a turn is running, and the neighbouring
    /// spreads as prefetch. Already-rendered pages at a sufficient width are
    /// skipped, so calling this every frame is cheap.
    pub(super) fn request_spread_renders(&mut self, target_width: u32, cx: &mut Context<Self>) {
        let language = self.language;
        let epoch = self.load_epoch;

        let Some(reading) = self.reading.as_mut() else {
            return;
        };
        if !reading.is_ready() || reading.pages.is_empty() {
            return;
        }
        let Some(path) = reading.asset_path.clone() else {
            return;
        };

        if reading.render_inflight_tasks == 0 && !reading.render_loading.is_empty() {
            reading.render_loading.clear();
        }
        if reading.render_inflight_tasks >= RENDER_MAX_PARALLEL_TASKS {
            return;
        }

        let current = reading.flipbook.current_spread();
        let mut spread_order = Vec::new();
        if let Some(animation) = reading.flipbook.animation() {
            spread_order.push(animation.to_spread);
        }
        spread_order.push(current);
        spread_order.push(current + 1);
        if let Some(previous) = current.checked_sub(1) {
            spread_order.push(previous);
        }
        spread_order.push(current + 2);

        let mut candidate_order = Vec::new();
        for spread in spread_order {
            if spread >= reading.flipbook.spread_count() {
                continue;
            }
            let (left, right) = reading.flipbook.pages_in_spread(spread);
            candidate_order.extend(left);
            candidate_order.extend(right);
        }

        let mut pending = Vec::new();
        let mut seen = HashSet::new();
        for ix in candidate_order {
            if !seen.insert(ix) {
                continue;
            }

            let Some(slot) = reading.pages.get(ix) else {
                continue;
            };

            let needs_render = slot.image.is_none() || slot.render_width < target_width;
            if needs_render && !slot.failed && !reading.render_loading.contains(&ix) {
                pending.push(ix);
                if pending.len() >= RENDER_BATCH_SIZE {
                    break;
                }
            }
        }

        if pending.is_empty() {
            return;
        }

        for ix in &pending {
            reading.render_loading.insert(*ix);
        }
        reading.render_inflight_tasks = reading.render_inflight_tasks.saturating_add(1);

        cx.spawn(async move |view, cx| {
            let load_result = cx
                .background_executor()
                .spawn(async move {
                    let loaded = render_page_images(&path, &pending, target_width, language);
                    (pending, target_width, loaded)
                })
                .await;

            let _ = view.update(cx, |this, cx| {
                if this.load_epoch != epoch {
                    return;
                }
                let Some(reading) = this.reading.as_mut() else {
                    return;
                };

                reading.render_inflight_tasks = reading.render_inflight_tasks.saturating_sub(1);

                let (requested_indices, loaded_target_width, loaded_result) = load_result;
                let mut loaded_indices = HashSet::new();

                match loaded_result {
                    Ok(images) => {
                        for (ix, image) in images {
                            if let Some(slot) = reading.pages.get_mut(ix) {
                                slot.image = Some(image);
                                slot.render_width = loaded_target_width;
                                slot.failed = false;
                                loaded_indices.insert(ix);
                            }
                        }
                    }
                    Err(err) => {
                        crate::debug_log!("[reader] render batch failed: {:#}", err);
                    }
                }

                for ix in requested_indices {
                    reading.render_loading.remove(&ix);
                    if !loaded_indices.contains(&ix)
                        && let Some(slot) = reading.pages.get_mut(ix)
                    {
                        slot.failed = true;
                    }
                }
                cx.notify();
            });
        })
        .detach();
    }
}
