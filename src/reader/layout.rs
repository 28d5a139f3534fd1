use std::f32::consts::SQRT_2;

/// Inner padding around the spread, in logical pixels.
pub const SPREAD_PADDING: f32 = 32.0;
/// ISO-paper proportions: page height = page width x sqrt(2).
pub const PAGE_ASPECT_RATIO: f32 = SQRT_2;

/// Page dimensions for a two-page spread inside the area left over between
/// the header and the footer. Viewport and chrome sizes are passed in
/// explicitly so the computation stays independent of any window handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpreadLayout {
    pub main_area_height: f32,
    pub page_width: f32,
    pub page_height: f32,
}

pub fn compute_spread_layout(
    viewport_width: f32,
    viewport_height: f32,
    header_height: f32,
    footer_height: f32,
) -> SpreadLayout {
    let main_area_height = (viewport_height - header_height - footer_height).max(0.0);
    let available_height = main_area_height - SPREAD_PADDING;
    let available_width = viewport_width - SPREAD_PADDING;

    let mut page_height = available_height;
    let mut page_width = page_height / PAGE_ASPECT_RATIO;
    if page_width * 2.0 > available_width {
        page_width = available_width / 2.0;
        page_height = page_width * PAGE_ASPECT_RATIO;
    }

    SpreadLayout {
        main_area_height,
        page_width: page_width.floor().max(1.0),
        page_height: page_height.floor().max(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_viewport_is_height_constrained() {
        let layout = compute_spread_layout(1920.0, 1080.0, 64.0, 80.0);

        assert_eq!(layout.main_area_height, 936.0);

        let available_height = 936.0 - SPREAD_PADDING;
        let available_width = 1920.0 - SPREAD_PADDING;
        assert!(layout.page_height <= available_height);
        assert!(layout.page_width * 2.0 <= available_width);

        // Height-constrained: the page fills the available height.
        assert_eq!(layout.page_height, available_height.floor());
        assert_eq!(layout.page_width, (available_height / PAGE_ASPECT_RATIO).floor());
    }

    #[test]
    fn narrow_viewport_is_width_constrained() {
        let layout = compute_spread_layout(800.0, 1080.0, 64.0, 80.0);

        let available_height = layout.main_area_height - SPREAD_PADDING;
        let available_width = 800.0 - SPREAD_PADDING;
        assert!(layout.page_width * 2.0 <= available_width);
        assert!(layout.page_height <= available_height);

        // Width-constrained: two pages fill the available width.
        assert_eq!(layout.page_width, (available_width / 2.0).floor());
        assert_eq!(
            layout.page_height,
            ((available_width / 2.0) * PAGE_ASPECT_RATIO).floor()
        );
    }

    #[test]
    fn pages_keep_iso_proportions() {
        let layout = compute_spread_layout(1920.0, 1080.0, 64.0, 80.0);
        let ratio = layout.page_height / layout.page_width;
        assert!((ratio - PAGE_ASPECT_RATIO).abs() < 0.01);
    }

    #[test]
    fn chrome_taller_than_viewport_clamps_to_zero() {
        let layout = compute_spread_layout(1920.0, 100.0, 64.0, 80.0);
        assert_eq!(layout.main_area_height, 0.0);
        assert!(layout.page_width >= 1.0);
        assert!(layout.page_height >= 1.0);
    }
}
