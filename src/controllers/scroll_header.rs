use crate::config::{NEAR_TOP_THRESHOLD, SCROLL_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderThresholds {
    pub scrolled: u32,
    pub near_top: u32,
}

impl Default for HeaderThresholds {
    fn default() -> Self {
        Self {
            scrolled: SCROLL_THRESHOLD,
            near_top: NEAR_TOP_THRESHOLD,
        }
    }
}

/// Snapshot of the header chrome after a scroll sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    /// Offset of the sample this state was derived from. The next sample's
    /// direction is measured against it.
    pub scroll_offset: u32,
    pub is_scrolled: bool,
    pub is_visible: bool,
}

impl ScrollState {
    pub fn header_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        if self.is_scrolled {
            classes.push("scrolled");
        }
        if !self.is_visible {
            classes.push("header-hidden");
        }
        classes
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            scroll_offset: 0,
            is_scrolled: false,
            is_visible: true,
        }
    }
}

/// Derives header background and visibility from a stream of scroll offsets.
///
/// Near the top of the page the header is always revealed. Further down it
/// follows the scroll direction: upward reveals, downward hides, and a
/// repeated sample leaves visibility where it was. The first sample has no
/// direction, so the header keeps its initial visible state.
#[derive(Debug, Clone, Default)]
pub struct ScrollHeaderController {
    thresholds: HeaderThresholds,
    last_offset: Option<u32>,
    state: ScrollState,
}

impl ScrollHeaderController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_thresholds(thresholds: HeaderThresholds) -> Self {
        Self {
            thresholds,
            last_offset: None,
            state: ScrollState::default(),
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn on_scroll_sample(&mut self, offset: u32) -> ScrollState {
        let is_visible = match self.last_offset {
            _ if offset < self.thresholds.near_top => true,
            Some(last) if offset < last => true,
            Some(last) if offset > last => false,
            _ => self.state.is_visible,
        };

        self.last_offset = Some(offset);
        self.state = ScrollState {
            scroll_offset: offset,
            is_scrolled: offset > self.thresholds.scrolled,
            is_visible,
        };
        self.state
    }
}

/// Converts `window.scrollY` into a sample. Overscroll bounce can report
/// negative values on some browsers.
pub fn offset_from_scroll_y(scroll_y: f64) -> u32 {
    if scroll_y.is_nan() || scroll_y <= 0.0 {
        0
    } else if scroll_y >= u32::MAX as f64 {
        u32::MAX
    } else {
        scroll_y.floor() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_flag_tracks_threshold() {
        let mut controller = ScrollHeaderController::new();
        for offset in [0, 5, 10, 11, 99, 500, 10, 3] {
            assert_eq!(controller.on_scroll_sample(offset).is_scrolled, offset > 10);
        }
    }

    #[test]
    fn header_visible_near_top_regardless_of_direction() {
        let mut controller = ScrollHeaderController::new();
        controller.on_scroll_sample(400);
        assert!(!controller.on_scroll_sample(600).is_visible);

        for offset in [0, 20, 50, 99] {
            assert!(controller.on_scroll_sample(offset).is_visible);
        }
        // downward but still near the top
        controller.on_scroll_sample(10);
        assert!(controller.on_scroll_sample(90).is_visible);
    }

    #[test]
    fn scrolling_down_hides_header() {
        let mut controller = ScrollHeaderController::new();
        let states: Vec<ScrollState> = [50, 150, 250, 350]
            .into_iter()
            .map(|o| controller.on_scroll_sample(o))
            .collect();

        assert!(states[0].is_visible);
        assert!(states[1..].iter().all(|s| !s.is_visible));
    }

    #[test]
    fn scrolling_up_reveals_header() {
        let mut controller = ScrollHeaderController::new();
        for offset in [350, 250, 150] {
            assert!(controller.on_scroll_sample(offset).is_visible);
        }
    }

    #[test]
    fn first_deep_sample_keeps_header_visible() {
        // Page restored mid-way: there is no earlier sample to compare against.
        let mut controller = ScrollHeaderController::new();
        assert!(controller.on_scroll_sample(800).is_visible);
        assert!(!controller.on_scroll_sample(900).is_visible);
    }

    #[test]
    fn repeated_sample_keeps_visibility() {
        let mut controller = ScrollHeaderController::new();
        controller.on_scroll_sample(300);
        let hidden = controller.on_scroll_sample(400);
        assert!(!hidden.is_visible);
        assert!(!controller.on_scroll_sample(400).is_visible);
        assert!(!controller.on_scroll_sample(400).is_visible);

        controller.on_scroll_sample(350);
        assert!(controller.on_scroll_sample(350).is_visible);
        assert!(controller.on_scroll_sample(350).is_visible);
    }

    #[test]
    fn latest_sample_is_the_direction_reference() {
        let mut controller = ScrollHeaderController::new();
        controller.on_scroll_sample(120);
        let state = controller.on_scroll_sample(180);
        assert_eq!(state.scroll_offset, 180);
        assert_eq!(controller.state(), state);
        // 150 is below 180 even though it is above the sample before that.
        assert!(controller.on_scroll_sample(150).is_visible);
    }

    #[test]
    fn custom_thresholds() {
        let mut controller = ScrollHeaderController::with_thresholds(HeaderThresholds {
            scrolled: 0,
            near_top: 600,
        });
        let state = controller.on_scroll_sample(500);
        assert!(state.is_scrolled);
        assert!(state.is_visible);
        assert!(!controller.on_scroll_sample(700).is_visible);
    }

    #[test]
    fn header_classes_follow_state() {
        let mut controller = ScrollHeaderController::new();
        assert!(controller.state().header_classes().is_empty());
        assert_eq!(controller.on_scroll_sample(50).header_classes(), vec!["scrolled"]);
        assert_eq!(
            controller.on_scroll_sample(300).header_classes(),
            vec!["scrolled", "header-hidden"]
        );
    }

    #[test]
    fn scroll_y_conversion_clamps() {
        assert_eq!(offset_from_scroll_y(-42.0), 0);
        assert_eq!(offset_from_scroll_y(f64::NAN), 0);
        assert_eq!(offset_from_scroll_y(123.9), 123);
        assert_eq!(offset_from_scroll_y(1e12), u32::MAX);
    }
}
