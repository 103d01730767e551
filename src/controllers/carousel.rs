use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    #[error("carousel needs at least one item")]
    EmptyCollection,
    #[error("index {index} is out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
}

/// Active-slide bookkeeping over a fixed, non-empty list.
///
/// Stepping past either end wraps around, so `active_index` is always a
/// valid position in `items`.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselController<T> {
    items: Vec<T>,
    active_index: usize,
}

impl<T> CarouselController<T> {
    pub fn new(items: Vec<T>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::EmptyCollection);
        }
        Ok(Self {
            items,
            active_index: 0,
        })
    }

    pub fn next(&mut self) -> usize {
        self.active_index = (self.active_index + 1) % self.items.len();
        self.active_index
    }

    pub fn previous(&mut self) -> usize {
        let len = self.items.len();
        self.active_index = (self.active_index + len - 1) % len;
        self.active_index
    }

    /// Leaves the active slide untouched when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> Result<usize, CarouselError> {
        if index >= self.items.len() {
            return Err(CarouselError::OutOfRange {
                index,
                len: self.items.len(),
            });
        }
        self.active_index = index;
        Ok(index)
    }

    pub fn current(&self) -> &T {
        &self.items[self.active_index]
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active_index == index
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// One-based counter shown beside the pagination dots, e.g. `2 / 4`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.active_index + 1, self.items.len())
    }
}

/// Timer policy for advancing the carousel without user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Autoplay {
    interval_ms: u32,
}

impl Autoplay {
    pub fn every(interval_ms: u32) -> Self {
        Self { interval_ms }
    }

    pub fn interval_ms(&self) -> Option<u32> {
        (self.interval_ms > 0).then_some(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> CarouselController<&'static str> {
        CarouselController::new(vec!["bugatti", "mercedes-city", "mercedes", "jacob"]).unwrap()
    }

    #[test]
    fn starts_at_first_item() {
        let carousel = four();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(*carousel.current(), "bugatti");
    }

    #[test]
    fn next_wraps_to_start() {
        let mut carousel = four();
        let visited: Vec<usize> = (0..4).map(|_| carousel.next()).collect();
        assert_eq!(visited, vec![1, 2, 3, 0]);
        assert_eq!(*carousel.current(), "bugatti");
    }

    #[test]
    fn previous_wraps_to_end() {
        let mut carousel = four();
        assert_eq!(carousel.previous(), 3);
        assert_eq!(*carousel.current(), "jacob");
        assert_eq!(carousel.previous(), 2);
    }

    #[test]
    fn jump_to_selects_item() {
        let mut carousel = four();
        assert_eq!(carousel.jump_to(2), Ok(2));
        assert_eq!(*carousel.current(), "mercedes");
        assert!(carousel.is_active(2));
        assert!(!carousel.is_active(0));
    }

    #[test]
    fn jump_out_of_range_keeps_index() {
        let mut carousel = four();
        carousel.jump_to(1).unwrap();
        assert_eq!(
            carousel.jump_to(4),
            Err(CarouselError::OutOfRange { index: 4, len: 4 })
        );
        assert_eq!(carousel.active_index(), 1);
        assert!(carousel.jump_to(usize::MAX).is_err());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn empty_list_is_rejected() {
        let result = CarouselController::<u8>::new(Vec::new());
        assert!(matches!(result, Err(CarouselError::EmptyCollection)));
    }

    #[test]
    fn single_item_stays_put() {
        let mut carousel = CarouselController::new(vec![7]).unwrap();
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.previous(), 0);
        assert_eq!(*carousel.current(), 7);
    }

    #[test]
    fn position_label_is_one_based() {
        let mut carousel = four();
        assert_eq!(carousel.position_label(), "1 / 4");
        carousel.previous();
        assert_eq!(carousel.position_label(), "4 / 4");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CarouselError::OutOfRange { index: 9, len: 4 }.to_string(),
            "index 9 is out of range for 4 items"
        );
        assert_eq!(
            CarouselError::EmptyCollection.to_string(),
            "carousel needs at least one item"
        );
    }

    #[test]
    fn zero_interval_disables_autoplay() {
        assert_eq!(Autoplay::every(0).interval_ms(), None);
        assert_eq!(Autoplay::every(6_000).interval_ms(), Some(6_000));
    }
}
