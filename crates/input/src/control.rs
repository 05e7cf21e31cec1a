//! Size control: a bounded slider over grid side lengths.

use crate::types::{DEFAULT_SIZE, MAX_UI_SIZE, MIN_UI_SIZE, SIZE_CONTROL_OFFSET};

/// Slider position; side length is `progress + SIZE_CONTROL_OFFSET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeControl {
    progress: usize,
}

impl Default for SizeControl {
    fn default() -> Self {
        Self::for_size(DEFAULT_SIZE)
    }
}

impl SizeControl {
    /// Control positioned at side length `size`, clamped to the offered range.
    pub fn for_size(size: usize) -> Self {
        let size = size.clamp(MIN_UI_SIZE, MAX_UI_SIZE);
        Self {
            progress: size - SIZE_CONTROL_OFFSET,
        }
    }

    /// Whether `size` is one of the side lengths the control can select.
    pub fn offers(size: usize) -> bool {
        (MIN_UI_SIZE..=MAX_UI_SIZE).contains(&size)
    }

    pub fn progress(&self) -> usize {
        self.progress
    }

    pub fn side_length(&self) -> usize {
        self.progress + SIZE_CONTROL_OFFSET
    }

    fn max_progress() -> usize {
        MAX_UI_SIZE - SIZE_CONTROL_OFFSET
    }

    /// Step up; returns false at the top of the range.
    pub fn grow(&mut self) -> bool {
        if self.progress >= Self::max_progress() {
            return false;
        }
        self.progress += 1;
        true
    }

    /// Step down; returns false at the bottom of the range.
    pub fn shrink(&mut self) -> bool {
        if self.side_length() <= MIN_UI_SIZE {
            return false;
        }
        self.progress -= 1;
        true
    }
}
