use crate::axis::Axis;

/// Result of an index request.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct IndexChange {
    pub changed: bool,
    /// `None` when the active axis has no slices.
    pub index: Option<usize>,
}

/// Active axis and index into that axis's slices. Holds no image data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct NavigationCursor {
    axis: Axis,
    index: Option<usize>,
}

impl NavigationCursor {
    pub fn new(axis: Axis, len: usize) -> Self {
        Self {
            axis,
            index: (len > 0).then_some(0),
        }
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// Switches axis and resets to the first slice, or to inactive if the
    /// new axis is empty.
    pub fn set_axis(&mut self, axis: Axis, len: usize) {
        *self = Self::new(axis, len);
    }

    /// Clamps `requested` into `[0, len - 1]`. Repeating the current index
    /// reports `changed == false`.
    pub fn set_index(&mut self, requested: i64, len: usize) -> IndexChange {
        let Some(current) = self.index else {
            return IndexChange { changed: false, index: None };
        };
        if len == 0 {
            return IndexChange { changed: false, index: None };
        }
        let max = (len - 1) as i64;
        let clamped = requested.clamp(0, max) as usize;
        self.index = Some(clamped);
        IndexChange {
            changed: clamped != current,
            index: Some(clamped),
        }
    }
}

/// Slider values truncate toward zero, like an `(int)` cast.
pub fn slider_value(value: f32) -> i64 {
    if value.is_finite() { value.trunc() as i64 } else { 0 }
}

/// Index under a slider bar position, `fraction` running 0..=1 across the bar.
/// Rounds to the nearest slice so the far end reaches `len - 1`.
pub fn slider_index(fraction: f32, len: usize) -> i64 {
    if len == 0 || !fraction.is_finite() {
        return 0;
    }
    let max = (len - 1) as f32;
    (fraction.clamp(0.0, 1.0) * max).round() as i64
}
