//! The slice viewer: what the host window draws each frame.
//!
//! The host feeds input (`set_axis`, `on_slider`, `step`) and time (`tick`)
//! into [`SliceViewer`] and reads back the slice to bind, the overlay
//! opacity, the plane position and the slider/label state.

use glam::Vec3;

use crate::axis::Axis;
use crate::constants::FADE_DURATION;
use crate::error::Result;
use crate::navigation::{IndexChange, NavigationCursor, slider_index, slider_value};
use crate::slice_store::SliceStore;
use crate::transition::{PlaneOffset, TransitionAnimator};

/// Key of one slice in the store.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SliceRef {
    pub axis: Axis,
    pub index: usize,
}

/// Slider state for the active axis: range `[0, max]`, current `value`.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct SliderBinding {
    pub max: usize,
    pub value: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct ViewerOptions {
    pub initial_axis: Axis,
    /// Whole cross-fade, both halves (seconds).
    pub fade_duration: f32,
    /// `None` keeps the plane at the origin.
    pub plane_offset: Option<PlaneOffset>,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            initial_axis: Axis::default(),
            fade_duration: FADE_DURATION,
            plane_offset: None,
        }
    }
}

pub struct SliceViewer<T> {
    store: SliceStore<T>,
    cursor: NavigationCursor,
    animator: TransitionAnimator<SliceRef>,
    displayed: Option<SliceRef>,
    plane_offset: Option<PlaneOffset>,
    plane_position: Vec3,
}

impl<T> SliceViewer<T> {
    /// Starts on the first slice of `options.initial_axis`, shown without a fade.
    pub fn new(store: SliceStore<T>, options: ViewerOptions) -> Self {
        let axis = options.initial_axis;
        let cursor = NavigationCursor::new(axis, store.len(axis));
        let plane_position = options.plane_offset.map_or(Vec3::ZERO, |o| o.resting);
        let mut viewer = Self {
            store,
            cursor,
            animator: TransitionAnimator::new(options.fade_duration),
            displayed: cursor.index().map(|index| SliceRef { axis, index }),
            plane_offset: options.plane_offset,
            plane_position,
        };
        viewer.update_plane_position();
        viewer
    }

    /// Switches axis and snaps to its first slice. An empty axis keeps the
    /// current picture.
    pub fn set_axis(&mut self, axis: Axis) {
        self.cursor.set_axis(axis, self.store.len(axis));
        if let Some(index) = self.cursor.index() {
            let slice = SliceRef { axis, index };
            self.displayed = Some(slice);
            // A fade still heading for the old axis must not swap it back in
            self.animator.retarget(slice);
            self.update_plane_position();
        }
        log::debug!("Axis {} ({} slices)", axis, self.store.len(axis));
    }

    pub fn set_axis_named(&mut self, name: &str) -> Result<()> {
        let axis = name.parse::<Axis>()?;
        self.set_axis(axis);
        Ok(())
    }

    /// Clamps and applies an index request. A changed index starts a fade
    /// (dropped if one is running) and moves the plane right away.
    pub fn set_index(&mut self, requested: i64) -> IndexChange {
        let axis = self.cursor.axis();
        let change = self.cursor.set_index(requested, self.store.len(axis));
        if let (true, Some(index)) = (change.changed, change.index) {
            if !self.animator.begin(SliceRef { axis, index }) {
                log::trace!("Fade in flight, slice {} not shown", index);
            }
            self.update_plane_position();
        }
        change
    }

    pub fn on_slider(&mut self, value: f32) -> IndexChange {
        self.set_index(slider_value(value))
    }

    /// Selects the slice under a slider bar position, `fraction` in `[0, 1]`.
    pub fn drag_slider(&mut self, fraction: f32) -> IndexChange {
        let len = self.store.len(self.cursor.axis());
        self.set_index(slider_index(fraction, len))
    }

    /// Moves the index by `delta` slices.
    pub fn step(&mut self, delta: i64) -> IndexChange {
        match self.cursor.index() {
            Some(index) => self.set_index((index as i64).saturating_add(delta)),
            None => IndexChange { changed: false, index: None },
        }
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self, dt: f32) {
        if let Some(target) = self.animator.tick(dt) {
            self.displayed = Some(target);
        }
    }

    pub fn displayed(&self) -> Option<&T> {
        self.displayed
            .and_then(|slice| self.store.get(slice.axis, slice.index))
    }

    pub fn displayed_slice(&self) -> Option<SliceRef> {
        self.displayed
    }

    pub fn opacity(&self) -> f32 {
        self.animator.opacity()
    }

    pub fn is_transitioning(&self) -> bool {
        self.animator.is_in_flight()
    }

    pub fn plane_position(&self) -> Vec3 {
        self.plane_position
    }

    pub fn slider(&self) -> Option<SliderBinding> {
        let len = self.store.len(self.cursor.axis());
        self.cursor
            .index()
            .filter(|_| len > 0)
            .map(|value| SliderBinding { max: len - 1, value })
    }

    pub fn axis_label(&self) -> String {
        format!("Axis: {}", self.cursor.axis())
    }

    pub fn cursor(&self) -> NavigationCursor {
        self.cursor
    }

    pub fn store(&self) -> &SliceStore<T> {
        &self.store
    }

    fn update_plane_position(&mut self) {
        if let (Some(offset), Some(index)) = (self.plane_offset, self.cursor.index()) {
            self.plane_position = offset.position(self.cursor.axis(), index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisMap;

    const DT: f32 = 1.0 / 60.0;

    fn store(x: usize, y: usize, z: usize) -> SliceStore<String> {
        let lens = AxisMap::from_fn(|axis| match axis {
            Axis::X => x,
            Axis::Y => y,
            Axis::Z => z,
        });
        SliceStore::from_sets(AxisMap::from_fn(|axis| {
            (0..lens[axis]).map(|i| format!("{}{}", axis, i)).collect()
        }))
    }

    fn settle(viewer: &mut SliceViewer<String>) {
        for _ in 0..1000 {
            if !viewer.is_transitioning() {
                return;
            }
            viewer.tick(DT);
        }
        panic!("fade never finished");
    }

    fn shown(viewer: &SliceViewer<String>) -> Option<&str> {
        viewer.displayed().map(String::as_str)
    }

    #[test]
    fn starts_on_first_slice_of_initial_axis() {
        let viewer = SliceViewer::new(store(2, 2, 3), ViewerOptions::default());
        assert_eq!(shown(&viewer), Some("Z0"));
        assert_eq!(viewer.axis_label(), "Axis: Z");
        assert_eq!(viewer.slider(), Some(SliderBinding { max: 2, value: 0 }));
        assert_eq!(viewer.opacity(), 1.0);
    }

    #[test]
    fn index_change_fades_to_target() {
        let mut viewer = SliceViewer::new(store(0, 0, 5), ViewerOptions::default());
        assert!(viewer.set_index(3).changed);
        assert!(viewer.is_transitioning());
        // Old slice stays bound until the midpoint
        assert_eq!(shown(&viewer), Some("Z0"));
        settle(&mut viewer);
        assert_eq!(shown(&viewer), Some("Z3"));
        assert_eq!(viewer.opacity(), 1.0);
        assert!(!viewer.is_transitioning());
    }

    #[test]
    fn clamps_requests() {
        let mut viewer = SliceViewer::new(store(0, 0, 5), ViewerOptions::default());
        assert_eq!(viewer.set_index(-5).index, Some(0));
        assert!(!viewer.is_transitioning());
        assert_eq!(viewer.set_index(10).index, Some(4));
        settle(&mut viewer);
        assert_eq!(shown(&viewer), Some("Z4"));
    }

    #[test]
    fn repeated_index_starts_nothing() {
        let mut viewer = SliceViewer::new(store(0, 0, 5), ViewerOptions::default());
        viewer.set_index(2);
        settle(&mut viewer);
        let change = viewer.set_index(2);
        assert!(!change.changed);
        assert!(!viewer.is_transitioning());
    }

    #[test]
    fn requests_during_fade_are_dropped() {
        let mut viewer = SliceViewer::new(store(0, 0, 8), ViewerOptions::default());
        let mut undisturbed = SliceViewer::new(store(0, 0, 8), ViewerOptions::default());
        viewer.set_index(2);
        undisturbed.set_index(2);
        viewer.tick(DT);
        undisturbed.tick(DT);

        // The cursor moves, the running fade keeps its target
        assert!(viewer.on_slider(6.7).changed);
        assert_eq!(viewer.cursor().index(), Some(6));
        assert!(viewer.step(-1).changed);

        // Every frame looks exactly like a fade nobody interrupted
        let mut frames = 0;
        while undisturbed.is_transitioning() {
            assert!(viewer.is_transitioning());
            assert_eq!(viewer.opacity(), undisturbed.opacity());
            assert_eq!(viewer.displayed_slice(), undisturbed.displayed_slice());
            viewer.tick(DT);
            undisturbed.tick(DT);
            frames += 1;
            assert!(frames < 1000, "fade never finished");
        }
        assert!(!viewer.is_transitioning());
        assert_eq!(viewer.opacity(), 1.0);
        assert_eq!(shown(&viewer), Some("Z2"));
    }

    #[test]
    fn slider_drag_reaches_last_slice() {
        let mut viewer = SliceViewer::new(store(0, 0, 100), ViewerOptions::default());
        let change = viewer.drag_slider(0.999_991_7);
        assert_eq!(change.index, Some(99));
        settle(&mut viewer);
        assert_eq!(viewer.slider(), Some(SliderBinding { max: 99, value: 99 }));
        assert_eq!(viewer.drag_slider(0.0).index, Some(0));
    }

    #[test]
    fn step_moves_relative() {
        let mut viewer = SliceViewer::new(store(0, 0, 3), ViewerOptions::default());
        assert_eq!(viewer.step(1).index, Some(1));
        assert_eq!(viewer.step(-5).index, Some(0));
    }

    #[test]
    fn axis_switch_snaps_and_resets() {
        let mut viewer = SliceViewer::new(store(4, 0, 5), ViewerOptions::default());
        viewer.set_index(3);
        settle(&mut viewer);
        viewer.set_axis(Axis::X);
        assert_eq!(shown(&viewer), Some("X0"));
        assert_eq!(viewer.slider(), Some(SliderBinding { max: 3, value: 0 }));
        assert_eq!(viewer.axis_label(), "Axis: X");
    }

    #[test]
    fn axis_switch_mid_fade_keeps_new_axis() {
        let mut viewer = SliceViewer::new(store(4, 0, 5), ViewerOptions::default());
        viewer.set_index(3);
        viewer.tick(DT);
        viewer.set_axis(Axis::X);
        settle(&mut viewer);
        assert_eq!(shown(&viewer), Some("X0"));
    }

    #[test]
    fn empty_axis_is_a_no_op() {
        let mut viewer = SliceViewer::new(store(0, 0, 5), ViewerOptions::default());
        viewer.set_index(1);
        settle(&mut viewer);

        viewer.set_axis(Axis::Y);
        assert_eq!(viewer.slider(), None);
        for request in [-3, 0, 1, 100] {
            let change = viewer.set_index(request);
            assert_eq!(change, IndexChange { changed: false, index: None });
        }
        assert_eq!(viewer.step(1).index, None);
        assert!(!viewer.is_transitioning());
        assert_eq!(shown(&viewer), Some("Z1"));
    }

    #[test]
    fn nothing_loaded_shows_nothing() {
        let mut viewer = SliceViewer::new(store(0, 0, 0), ViewerOptions::default());
        assert_eq!(shown(&viewer), None);
        viewer.set_index(3);
        viewer.tick(DT);
        assert_eq!(shown(&viewer), None);
    }

    #[test]
    fn plane_offset_tracks_index() {
        let resting = Vec3::new(0.5, -1.0, 2.0);
        let options = ViewerOptions {
            plane_offset: Some(PlaneOffset::new(resting, 0.002)),
            ..ViewerOptions::default()
        };
        let mut viewer = SliceViewer::new(store(10, 10, 10), options);
        assert_eq!(viewer.plane_position(), resting);

        viewer.set_axis(Axis::Y);
        viewer.set_index(4);
        // Moves before the fade completes
        assert!(viewer.is_transitioning());
        assert!(viewer
            .plane_position()
            .abs_diff_eq(resting + Vec3::new(0.0, 0.008, 0.0), 1e-6));

        viewer.set_axis(Axis::X);
        assert_eq!(viewer.plane_position(), resting);
    }

    #[test]
    fn named_axis() {
        let mut viewer = SliceViewer::new(store(1, 1, 1), ViewerOptions::default());
        viewer.set_axis_named("y").unwrap();
        assert_eq!(viewer.cursor().axis(), Axis::Y);
        assert!(viewer.set_axis_named("Q").is_err());
        assert_eq!(viewer.cursor().axis(), Axis::Y);
    }
}
