//! Ordered per-axis slice loading, clamped navigation and the cross-fade that
//! plays when the displayed slice changes.

pub mod axis;
pub mod constants;
pub mod error;
pub mod navigation;
pub mod orientation;
pub mod slice_store;
pub mod transition;
pub mod viewer;

pub use axis::{Axis, AxisMap, FolderStyle};
pub use error::{Result, SliceError};
pub use navigation::{IndexChange, NavigationCursor};
pub use slice_store::{BadNamePolicy, NamingPolicy, SliceDecoder, SliceStore, StoreLayout};
pub use transition::{PlaneOffset, TransitionAnimator, TransitionPhase};
pub use viewer::{SliceRef, SliceViewer, SliderBinding, ViewerOptions};
