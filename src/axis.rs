use std::fmt;
use std::ops::{Index, IndexMut};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use clap::ValueEnum;
use glam::Vec3;

use crate::error::SliceError;

/// Scan orientation. Each axis has its own ordered slice sequence.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, ValueEnum)]
pub enum Axis {
    X,
    Y,
    #[default]
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn letter(self) -> &'static str {
        match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        }
    }

    /// Unit vector along this axis, used for the plane offset.
    pub fn unit(self) -> Vec3 {
        match self {
            Axis::X => Vec3::X,
            Axis::Y => Vec3::Y,
            Axis::Z => Vec3::Z,
        }
    }

    fn slot(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

impl FromStr for Axis {
    type Err = SliceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Axis::X),
            "Y" | "y" => Ok(Axis::Y),
            "Z" | "z" => Ok(Axis::Z),
            other => Err(SliceError::UnknownAxis(other.to_string())),
        }
    }
}

/// How the per-axis subdirectories under the base folder are named.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, ValueEnum)]
pub enum FolderStyle {
    /// `X`, `Y`, `Z`
    #[default]
    Letter,
    /// `X_Axis`, `Y_Axis`, `Z_Axis`
    Suffixed,
}

impl FolderStyle {
    pub fn folder_name(self, axis: Axis) -> String {
        match self {
            FolderStyle::Letter => axis.letter().to_string(),
            FolderStyle::Suffixed => format!("{}_Axis", axis.letter()),
        }
    }

    pub fn folder_path(self, base: &Path, axis: Axis) -> PathBuf {
        base.join(self.folder_name(axis))
    }
}

/// One value per axis, stored inline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisMap<T> {
    slots: [T; 3],
}

impl<T> AxisMap<T> {
    pub fn from_fn(mut f: impl FnMut(Axis) -> T) -> Self {
        Self {
            slots: [f(Axis::X), f(Axis::Y), f(Axis::Z)],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Axis, &T)> {
        Axis::ALL.into_iter().zip(self.slots.iter())
    }
}

impl<T> Index<Axis> for AxisMap<T> {
    type Output = T;

    fn index(&self, axis: Axis) -> &T {
        &self.slots[axis.slot()]
    }
}

impl<T> IndexMut<Axis> for AxisMap<T> {
    fn index_mut(&mut self, axis: Axis) -> &mut T {
        &mut self.slots[axis.slot()]
    }
}
