use std::fs;
use std::path::{Path, PathBuf};

use crate::axis::{Axis, AxisMap, FolderStyle};
use crate::constants::{SLICE_EXTENSION, STRICT_PREFIX};
use crate::error::{Result, SliceError};

/// Which file names count as slices.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum NamingPolicy {
    /// Any `*.png`; the index is the token after the first `_`.
    #[default]
    Loose,
    /// Only `image_<N>.png`.
    Strict,
}

/// What to do with a slice file whose name carries no usable index.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum BadNamePolicy {
    #[default]
    Skip,
    /// Fail the whole load.
    Abort,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StoreLayout {
    pub folder_style: FolderStyle,
    pub naming: NamingPolicy,
    pub bad_names: BadNamePolicy,
}

/// Turns a slice file into whatever the host displays (a texture handle, a
/// decoded bitmap, ...).
pub trait SliceDecoder {
    type Slice;

    fn decode(&mut self, path: &Path) -> Result<Self::Slice>;
}

// --- Helper: File Name Filter ---
pub fn matches_pattern(file_name: &str, naming: NamingPolicy) -> bool {
    let path = Path::new(file_name);
    let has_extension = path
        .extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(SLICE_EXTENSION));
    if !has_extension {
        return false;
    }
    match naming {
        NamingPolicy::Loose => true,
        NamingPolicy::Strict => path
            .file_stem()
            .and_then(|s| s.to_str())
            .and_then(|stem| stem.split_once('_'))
            .is_some_and(|(prefix, _)| prefix == STRICT_PREFIX),
    }
}

/// Numeric token between the first `_` and the extension: `image_12.png` -> 12.
pub fn sort_key(file_name: &str) -> Result<u32> {
    let bad_name = || SliceError::SortKey {
        name: file_name.to_string(),
    };
    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(bad_name)?;
    let (_, token) = stem.split_once('_').ok_or_else(bad_name)?;
    token.parse::<u32>().map_err(|_| bad_name())
}

// --- Helper: Load and Sort Slice Paths ---
pub fn list_slice_paths(
    dir_path: &Path,
    naming: NamingPolicy,
    bad_names: BadNamePolicy,
) -> Result<Vec<PathBuf>> {
    let entries = match fs::read_dir(dir_path) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("Slice folder {:?} not readable ({}), axis left empty", dir_path, e);
            return Ok(Vec::new());
        }
    };

    let mut keyed = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                log::warn!("Unreadable entry in {:?}: {}", dir_path, e);
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            continue;
        };
        if !matches_pattern(name, naming) {
            continue;
        }
        match sort_key(name) {
            Ok(key) => keyed.push((key, path)),
            Err(e) => match bad_names {
                BadNamePolicy::Skip => log::warn!("Skipping {:?}: {}", path, e),
                BadNamePolicy::Abort => return Err(e),
            },
        }
    }

    // File name breaks ties so the order never depends on read_dir
    keyed.sort_by(|(ka, pa), (kb, pb)| ka.cmp(kb).then_with(|| pa.file_name().cmp(&pb.file_name())));
    Ok(keyed.into_iter().map(|(_, path)| path).collect())
}

/// Decoded slices for all three axes. Never changes after loading.
#[derive(Debug)]
pub struct SliceStore<T> {
    sets: AxisMap<Vec<T>>,
}

impl<T> SliceStore<T> {
    pub fn from_sets(sets: AxisMap<Vec<T>>) -> Self {
        Self { sets }
    }

    /// Loads every axis from `<base>/<axis folder>`. A missing folder gives an
    /// empty axis; the others still load.
    pub fn load<D>(base: &Path, layout: &StoreLayout, decoder: &mut D) -> Result<Self>
    where
        D: SliceDecoder<Slice = T>,
    {
        let mut sets = AxisMap::from_fn(|_| Vec::new());
        for axis in Axis::ALL {
            let dir = layout.folder_style.folder_path(base, axis);
            sets[axis] = load_axis(&dir, layout, decoder)?;
            log::info!("Axis {}: {} slices from {:?}", axis, sets[axis].len(), dir);
        }
        Ok(Self { sets })
    }

    pub fn slices(&self, axis: Axis) -> &[T] {
        &self.sets[axis]
    }

    pub fn get(&self, axis: Axis, index: usize) -> Option<&T> {
        self.sets[axis].get(index)
    }

    pub fn len(&self, axis: Axis) -> usize {
        self.sets[axis].len()
    }

    pub fn is_empty(&self, axis: Axis) -> bool {
        self.sets[axis].is_empty()
    }
}

fn load_axis<D: SliceDecoder>(dir: &Path, layout: &StoreLayout, decoder: &mut D) -> Result<Vec<D::Slice>> {
    let paths = list_slice_paths(dir, layout.naming, layout.bad_names)?;
    let mut slices = Vec::with_capacity(paths.len());
    for path in paths {
        match decoder.decode(&path) {
            Ok(slice) => slices.push(slice),
            Err(e) => log::debug!("Dropping slice: {}", e),
        }
    }
    Ok(slices)
}
