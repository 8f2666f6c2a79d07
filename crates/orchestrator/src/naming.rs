//! Output file naming.

use chrono::{DateTime, Local};

/// Which endpoint produced an image; decides its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Naming {
    /// `generated_<stamp>.png`
    Generated,
    /// `seed_<seed>_<stamp>.png`
    Seeded,
    /// `batch_<stamp>_<index:03>.png`, index is 1-based.
    BatchItem(usize),
}

impl Naming {
    pub fn file_name(&self, seed: u32, at: DateTime<Local>) -> String {
        let stamp = at.format("%Y%m%d_%H%M%S");
        match self {
            Naming::Generated => format!("generated_{}.png", stamp),
            Naming::Seeded => format!("seed_{}_{}.png", seed, stamp),
            Naming::BatchItem(index) => format!("batch_{}_{:03}.png", stamp, index),
        }
    }
}

/// `batch_images_<stamp>.zip`
pub fn archive_name(at: DateTime<Local>) -> String {
    format!("batch_images_{}.zip", at.format("%Y%m%d_%H%M%S"))
}

/// A bare file name that cannot escape the output directory.
pub fn is_safe_filename(name: &str) -> bool {
    !name.is_empty()
        && name != "."
        && name != ".."
        && !name.contains(['/', '\\'])
        && !name.contains('\0')
}
