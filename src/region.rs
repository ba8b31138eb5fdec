//! Region collaborator boundary.
//!
//! Point-in-path queries delegate the actual scan-conversion to a region
//! implementation living outside this crate.

use crate::error::Result;
use crate::path::Path;

/// Answers whether a point falls inside the filled area of a path, honoring
/// the path's fill mode.
pub trait PathHitTester {
    fn hit_test(&mut self, path: &Path, x: f64, y: f64) -> Result<bool>;
}
