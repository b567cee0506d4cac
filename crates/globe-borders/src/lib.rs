//! Border deduplication: canonical ring keys, antimeridian wrap filtering, and
//! the shared-border index.
//!
//! Internal borders from different regions that trace the same physical line
//! collide on a [`CanonicalKey`]. After every region has been registered,
//! [`BorderIndex::classify`] marks each colliding group shared unless its ring
//! wraps the globe.

mod canonical;
mod extent;
mod index;
mod segment;

pub use canonical::{
    CanonicalKey, DEFAULT_KEY_PRECISION, RingCanonicalizer, canonical_key, normalize_ring,
    round_to_precision,
};
pub use extent::{AngularExtent, AntimeridianFilter, DEFAULT_WRAP_THRESHOLD_DEGREES, angular_extent};
pub use index::{BorderIndex, BorderVisibility, ClassificationReport, ClassificationSignature};
pub use segment::{BorderId, BorderSegment};
