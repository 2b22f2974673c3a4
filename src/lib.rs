//! # Trueno-Raster
//!
//! Integer rasterization primitives: line segments and circles converted into
//! the discrete grid points that best approximate them.
//!
//! Both rasterizers are pure functions. They use integer arithmetic only,
//! allocate exactly one output buffer sized up front, and share no state, so
//! they may be called concurrently without synchronization.
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let segment = line(0, 0, 5, 2);
//! assert_eq!(segment.first(), Some(&Point::new(0, 0)));
//! assert_eq!(segment.last(), Some(&Point::new(5, 2)));
//!
//! let ring = circle(20, 50, 50)?;
//! assert_eq!(ring.len(), 112);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Point`] and [`Segment`]
//!
//! ## Platform
//!
//! Linux only.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Pitteway, M. L. V. (1967). "Algorithm for drawing ellipses or hyperbolae with a
//!   digital plotter."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code (Cloudflare incident 2025-11-18)
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

#[cfg(not(target_os = "linux"))]
compile_error!("trueno-raster only supports Linux targets");

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, segments, circles).
pub mod geometry;

/// Line and circle rasterization.
pub mod render;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};
pub use geometry::{CircleSpec, Point, Segment};
pub use render::{circle, line, Rasterize};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::geometry::{CircleSpec, Point, Segment};
    pub use crate::render::{
        circle, line, rasterize_circle, rasterize_line, rasterize_line_specialized, Rasterize,
    };
}
