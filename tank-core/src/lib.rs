//! Tank compositing: two images in, one "looking into a tank" PNG out.
//!
//! A top image is lightened toward white and a bottom image darkened toward black, both
//! placed on a shared canvas, then merged with an alpha derived from their luminance
//! difference.
//!
//! # Pipeline overview
//!
//! 1. **Load**: `path -> GrayMatrix` (BT.601 luma, 8-bit)
//! 2. **Darken**: top into `128..=255`, bottom into `0..=127`
//! 3. **Unify**: both layers onto one `max(w) x max(h)` canvas, no scaling
//! 4. **Merge**: `GrayMatrix x2 -> CompositeImage` (straight-alpha RGBA8)
//! 5. **Encode**: PNG, written atomically
//!
//! [`make`] runs all five steps; [`composite`] runs 2-4 on matrices already in memory.
#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod effects;
mod encode;
mod foundation;
mod layout;
mod pipeline;

pub use assets::decode::{decode_gray, gray_from_dynamic, load_gray, luma_bt601};
pub use effects::darken::{darken, darken_parallel, darken_value};
pub use effects::merge::{merge, merge_parallel, merge_pixel};
pub use encode::png::{encode_png, ensure_parent_dir, write_png};
pub use foundation::core::{Canvas, CompositeImage, GrayMatrix, Role};
pub use foundation::error::{TankError, TankResult};
pub use layout::unify::{Offset, Placement, PlacementBranch, plan_placement, unify};
pub use pipeline::config::{DEFAULT_OUTPUT, MakeConfig, Threading, normalize_output_path};
pub use pipeline::make::{composite, make, make_with_config};
