//! Pixel-transformation primitives.
//!
//! Pure buffer-in/buffer-out functions, each returning a freshly allocated
//! buffer. The fixed automatic order is grayscale → [segmentation] →
//! equalization → Otsu binarization; brightness/contrast run separately
//! against the orchestrator's cached baseline.
//!
//! Submodules:
//! - `grayscale`: luminosity grayscale conversion
//! - `segmentation`: optional background masking via alpha
//! - `equalize`: histogram equalization with alpha-mask support
//! - `threshold`: Otsu threshold selection and binarization
//! - `adjustments`: interactive brightness/contrast remaps
//! - `preview`: bilinear downsampling for interactive hosts
//! - `helpers`: buffer validation and histogram construction

mod adjustments;
mod equalize;
mod grayscale;
mod helpers;
mod preview;
mod segmentation;
mod threshold;


pub use adjustments::{apply_adjustments, apply_brightness, apply_contrast, contrast_factor};
pub use equalize::equalize;
pub use grayscale::grayscale;
pub use preview::create_preview;
pub use segmentation::remove_background;
pub use threshold::{binarize, otsu_threshold};
