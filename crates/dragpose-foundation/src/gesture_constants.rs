//! Shared gesture constants for consistent touch/pointer handling.
//!
//! Values are in logical pixels. Hosts on very high-density touch
//! screens should override the slop per controller via
//! [`DragConfig::with_slop`](crate::DragConfig::with_slop) rather than
//! scaling these globally.

/// Touch slop in logical pixels.
///
/// Movement that stays within this distance of the press position on
/// both axes is treated as a tap; past it on either axis the gesture is
/// classified as a drag. The value matches common platform conventions
/// (Android's ViewConfiguration reports ~8dp of scaled touch slop on a
/// baseline density) and is:
/// - large enough to ignore minor finger jitter on touch screens
/// - small enough to feel responsive for intentional drags
pub const TOUCH_SLOP: f32 = 8.0;
