//! View constants (layout/sizing).

pub(crate) const WINDOW_W: f32 = 460.0;
pub(crate) const WINDOW_H: f32 = 300.0;

pub(crate) const COVER: f32 = 120.0;

pub(crate) const INFO_TEXT: f32 = 16.0;
pub(crate) const TIME_TEXT: f32 = 13.0;
pub(crate) const STATUS_TEXT: f32 = 12.0;

pub(crate) const VOLUME_SLIDER_W: f32 = 120.0;
