//! Pan and zoom interaction
//!
//! [`ViewportController`] turns pointer and wheel events into view changes
//! on a [`RenderSurface`]. There is no pointer-up event: a pan anchor stays
//! live until the next pointer-down replaces it.

use crate::config::RenderConfig;
use crate::draw::geometry::Point;
use crate::surface::RenderSurface;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Pointer position in view pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelEvent {
    pub delta_y: f64,
}

/// Wheel events never fall through to the host's default scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventDisposition {
    Consumed,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PanState {
    #[default]
    Idle,
    /// Dragging; `anchor` is the last pointer position in view pixels
    Panning { anchor: Point },
}

/// Snapshot of the view as seen by the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ViewportState {
    pub scale: f64,
    pub center_offset: Point,
    pub last_pointer_position: Option<Point>,
}

#[derive(Debug, Clone)]
pub struct ViewportController {
    zoom_sensitivity: f64,
    pan: PanState,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new(RenderConfig::default().zoom_sensitivity)
    }
}

impl ViewportController {
    pub fn new(zoom_sensitivity: f64) -> Self {
        Self { zoom_sensitivity, pan: PanState::Idle }
    }

    pub fn pan_state(&self) -> PanState {
        self.pan
    }

    /// Start (or restart) a pan at `event`
    pub fn pointer_down(&mut self, event: PointerEvent) {
        trace!("Pointer down at ({}, {})", event.x, event.y);
        self.pan = PanState::Panning { anchor: event.position() };
    }

    /// Scroll so the content under the anchor follows the pointer
    ///
    /// Ignored while idle. Returns true when the view moved.
    pub fn pointer_drag<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, event: PointerEvent) -> bool {
        let PanState::Panning { anchor } = self.pan else {
            trace!("Pointer drag ignored while idle");
            return false;
        };

        let position = event.position();
        let view = surface.view();
        let delta = view.view_to_project(anchor) - view.view_to_project(position);
        surface.view_mut().scroll_by(delta);
        self.pan = PanState::Panning { anchor: position };

        trace!("Panned by ({}, {})", delta.x, delta.y);
        true
    }

    /// Zoom about the view center by `1 + sensitivity * delta_y`
    ///
    /// Factors that are not positive and finite leave the view untouched;
    /// the event is consumed either way.
    pub fn wheel<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, event: WheelEvent) -> EventDisposition {
        let factor = 1.0 + self.zoom_sensitivity * event.delta_y;
        // A factor at or below zero would collapse or mirror the view
        if factor.is_finite() && factor > 0.0 {
            surface.view_mut().scale_by(factor);
            trace!("Zoomed by {} to {}", factor, surface.view().zoom());
        } else {
            trace!("Ignoring wheel delta {} (factor {})", event.delta_y, factor);
        }
        EventDisposition::Consumed
    }

    pub fn state<S: RenderSurface + ?Sized>(&self, surface: &S) -> ViewportState {
        let view = surface.view();
        ViewportState {
            scale: view.zoom(),
            center_offset: view.center(),
            last_pointer_position: match self.pan {
                PanState::Panning { anchor } => Some(anchor),
                PanState::Idle => None,
            },
        }
    }
}
