//! Host bridge state: one surface, the document on it, and the controller

use crate::config::RenderConfig;
use crate::draw::geometry::{FootprintDocument, Size};
use crate::draw::FootprintScene;
use crate::surface::SceneSurface;
use crate::viewport::ViewportController;
use indexmap::IndexSet;

/// Default viewport until the host reports its size
pub const DEFAULT_VIEWPORT: Size = Size::new(800.0, 600.0);

pub struct HostState {
    pub surface: SceneSurface,
    pub scene: FootprintScene,
    pub controller: ViewportController,
    pub document: Option<FootprintDocument>,
    /// Unsupported kinds from the most recent render
    pub unsupported: IndexSet<String>,
}

impl HostState {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            surface: SceneSurface::new(DEFAULT_VIEWPORT, config.font_metrics),
            controller: ViewportController::new(config.zoom_sensitivity),
            scene: FootprintScene::new(config),
            document: None,
            unsupported: IndexSet::new(),
        }
    }

    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// Store `document` and draw it
    pub fn load(&mut self, document: FootprintDocument) -> &IndexSet<String> {
        self.document = Some(document);
        self.redraw();
        &self.unsupported
    }

    /// Rebuild the frame from the stored document; false when there is none
    pub fn redraw(&mut self) -> bool {
        match &self.document {
            Some(document) => {
                self.unsupported = self.scene.render(&mut self.surface, document);
                true
            }
            None => false,
        }
    }
}

impl Default for HostState {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}
