// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Client side of the external path engine.
//!
//! The engine turns frame bounds and style parameters into SVG path data. It
//! needs one asynchronous initialization before first use; after that, path
//! requests are synchronous. [`EngineSlot`] tracks that lifecycle so the
//! render pipeline only has to check a flag.

use core::future::Future;

use kurbo::Rect;

use crate::Style;

/// Arguments for one path request.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathRequest {
    /// Left edge of the frame.
    pub x: f64,
    /// Top edge of the frame.
    pub y: f64,
    /// Frame width.
    pub width: f64,
    /// Frame height.
    pub height: f64,
    /// Text size from the style controls.
    pub size: u32,
    /// Engine index of the selected variant.
    pub variant_index: usize,
}

impl PathRequest {
    /// Build a request for `frame` drawn with `style`.
    pub fn new(frame: Rect, style: &Style) -> Self {
        Self {
            x: frame.x0,
            y: frame.y0,
            width: frame.width(),
            height: frame.height(),
            size: style.size,
            variant_index: style.variant.index(),
        }
    }

    /// The requested bounds as a rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }
}

/// Failure reported by a path engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The engine could not be loaded.
    #[error("path engine failed to load: {reason}")]
    Load {
        /// Engine-provided description of the failure.
        reason: String,
    },
    /// Initialization already failed earlier in this session.
    #[error("path engine is unavailable after a failed initialization")]
    Unavailable,
}

/// An external engine that produces fill paths for a frame.
pub trait PathEngine {
    /// Load the engine. Called once, before any call to [`PathEngine::get_paths`].
    fn initialize(&mut self) -> impl Future<Output = Result<(), EngineError>>;

    /// SVG path data strings, one per fillable region, for `request`.
    fn get_paths(&self, request: &PathRequest) -> Vec<String>;
}

/// Lifecycle of the engine held in an [`EngineSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum EngineStatus {
    /// Initialization has not completed yet.
    #[default]
    Loading,
    /// The engine can serve path requests.
    Ready,
    /// Initialization failed; rendering stays outline-only.
    Failed,
}

/// A path engine plus its readiness flag.
#[derive(Debug)]
pub struct EngineSlot<E> {
    engine: E,
    status: EngineStatus,
}

impl<E> EngineSlot<E> {
    /// Wrap an engine that still needs to be initialized.
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            status: EngineStatus::Loading,
        }
    }

    /// Current lifecycle state.
    pub fn status(&self) -> EngineStatus {
        self.status
    }

    /// The engine, only once it is ready.
    pub fn ready(&self) -> Option<&E> {
        match self.status {
            EngineStatus::Ready => Some(&self.engine),
            EngineStatus::Loading | EngineStatus::Failed => None,
        }
    }

    /// The engine regardless of state.
    pub fn engine(&self) -> &E {
        &self.engine
    }
}

impl<E: PathEngine> EngineSlot<E> {
    /// Run the engine's one-time initialization.
    ///
    /// Only the first call does any work. Later calls report the outcome of
    /// the first: `Ok` if the engine is ready, [`EngineError::Unavailable`] if
    /// it failed. There is no retry.
    pub async fn initialize(&mut self) -> Result<(), EngineError> {
        match self.status {
            EngineStatus::Ready => return Ok(()),
            EngineStatus::Failed => return Err(EngineError::Unavailable),
            EngineStatus::Loading => {}
        }
        let result = self.engine.initialize().await;
        self.complete(result)
    }

    /// Record the outcome of an initialization driven outside the slot.
    ///
    /// Hosts that cannot hold the slot across an `await` (for example when it
    /// is shared with event handlers) initialize a handle to the engine
    /// themselves and report the result here. Only the first outcome counts;
    /// later calls behave like [`EngineSlot::initialize`] on a finished slot.
    pub fn complete(&mut self, result: Result<(), EngineError>) -> Result<(), EngineError> {
        match self.status {
            EngineStatus::Ready => return Ok(()),
            EngineStatus::Failed => return Err(EngineError::Unavailable),
            EngineStatus::Loading => {}
        }
        match result {
            Ok(()) => {
                self.status = EngineStatus::Ready;
                tracing::info!("path engine ready");
                Ok(())
            }
            Err(err) => {
                self.status = EngineStatus::Failed;
                tracing::error!(%err, "path engine initialization failed; rendering outlines only");
                Err(err)
            }
        }
    }
}
