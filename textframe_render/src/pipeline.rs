// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The render pipeline: outline first, then engine-provided fills.

use kurbo::Rect;

use crate::{EngineSlot, EngineStatus, OutlineStyle, PathEngine, PathRequest, Style, Surface};

/// Summary of one [`RenderPipeline::render`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderReport {
    /// Engine state at render time.
    pub engine: EngineStatus,
    /// Number of paths filled; zero when the engine was not ready.
    pub filled_paths: usize,
}

impl RenderReport {
    /// Whether engine fills were requested during this render.
    pub fn requested_paths(&self) -> bool {
        self.engine == EngineStatus::Ready
    }
}

/// Draws the frame and its contents onto a [`Surface`].
///
/// Every call starts from a cleared surface and asks the engine for fresh
/// paths. Nothing from a previous render is reused, so rendering twice with
/// the same inputs produces the same output.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RenderPipeline {
    outline: OutlineStyle,
}

impl RenderPipeline {
    /// Create a pipeline that strokes the frame with `outline`.
    pub fn new(outline: OutlineStyle) -> Self {
        Self { outline }
    }

    /// The outline style used for the frame.
    pub fn outline(&self) -> &OutlineStyle {
        &self.outline
    }

    /// Clear `surface`, stroke `frame`, and fill the engine's paths if it is ready.
    pub fn render<S, E>(
        &self,
        surface: &mut S,
        frame: Rect,
        style: &Style,
        slot: &EngineSlot<E>,
    ) -> RenderReport
    where
        S: Surface + ?Sized,
        E: PathEngine,
    {
        surface.clear();
        surface.stroke_rect(frame, &self.outline);

        let Some(engine) = slot.ready() else {
            tracing::trace!(status = ?slot.status(), "engine not ready, outline only");
            return RenderReport {
                engine: slot.status(),
                filled_paths: 0,
            };
        };

        let request = PathRequest::new(frame, style);
        let paths = engine.get_paths(&request);
        for path in &paths {
            surface.fill_path(path, style.color);
        }
        tracing::debug!(?request, paths = paths.len(), "rendered frame");

        RenderReport {
            engine: EngineStatus::Ready,
            filled_paths: paths.len(),
        }
    }
}
