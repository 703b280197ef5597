// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=textframe_web_canvas --heading-base-level=0

//! Browser host for Textframe.
//!
//! When targeting `wasm32` this crate provides:
//!
//! - `CanvasSurface`: a [`Surface`](textframe_render::Surface) backed by
//!   `web_sys::CanvasRenderingContext2d`. Fills go through `Path2D` built
//!   from the engine's SVG path data; the cursor is set through the canvas
//!   element's CSS `cursor` property.
//! - `JsPathEngine`: a [`PathEngine`](textframe_render::PathEngine) that
//!   forwards to JavaScript callbacks, typically the exports of the layout
//!   engine's own WebAssembly module.
//! - `WebTextFrame`: the `wasm_bindgen` entry point that wires both into a
//!   [`textframe::Editor`] and exposes pointer, style, and sizing hooks to
//!   page script.
//!
//! ```js
//! import init_engine, { get_paths } from "./paths.js";
//! import { WebTextFrame } from "./textframe_web_canvas.js";
//!
//! const frame = new WebTextFrame(canvas, get_paths, init_engine);
//! frame.fit_to_container();
//! canvas.addEventListener("mousedown", (e) => frame.pointer_down(e.clientX, e.clientY));
//! canvas.addEventListener("mousemove", (e) => frame.pointer_move(e.clientX, e.clientY));
//! canvas.addEventListener("mouseup", (e) => frame.pointer_up(e.clientX, e.clientY));
//! canvas.addEventListener("mouseleave", () => frame.pointer_leave());
//! await frame.start();
//! ```
//!
//! Notes:
//! - Instantiating the module installs a panic hook and a `tracing` subscriber
//!   that report to the browser console.
//! - Callbacks into JavaScript run while the editor is borrowed; they must
//!   not call back into the same `WebTextFrame`.
//! - On other targets the crate is empty.

#[cfg(target_arch = "wasm32")]
mod engine;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use engine::JsPathEngine;
#[cfg(target_arch = "wasm32")]
pub use frame::WebTextFrame;
#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;

/// Route panics and `tracing` output to the browser console.
///
/// Runs when the module is instantiated. Calling it again keeps the
/// subscriber already installed.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    if tracing_wasm::try_set_as_global_default().is_err() {
        tracing::debug!("tracing subscriber already installed");
        return;
    }
    tracing::info!("textframe web host initialized");
}
