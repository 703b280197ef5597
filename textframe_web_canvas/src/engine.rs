// Copyright 2025 the Textframe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path engine backed by JavaScript callbacks.

use js_sys::{Array, Function, Promise};
use textframe_render::{EngineError, PathEngine, PathRequest};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

fn load_error(value: &JsValue) -> EngineError {
    EngineError::Load {
        reason: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

/// A [`PathEngine`] calling into page script.
///
/// `get_paths` is called as `get_paths(x, y, width, height, size, variant)`
/// and must return an array of SVG path data strings. The optional `init`
/// callback is called once with no arguments; if it returns a promise, the
/// engine is ready when the promise resolves.
#[derive(Clone, Debug)]
pub struct JsPathEngine {
    init: Option<Function>,
    get_paths: Function,
}

impl JsPathEngine {
    /// Bridge to the given callbacks.
    pub fn new(get_paths: Function, init: Option<Function>) -> Self {
        Self { init, get_paths }
    }
}

impl PathEngine for JsPathEngine {
    async fn initialize(&mut self) -> Result<(), EngineError> {
        let Some(init) = &self.init else {
            return Ok(());
        };
        let value = init.call0(&JsValue::NULL).map_err(|e| load_error(&e))?;
        JsFuture::from(Promise::resolve(&value))
            .await
            .map_err(|e| load_error(&e))?;
        Ok(())
    }

    fn get_paths(&self, request: &PathRequest) -> Vec<String> {
        let args: Array = [
            JsValue::from_f64(request.x),
            JsValue::from_f64(request.y),
            JsValue::from_f64(request.width),
            JsValue::from_f64(request.height),
            JsValue::from(request.size),
            JsValue::from(request.variant_index),
        ]
        .iter()
        .collect();
        match self.get_paths.apply(&JsValue::NULL, &args) {
            Ok(result) => Array::from(&result)
                .iter()
                .filter_map(|path| path.as_string())
                .collect(),
            Err(err) => {
                tracing::warn!(error = ?err, "path engine call failed; drawing no fills");
                Vec::new()
            }
        }
    }
}
