//! WASM bindings for the position crate.
//!
//! These bindings let tooltip, popover and dropdown components call the
//! engine with JSON-serialized DOM rects.

use crate::{calculate_arrow_position, calculate_position, PositionOptions, PositionUpdate, Rect, Side};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Deserialize)]
struct PositionRequest {
    reference: Rect,
    floating: Rect,
    viewport: Rect,
    options: PositionOptions,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArrowRequest {
    reference: Rect,
    floating: Rect,
    side: Side,
    #[serde(default = "default_arrow_size")]
    arrow_size: f64,
}

fn default_arrow_size() -> f64 {
    crate::DEFAULT_ARROW_SIZE
}

/// Calculate the floating element position.
///
/// # Arguments
/// * `request_json` - JSON with `reference`, `floating`, `viewport` rects and `options`
///
/// # Returns
/// JSON with `position` and, when `options.arrow` is set, `arrow`
#[wasm_bindgen(js_name = calculatePosition)]
pub fn calculate_position_json(request_json: &str) -> Result<String, JsValue> {
    let request: PositionRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let position = calculate_position(&request.reference, &request.floating, &request.viewport, &request.options);
    let arrow = request.options.arrow.then(|| {
        let placed = request.floating.moved_to(position.left, position.top);
        calculate_arrow_position(&request.reference, &placed, position.side, request.options.arrow_size)
    });

    serde_json::to_string(&PositionUpdate { position, arrow })
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Calculate the arrow offset for an already positioned floating element.
///
/// # Arguments
/// * `request_json` - JSON with `reference`, `floating`, `side` and optional `arrowSize`
#[wasm_bindgen(js_name = calculateArrowPosition)]
pub fn calculate_arrow_position_json(request_json: &str) -> Result<String, JsValue> {
    let request: ArrowRequest = serde_json::from_str(request_json)
        .map_err(|e| JsValue::from_str(&format!("JSON parse error: {}", e)))?;

    let arrow = calculate_arrow_position(&request.reference, &request.floating, request.side, request.arrow_size);

    serde_json::to_string(&arrow)
        .map_err(|e| JsValue::from_str(&format!("JSON serialize error: {}", e)))
}

/// Return the side across the reference element (`"top"` → `"bottom"`).
#[wasm_bindgen(js_name = getOppositeSide)]
pub fn opposite_side(side: &str) -> Result<String, JsValue> {
    let side: Side = side.parse().map_err(|e: crate::PositionError| JsValue::from_str(&e.to_string()))?;
    Ok(side.opposite().to_string())
}
