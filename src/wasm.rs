use wasm_bindgen::prelude::*;

use crate::amounts;
use crate::discriminator::{self, EventKind};
use crate::hash;
use crate::ordering;
use crate::scanner::{self, ScannerConfig};
use crate::types::TransactionLogs;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = JSON)]
    fn parse(s: &str) -> JsValue;
}

fn to_js(value: &serde_json::Value) -> JsValue {
    match serde_json::to_string(value) {
        Ok(json_str) => parse(&json_str),
        Err(_) => JsValue::NULL,
    }
}

fn error_result(msg: &str) -> JsValue {
    let obj = serde_json::json!({"error": msg});
    to_js(&obj)
}

/// Decode one instruction's logs. `batch` is `{signature, slot, blockTime,
/// instructionIndex, logs}`; `config` may be `undefined`.
#[wasm_bindgen(js_name = parseTransactionLogs)]
pub fn parse_transaction_logs(batch: JsValue, config: JsValue) -> JsValue {
    let batch: TransactionLogs = match serde_wasm_bindgen::from_value(batch) {
        Ok(b) => b,
        Err(e) => return error_result(&format!("Invalid transaction batch: {e}")),
    };
    let config: ScannerConfig = if config.is_undefined() || config.is_null() {
        ScannerConfig::default()
    } else {
        match serde_wasm_bindgen::from_value(config) {
            Ok(c) => c,
            Err(e) => return error_result(&format!("Invalid scanner config: {e}")),
        }
    };

    let parsed = scanner::parse_transaction(&batch, &config);
    match serde_json::to_value(&parsed) {
        Ok(value) => to_js(&value),
        Err(e) => error_result(&format!("Failed to serialize events: {e}")),
    }
}

/// Event name for an 8-byte discriminator, or `undefined`.
#[wasm_bindgen(js_name = identifyEventType)]
pub fn identify_event_type(discriminator: &[u8]) -> Option<String> {
    discriminator::identify_event_type(discriminator).map(|kind| kind.to_string())
}

/// All known events with their discriminator bytes.
#[wasm_bindgen(js_name = getEventKinds)]
pub fn get_event_kinds() -> JsValue {
    let kinds: Vec<serde_json::Value> = EventKind::all()
        .map(|kind| {
            serde_json::json!({
                "name": kind.as_ref(),
                "discriminator": kind.discriminator().to_vec(),
            })
        })
        .collect();
    to_js(&serde_json::Value::Array(kinds))
}

#[wasm_bindgen(js_name = calculateOrderIndex)]
pub fn calculate_order_index(slot: u64, instruction_index: u32, inner_instruction_index: u32) -> JsValue {
    match ordering::calculate_order_index(slot, instruction_index, inner_instruction_index) {
        Ok(index) => JsValue::from_str(&index.to_string()),
        Err(e) => error_result(&e.to_string()),
    }
}

/// `q`, `k` and the multipliers are decimal strings.
#[wasm_bindgen(js_name = calculateQkWithConfigHash)]
pub fn calculate_qk_with_config_hash(
    q: Vec<String>,
    k: Vec<String>,
    fee_loss_multiplier: &str,
    fee_mint_multiplier: &str,
    version: u32,
) -> JsValue {
    match hash::calculate_qk_with_config_hash(
        &q,
        &k,
        fee_loss_multiplier,
        fee_mint_multiplier,
        version,
    ) {
        Ok(digest) => JsValue::from_str(&digest),
        Err(e) => error_result(&e.to_string()),
    }
}

#[wasm_bindgen(js_name = formatAmount)]
pub fn format_amount(value: &str, decimals: u32) -> JsValue {
    match value.trim().parse::<i128>() {
        Ok(v) => match amounts::format_amount(v, decimals) {
            Ok(formatted) => JsValue::from_str(&formatted),
            Err(e) => error_result(&e.to_string()),
        },
        Err(_) => error_result(&format!("Invalid amount: {value}")),
    }
}

#[wasm_bindgen(js_name = calculateDeltaAmount)]
pub fn calculate_delta_amount(result_k: &str, multiplier: &str) -> JsValue {
    let (Ok(result_k), Ok(multiplier)) = (
        result_k.trim().parse::<u128>(),
        multiplier.trim().parse::<u128>(),
    ) else {
        return error_result("resultK and multiplier must be unsigned decimal strings");
    };
    match amounts::calculate_delta_amount(result_k, multiplier) {
        Ok(delta) => JsValue::from_str(&delta.to_string()),
        Err(e) => error_result(&e.to_string()),
    }
}
