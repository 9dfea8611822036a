//! Pool record extraction from decoded feed frames.
//!
//! Frames are walked as generic JSON trees. Every lookup goes through the
//! optional accessors below, so a missing or wrongly typed node yields an
//! absent value instead of an error.
//!
//! Numeric leaves are read from the raw frame text rather than the tree so
//! token supplies wider than `u64` keep every digit.

use std::collections::HashMap;

use serde_json::value::RawValue;
use serde_json::Value;

use super::dto::message::Frame;
use crate::domain::coin::CoinInfo;
use crate::domain::number::NumberLiteral;

const STATUS_OK: &str = "ok";
const EVENT_CREATE: &str = "create";

const TOTAL_SUPPLY_PATH: &[&str] = &["result", "data", "pair", "info", "totalSupply"];
const LIQUIDITY_PATH: &[&str] = &["result", "data", "pair", "liquidity"];

/// Child `key` of `node`, if `node` is an object that has it.
fn child<'a>(node: Option<&'a Value>, key: &str) -> Option<&'a Value> {
    node?.as_object()?.get(key)
}

/// Follow `keys` from `node`, stopping at the first missing or non-object step.
fn lookup<'a>(node: Option<&'a Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(node?, |current, key| child(Some(current), key))
}

/// String leaf at `keys`.
fn text(node: Option<&Value>, keys: &[&str]) -> Option<String> {
    lookup(node, keys)?.as_str().map(str::to_owned)
}

/// Unparsed JSON node at `keys` from the frame root.
fn raw_node<'a>(raw: &'a str, keys: &[&str]) -> Option<&'a RawValue> {
    let root: &'a RawValue = serde_json::from_str(raw).ok()?;
    keys.iter().try_fold(root, |node, key| {
        let fields: HashMap<String, &'a RawValue> = serde_json::from_str(node.get()).ok()?;
        fields.get(*key).copied()
    })
}

/// Number leaf at `keys`, as written on the wire.
fn number(raw: &str, keys: &[&str]) -> Option<NumberLiteral> {
    NumberLiteral::new(raw_node(raw, keys)?.get())
}

/// Turn a decoded frame into a pool record.
///
/// Returns `None` unless the frame reports `status == "ok"` for a `create`
/// event and carries a non-empty pair id. Updates and failed statuses are
/// skipped without side effects.
#[must_use]
pub fn extract(frame: &Frame<'_>, chain: &str) -> Option<CoinInfo> {
    let result = child(Some(&frame.tree), "result");
    let status = child(result, "status").and_then(Value::as_str);
    let data = child(result, "data");
    let event = child(data, "event").and_then(Value::as_str);

    if status != Some(STATUS_OK) || event != Some(EVENT_CREATE) {
        return None;
    }

    let pair = child(data, "pair");
    let info = child(pair, "info");
    let custom = lookup(pair, &["custom", "info"]);

    let address = text(pair, &["id"]).filter(|id| !id.is_empty())?;

    Some(CoinInfo {
        chain: chain.to_string(),
        address,
        owner: text(info, &["owner"]),
        token0: text(pair, &["token0", "symbol"]),
        token1: text(pair, &["token1", "symbol"]),
        total_supply: number(frame.raw, TOTAL_SUPPLY_PATH),
        created_at: text(pair, &["createdAt"]),
        liquidity: number(frame.raw, LIQUIDITY_PATH),
        email: text(custom, &["email"]),
        website: text(custom, &["website"]),
        twitter: text(custom, &["twitter"]),
        telegram: text(custom, &["telegram"]),
        description: text(custom, &["description"]),
    })
}
