//! Log filtering and decoding for contract events.
//!
//! Builds the node-side filter for an event and decodes received logs into
//! [`ContractEvent`] payloads using the dynamic ABI definition.

use alloy::{
	hex,
	json_abi::Event,
	primitives::Address,
	rpc::types::{Filter, Log},
};
use alloy_dyn_abi::{DynSolValue, EventExt};
use serde_json::{Map, Value};

use crate::{models::ContractEvent, services::blockchain::BlockChainError};

/// Builds a filter matching every occurrence of `event` emitted by `address`
///
/// Only the contract address and the event signature topic are constrained. Anonymous
/// events carry no signature topic and are filtered by address alone.
pub fn build_event_filter(address: Address, event: &Event) -> Filter {
	let filter = Filter::new().address(address);
	if event.anonymous {
		filter
	} else {
		filter.event_signature(event.selector())
	}
}

/// Decodes a log emitted for `event` into an event payload
///
/// # Errors
/// Returns `BlockChainError::DecodeError` when the topics or data do not match the
/// event definition.
pub fn decode_event(event: &Event, log: &Log) -> Result<ContractEvent, BlockChainError> {
	let decoded = event.decode_log(log.data()).map_err(|e| {
		BlockChainError::decode_error_with_source(format!("Failed to decode {} log", event.name), e)
	})?;

	let mut indexed = decoded.indexed.into_iter();
	let mut body = decoded.body.into_iter();
	let mut return_values = Map::new();

	for (position, param) in event.inputs.iter().enumerate() {
		let value = if param.indexed {
			indexed.next()
		} else {
			body.next()
		}
		.ok_or_else(|| {
			BlockChainError::decode_error(format!(
				"Missing value for parameter {} of {}",
				position, event.name
			))
		})?;

		let key = if param.name.is_empty() {
			position.to_string()
		} else {
			param.name.clone()
		};
		return_values.insert(key, sol_value_to_json(&value));
	}

	Ok(ContractEvent {
		event: event.name.clone(),
		signature: (!event.anonymous).then(|| event.selector()),
		address: log.address(),
		block_number: log.block_number,
		block_hash: log.block_hash,
		transaction_hash: log.transaction_hash,
		transaction_index: log.transaction_index,
		log_index: log.log_index,
		removed: log.removed,
		return_values,
	})
}

/// Converts a decoded Solidity value into JSON
///
/// Integers that fit in 64 bits become JSON numbers, wider ones decimal strings. Bytes,
/// fixed bytes and functions become `0x`-prefixed hex; addresses are checksummed. Arrays,
/// tuples and structs become JSON arrays.
pub fn sol_value_to_json(value: &DynSolValue) -> Value {
	match value {
		DynSolValue::Bool(b) => Value::Bool(*b),
		DynSolValue::Int(i, _) => {
			let decimal = i.to_string();
			decimal
				.parse::<i64>()
				.map(Value::from)
				.unwrap_or(Value::String(decimal))
		}
		DynSolValue::Uint(u, _) => u64::try_from(*u)
			.map(Value::from)
			.unwrap_or_else(|_| Value::String(u.to_string())),
		DynSolValue::FixedBytes(word, size) => Value::String(hex::encode_prefixed(&word[..*size])),
		DynSolValue::Address(address) => Value::String(address.to_checksum(None)),
		DynSolValue::Function(function) => Value::String(hex::encode_prefixed(function)),
		DynSolValue::Bytes(bytes) => Value::String(hex::encode_prefixed(bytes)),
		DynSolValue::String(s) => Value::String(s.clone()),
		DynSolValue::Array(items)
		| DynSolValue::FixedArray(items)
		| DynSolValue::Tuple(items)
		| DynSolValue::CustomStruct { tuple: items, .. } => {
			Value::Array(items.iter().map(sol_value_to_json).collect())
		}
	}
}
