use alloy::{
	json_abi::Event,
	primitives::{Bytes, LogData, U256},
	rpc::types::{Filter, Log},
};
use contract_event_listener::services::listener::{build_event_filter, decode_event};
use proptest::{prelude::*, test_runner::Config};
use serde_json::Value;

use crate::properties::strategies::{address_strategy, event_name_strategy, u256_strategy};

const TEST_CASES: u32 = 64;

fn uint_event(name: &str) -> Event {
	Event::parse(&format!("event {}(uint256 x)", name)).unwrap()
}

fn value_log(event: &Event, value: U256) -> Log {
	Log {
		inner: alloy::primitives::Log {
			address: Default::default(),
			data: LogData::new_unchecked(
				vec![event.selector()],
				Bytes::from(value.to_be_bytes::<32>().to_vec()),
			),
		},
		..Default::default()
	}
}

proptest! {
	#![proptest_config(Config {
		cases: TEST_CASES,
		..Config::default()
	})]

	#[test]
	fn test_decoded_integers_are_lossless(value in u256_strategy()) {
		let event = uint_event("Done");
		let decoded = decode_event(&event, &value_log(&event, value)).unwrap();

		let rendered = match decoded.return_values.get("x") {
			Some(Value::Number(n)) => n.to_string(),
			Some(Value::String(s)) => s.clone(),
			other => panic!("Unexpected value: {:?}", other),
		};
		prop_assert_eq!(U256::from_str_radix(&rendered, 10).unwrap(), value);
		prop_assert_eq!(
			decoded.return_values.get("x").unwrap().is_number(),
			value <= U256::from(u64::MAX)
		);
	}

	#[test]
	fn test_filter_matches_only_address_and_signature(
		address in address_strategy(),
		name in event_name_strategy(),
	) {
		let event = uint_event(&name);
		let filter = build_event_filter(address, &event);

		prop_assert_eq!(
			filter,
			Filter::new().address(address).event_signature(event.selector())
		);
	}

	#[test]
	fn test_payload_names_the_event(name in event_name_strategy(), value in any::<u64>()) {
		let event = uint_event(&name);
		let decoded = decode_event(&event, &value_log(&event, U256::from(value))).unwrap();

		prop_assert_eq!(&decoded.event, &name);
		prop_assert_eq!(decoded.signature, Some(event.selector()));
		let expected_fragment = r#""returnValues":{"x":"#;
		prop_assert!(decoded.to_string().contains(expected_fragment));
	}
}
