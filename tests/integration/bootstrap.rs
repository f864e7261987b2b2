use std::{fs, path::PathBuf, sync::Arc};

use serde_json::json;
use tempfile::TempDir;

use contract_event_listener::{
	bootstrap::{initialize_listener, initialize_listener_with_transport, load_config},
	models::{ConfigOverrides, ListenerConfig, DEFAULT_RPC_URL},
	services::listener::{ListenerError, ListenerState},
};

use crate::integration::{
	fixtures::{CONTRACT_ADDRESS, DONE_ABI},
	mocks::MockLogTransportClient,
};

fn write_abi(dir: &TempDir) -> PathBuf {
	let path = dir.path().join("Done.json");
	fs::write(&path, DONE_ABI).unwrap();
	path
}

fn write_config(dir: &TempDir, config: serde_json::Value) -> PathBuf {
	let path = dir.path().join("listener.json");
	fs::write(&path, config.to_string()).unwrap();
	path
}

fn valid_config(abi_path: &PathBuf) -> ListenerConfig {
	let mut config = ListenerConfig::default();
	config.contract.address = CONTRACT_ADDRESS.to_string();
	config.contract.abi_path = Some(abi_path.clone());
	config
}

#[test]
fn test_load_config_from_file() {
	let dir = TempDir::new().unwrap();
	let abi_path = write_abi(&dir);
	let path = write_config(
		&dir,
		json!({
			"rpc_url": "ws://localhost:8546",
			"contract": {
				"address": CONTRACT_ADDRESS.to_string(),
				"abi_path": abi_path,
			}
		}),
	);

	let config = load_config(&path, ConfigOverrides::default()).unwrap();
	assert_eq!(config.rpc_url, "ws://localhost:8546");
	assert_eq!(config.event_name, "Done");
	assert_eq!(config.contract.abi_path, Some(abi_path));
}

#[test]
fn test_load_config_overrides_take_precedence() {
	let dir = TempDir::new().unwrap();
	let abi_path = write_abi(&dir);
	let path = write_config(
		&dir,
		json!({
			"rpc_url": "ws://localhost:8546",
			"contract": { "address": "0x0000000000000000000000000000000000000001", "abi": [] },
			"event_name": "Started"
		}),
	);

	let overrides = ConfigOverrides {
		rpc_url: Some("http://node:8545".to_string()),
		contract_address: Some(CONTRACT_ADDRESS.to_string()),
		abi_path: Some(abi_path.clone()),
		event_name: Some("Done".to_string()),
	};

	let config = load_config(&path, overrides).unwrap();
	assert_eq!(config.rpc_url, "http://node:8545");
	assert_eq!(config.contract.address, CONTRACT_ADDRESS.to_string());
	assert_eq!(config.contract.abi, None);
	assert_eq!(config.contract.abi_path, Some(abi_path));
	assert_eq!(config.event_name, "Done");
}

#[test]
fn test_load_config_without_file_uses_defaults() {
	let dir = TempDir::new().unwrap();
	let abi_path = write_abi(&dir);
	let overrides = ConfigOverrides {
		contract_address: Some(CONTRACT_ADDRESS.to_string()),
		abi_path: Some(abi_path),
		..Default::default()
	};

	let config = load_config(&dir.path().join("missing.json"), overrides).unwrap();
	assert_eq!(config.rpc_url, DEFAULT_RPC_URL);
	assert_eq!(config.event_name, "Done");
}

#[test]
fn test_load_config_without_contract_is_rejected() {
	let dir = TempDir::new().unwrap();

	let result = load_config(&dir.path().join("missing.json"), ConfigOverrides::default());
	assert!(matches!(result, Err(ListenerError::Config(_))));
}

#[test]
fn test_load_config_malformed_file_is_rejected() {
	let dir = TempDir::new().unwrap();
	let path = dir.path().join("listener.json");
	fs::write(&path, "{ not json").unwrap();

	match load_config(&path, ConfigOverrides::default()) {
		Err(ListenerError::Config(e)) => {
			assert!(e.to_string().contains("Failed to parse config file"));
		}
		other => panic!("Unexpected result: {:?}", other.map(|c| c.rpc_url)),
	}
}

#[test]
fn test_initialize_listener_with_transport() {
	let dir = TempDir::new().unwrap();
	let config = valid_config(&write_abi(&dir));

	let listener =
		initialize_listener_with_transport(&config, Arc::new(MockLogTransportClient::new()))
			.unwrap();

	assert_eq!(listener.event().name, "Done");
	assert_eq!(listener.contract().address, CONTRACT_ADDRESS);
	assert_eq!(listener.state(), ListenerState::Unsubscribed);
}

#[test]
fn test_initialize_listener_with_unknown_event() {
	let dir = TempDir::new().unwrap();
	let mut config = valid_config(&write_abi(&dir));
	config.event_name = "Finished".to_string();

	let result =
		initialize_listener_with_transport(&config, Arc::new(MockLogTransportClient::new()));
	assert!(matches!(result, Err(ListenerError::EventNotFound { .. })));
}

#[tokio::test]
async fn test_initialize_listener_with_unreachable_node() {
	let dir = TempDir::new().unwrap();
	let mut config = valid_config(&write_abi(&dir));
	config.rpc_url = "http://127.0.0.1:1".to_string();
	config.connection_timeout_ms = 2_000;

	let result = initialize_listener(&config).await;
	assert!(matches!(result, Err(ListenerError::BlockChain(_))));
}
