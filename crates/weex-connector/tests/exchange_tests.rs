/*
[INPUT]:  Framework-facing adapter calls
[OUTPUT]: Test results for REST and WebSocket adapters
[POS]:    Integration tests - exchange contract
[UPDATE]: When the adapter traits change
*/

use std::sync::Arc;

use rstest::rstest;
use weex_connector::{
    AccountKind, ChannelParams, ConnectorConfig, RestExchangeAdapter, WebSocketExchangeAdapter,
    WeexError, WeexExchange, WeexWebSocketExchange, precision_from_step_size,
};

#[rstest]
#[case("0.001", 3)]
#[case("0.00000001", 8)]
#[case("not_a_number", 8)]
#[case("1", 0)]
#[case("100", 0)]
fn test_precision_properties(#[case] step: &str, #[case] expected: u32) {
    assert_eq!(precision_from_step_size(step), expected);
}

#[test]
fn test_account_type_lookup_is_case_insensitive() {
    let exchange = WeexExchange::default();
    assert_eq!(exchange.parse_account_type("spot"), exchange.parse_account_type("SPOT"));
    assert_eq!(exchange.parse_account_type("Usd_Mix"), AccountKind::Future);
}

#[test]
fn test_bogus_feed_is_unsupported() {
    let exchange = WeexWebSocketExchange::default();
    let err = exchange
        .format_channel("bogus_feed", Some("BTCUSDT"), &ChannelParams::default())
        .unwrap_err();
    assert!(matches!(err, WeexError::UnsupportedFeed { ref feed } if feed == "bogus_feed"));
}

#[test]
fn test_every_supported_feed_formats() {
    let exchange = WeexWebSocketExchange::default();
    for descriptor in exchange.supported_feeds() {
        let channel = exchange
            .format_channel(descriptor.kind.as_str(), Some("BTCUSDT"), &ChannelParams::default())
            .expect("supported feed formats");
        assert!(!channel.contains('{'), "{channel}");
        assert_eq!(exchange.is_authenticated_channel(&channel), descriptor.is_private);
    }
}

#[tokio::test]
async fn test_adapters_compose_as_trait_objects() {
    let config = ConnectorConfig::from_yaml_str("rate_limit: 7\n").expect("yaml config");
    let rest: Arc<dyn RestExchangeAdapter> = Arc::new(WeexExchange::new(config.clone()));
    let stream: Arc<dyn WebSocketExchangeAdapter> = Arc::new(WeexWebSocketExchange::new(config));

    assert!(rest.is_supporting_exchange("Weex"));
    assert!(stream.is_supporting_exchange("weex"));
    assert_eq!(rest.additional_connector_config().rate_limit, 7);
    assert!(rest.switch_to_account(AccountKind::Cash).await.is_ok());

    let err = rest.switch_to_account(AccountKind::Margin).await.unwrap_err();
    assert!(matches!(err, WeexError::UnsupportedOperation { .. }));
}
