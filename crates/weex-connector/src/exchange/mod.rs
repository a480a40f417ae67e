/*
[INPUT]:  Framework exchange contract
[OUTPUT]: Concrete WEEX REST and WebSocket adapters
[POS]:    Exchange layer - what the framework composes with
[UPDATE]: When the framework contract or WEEX capabilities change
*/

pub mod rest;
pub mod traits;
pub mod websocket;

pub use rest::{EXCHANGE_NAME, WeexExchange};
pub use traits::{RestExchangeAdapter, WebSocketExchangeAdapter, WebsocketEndpoints};
pub use websocket::WeexWebSocketExchange;
