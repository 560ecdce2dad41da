// Composition root for the upgrades bounded context.
//
// - Read configuration from the environment.
// - Pick the PSA adapter: ConnectWise over HTTP, or in memory when no
//   credentials are configured.
// - Wire the store, session registry and adapters into use case handlers.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
