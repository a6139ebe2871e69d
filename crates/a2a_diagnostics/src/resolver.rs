//! Pure endpoint derivation. Nothing in here performs I/O.

use a2a_domain::{ConnectionContext, ResolvedEndpoint};

pub const RPC_PATH: &str = "/rpc";
pub const EVENTS_PATH: &str = "/events";

/// Appends `path` to `base_url`, dropping any trailing slash on the base.
pub fn join_endpoint(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim().trim_end_matches('/'), path)
}

/// RPC endpoint: the client transport's endpoint, else `<base_url>/rpc`.
pub fn resolve_rpc(context: &ConnectionContext) -> Option<ResolvedEndpoint> {
    context
        .client
        .as_ref()
        .and_then(|client| client.endpoint())
        .filter(|endpoint| !endpoint.trim().is_empty())
        .map(ResolvedEndpoint::transport)
        .or_else(|| {
            context
                .server_url()
                .map(|base| ResolvedEndpoint::derived(join_endpoint(base, RPC_PATH)))
        })
}

/// SSE endpoint: the streaming transport's endpoint, else
/// `<base_url>/events`.
pub fn resolve_sse(context: &ConnectionContext) -> Option<ResolvedEndpoint> {
    context
        .streaming_client
        .as_ref()
        .and_then(|client| client.sse_endpoint())
        .filter(|endpoint| !endpoint.trim().is_empty())
        .map(ResolvedEndpoint::transport)
        .or_else(|| {
            context
                .server_url()
                .map(|base| ResolvedEndpoint::derived(join_endpoint(base, EVENTS_PATH)))
        })
}

pub fn resolve_rpc_endpoint(context: &ConnectionContext) -> Option<String> {
    resolve_rpc(context).map(|endpoint| endpoint.url)
}

pub fn resolve_sse_endpoint(context: &ConnectionContext) -> Option<String> {
    resolve_sse(context).map(|endpoint| endpoint.url)
}
