use alloc::string::ToString;
use anyhow::Result;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    models::{
        requests::{server_state::ServerState, FundFaucet, XRPLRequest},
        results::{server_state::ServerState as ServerStateResult, XRPLResponse},
    },
    Err,
};

use super::{exceptions::XRPLClientException, CommonFields};

/// Interface every transport (JSON-RPC, WebSocket) implements so that the
/// account/ledger/transaction helpers can stay transport-agnostic.
#[allow(async_fn_in_trait)]
pub trait AsyncClient {
    async fn request_impl<'a: 'b, 'b, Res: DeserializeOwned>(
        &self,
        request: XRPLRequest<'a>,
    ) -> Result<XRPLResponse<'b, Res>>;

    /// Host this client talks to, when that concept applies (JSON-RPC).
    /// WebSocket clients have no single request host and return `None`.
    fn get_host(&self) -> Option<Url> {
        None
    }

    async fn request<'a: 'b, 'b, Res: DeserializeOwned>(
        &self,
        request: XRPLRequest<'a>,
    ) -> Result<XRPLResponse<'b, Res>> {
        self.request_impl(request).await
    }

    async fn get_common_fields(&self) -> Result<CommonFields<'_>> {
        let server_state: XRPLResponse<'_, ServerStateResult> =
            self.request(ServerState::new(None).into()).await?;
        let server_state = match server_state.result {
            Some(result) => result,
            None => return Err!(XRPLClientException::NoResult),
        };
        Ok(CommonFields {
            network_id: None,
            build_version: Some(server_state.state.build_version.to_string().into()),
        })
    }
}

/// Clients that can request funding from a testnet/devnet faucet.
/// Only JSON-RPC clients have a single host to resolve a faucet URL from.
#[allow(async_fn_in_trait)]
pub trait XRPLFaucet: AsyncClient {
    async fn request_funding(&self, url: Option<Url>, request: FundFaucet<'_>) -> Result<()>;
}
