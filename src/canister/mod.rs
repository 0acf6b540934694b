use self::types::*;
use crate::storage::read::read_canister_id;

use anyhow::anyhow;
use anyhow::Result;
use candid::{Decode, Encode, Principal};
use ic_agent::identity::BasicIdentity;
use ic_agent::{Agent, Identity};

pub mod types;

static IC_HOST: &str = "https://boundary.ic0.app/";
static LOCAL_HOST: &str = "http://127.0.0.1:8000";

static TOKEN_CANISTER: &str = "token";
static LEDGER_PROXY_CANISTER: &str = "ledger_proxy";

pub fn network() -> String {
    dotenv::var("NETWORK").unwrap_or_else(|_| "local".to_string())
}

/// Builds an agent from the environment: `IDENTITY_PEM` names the Ed25519
/// key file, `NETWORK` picks the boundary node or a local replica.
pub async fn agent_from_env() -> Result<Agent> {
    dotenv::dotenv().ok();

    let pem_path = dotenv::var("IDENTITY_PEM")?;
    let identity = BasicIdentity::from_pem_file(&pem_path)?;
    log::info!(
        "loaded principal {}",
        identity.sender().map_err(|e| anyhow!(e))?
    );

    let network = network();
    let host = if network == "ic" { IC_HOST } else { LOCAL_HOST };

    let agent = Agent::builder()
        .with_url(host)
        .with_identity(identity)
        .build()?;

    if network != "ic" {
        agent.fetch_root_key().await?;
    }

    Ok(agent)
}

fn canister_id(canister: &str) -> Result<Principal> {
    dotenv::dotenv().ok();

    let path =
        dotenv::var("CANISTER_IDS_PATH").unwrap_or_else(|_| "canister_ids.json".to_string());
    read_canister_id(&path, canister, &network())
}

pub struct TokenClient {
    agent: Agent,
    canister_id: Principal,
}

impl TokenClient {
    pub fn new(agent: Agent, canister_id: Principal) -> Self {
        Self { agent, canister_id }
    }

    pub async fn from_env() -> Result<Self> {
        let canister_id = canister_id(TOKEN_CANISTER)?;
        log::info!("token canister {}", canister_id);
        Ok(Self::new(agent_from_env().await?, canister_id))
    }

    async fn update(&self, method: &str, args: Vec<u8>) -> Result<Vec<u8>> {
        self.agent
            .update(&self.canister_id, method)
            .with_arg(args)
            .call_and_wait()
            .await
            .map_err(|e| e.into())
    }

    async fn query(&self, method: &str, args: Vec<u8>) -> Result<Vec<u8>> {
        self.agent
            .query(&self.canister_id, method)
            .with_arg(args)
            .call()
            .await
            .map_err(|e| e.into())
    }

    pub async fn mint_for(&self, token_id: u128, owner: Principal) -> Result<u64> {
        let resp = self
            .update("mint_for", Encode!(&token_id, &owner)?)
            .await?;
        Decode!(&resp, MintResult)?.map_err(|e| anyhow!(e))
    }

    pub async fn upload_tokens_metadata(&self, tokens: &[Token]) -> Result<()> {
        let resp = self
            .update("upload_tokens_metadata", Encode!(&tokens)?)
            .await?;
        Decode!(&resp, UploadResult)?.map_err(|e| anyhow!(e))
    }

    pub async fn upload_asset(&self, asset: &Asset) -> Result<()> {
        let resp = self.update("upload_asset", Encode!(asset)?).await?;
        Decode!(&resp, UploadResult)?.map_err(|e| anyhow!(e))
    }

    pub async fn transaction_notification(
        &self,
        notification: &TransactionNotification,
    ) -> Result<u64> {
        let resp = self
            .update("transaction_notification", Encode!(notification)?)
            .await?;
        Decode!(&resp, MintResult)?.map_err(|e| anyhow!(e))
    }

    pub async fn set_tx_enabled(&self, enabled: bool) -> Result<bool> {
        let resp = self.update("set_tx_enabled", Encode!(&enabled)?).await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn set_paused(&self, paused: bool) -> Result<bool> {
        let resp = self.update("set_paused", Encode!(&paused)?).await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn set_creators_fee(&self, fee: u128) -> Result<bool> {
        let resp = self.update("set_creators_fee", Encode!(&fee)?).await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn set_creators_address(&self, creator: Principal) -> Result<bool> {
        let resp = self
            .update("set_creators_address", Encode!(&creator)?)
            .await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn set_ledger_canister(&self, ledger: Principal) -> Result<bool> {
        let resp = self
            .update("set_ledger_canister", Encode!(&ledger)?)
            .await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn metadata(&self) -> Result<Vec<Token>> {
        let resp = self.query("metadata", Encode!()?).await?;
        Decode!(&resp, Vec<Token>).map_err(|e| e.into())
    }

    pub async fn total_supply(&self) -> Result<u128> {
        let resp = self.query("total_supply", Encode!()?).await?;
        Decode!(&resp, u128).map_err(|e| e.into())
    }

    pub async fn tx_enabled(&self) -> Result<bool> {
        let resp = self.query("tx_enabled", Encode!()?).await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn is_paused(&self) -> Result<bool> {
        let resp = self.query("is_paused", Encode!()?).await?;
        Decode!(&resp, bool).map_err(|e| e.into())
    }

    pub async fn owner(&self) -> Result<Principal> {
        let resp = self.query("owner", Encode!()?).await?;
        Decode!(&resp, Principal).map_err(|e| e.into())
    }
}

pub struct LedgerProxyClient {
    agent: Agent,
    canister_id: Principal,
}

impl LedgerProxyClient {
    pub fn new(agent: Agent, canister_id: Principal) -> Self {
        Self { agent, canister_id }
    }

    pub async fn from_env() -> Result<Self> {
        let canister_id = canister_id(LEDGER_PROXY_CANISTER)?;
        log::info!("ledger proxy canister {}", canister_id);
        Ok(Self::new(agent_from_env().await?, canister_id))
    }

    pub async fn notify(&self, block_height: u64) -> Result<()> {
        let resp = self
            .agent
            .update(&self.canister_id, "notify")
            .with_arg(Encode!(&block_height)?)
            .call_and_wait()
            .await?;
        Decode!(&resp, UploadResult)?.map_err(|e| anyhow!(e))
    }
}

/// Principal of the ledger proxy, for wiring the token canister to it.
pub fn ledger_proxy_id() -> Result<Principal> {
    canister_id(LEDGER_PROXY_CANISTER)
}
