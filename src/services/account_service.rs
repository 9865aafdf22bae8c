use serde_json::json;
use tracing::{debug, error};

use crate::api::{ProviderError, ProviderRequest, WalletProvider};
use crate::models::{BalanceResult, Transaction};
use crate::utils::PopupError;

const BALANCE_COMMITMENT: &str = "processed";
const HISTORY_COMMITMENT: &str = "confirmed";
/// Most recent entries requested per history fetch
pub const HISTORY_LIMIT: usize = 10;

/// Balance and history from one fetch
#[derive(Debug, Clone)]
pub struct AccountData {
    pub balance: BalanceResult,
    pub transactions: Vec<Transaction>,
}

/// Get the account balance converted to whole tokens
pub async fn fetch_balance(provider: &dyn WalletProvider) -> Result<BalanceResult, PopupError> {
    let response = provider
        .request(ProviderRequest::new(
            "getBalance",
            json!({ "commitment": BALANCE_COMMITMENT }),
        ))
        .await
        .map_err(PopupError::FetchError)?;

    let lamports = response
        .get("value")
        .and_then(|v| v.as_u64())
        .ok_or_else(|| {
            PopupError::FetchError(ProviderError::InvalidResponse(format!(
                "Balance response has no integer value: {}",
                response
            )))
        })?;

    debug!("Fetched balance: {} lamports", lamports);
    Ok(BalanceResult::from_lamports(lamports))
}

/// Get the most recent transactions, in whatever order the provider returns them
pub async fn fetch_transaction_history(
    provider: &dyn WalletProvider,
) -> Result<Vec<Transaction>, PopupError> {
    let response = provider
        .request(ProviderRequest::new(
            "getTransactions",
            json!({ "limit": HISTORY_LIMIT, "commitment": HISTORY_COMMITMENT }),
        ))
        .await
        .map_err(PopupError::FetchError)?;

    let transactions: Vec<Transaction> = serde_json::from_value(response).map_err(|e| {
        PopupError::FetchError(ProviderError::InvalidResponse(format!(
            "Failed to parse transactions: {}",
            e
        )))
    })?;

    debug!("Fetched {} transactions", transactions.len());
    Ok(transactions)
}

/// Balance first, then history only once the balance came back
pub async fn fetch_account_data(provider: &dyn WalletProvider) -> Result<AccountData, PopupError> {
    let balance = fetch_balance(provider).await.map_err(|e| {
        error!("Error fetching balance: {}", e);
        e
    })?;
    let transactions = fetch_transaction_history(provider).await.map_err(|e| {
        error!("Error fetching transactions: {}", e);
        e
    })?;

    Ok(AccountData {
        balance,
        transactions,
    })
}
