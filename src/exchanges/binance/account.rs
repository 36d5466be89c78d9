use super::client::BinanceApiRestClient;
use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::binance::requests::DEFAULT_RECV_WINDOW;
use crate::exchanges::binance::signer::get_timestamp;
use crate::exchanges::binance::types::{
    Account, DepositAddress, DepositHistory, Trade, WithdrawHistory, WithdrawResult,
};

/// Account, wallet and user data stream endpoints
impl<R: RestClient> BinanceApiRestClient<R> {
    /// Current account information, using the default receive window
    pub fn get_account(&self) -> Result<Account, ExchangeError> {
        self.get_account_with(DEFAULT_RECV_WINDOW, get_timestamp())
    }

    pub fn get_account_with(
        &self,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Account, ExchangeError> {
        self.block_on(self.rest.get_account(recv_window, timestamp))
    }

    /// Most recent account trades on a symbol (exchange default 500)
    pub fn get_my_trades(
        &self,
        symbol: &str,
        limit: Option<u32>,
    ) -> Result<Vec<Trade>, ExchangeError> {
        self.get_my_trades_from(symbol, limit, None, DEFAULT_RECV_WINDOW, get_timestamp())
    }

    /// Account trades on a symbol, starting at trade id `from_id` when given
    pub fn get_my_trades_from(
        &self,
        symbol: &str,
        limit: Option<u32>,
        from_id: Option<u64>,
        recv_window: u64,
        timestamp: u64,
    ) -> Result<Vec<Trade>, ExchangeError> {
        self.block_on(
            self.rest
                .get_my_trades(symbol, limit, from_id, recv_window, timestamp),
        )
    }

    /// Submit a withdraw request
    ///
    /// Enable withdrawals on the API key first, otherwise the exchange
    /// refuses the request.
    pub fn withdraw(
        &self,
        asset: &str,
        address: &str,
        amount: &str,
        name: Option<&str>,
        address_tag: Option<&str>,
    ) -> Result<WithdrawResult, ExchangeError> {
        self.block_on(
            self.rest
                .withdraw(asset, address, amount, name, address_tag),
        )
    }

    pub fn get_deposit_history(&self, asset: &str) -> Result<DepositHistory, ExchangeError> {
        self.block_on(self.rest.get_deposit_history(asset))
    }

    pub fn get_withdraw_history(&self, asset: &str) -> Result<WithdrawHistory, ExchangeError> {
        self.block_on(self.rest.get_withdraw_history(asset))
    }

    pub fn get_deposit_address(&self, asset: &str) -> Result<DepositAddress, ExchangeError> {
        self.block_on(self.rest.get_deposit_address(asset))
    }

    /// Start a new user data stream and return its listen key
    pub fn start_user_data_stream(&self) -> Result<String, ExchangeError> {
        self.block_on(self.rest.start_user_data_stream())
            .map(|key| key.listen_key)
    }

    /// Ping a user data stream to keep it alive
    pub fn keep_alive_user_data_stream(&self, listen_key: &str) -> Result<(), ExchangeError> {
        self.block_on(self.rest.keep_alive_user_data_stream(listen_key))
    }

    pub fn close_user_data_stream(&self, listen_key: &str) -> Result<(), ExchangeError> {
        self.block_on(self.rest.close_user_data_stream(listen_key))
    }
}
