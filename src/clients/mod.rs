//! Resource clients for the Xendit API.

pub mod balance;
pub mod disbursements;
pub mod invoices;
pub mod virtual_accounts;

// Re-exports
pub use balance::BalanceClient;
pub use disbursements::DisbursementsClient;
pub use invoices::InvoicesClient;
pub use virtual_accounts::VirtualAccountsClient;
