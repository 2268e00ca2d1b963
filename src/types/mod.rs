//! Data model types and request parameters for the Xendit client.

pub mod balance;
pub mod disbursement;
pub mod invoice;
pub mod virtual_account;

// Re-exports
pub use balance::{AccountType, Balance};
pub use disbursement::{CreateDisbursement, Disbursement, DisbursementBank};
pub use invoice::{
    CreateInvoice, Invoice, InvoiceBank, InvoiceEwallet, InvoiceRetailOutlet, ListInvoices,
};
pub use virtual_account::{
    CreateVirtualAccount, UpdateVirtualAccount, VirtualAccount, VirtualAccountBank,
    VirtualAccountPayment,
};
