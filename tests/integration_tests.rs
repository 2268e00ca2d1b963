//! Integration tests for the Xendit Rust client.
//!
//! These tests run against the Xendit sandbox with a development key and
//! verify end-to-end workflows.
//!
//! To run these tests:
//! ```bash
//! XENDIT_INTEGRATION_TESTS=1 XENDIT_API_KEY=xnd_development_... cargo test --test integration_tests -- --ignored
//! ```

use std::env;

use uuid::Uuid;
use xendit::{
    AccountType, CreateInvoice, CreateVirtualAccount, Error, ListInvoices, RequestOptions,
    UpdateVirtualAccount, XenditClient,
};

/// Check if integration tests should run.
fn should_run_integration_tests() -> bool {
    env::var("XENDIT_INTEGRATION_TESTS").map_or(false, |v| v == "1")
}

/// Generate a unique external ID for test resources.
fn generate_external_id(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().to_string()[..8])
}

fn create_client() -> XenditClient {
    XenditClient::from_env().expect("XENDIT_API_KEY must be set for integration tests")
}

mod balance {
    use super::*;

    /// Test: every account type can be read
    #[tokio::test]
    #[ignore = "Integration test requires XENDIT_INTEGRATION_TESTS=1 and a development API key"]
    async fn test_get_all_account_types() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        for account_type in [AccountType::Cash, AccountType::Holding, AccountType::Tax] {
            let balance = client
                .balance()
                .get(account_type, &RequestOptions::new())
                .await
                .expect("Get balance should succeed");
            assert!(balance.balance >= 0);
        }
    }
}

mod invoice_lifecycle {
    use super::*;

    /// Test: Create invoice → Get → List → Expire
    #[tokio::test]
    #[ignore = "Integration test requires XENDIT_INTEGRATION_TESTS=1 and a development API key"]
    async fn test_create_get_list_expire_invoice() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let external_id = generate_external_id("invoice");

        let invoice = client
            .invoices()
            .create(
                &CreateInvoice::new(&external_id, "payer@example.com", "Integration test", 50_000),
                &RequestOptions::new().idempotency_key(&external_id),
            )
            .await
            .expect("Invoice creation should succeed");

        assert_eq!(invoice.external_id, external_id);
        assert_eq!(invoice.status, "PENDING");

        let fetched = client
            .invoices()
            .get(&invoice.id, &RequestOptions::new())
            .await
            .expect("Get invoice should succeed");
        assert_eq!(fetched.id, invoice.id);

        let listed = client
            .invoices()
            .list_all(
                &ListInvoices {
                    statuses: Some(vec!["PENDING".to_string()]),
                    limit: Some(10),
                    ..Default::default()
                },
                &RequestOptions::new(),
            )
            .await
            .expect("List invoices should succeed");
        assert!(listed.iter().all(|i| i.status == "PENDING"));

        let expired = client
            .invoices()
            .expire(&invoice.id, &RequestOptions::new())
            .await
            .expect("Expire invoice should succeed");
        assert_eq!(expired.status, "EXPIRED");
    }

    /// Test: Getting a non-existent invoice returns a 404 API error
    #[tokio::test]
    #[ignore = "Integration test requires XENDIT_INTEGRATION_TESTS=1 and a development API key"]
    async fn test_get_nonexistent_invoice() {
        if !should_run_integration_tests() {
            return;
        }

        let result = create_client()
            .invoices()
            .get("000000000000000000000000", &RequestOptions::new())
            .await;

        match result {
            Err(Error::Xendit(e)) => assert_eq!(e.status_code, 404),
            Err(e) => panic!("Expected Xendit error, got: {e:?}"),
            Ok(_) => panic!("Expected error, got success"),
        }
    }
}

mod virtual_account_lifecycle {
    use super::*;

    /// Test: List banks → Create → Get → Update
    #[tokio::test]
    #[ignore = "Integration test requires XENDIT_INTEGRATION_TESTS=1 and a development API key"]
    async fn test_create_get_update_virtual_account() {
        if !should_run_integration_tests() {
            return;
        }

        let client = create_client();
        let banks = client
            .virtual_accounts()
            .get_banks(&RequestOptions::new())
            .await
            .expect("Get banks should succeed");
        let bank = banks
            .iter()
            .find(|b| b.code == "BNI")
            .expect("BNI should be available in the sandbox");

        let external_id = generate_external_id("va");
        let va = client
            .virtual_accounts()
            .create(
                &CreateVirtualAccount::new(&external_id, &bank.code, "Rika Sutanto"),
                &RequestOptions::new(),
            )
            .await
            .expect("Virtual account creation should succeed");
        assert_eq!(va.external_id, external_id);

        let fetched = client
            .virtual_accounts()
            .get(&va.id, &RequestOptions::new())
            .await
            .expect("Get virtual account should succeed");
        assert_eq!(fetched.account_number, va.account_number);

        let updated = client
            .virtual_accounts()
            .update(
                &va.id,
                &UpdateVirtualAccount {
                    description: Some("Updated by integration test".to_string()),
                    ..Default::default()
                },
                &RequestOptions::new(),
            )
            .await
            .expect("Update virtual account should succeed");
        assert_eq!(updated.id, va.id);
    }
}
