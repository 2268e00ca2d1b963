//! Property-based tests for parameter extraction and response decoding.
//!
//! These tests validate correctness properties across all valid inputs.

use proptest::prelude::*;
use serde_json::{json, Value};

use xendit::params::to_body;
use xendit::response::decode;
use xendit::{Balance, CreateInvoice, CreateVirtualAccount, Error, RequestOptions, VirtualAccountBank};

/// Strategy for optional header-safe strings.
fn optional_token() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9_\\-\\.]{1,30}")
}

/// Strategy for printable strings, including ones that need JSON escaping.
fn text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _\\-\\.@\"\\\\]{0,40}"
}

proptest! {
    /// Unset optional parameters never appear in the request body, set ones
    /// appear with their value, and required ones are always present.
    #[test]
    fn test_create_invoice_body_matches_set_fields(
        external_id in text(),
        payer_email in text(),
        description in text(),
        amount in 0_i64..1_000_000_000,
        currency in optional_token(),
        mid_label in optional_token(),
        should_send_email in prop::option::of(any::<bool>()),
        invoice_duration in prop::option::of(1_u64..10_000_000),
    ) {
        let params = CreateInvoice {
            currency: currency.clone(),
            mid_label: mid_label.clone(),
            should_send_email,
            invoice_duration,
            ..CreateInvoice::new(external_id.clone(), payer_email.clone(), description.clone(), amount)
        };

        let body = to_body(&params).expect("serializable");
        let obj = body.as_object().expect("body is an object");

        let expected_len = 4
            + usize::from(currency.is_some())
            + usize::from(mid_label.is_some())
            + usize::from(should_send_email.is_some())
            + usize::from(invoice_duration.is_some());
        prop_assert_eq!(obj.len(), expected_len);

        prop_assert_eq!(&obj["external_id"], &json!(external_id));
        prop_assert_eq!(&obj["payer_email"], &json!(payer_email));
        prop_assert_eq!(&obj["description"], &json!(description));
        prop_assert_eq!(&obj["amount"], &json!(amount));
        let currency = currency.map(Value::String);
        let mid_label = mid_label.map(Value::String);
        prop_assert_eq!(obj.get("currency"), currency.as_ref());
        prop_assert_eq!(obj.get("mid_label"), mid_label.as_ref());
        prop_assert!(obj.values().all(|v| !v.is_null()));
    }

    /// No request body ever carries a `null`.
    #[test]
    fn test_create_virtual_account_body_has_no_nulls(
        external_id in text(),
        name in text(),
        virtual_account_number in optional_token(),
        description in optional_token(),
        expected_amount in prop::option::of(1_i64..100_000_000),
        is_closed in prop::option::of(any::<bool>()),
    ) {
        let params = CreateVirtualAccount {
            virtual_account_number,
            description,
            expected_amount,
            is_closed,
            ..CreateVirtualAccount::new(external_id, "BNI", name)
        };

        let body = to_body(&params).expect("serializable");
        prop_assert!(body.as_object().expect("body is an object").values().all(|v| !v.is_null()));
    }

    /// Exactly the set header options become headers, with their values.
    #[test]
    fn test_request_options_headers(
        for_user_id in optional_token(),
        idempotency_key in optional_token(),
        api_version in optional_token(),
        with_fee_rule in optional_token(),
    ) {
        let options = RequestOptions {
            for_user_id: for_user_id.clone(),
            idempotency_key: idempotency_key.clone(),
            api_version: api_version.clone(),
            with_fee_rule: with_fee_rule.clone(),
            headers: Vec::new(),
        };

        let headers = options.to_header_map().expect("valid headers");

        let pairs = [
            ("for-user-id", for_user_id),
            ("x-idempotency-key", idempotency_key),
            ("x-api-version", api_version),
            ("with-fee-rule", with_fee_rule),
        ];
        let expected_len = pairs.iter().filter(|(_, v)| v.is_some()).count();
        prop_assert_eq!(headers.len(), expected_len);

        for (name, value) in pairs {
            let actual = headers.get(name).and_then(|v| v.to_str().ok());
            prop_assert_eq!(actual, value.as_deref());
        }
    }

    /// Decoded fields equal the JSON fields.
    #[test]
    fn test_decode_preserves_fields(balance in any::<i64>(), name in text(), code in "[A-Z_]{2,12}") {
        let decoded: Balance = decode("Balance", json!({"balance": balance})).expect("should decode");
        prop_assert_eq!(decoded.balance, balance);

        let bank: VirtualAccountBank =
            decode("VirtualAccountBank", json!({"name": name.clone(), "code": code.clone()}))
                .expect("should decode");
        prop_assert_eq!(bank.name, name);
        prop_assert_eq!(bank.code, code);
    }

    /// Dropping any required field fails validation.
    #[test]
    fn test_decode_rejects_missing_required_field(
        field in prop::sample::select(vec!["name", "code"]),
    ) {
        let mut body = json!({"name": "Bank Mandiri", "code": "MANDIRI"});
        body.as_object_mut().expect("object").remove(field);

        let result = decode::<VirtualAccountBank>("VirtualAccountBank", body);
        let is_invalid_response = matches!(
            result,
            Err(Error::InvalidResponse { resource: "VirtualAccountBank", .. })
        );
        prop_assert!(is_invalid_response);
    }
}
