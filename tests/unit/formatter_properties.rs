use alloy::primitives::U256;
use gas_summary::display::{DisplayPlan, FormatterConfig, GasSummaryFormatter};
use gas_summary::{CurrencyType, DappSuggestedGasFees, GasDisplayInput};
use proptest::prelude::*;

fn wei() -> impl Strategy<Value = U256> {
    any::<[u64; 4]>().prop_map(U256::from_limbs)
}

prop_compose! {
    fn gas_input()(
        is_mainnet in any::<bool>(),
        is_multi_layer_fee_network in any::<bool>(),
        use_currency_rate_check in any::<bool>(),
        use_native_currency_as_primary_currency in any::<bool>(),
        dapp_suggested in any::<bool>(),
        symbol in "[A-Z]{2,5}",
        a in wei(),
        b in wei(),
    ) -> GasDisplayInput {
        GasDisplayInput {
            is_mainnet,
            is_multi_layer_fee_network,
            use_currency_rate_check,
            use_native_currency_as_primary_currency,
            native_currency_symbol: symbol,
            dapp_suggested_gas_fees: dapp_suggested.then(DappSuggestedGasFees::default),
            minimum_fee_wei: a.min(b),
            maximum_fee_wei: a.max(b),
            transaction_id: "1".to_string(),
        }
    }
}

fn formatter() -> GasSummaryFormatter {
    GasSummaryFormatter::new(FormatterConfig::for_tests())
}

proptest! {
    #[test]
    fn multi_layer_plan_has_two_entries_with_same_fee(input in gas_input()) {
        let input = GasDisplayInput { is_multi_layer_fee_network: true, ..input };
        let plan = formatter().format(&input);

        prop_assert_eq!(plan.entry_count(), 2);
        let DisplayPlan::MultiLayer { total, layer1 } = &plan else {
            return Err(TestCaseError::fail("expected multi-layer plan"));
        };
        prop_assert_eq!(layer1.layer2_fee_wei, total.detail_total.amount.value_wei);
        prop_assert_eq!(layer1.layer2_fee_wei, input.minimum_fee_wei);
        prop_assert_eq!(&layer1.native_currency, &input.native_currency_symbol);
    }

    #[test]
    fn sub_title_present_iff_dapp_suggested(input in gas_input()) {
        let input = GasDisplayInput { is_multi_layer_fee_network: false, ..input };
        let plan = formatter().format(&input);

        prop_assert_eq!(plan.entry_count(), 1);
        prop_assert_eq!(
            plan.detail_item().sub_title.is_some(),
            input.dapp_suggested_gas_fees.is_some()
        );
    }

    #[test]
    fn standard_total_and_max_fee_amounts(input in gas_input()) {
        let input = GasDisplayInput { is_multi_layer_fee_network: false, ..input };
        let plan = formatter().format(&input);
        let details = plan.detail_item();

        prop_assert_eq!(details.detail_total.amount.value_wei, input.minimum_fee_wei);
        prop_assert_eq!(details.detail_total.amount.decimals, Some(6));
        prop_assert_eq!(details.detail_total.amount.currency, CurrencyType::Primary);

        let sub_text = details.sub_text.as_ref().unwrap();
        prop_assert_eq!(sub_text.amount.amount.value_wei, input.maximum_fee_wei);
        prop_assert_eq!(sub_text.amount.amount.decimals, None);
        prop_assert_eq!(sub_text.amount.amount.currency, CurrencyType::Primary);
    }

    #[test]
    fn no_secondary_amount_without_rate_check(input in gas_input()) {
        let input = GasDisplayInput { use_currency_rate_check: false, ..input };
        let plan = formatter().format(&input);
        prop_assert!(plan.secondary_amounts().is_empty());
    }

    #[test]
    fn secondary_amount_shown_with_rate_check(input in gas_input()) {
        let input = GasDisplayInput { use_currency_rate_check: true, ..input };
        let plan = formatter().format(&input);
        let secondary = plan.secondary_amounts();

        prop_assert_eq!(secondary.len(), 1);
        prop_assert_eq!(secondary[0].value_wei, input.minimum_fee_wei);
    }

    #[test]
    fn format_is_idempotent(input in gas_input(), heartbeat in any::<bool>()) {
        let formatter = GasSummaryFormatter::new(FormatterConfig { show_heartbeat: heartbeat });
        prop_assert_eq!(formatter.format(&input), formatter.format(&input));
    }
}
