use crate::{boolean_test_suite, integer_test_suite};

boolean_test_suite!(
    mod cpu_ref_boolean,
    backend = fhegate_backend::RefEngine,
    tests = {
        truth_tables => crate::test_suite::boolean::test_boolean_truth_tables,
        scenario => crate::test_suite::boolean::test_boolean_scenario,
        chained_gates => crate::test_suite::boolean::test_boolean_chained_gates,
        invalid_input => crate::test_suite::boolean::test_boolean_invalid_input,
        ledger_drains => crate::test_suite::boolean::test_boolean_ledger_drains,
        close => crate::test_suite::boolean::test_boolean_close,
    }
);

integer_test_suite!(
    mod cpu_ref_uint8,
    backend = fhegate_backend::RefEngine,
    tests = {
        scenario => crate::test_suite::integer::test_uint8_scenario,
        arithmetic => crate::test_suite::integer::test_uint8_arithmetic,
        public_parity => crate::test_suite::integer::test_uint8_public_parity,
        invalid_input => crate::test_suite::integer::test_uint8_invalid_input,
        foreign_shape => crate::test_suite::integer::test_uint8_foreign_shape,
        leaves_thread_unbound => crate::test_suite::integer::test_uint8_leaves_thread_unbound,
        ledger_drains => crate::test_suite::integer::test_uint8_ledger_drains,
        close => crate::test_suite::integer::test_uint8_close,
        independent_services => crate::test_suite::integer::test_uint8_independent_services,
        key_generation => crate::test_suite::integer::test_uint8_key_generation,
        // Context
        bind_nil_key => crate::test_suite::context::test_bind_nil_key,
        bind_twice => crate::test_suite::context::test_bind_twice_keeps_first_binding,
        run_unbinds_on_failure => crate::test_suite::context::test_run_unbinds_on_failure,
        guard_unbinds_on_unwind => crate::test_suite::context::test_guard_unbinds_on_unwind,
        ambient_op_requires_binding => crate::test_suite::context::test_ambient_op_requires_binding,
        binding_is_thread_local => crate::test_suite::context::test_binding_is_thread_local,
        // Codec
        codec_round_trip => crate::test_suite::codec::test_codec_round_trip,
        codec_size_limit => crate::test_suite::codec::test_codec_size_limit,
        codec_nil_and_released => crate::test_suite::codec::test_codec_nil_and_released,
    }
);

#[cfg(feature = "tfhe")]
boolean_test_suite!(
    mod tfhe_boolean,
    backend = fhegate_backend::tfhe_rs::TfheEngine,
    tests = {
        truth_tables => crate::test_suite::boolean::test_boolean_truth_tables,
        scenario => crate::test_suite::boolean::test_boolean_scenario,
        invalid_input => crate::test_suite::boolean::test_boolean_invalid_input,
        ledger_drains => crate::test_suite::boolean::test_boolean_ledger_drains,
    }
);

#[cfg(feature = "tfhe")]
integer_test_suite!(
    mod tfhe_uint8,
    backend = fhegate_backend::tfhe_rs::TfheEngine,
    tests = {
        scenario => crate::test_suite::integer::test_uint8_scenario,
        public_parity => crate::test_suite::integer::test_uint8_public_parity,
        invalid_input => crate::test_suite::integer::test_uint8_invalid_input,
        foreign_shape => crate::test_suite::integer::test_uint8_foreign_shape,
        leaves_thread_unbound => crate::test_suite::integer::test_uint8_leaves_thread_unbound,
        bind_twice => crate::test_suite::context::test_bind_twice_keeps_first_binding,
        run_unbinds_on_failure => crate::test_suite::context::test_run_unbinds_on_failure,
        ambient_op_requires_binding => crate::test_suite::context::test_ambient_op_requires_binding,
        codec_round_trip => crate::test_suite::codec::test_codec_round_trip,
    }
);

/// Services must be shareable across threads and lanes.
#[test]
fn services_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<crate::BooleanCryptoService<fhegate_backend::RefEngine>>();
    assert_send_sync::<crate::IntegerCryptoService<fhegate_backend::RefEngine>>();
}
