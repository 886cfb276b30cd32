//! Engine-generic tests. Each function takes a shared service built once per
//! engine by [`boolean_test_suite!`](crate::boolean_test_suite) or
//! [`integer_test_suite!`](crate::integer_test_suite). Tests that assert on a
//! ledger or close a service build their own instance, since the shared one is
//! used concurrently by the rest of the suite.

pub mod boolean;
pub mod codec;
pub mod context;
pub mod integer;

#[macro_export]
macro_rules! boolean_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use once_cell::sync::Lazy;

            static SERVICE: Lazy<$crate::BooleanCryptoService<$backend>> = Lazy::new(|| {
                $crate::BooleanCryptoService::<$backend>::new(&$crate::GatewayConfig::default())
                    .unwrap_or_else(|err| panic!("boolean service setup: {err}"))
            });

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*SERVICE);
                }
            )+
        }
    };
}

#[macro_export]
macro_rules! integer_test_suite {
    (
        mod $modname:ident,
        backend = $backend:ty,
        tests = {
            $( $(#[$attr:meta])* $test_name:ident => $impl:path ),+ $(,)?
        }
    ) => {
        mod $modname {
            use once_cell::sync::Lazy;

            static SERVICE: Lazy<$crate::IntegerCryptoService<$backend>> = Lazy::new(|| {
                $crate::IntegerCryptoService::<$backend>::new(&$crate::GatewayConfig::default())
                    .unwrap_or_else(|err| panic!("uint8 service setup: {err}"))
            });

            $(
                $(#[$attr])*
                #[test]
                fn $test_name() {
                    ($impl)(&*SERVICE);
                }
            )+
        }
    };
}
