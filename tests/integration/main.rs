//! Integration tests

mod e2e_test;
mod estimator_test;
mod referral_test;
