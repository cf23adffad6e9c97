//! Continuous-integration policy helpers shared by homba test suites.

pub mod property_test_profile;
