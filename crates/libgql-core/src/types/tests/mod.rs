mod deprecation_state_tests;
mod resolved_type_tests;
mod type_ref_tests;
