mod executor_tests;
mod operation_selection_tests;
mod utils;
mod variable_coercion_tests;
