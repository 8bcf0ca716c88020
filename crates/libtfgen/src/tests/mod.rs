mod exception_set_tests;
mod pipeline_property_tests;
mod utils;
