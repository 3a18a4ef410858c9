// Test modules

mod explain_api_test;
