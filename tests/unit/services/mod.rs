mod calendar_tests;
mod navigator_tests;
