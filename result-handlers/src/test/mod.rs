mod logging_handler_test;
