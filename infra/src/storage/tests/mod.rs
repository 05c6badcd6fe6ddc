mod local_tests;
