mod website_tests;
