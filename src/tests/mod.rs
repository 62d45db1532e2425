pub mod scan_tests;
