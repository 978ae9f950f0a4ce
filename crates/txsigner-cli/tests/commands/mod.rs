mod extensions_test;
mod filter_nulls_test;
mod register_test;
mod scan_test;
