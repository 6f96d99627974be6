//! Integration tests for chapnav

mod cli_test;
mod helpers;
mod navigation_test;
