//! Integration tests for shotsync.

mod helpers;

mod cli_test;
mod review_test;
