pub mod common;

mod quote_flow_test;
mod repl_key_flow_test;
mod timeline_scroll_test;
mod transcript_flow_test;
