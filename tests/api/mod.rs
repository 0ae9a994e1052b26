//! REST API endpoint tests

mod conversation_tests;
mod message_tests;
