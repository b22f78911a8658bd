pub mod oracle;
pub mod server;
pub mod wallet;
