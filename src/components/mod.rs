pub mod oracle;
#[cfg(test)]
pub mod stub;
