pub mod envelope;
pub mod types;

#[cfg(test)]
pub mod test_helpers;
