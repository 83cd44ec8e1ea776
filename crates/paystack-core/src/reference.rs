//! Transaction References

/// Length of generated references
pub const REFERENCE_LEN: usize = 25;

/// Generate a unique transaction reference
///
/// 25 alphanumeric characters drawn from a v4 UUID.
pub fn generate_reference() -> String {
    let hex = uuid::Uuid::new_v4().simple().to_string();
    hex[..REFERENCE_LEN].to_owned()
}
