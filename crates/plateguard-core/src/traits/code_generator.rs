/// Source of verification code values.
pub trait ICodeGenerator: Send + Sync {
    /// Produce a numeric code of exactly `length` digits.
    fn generate(&self, length: usize) -> String;
}
