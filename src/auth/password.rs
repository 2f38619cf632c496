/// bcrypt work factor applied at signup.
pub const BCRYPT_COST: u32 = 10;

pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, BCRYPT_COST)
}

/// Cost and salt are read back out of `hash`. A hash that does not parse is an
/// error, not a mismatch.
pub fn verify_password(plain: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, hash)
}
