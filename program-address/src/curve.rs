//! Ed25519 curve membership

use curve25519_dalek::edwards::CompressedEdwardsY;

/// Returns true if the bytes decompress to a point on the Ed25519 curve.
///
/// An address on the curve may have a matching private key, so program
/// derived addresses must be off the curve.
pub fn is_on_curve(bytes: &[u8; 32]) -> bool {
    CompressedEdwardsY(*bytes).decompress().is_some()
}
