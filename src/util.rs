/// Finds the length of the common prefix between two byte strings.
///
/// Returns the number of leading bytes that match.
pub(crate) fn longest_prefix(k1: &[u8], k2: &[u8]) -> usize {
    k1.iter().zip(k2).take_while(|(a, b)| a == b).count()
}
