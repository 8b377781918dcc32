//! SHA-256 tree hash used by Glacier to verify archive payloads.

use crate::signing::sha256;

/// Leaf size of the hash tree.
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Compute the hex SHA-256 tree hash of `data`.
///
/// Each 1 MiB chunk is hashed, then adjacent digests are concatenated and
/// hashed pairwise until one remains. An odd digest is carried up unchanged.
pub fn tree_hash(data: &[u8]) -> String {
    let mut level: Vec<[u8; 32]> = if data.is_empty() {
        vec![sha256(data)]
    } else {
        data.chunks(CHUNK_SIZE).map(sha256).collect()
    };

    while level.len() > 1 {
        let mut parents = Vec::with_capacity((level.len() + 1) / 2);
        let mut digests = level.into_iter();
        while let Some(left) = digests.next() {
            match digests.next() {
                Some(right) => {
                    let mut joined = [0u8; 64];
                    joined[..32].copy_from_slice(&left);
                    joined[32..].copy_from_slice(&right);
                    parents.push(sha256(&joined));
                }
                None => parents.push(left),
            }
        }
        level = parents;
    }

    level.first().map(hex::encode).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::sha256_hex;

    #[test]
    fn test_small_payload_is_plain_sha256() {
        assert_eq!(tree_hash(b"archive"), sha256_hex(b"archive"));
        assert_eq!(tree_hash(b""), sha256_hex(b""));
    }

    #[test]
    fn test_two_chunks() {
        let data = vec![7u8; CHUNK_SIZE + 10];
        let left = sha256(&data[..CHUNK_SIZE]);
        let right = sha256(&data[CHUNK_SIZE..]);
        let expected = sha256_hex(&[left, right].concat());
        assert_eq!(tree_hash(&data), expected);
    }

    #[test]
    fn test_odd_chunk_is_promoted() {
        let data = vec![1u8; CHUNK_SIZE * 3];
        let h: Vec<[u8; 32]> = data.chunks(CHUNK_SIZE).map(sha256).collect();
        let top_left = sha256(&[h[0], h[1]].concat());
        let expected = sha256_hex(&[top_left, h[2]].concat());
        assert_eq!(tree_hash(&data), expected);
    }
}
