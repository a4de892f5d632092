use ::uuid::{Builder, Uuid};

use crate::error::Result;
use crate::random::fill_random;

/// Random (version 4) UUID in the hyphenated lower-case form.
pub fn generate_uuid_v4() -> Result<String> {
    let mut bytes = [0u8; 16];
    fill_random(&mut bytes)?;
    Ok(uuid_from_random_bytes(bytes).hyphenated().to_string())
}

/// Stamps the version 4 nibble and RFC 4122 variant bits onto raw bytes.
pub fn uuid_from_random_bytes(bytes: [u8; 16]) -> Uuid {
    Builder::from_random_bytes(bytes).into_uuid()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_v4_shape(id: &str) {
        let groups: Vec<&str> = id.split('-').collect();
        assert_eq!(
            groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            vec![8, 4, 4, 4, 12],
            "{id}"
        );
        assert!(id
            .chars()
            .all(|c| c == '-' || c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert!(groups[2].starts_with('4'), "version nibble in {id}");
        assert!(
            matches!(groups[3].chars().next(), Some('8' | '9' | 'a' | 'b')),
            "variant in {id}"
        );
    }

    #[test]
    fn fixed_bytes_get_version_and_variant() {
        let id = uuid_from_random_bytes([0xff; 16]).to_string();
        assert_eq!(id, "ffffffff-ffff-4fff-bfff-ffffffffffff");
        let id = uuid_from_random_bytes([0x00; 16]).to_string();
        assert_eq!(id, "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn generated_ids_have_v4_shape_and_do_not_repeat() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            let id = generate_uuid_v4().expect("random source");
            assert_v4_shape(&id);
            assert!(seen.insert(id), "duplicate uuid");
        }
    }
}
