use std::fmt;

use crate::StorageError;

const SEPARATOR: char = '/';

/// A store key made of a namespace and any number of attributes.
///
/// Every segment is written as `<byte length>:<segment>` and segments are
/// joined with `/`, so two different segment lists never encode to the same
/// key, whatever bytes the segments contain.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CompositeKey {
    namespace: String,
    attributes: Vec<String>,
}

impl CompositeKey {
    /// Start a key in `namespace`.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            attributes: Vec::new(),
        }
    }

    /// Append an attribute segment.
    pub fn with(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// The namespace segment.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The attribute segments, in order.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// The encoded key.
    pub fn encode(&self) -> String {
        let mut key = String::new();
        for (index, segment) in std::iter::once(&self.namespace)
            .chain(self.attributes.iter())
            .enumerate()
        {
            if index > 0 {
                key.push(SEPARATOR);
            }
            key.push_str(&segment.len().to_string());
            key.push(':');
            key.push_str(segment);
        }
        key
    }

    /// Parse a key produced by [`CompositeKey::encode`].
    pub fn decode(key: &str) -> Result<Self, StorageError> {
        let invalid = || StorageError::InvalidKey(key.to_string());

        let mut segments = Vec::new();
        let mut rest = key;
        loop {
            let (length, tail) = rest.split_once(':').ok_or_else(invalid)?;
            let length: usize = length.parse().map_err(|_| invalid())?;
            if !tail.is_char_boundary(length.min(tail.len())) || tail.len() < length {
                return Err(invalid());
            }
            let (segment, tail) = tail.split_at(length);
            segments.push(segment.to_string());

            if tail.is_empty() {
                break;
            }
            rest = tail.strip_prefix(SEPARATOR).ok_or_else(invalid)?;
        }

        let mut segments = segments.into_iter();
        let namespace = segments.next().ok_or_else(invalid)?;
        Ok(Self {
            namespace,
            attributes: segments.collect(),
        })
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl From<CompositeKey> for String {
    fn from(key: CompositeKey) -> Self {
        key.encode()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use testresult::TestResult;

    #[test]
    fn it_length_prefixes_every_segment() {
        let key = CompositeKey::new("sig").with("alice").encode();
        assert_eq!(key, "3:sig/5:alice");
    }

    #[test]
    fn it_does_not_collide_when_segments_contain_the_separator() {
        let left = CompositeKey::new("a/1:b").with("c").encode();
        let right = CompositeKey::new("a").with("b/1:c").encode();
        let joined = CompositeKey::new("a").with("b").with("c").encode();

        assert_ne!(left, right);
        assert_ne!(left, joined);
        assert_ne!(right, joined);
    }

    #[test]
    fn it_decodes_what_it_encodes() -> TestResult {
        let key = CompositeKey::new("ns:with/odd").with("").with("ünïcode/:");
        assert_eq!(CompositeKey::decode(&key.encode())?, key);
        Ok(())
    }

    #[test]
    fn it_rejects_malformed_keys() {
        for key in ["", "abc", "3:ab", "2:ab3:cde", "x:ab", "1:é"] {
            assert!(
                matches!(CompositeKey::decode(key), Err(StorageError::InvalidKey(_))),
                "{key} should not decode"
            );
        }
    }
}
