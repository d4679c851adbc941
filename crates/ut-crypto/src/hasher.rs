use ut_types::ContentId;

/// Domain-separated BLAKE3 content hasher.
///
/// The domain tag is prepended to every hash computation, so digests from
/// different hashers never collide even over identical bytes.
pub struct ContentHasher {
    domain: &'static str,
}

impl ContentHasher {
    /// Hasher for document text. Every history node id comes from here.
    pub const DOCUMENT: Self = Self {
        domain: "undotree-document-v1",
    };

    /// Create a hasher with a custom domain tag.
    pub const fn new(domain: &'static str) -> Self {
        Self { domain }
    }

    /// Hash document text.
    pub fn hash(&self, text: &str) -> ContentId {
        self.hash_bytes(text.as_bytes())
    }

    /// Hash raw bytes with domain separation.
    pub fn hash_bytes(&self, data: &[u8]) -> ContentId {
        let mut hasher = blake3::Hasher::new();
        hasher.update(self.domain.as_bytes());
        hasher.update(b":");
        hasher.update(data);
        ContentId::from_hash(*hasher.finalize().as_bytes())
    }

    /// Verify that text produces the expected id.
    pub fn verify(&self, text: &str, expected: &ContentId) -> bool {
        self.hash(text) == *expected
    }

    /// The domain tag used by this hasher.
    pub fn domain(&self) -> &str {
        self.domain
    }
}
