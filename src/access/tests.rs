//! Access Guard Tests
//!
//! Covers capability resolution (including the absent-mapping rule) and the
//! Basic auth identity decoding.

#[cfg(test)]
mod tests {
    use crate::access::identity::identity_from_basic;
    use crate::access::{AccessResolver, CollectionAccess, MemoryAccessResolver};
    use crate::errors::ApiError;

    const COLLECTION_ID: &str = "82407036-edf9-4c75-9a56-e72697c53e99";

    #[test]
    fn test_resolve_absent_mapping_is_all_false() {
        let resolver = MemoryAccessResolver::new();

        let access = resolver.resolve("nobody@example.com", COLLECTION_ID);
        assert_eq!(access, CollectionAccess::none(COLLECTION_ID));
        assert!(!access.can_read);
        assert!(!access.can_write);
    }

    #[test]
    fn test_resolve_granted_capabilities() {
        let resolver = MemoryAccessResolver::new();
        resolver.grant("writer@example.com", COLLECTION_ID, true, true);

        let access = resolver.resolve("writer@example.com", COLLECTION_ID);
        assert!(access.can_read);
        assert!(access.can_write);
        assert_eq!(access.collection_id, COLLECTION_ID);
    }

    #[test]
    fn test_resolve_read_only_grant() {
        let resolver = MemoryAccessResolver::new();
        resolver.grant("reader@example.com", COLLECTION_ID, true, false);

        let access = resolver.resolve("reader@example.com", COLLECTION_ID);
        assert!(access.can_read);
        assert!(!access.can_write);
    }

    #[test]
    fn test_grant_is_scoped_to_collection() {
        let resolver = MemoryAccessResolver::new();
        resolver.grant("writer@example.com", COLLECTION_ID, true, true);

        let other = resolver.resolve("writer@example.com", "another-collection");
        assert!(!other.can_write);
    }

    #[test]
    fn test_identity_from_basic_header() {
        // "alice:secret"
        let identity = identity_from_basic(Some("Basic YWxpY2U6c2VjcmV0")).unwrap();
        assert_eq!(identity.user, "alice");
    }

    #[test]
    fn test_identity_missing_header() {
        let result = identity_from_basic(None);
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_identity_wrong_scheme() {
        let result = identity_from_basic(Some("Bearer token"));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_identity_invalid_base64() {
        let result = identity_from_basic(Some("Basic not-base64!!!"));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_identity_empty_user() {
        // ":password" encodes to "OnBhc3N3b3Jk"
        let result = identity_from_basic(Some("Basic OnBhc3N3b3Jk"));
        assert!(matches!(result, Err(ApiError::Unauthorized(_))));
    }
}
