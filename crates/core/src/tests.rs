//! Tests for the RabbitMQ password hash format

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::{
    Algorithm, HashError, MD5_BLOB_SIZE, SALT_SIZE, SHA256_BLOB_SIZE, Salt, SaltedHash,
    compute_digest, encode, generate_salt, hash_password,
};

const ALGORITHMS: [Algorithm; 2] = [Algorithm::Sha256, Algorithm::Md5];

#[test]
fn test_decoded_length_matches_algorithm() {
    for algorithm in ALGORITHMS {
        for password in [&b"guest"[..], b"x", b"a much longer password with spaces"] {
            let encoded = hash_password(algorithm, password).unwrap();
            let blob = STANDARD.decode(&encoded).unwrap();
            assert_eq!(blob.len(), SALT_SIZE + algorithm.digest_size());
        }
    }
}

#[test]
fn test_blob_sizes() {
    assert_eq!(SHA256_BLOB_SIZE, 36);
    assert_eq!(MD5_BLOB_SIZE, 20);
}

#[test]
fn test_digest_is_deterministic() {
    let salt = Salt::from_bytes([1, 2, 3, 4]);
    for algorithm in ALGORITHMS {
        let first = compute_digest(&salt, b"guest", algorithm);
        let second = compute_digest(&salt, b"guest", algorithm);
        assert_eq!(first, second);
        assert_eq!(first.len(), algorithm.digest_size());
    }
}

#[test]
fn test_salt_changes_digest() {
    let a = compute_digest(&Salt::ZERO, b"guest", Algorithm::Sha256);
    let b = compute_digest(&Salt::from_bytes([0, 0, 0, 1]), b"guest", Algorithm::Sha256);
    assert_ne!(a, b);
}

#[test]
fn test_round_trip_rehash() {
    for algorithm in ALGORITHMS {
        let encoded = hash_password(algorithm, b"s3cr3t").unwrap();
        let blob = STANDARD.decode(&encoded).unwrap();

        let mut salt = [0u8; SALT_SIZE];
        salt.copy_from_slice(&blob[..SALT_SIZE]);
        let digest = compute_digest(&Salt::from_bytes(salt), b"s3cr3t", algorithm);

        assert_eq!(&blob[SALT_SIZE..], digest.as_slice());
    }
}

/// `guest` with the all-zero salt, the value earlier releases always printed
#[test]
fn test_golden_vector_sha256_zero_salt() {
    let hash = SaltedHash::new(Salt::ZERO, Algorithm::Sha256, b"guest");

    assert_eq!(
        hex::encode(hash.digest()),
        "f12843c6b78d8e830014622739282a8a106d7881a768862e47bb77e1552b3271"
    );
    assert_eq!(
        hash.to_string(),
        "AAAAAPEoQ8a3jY6DABRiJzkoKooQbXiBp2iGLke7d+FVKzJx"
    );
}

#[test]
fn test_golden_vector_md5_zero_salt() {
    let hash = SaltedHash::new(Salt::ZERO, Algorithm::Md5, b"guest");
    let encoded = hash.encode();

    assert_eq!(hex::encode(hash.digest()), "cf2a1e52200a832d9aa600bbe295448f");
    assert_eq!(encoded, "AAAAAM8qHlIgCoMtmqYAu+KVRI8=");
    assert_eq!(encoded.len(), 28);
    assert_eq!(encoded.matches('=').count(), 1);
    assert_eq!(hash.to_bytes().len(), 20);
}

#[test]
fn test_golden_vector_nonzero_salt() {
    let salt = Salt::from_bytes([0xde, 0xad, 0xbe, 0xef]);

    let sha = SaltedHash::new(salt, Algorithm::Sha256, b"test12");
    assert_eq!(
        sha.encode(),
        "3q2+7+KRbjlr5ZLoZBs2dRYikRCYSGLC5BeVmcdiZgBds5Q4"
    );

    let md5 = SaltedHash::new(salt, Algorithm::Md5, b"test12");
    assert_eq!(md5.encode(), "3q2+7/OmjW2G6nzi6qgK1QADbCY=");
}

#[test]
fn test_empty_password_hashes_salt_only() {
    let digest = compute_digest(&Salt::ZERO, b"", Algorithm::Sha256);
    assert_eq!(
        hex::encode(digest),
        "df3f619804a92fdb4057192dc43dd748ea778adc52bc498ce80524c014b81119"
    );
}

#[test]
fn test_encode_places_salt_first() {
    let salt = Salt::from_bytes([9, 8, 7, 6]);
    let encoded = encode(&salt, &[0xAA; 16]);
    let blob = STANDARD.decode(encoded).unwrap();

    assert_eq!(&blob[..4], &[9, 8, 7, 6]);
    assert_eq!(&blob[4..], &[0xAA; 16]);
}

#[test]
fn test_decode_and_verify() {
    let stored = SaltedHash::decode("AAAAAPEoQ8a3jY6DABRiJzkoKooQbXiBp2iGLke7d+FVKzJx").unwrap();

    assert_eq!(stored.salt(), Salt::ZERO);
    assert_eq!(stored.algorithm(), Algorithm::Sha256);
    assert!(stored.verify(b"guest"));
    assert!(!stored.verify(b"Guest"));
    assert!(!stored.verify(b""));
}

#[test]
fn test_verify_rejects_tampered_digest() {
    let mut blob = SaltedHash::new(Salt::ZERO, Algorithm::Sha256, b"guest").to_bytes();
    let last = blob.len() - 1;
    blob[last] ^= 0x01;

    let tampered = SaltedHash::decode(&STANDARD.encode(&blob)).unwrap();
    assert!(!tampered.verify(b"guest"));
}

#[test]
fn test_decode_infers_md5() {
    let stored: SaltedHash = "3q2+7/OmjW2G6nzi6qgK1QADbCY=".parse().unwrap();

    assert_eq!(stored.algorithm(), Algorithm::Md5);
    assert_eq!(stored.salt(), Salt::from_bytes([0xde, 0xad, 0xbe, 0xef]));
    assert!(stored.verify(b"test12"));
}

#[test]
fn test_decode_tolerates_trailing_newline() {
    let stored = SaltedHash::decode("AAAAAM8qHlIgCoMtmqYAu+KVRI8=\n").unwrap();
    assert!(stored.verify(b"guest"));
}

#[test]
fn test_decode_rejects_bad_input() {
    assert!(matches!(
        SaltedHash::decode("not base64!"),
        Err(HashError::InvalidEncoding(_))
    ));

    // 4-byte salt + 20-byte digest: no such algorithm
    let sha1_sized = STANDARD.encode([0u8; 24]);
    assert!(matches!(
        SaltedHash::decode(&sha1_sized),
        Err(HashError::InvalidLength { len: 24 })
    ));

    let too_short = STANDARD.encode([0u8; 3]);
    assert!(matches!(
        SaltedHash::decode(&too_short),
        Err(HashError::InvalidLength { len: 3 })
    ));
}

#[test]
fn test_decode_then_encode_is_identity() {
    let original = SaltedHash::generate(Algorithm::Sha256, b"guest").unwrap();
    let decoded = SaltedHash::decode(&original.encode()).unwrap();
    assert_eq!(decoded, original);
}

#[test]
fn test_random_salts_differ() {
    // 2^-32 chance of a false failure per pair; five draws all equal is not plausible
    let salts: Vec<Salt> = (0..5).map(|_| generate_salt().unwrap()).collect();
    assert!(salts.iter().any(|s| *s != salts[0]));
}

#[test]
fn test_algorithm_parsing() {
    assert_eq!("sha256".parse::<Algorithm>().unwrap(), Algorithm::Sha256);
    assert_eq!("md5".parse::<Algorithm>().unwrap(), Algorithm::Md5);

    for bad in ["sha1", "SHA256", "Md5", "", "sha512"] {
        assert!(matches!(
            bad.parse::<Algorithm>(),
            Err(HashError::UnknownAlgorithm(name)) if name == bad
        ));
    }

    assert_eq!(Algorithm::default(), Algorithm::Sha256);
    assert_eq!(Algorithm::Md5.to_string(), "md5");
}

#[test]
fn test_salt_debug_is_hex() {
    let salt = Salt::from_bytes([0x00, 0x0a, 0xff, 0x10]);
    assert_eq!(format!("{:?}", salt), "Salt(000aff10)");
}
