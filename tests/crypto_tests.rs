//! Integration tests for the SeedLock envelope engine.

use seedlock::blob::{SeedBlob, BLOB_LEN, SALT_LEN};
use seedlock::crypto::{envelope, OsRandom, RandomSource, WrappingSecret};
use seedlock::errors::{Result, SeedLockError};
use seedlock::seed::Entropy;

/// Deterministic randomness for engine tests: returns a fixed byte,
/// incremented per fill, so every generated field is distinct but
/// reproducible.
struct FixedRandom {
    next: u8,
}

impl FixedRandom {
    fn new() -> Self {
        Self { next: 1 }
    }
}

impl RandomSource for FixedRandom {
    fn fill(&mut self, dest: &mut [u8]) -> Result<()> {
        dest.fill(self.next);
        self.next = self.next.wrapping_add(1);
        Ok(())
    }
}

fn test_secret(byte: u8) -> WrappingSecret {
    WrappingSecret::new(vec![byte; 32]).expect("non-empty secret")
}

fn seal_fresh(entropy: &Entropy, secret: &WrappingSecret) -> ([u8; SALT_LEN], SeedBlob) {
    let mut rng = OsRandom;
    let salt = envelope::generate_salt(&mut rng).expect("salt");
    let blob = envelope::seal(entropy, &salt, secret, &mut rng).expect("seal");
    (salt, blob)
}

// ---------------------------------------------------------------------------
// Round-trip
// ---------------------------------------------------------------------------

#[test]
fn seal_open_roundtrip() {
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let secret = test_secret(0xAB);

    let (_, blob) = seal_fresh(&entropy, &secret);
    assert_eq!(blob.to_bytes().len(), BLOB_LEN);

    let recovered = envelope::open(&blob, &secret).expect("open");
    assert_eq!(recovered.as_bytes(), entropy.as_bytes());
}

#[test]
fn roundtrip_survives_serialization() {
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let secret = test_secret(0xCD);

    let (_, blob) = seal_fresh(&entropy, &secret);

    // Wire bytes → parse → open, as a store/retrieve cycle would.
    let reparsed = SeedBlob::from_bytes(&blob.to_bytes()).expect("parse");
    let recovered = envelope::open(&reparsed, &secret).expect("open");
    assert_eq!(recovered.as_bytes(), entropy.as_bytes());
}

#[test]
fn fixed_scenario_all_zero_entropy() {
    // 32 zero bytes under the fixed secret 0x01..01 must come back
    // exactly, and a truncated blob must be rejected up front.
    let entropy = Entropy::from_slice(&[0u8; 32]).expect("entropy");
    let secret = test_secret(0x01);

    let (_, blob) = seal_fresh(&entropy, &secret);
    let recovered = envelope::open(&blob, &secret).expect("open");
    assert_eq!(recovered.as_bytes(), &[0u8; 32]);

    let truncated = &blob.to_bytes()[..BLOB_LEN - 1];
    assert!(matches!(
        SeedBlob::from_bytes(truncated),
        Err(SeedLockError::MalformedBlob(_))
    ));
}

// ---------------------------------------------------------------------------
// Tamper detection
// ---------------------------------------------------------------------------

#[test]
fn any_bit_flip_in_ciphertext_regions_fails_auth() {
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let secret = test_secret(0x42);

    let (_, blob) = seal_fresh(&entropy, &secret);
    let wire = blob.to_bytes();

    // Every byte past the salt: both IVs, both ciphertexts, both tags.
    for offset in SALT_LEN..BLOB_LEN {
        let mut corrupted = wire.clone();
        corrupted[offset] ^= 0x01;

        let parsed = SeedBlob::from_bytes(&corrupted).expect("length is still valid");
        let result = envelope::open(&parsed, &secret);
        assert!(
            matches!(result, Err(SeedLockError::AuthenticationFailed)),
            "bit flip at offset {offset} must fail authentication"
        );
    }
}

#[test]
fn flipped_salt_changes_the_derived_secret_downstream() {
    // The salt itself is not authenticated — it is an *input* to secret
    // derivation. A flipped salt yields a different wrapping secret at
    // the provider, and that secret must fail to open the blob.
    use seedlock::provider::{KeyfileProvider, SecretProvider};

    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let mut provider = KeyfileProvider::from_key(vec![0x5Au8; 32]).expect("provider");

    let mut rng = OsRandom;
    let salt = envelope::generate_salt(&mut rng).expect("salt");
    let secret = provider.derive_secret(&salt).expect("derive").expect("some");
    let blob = envelope::seal(&entropy, &salt, &secret, &mut rng).expect("seal");

    let mut wire = blob.to_bytes();
    wire[0] ^= 0x01;
    let tampered = SeedBlob::from_bytes(&wire).expect("parse");

    let rederived = provider
        .derive_secret(tampered.salt())
        .expect("derive")
        .expect("some");
    assert!(matches!(
        envelope::open(&tampered, &rederived),
        Err(SeedLockError::AuthenticationFailed)
    ));
}

// ---------------------------------------------------------------------------
// Wrong-key rejection
// ---------------------------------------------------------------------------

#[test]
fn wrong_secret_is_rejected() {
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let secret = test_secret(0x11);
    let wrong = test_secret(0x22);

    let (_, blob) = seal_fresh(&entropy, &secret);
    assert!(matches!(
        envelope::open(&blob, &wrong),
        Err(SeedLockError::AuthenticationFailed)
    ));
}

#[test]
fn wrong_key_and_corruption_are_indistinguishable() {
    // The error must not act as an oracle: "wrong secret" and
    // "tampered ciphertext" surface with the identical message.
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let secret = test_secret(0x33);
    let (_, blob) = seal_fresh(&entropy, &secret);

    let wrong_key_msg = envelope::open(&blob, &test_secret(0x44))
        .unwrap_err()
        .to_string();

    let mut wire = blob.to_bytes();
    wire[100] ^= 0x01; // inside the wrapped-key region
    let corrupted = SeedBlob::from_bytes(&wire).expect("parse");
    let corruption_msg = envelope::open(&corrupted, &secret)
        .unwrap_err()
        .to_string();

    assert_eq!(wrong_key_msg, corruption_msg);
}

// ---------------------------------------------------------------------------
// Length validation
// ---------------------------------------------------------------------------

#[test]
fn wrong_lengths_are_rejected_before_any_crypto() {
    for len in [0usize, 1, 151, 153, 300] {
        let result = SeedBlob::from_bytes(&vec![0u8; len]);
        assert!(
            matches!(result, Err(SeedLockError::MalformedBlob(_))),
            "length {len} must be rejected"
        );
    }
}

// ---------------------------------------------------------------------------
// Freshness
// ---------------------------------------------------------------------------

#[test]
fn consecutive_seals_share_no_field() {
    let entropy = Entropy::from_slice(&[0x77u8; 32]).expect("entropy");
    let secret = test_secret(0x99);

    let (salt1, blob1) = seal_fresh(&entropy, &secret);
    let (salt2, blob2) = seal_fresh(&entropy, &secret);

    // Same plaintext, same secret — but fresh randomness everywhere.
    assert_ne!(salt1, salt2);
    assert_ne!(blob1.salt(), blob2.salt());
    assert_ne!(blob1.iv_data(), blob2.iv_data());
    assert_ne!(blob1.iv_wrap(), blob2.iv_wrap());
    assert_ne!(blob1.entropy_box(), blob2.entropy_box());
    assert_ne!(blob1.key_box(), blob2.key_box());
}

#[test]
fn the_two_layers_never_share_a_nonce() {
    let entropy = Entropy::generate(&mut OsRandom).expect("entropy");
    let (_, blob) = seal_fresh(&entropy, &test_secret(0x55));

    assert_ne!(blob.iv_data(), blob.iv_wrap());
}

// ---------------------------------------------------------------------------
// Deterministic engine (injected randomness)
// ---------------------------------------------------------------------------

#[test]
fn fixed_randomness_gives_a_reproducible_blob() {
    let secret = test_secret(0xEE);

    let run = || {
        let mut rng = FixedRandom::new();
        let entropy = Entropy::generate(&mut rng).expect("entropy");
        let salt = envelope::generate_salt(&mut rng).expect("salt");
        envelope::seal(&entropy, &salt, &secret, &mut rng)
            .expect("seal")
            .to_bytes()
    };

    assert_eq!(run(), run());
}

#[test]
fn deterministic_blob_still_opens() {
    let secret = test_secret(0xEF);

    let mut rng = FixedRandom::new();
    let entropy = Entropy::generate(&mut rng).expect("entropy");
    let salt = envelope::generate_salt(&mut rng).expect("salt");
    let blob = envelope::seal(&entropy, &salt, &secret, &mut rng).expect("seal");

    let recovered = envelope::open(&blob, &secret).expect("open");
    assert_eq!(recovered.as_bytes(), entropy.as_bytes());
}

// ---------------------------------------------------------------------------
// Input validation
// ---------------------------------------------------------------------------

#[test]
fn empty_wrapping_secret_is_missing_secret() {
    assert!(matches!(
        WrappingSecret::new(Vec::new()),
        Err(SeedLockError::MissingSecret)
    ));
}

#[test]
fn short_entropy_is_invalid() {
    assert!(matches!(
        Entropy::from_slice(&[0u8; 16]),
        Err(SeedLockError::InvalidEntropyLength { .. })
    ));
}

// ---------------------------------------------------------------------------
// End-to-end: entropy → mnemonic + blob file → recovered mnemonic
// ---------------------------------------------------------------------------

#[test]
fn full_store_retrieve_pipeline() {
    use seedlock::blob::{BlobStore, FileStore};
    use seedlock::provider::{KeyfileProvider, SecretProvider};
    use seedlock::seed::mnemonic;

    let dir = tempfile::TempDir::new().expect("tempdir");
    let blob_path = dir.path().join("seed.blob");

    let mut provider = KeyfileProvider::from_key(vec![0xA1u8; 32]).expect("provider");
    let mut rng = OsRandom;

    // Seal side.
    let entropy = Entropy::generate(&mut rng).expect("entropy");
    let backup_phrase = mnemonic::encode(&entropy).expect("encode").to_string();

    let salt = envelope::generate_salt(&mut rng).expect("salt");
    let secret = provider.derive_secret(&salt).expect("derive").expect("some");
    let blob = envelope::seal(&entropy, &salt, &secret, &mut rng).expect("seal");

    let mut store = FileStore::new(&blob_path, false);
    store.write_bytes(&blob.to_bytes()).expect("write");

    // Retrieve side: nothing carried over but the file and the device key.
    let mut store = FileStore::new(&blob_path, false);
    let wire = store.read_bytes().expect("read");
    assert_eq!(wire.len(), BLOB_LEN);

    let parsed = SeedBlob::from_bytes(&wire).expect("parse");
    let rederived = provider
        .derive_secret(parsed.salt())
        .expect("derive")
        .expect("some");
    let recovered = envelope::open(&parsed, &rederived).expect("open");

    let recovered_phrase = mnemonic::encode(&recovered).expect("encode").to_string();
    assert_eq!(recovered_phrase, backup_phrase);

    // And the phrase decodes back to the exact entropy bytes.
    let decoded = mnemonic::decode(&recovered_phrase).expect("decode");
    assert_eq!(decoded.as_bytes(), entropy.as_bytes());
}
