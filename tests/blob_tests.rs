//! Integration tests for the blob wire format and the file store.

use seedlock::blob::{BlobStore, FileStore, SeedBlob, BLOB_LEN};
use seedlock::crypto::{envelope, OsRandom, WrappingSecret};
use seedlock::seed::Entropy;

fn sealed_blob() -> ([u8; 32], SeedBlob) {
    let mut rng = OsRandom;
    let entropy = Entropy::generate(&mut rng).expect("entropy");
    let secret = WrappingSecret::new(vec![0x0Fu8; 32]).expect("secret");
    let salt = envelope::generate_salt(&mut rng).expect("salt");
    let blob = envelope::seal(&entropy, &salt, &secret, &mut rng).expect("seal");
    (salt, blob)
}

#[test]
fn wire_bytes_start_with_the_seal_salt() {
    let (salt, blob) = sealed_blob();
    let wire = blob.to_bytes();

    assert_eq!(wire.len(), BLOB_LEN);
    assert_eq!(&wire[..32], &salt);
    assert_eq!(blob.salt(), &salt);
}

#[test]
fn parse_of_real_blob_preserves_every_field() {
    let (_, blob) = sealed_blob();
    let wire = blob.to_bytes();

    let parsed = SeedBlob::from_bytes(&wire).expect("parse");
    assert_eq!(parsed, blob);
    assert_eq!(parsed.to_bytes(), wire);
}

#[test]
fn armored_file_roundtrips_a_real_blob() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("seed.blob.b64");
    let (_, blob) = sealed_blob();

    let mut store = FileStore::new(&path, true);
    store.write_bytes(&blob.to_bytes()).expect("write");

    // The file itself holds printable text, not the 152 raw bytes.
    let on_disk = std::fs::read(&path).expect("read file");
    assert_ne!(on_disk.len(), BLOB_LEN);

    let mut store = FileStore::new(&path, true);
    let wire = store.read_bytes().expect("read");
    assert_eq!(SeedBlob::from_bytes(&wire).expect("parse"), blob);
}

#[test]
fn raw_and_armored_modes_do_not_mix() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("seed.blob");
    let (_, blob) = sealed_blob();

    // Written raw, read as armored: 152 random-looking bytes are not
    // valid base64 text, so the read fails instead of mis-parsing.
    let mut store = FileStore::new(&path, false);
    store.write_bytes(&blob.to_bytes()).expect("write");

    let mut armored = FileStore::new(&path, true);
    assert!(armored.read_bytes().is_err());
}

#[test]
fn stored_junk_is_caught_at_parse_time() {
    let dir = tempfile::TempDir::new().expect("tempdir");
    let path = dir.path().join("junk.blob");
    std::fs::write(&path, [0xEEu8; 37]).expect("write junk");

    // The store hands back whatever bytes exist; the parser rejects them.
    let mut store = FileStore::new(&path, false);
    let bytes = store.read_bytes().expect("read");
    assert!(SeedBlob::from_bytes(&bytes).is_err());
}
