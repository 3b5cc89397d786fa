use super::*;

#[test]
fn canonical_names_round_trip() {
    for &alg in HashAlgorithm::all() {
        let parsed: HashAlgorithm = alg.name().parse().unwrap();
        assert_eq!(parsed, alg, "round-trip failed for {:?}", alg);
    }
}

#[test]
fn aliases_resolve_correctly() {
    let cases = [
        ("crc", HashAlgorithm::Crc32),
        ("CRC-32", HashAlgorithm::Crc32),
        (" md5 ", HashAlgorithm::Md5),
        ("SHA-1", HashAlgorithm::Sha1),
    ];
    for (input, expected) in cases {
        let parsed: HashAlgorithm = input.parse().unwrap();
        assert_eq!(parsed, expected, "alias '{}' should parse to {:?}", input, expected);
    }
}

#[test]
fn unknown_name_is_rejected() {
    let err = "sha256".parse::<HashAlgorithm>().unwrap_err();
    assert_eq!(err.to_string(), "unknown hash algorithm: 'sha256'");
}

#[test]
fn all_is_in_report_order() {
    assert_eq!(
        HashAlgorithm::all(),
        &[HashAlgorithm::Crc32, HashAlgorithm::Md5, HashAlgorithm::Sha1]
    );
}
