use pcg_basic::rand_core::{RngCore, SeedableRng};
use pcg_basic::{Lcg64Xsh32, Pcg32};

#[test]
fn test_pcg32_true_values() {
    // Numbers from `pcg32_random_r` in pcg-c-basic, seeded with (42, 54).
    let mut rng = Lcg64Xsh32::new(42, 54);

    let mut results = [0u32; 6];
    for i in results.iter_mut() {
        *i = rng.next_u32();
    }
    let expected: [u32; 6] = [
        0xa15c02b7, 0x7b47f409, 0xba1d3330, 0x83d2f293, 0xbfa4784b, 0xcbed606e,
    ];
    assert_eq!(results, expected);
}

#[test]
fn test_pcg32_initializer() {
    let rng = Pcg32::default();
    assert_eq!(rng, Pcg32::INITIALIZER);
    assert_eq!(rng.state(), 0x853c49e6748fea9b);
    assert_eq!(rng.increment(), 0xda3e39cb94b95bdb);
}

#[test]
fn test_pcg32_unseeded_values() {
    let mut rng = Pcg32::default();
    assert_eq!(rng.next_u32(), 355248013);
    assert_eq!(rng.next_u32(), 41705475);
    assert_eq!(rng.next_u32(), 3406281715);
}

#[test]
fn test_pcg32_construction() {
    // Test that various construction techniques produce a working RNG.
    let seed = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16];
    let mut rng1 = Lcg64Xsh32::from_seed(seed);
    assert_eq!(rng1.next_u64(), 15825832632199990611);

    let mut rng2 = Lcg64Xsh32::from_rng(&mut rng1).unwrap();
    assert_eq!(rng2.next_u64(), 4011527499773758174);

    let mut rng3 = Lcg64Xsh32::seed_from_u64(0);
    let mut rng4 = Lcg64Xsh32::seed_from_u64(0);
    assert_eq!(rng3.next_u64(), rng4.next_u64());
}

#[test]
fn test_pcg32_from_seed_matches_new() {
    let mut seed = [0u8; 16];
    seed[..8].copy_from_slice(&42u64.to_le_bytes());
    seed[8..].copy_from_slice(&54u64.to_le_bytes());
    assert_eq!(Lcg64Xsh32::from_seed(seed), Lcg64Xsh32::new(42, 54));
}

#[test]
fn test_pcg32_deterministic() {
    for (state, seq) in [(0, 0), (42, 54), (u64::MAX, 1), (0xdead_beef, u64::MAX)] {
        let mut a = Lcg64Xsh32::new(state, seq);
        let mut b = Lcg64Xsh32::new(state, seq);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
        assert_eq!(a, b);
    }
}

#[test]
fn test_pcg32_stream_separation() {
    let seqs = [0u64, 1, 2, 54, 55, 1 << 40, (1 << 62) - 1];
    for (i, &s1) in seqs.iter().enumerate() {
        for &s2 in &seqs[i + 1..] {
            let a = Lcg64Xsh32::new(42, s1);
            let b = Lcg64Xsh32::new(42, s2);
            assert_eq!(a.increment() & 1, 1);
            assert_eq!(b.increment() & 1, 1);
            assert_ne!(a.increment(), b.increment());
        }
    }

    let mut a = Lcg64Xsh32::new(42, 54);
    let mut b = Lcg64Xsh32::new(42, 55);
    let same = (0..100).filter(|_| a.next_u32() == b.next_u32()).count();
    assert!(same < 5);
}

#[test]
fn test_pcg32_fill_bytes() {
    let mut rng = Lcg64Xsh32::new(42, 54);
    let mut buf = [0u8; 12];
    rng.fill_bytes(&mut buf);
    assert_eq!(buf, [183, 2, 92, 161, 9, 244, 71, 123, 48, 51, 29, 186]);

    let mut rng = Lcg64Xsh32::new(42, 54);
    let mut buf = [0u8; 4];
    rng.try_fill_bytes(&mut buf).unwrap();
    assert_eq!(u32::from_le_bytes(buf), 0xa15c02b7);
}

#[test]
fn test_pcg32_with_rand() {
    use rand::seq::SliceRandom;
    use rand::Rng;

    let mut rng = Lcg64Xsh32::new(42, 54);
    for _ in 0..100 {
        let x: u8 = rng.gen_range(10..20);
        assert!((10..20).contains(&x));
    }

    let mut deck: Vec<u32> = (0..52).collect();
    deck.shuffle(&mut rng);
    deck.sort_unstable();
    assert!(deck.iter().copied().eq(0..52));
}

#[cfg(feature = "serde1")]
#[test]
fn test_pcg32_serde() {
    use bincode;
    use std::io::{BufReader, BufWriter};

    let mut rng = Lcg64Xsh32::seed_from_u64(0);

    let buf: Vec<u8> = Vec::new();
    let mut buf = BufWriter::new(buf);
    bincode::serialize_into(&mut buf, &rng).expect("Could not serialize");

    let buf = buf.into_inner().unwrap();
    let mut read = BufReader::new(&buf[..]);
    let mut deserialized: Lcg64Xsh32 =
        bincode::deserialize_from(&mut read).expect("Could not deserialize");

    for _ in 0..16 {
        assert_eq!(rng.next_u64(), deserialized.next_u64());
    }
}
